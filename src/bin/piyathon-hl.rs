//! Command-line interface for piyathon-highlight
//! Tokenizes source files with a registered grammar and prints a dump of the tokens.
//!
//! Usage:
//!   piyathon-hl `<path>` [--language `<name>`] [--format `<format>`]  - Dump the tokens of a file
//!   piyathon-hl --list-languages                                  - List registered languages
//!   piyathon-hl --list-formats                                    - List dump formats
//!   piyathon-hl --check                                           - Validate registered grammars
//!
//! Common options: --config `<file>` layers a TOML config over the defaults, --grammar `<file>`
//! registers an extra YAML/JSON grammar (repeatable). Settings can also come from
//! PIYATHON_HL_* environment variables, e.g. PIYATHON_HL_OUTPUT__FORMAT=json.
//! Set RUST_LOG for diagnostics.

use clap::{Arg, ArgAction, ArgMatches, Command};
use piyathon_highlight::highlight::config::{HighlightConfig, Loader};
use piyathon_highlight::highlight::formats::FormatRegistry;
use piyathon_highlight::highlight::{tokenize, Highlighter};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let matches = Command::new("piyathon-hl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize Piyathon (and other registered) sources and dump the tokens")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the source file")
                .required_unless_present_any(["list-languages", "list-formats", "check"])
                .index(1),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .help("Language name or alias (default: from the file extension)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: treeviz, json, glossary (default: from config)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("grammar")
                .long("grammar")
                .short('g')
                .help("Extra grammar file (YAML or JSON) to register")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("list-languages")
                .long("list-languages")
                .help("List registered languages")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List dump formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Validate every registered grammar")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let formats = FormatRegistry::builtin();
    if matches.get_flag("list-formats") {
        handle_list_formats_command(&formats);
        return;
    }

    let config = load_config(&matches);
    let highlighter = Highlighter::from_config(&config).unwrap_or_else(|e| fail(e));

    if matches.get_flag("list-languages") {
        handle_list_languages_command(&highlighter);
        return;
    }
    if matches.get_flag("check") {
        handle_check_command(&highlighter);
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing or checking");
    let language = matches.get_one::<String>("language").map(String::as_str);
    handle_tokenize_command(&highlighter, &formats, &config, path, language);
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn load_config(matches: &ArgMatches) -> HighlightConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    for path in matches.get_many::<String>("grammar").into_iter().flatten() {
        loader = loader.with_grammar_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.with_format(format).unwrap_or_else(|e| fail(e));
    }
    loader.build().unwrap_or_else(|e| fail(e))
}

/// Handle the tokenize command
fn handle_tokenize_command(
    highlighter: &Highlighter,
    formats: &FormatRegistry,
    config: &HighlightConfig,
    path: &str,
    language: Option<&str>,
) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        fail(format!("reading {}: {}", path, e));
    });

    let registry = highlighter.registry();
    let grammar = match language {
        Some(name) => highlighter.grammar(name).unwrap_or_else(|e| fail(e)),
        None => registry
            .find_by_path(Path::new(path))
            .map(Ok)
            .unwrap_or_else(|| highlighter.grammar(&config.engine.default_language))
            .unwrap_or_else(|e| fail(e)),
    };

    let tokens: Vec<_> = tokenize(grammar, &source).collect();
    let output = formats
        .render_configured(&tokens, &config.output)
        .unwrap_or_else(|e| fail(e));

    println!("{}", output);
}

/// Handle the list-languages command
fn handle_list_languages_command(highlighter: &Highlighter) {
    println!("Registered languages:\n");
    for (name, grammar) in highlighter.registry().iter() {
        if grammar.aliases.is_empty() {
            println!("  {}", name);
        } else {
            println!("  {} ({})", name, grammar.aliases.join(", "));
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(formats: &FormatRegistry) {
    println!("Available formats:\n");
    for (name, description) in formats.describe() {
        println!("  {:<10} {}", name, description);
    }
}

/// Handle the check command
fn handle_check_command(highlighter: &Highlighter) {
    let mut failed = false;
    for (name, grammar) in highlighter.registry().iter() {
        match grammar.validate() {
            Ok(()) => println!("{}: ok", name),
            Err(errors) => {
                failed = true;
                println!("{}: {} problem(s)", name, errors.len());
                for err in errors {
                    println!("  - {}", err);
                }
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}
