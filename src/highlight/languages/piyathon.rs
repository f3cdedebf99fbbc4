//! Piyathon grammar
//!
//!     Piyathon is Python with Thai keywords, built-in names and special names. Its lexical
//!     shape is Python's: hash comments, decimal numbers, single and triple quoted strings,
//!     and `นิยาม` (def) / `ชั้น` (class) headers ending at a colon.
//!
//!     [grammar] builds the descriptor; [register] adds it to a registry. The constructor is
//!     public so code holding its own registry (or none) can use the grammar directly.
//!
//!     Files: `*.pi`, MIME type `text/x-piyathon`.

pub mod python_names;

pub use python_names::python_name;

use crate::highlight::grammar::modes;
use crate::highlight::grammar::{GrammarDescriptor, KeywordTable, WordClass};
use crate::highlight::registry::LanguageRegistry;
use crate::highlight::scope::Scope;

pub const NAME: &str = "piyathon";

/// Anchor of function headers (def)
pub const DEFINE: &str = "นิยาม";

/// Anchor of class headers (class)
pub const CLASS: &str = "ชั้น";

const KEYWORDS: &str = "\
    และ เป็น ยืนยัน ไม่ประสาน รอประสาน หยุด เมื่อ ชั้น \
    ทำต่อ นิยาม ลบ อื่นถ้า อื่น ยกเว้น สุดท้าย สำหรับ \
    จาก ทั่วไป ถ้า นำเข้า ใน คือ แลมบ์ดา เทียบ นอกเขต \
    ไม่ หรือ ผ่าน ยก คืนค่า ลอง ขณะ ด้วย ให้";

const BUILT_INS: &str = "\
    พิมพ์ ช่วง ผลรวม ค่าสูงสุด ค่าต่ำสุด ความยาว \
    ค่าสัมบูรณ์ อิเทอเรเตอร์อะซิงค์ ทั้งหมด ถัดไปอะซิงค์ ใดๆ \
    แอสกี ฐานสอง บูลีน จุดพัก แถวไบต์ ไบต์ เรียกได้ \
    อักขระ เมธอดคลาส คอมไพล์ จำนวนเชิงซ้อน ลบแอททริบิวต์ \
    พจนานุกรม ไดเรกทอรี หารเอาเศษ ลำดับ ประเมิน ประมวลผล \
    กรอง ทศนิยม จัดรูปแบบ เซ็ตแช่แข็ง รับแอททริบิวต์ \
    ตัวแปรโกลบอล มีแอททริบิวต์ แฮช ช่วยเหลือ ฐานสิบหก รหัส \
    รับค่า จำนวนเต็ม เป็นอินสแตนซ์ เป็นคลาสลูก วนซ้ำ รายการ \
    ตัวแปรท้องถิ่น แปลง มุมมองหน่วยความจำ ถัดไป วัตถุ ฐานแปด \
    เปิด รหัสอักขระ ยกกำลัง คุณสมบัติ ตัวแทน ย้อนกลับ \
    ปัดเศษ เซ็ต ตั้งแอททริบิวต์ ตัดส่วน เรียงลำดับ เมธอดคงที่ \
    สตริง คลาสแม่ ทูเพิล ชนิด ตัวแปร จับคู่";

const LITERALS: &str = "\
    จริง เท็จ ไม่มีค่า \
    __นำเข้า__ __ชื่อ__ __เอกสาร__ __ไฟล์__ __พจนานุกรม__ \
    __แพ็กเกจ__ __เส้นทาง__ __โมดูล__ __คลาสฐาน__ __คลาส__ \
    __เริ่มต้น__ __ลบ__ __ตัวแทนทางการ__ __ตัวแทน__ __ไบต์__ \
    __จัดรูปแบบ__ __น้อยกว่า__ __น้อยกว่าเท่ากับ__ __เท่ากับ__ \
    __ไม่เท่ากับ__ __มากกว่า__ __มากกว่าเท่ากับ__ __แฮช__ __บูลีน__ \
    __เรียกใช้__ __ความยาว__ __เข้าถึงสมาชิก__ __กำหนดสมาชิก__ \
    __ลบสมาชิก__ __วนซ้ำ__ __ถัดไป__ __เข้า__ __ออก__ \
    __ช่องเก็บ__ __ทั้งหมด__";

/// Build the Piyathon grammar descriptor
pub fn grammar() -> GrammarDescriptor {
    GrammarDescriptor {
        name: "Piyathon".into(),
        aliases: vec![NAME.into(), "pi".into()],
        case_insensitive: false,
        identifier: modes::identifier(),
        keywords: KeywordTable::new()
            .with_words(WordClass::Keyword, KEYWORDS)
            .with_words(WordClass::BuiltIn, BUILT_INS)
            .with_words(WordClass::Literal, LITERALS),
        rules: vec![
            modes::hash_comment(),
            modes::number(),
            modes::python_string(),
            modes::block_header(Scope::Function, DEFINE),
            modes::block_header(Scope::Class, CLASS),
        ],
        extensions: vec!["pi".into()],
        mime_types: vec!["text/x-piyathon".into()],
    }
}

/// Register Piyathon into `registry`. Without a registry this does nothing.
pub fn register(registry: Option<&mut LanguageRegistry>) {
    if let Some(registry) = registry {
        registry.register(NAME, grammar());
    }
}
