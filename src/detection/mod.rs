//! 입력 문자 체계 감지 모듈

pub mod script;

pub use script::{detect_script, is_kana, is_romaji, ScriptType};
