//! 로마자/가나 변환 핵심 모듈

pub mod converter;
pub mod kana_table;
pub mod types;
pub mod unicode;

pub use converter::{
    convert_input_for_field, convert_mixed_input, romaji_to_hiragana, romaji_to_kana,
    romaji_to_katakana, ConversionResult,
};
pub use types::{AnswerType, KanaScript};
pub use unicode::{hiragana_to_katakana, katakana_to_hiragana};
