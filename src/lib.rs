//! Kotoba - 로마자/가나 변환과 일본어 학습 답안 검증

pub mod activity;
pub mod config;
pub mod core;
pub mod detection;
pub mod validation;

pub use activity::{ActivityValidator, AnswerSet, ModuleValidatorFactory};
pub use crate::core::converter::{
    convert_input_for_field, romaji_to_hiragana, romaji_to_katakana, ConversionResult,
};
pub use crate::core::types::{AnswerType, KanaScript};
pub use detection::{detect_script, ScriptType};
pub use validation::{ValidationResult, ValidationStrategy, ValidatorFactory};
