//! 답안 검증 모듈
//!
//! 문자 체계별 검증기(히라가나, 가타카나, 한자, 영어)와
//! 이름으로 검증기를 꺼내 쓰는 팩토리를 제공합니다.
//!
//! ```
//! use kotoba::validation::{ValidationStrategy, ValidatorFactory};
//!
//! let factory = ValidatorFactory::new();
//! let hiragana = factory.create_validator("hiragana").unwrap();
//! assert!(hiragana.validate("taberu", "たべる").is_correct);
//!
//! let english = factory.create_validator("english").unwrap();
//! assert!(english.validate("eat", "to eat / to consume").is_correct);
//! ```

mod english;
mod error;
mod factory;
mod kana;
mod kanji;
mod result;
pub mod similarity;
mod strategy;

pub use english::EnglishValidator;
pub use error::ValidationError;
pub use factory::{ValidatorConstructor, ValidatorFactory};
pub use kana::KanaValidator;
pub use kanji::{parse_furigana, Furigana, KanjiValidator};
pub use result::ValidationResult;
pub use similarity::{levenshtein_distance, similarity};
pub use strategy::ValidationStrategy;
