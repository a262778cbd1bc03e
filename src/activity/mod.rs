//! 학습 활동(단어 카드, 활용 연습) 답안 검증 모듈
//!
//! 카드 한 장의 여러 정답 칸과 학습자 입력을 비교해
//! 하나의 판정과 칸별 결과를 만듭니다.

pub mod answer;
pub mod conjugation;
pub mod flashcard;
pub mod module_factory;
pub mod summary;
pub mod validator;

pub use answer::{AnswerSet, ConjugationForm, EnglishAnswer, WordItem};
pub use conjugation::ConjugationValidator;
pub use flashcard::FlashcardValidator;
pub use module_factory::{is_conjugation_module, ModuleValidatorFactory};
pub use summary::{
    are_all_inputs_correct, combine_results, validation_summary, ValidationSummary,
};
pub use validator::{ActivityKind, ActivityValidator};
