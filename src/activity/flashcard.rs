//! 일반 단어 카드 검증기

use std::collections::BTreeMap;
use std::sync::Arc;

use super::answer::AnswerSet;
use super::validator::{validate_each_input, validate_in_order, ActivityKind, ActivityValidator};
use crate::config::{FeedbackStyle, UserSettings};
use crate::core::types::AnswerType;
use crate::validation::{ValidationResult, ValidatorFactory};

/// 검사 순서: 영어 뜻이 있으면 영어부터
const FLASHCARD_ORDER: [AnswerType; 5] = [
    AnswerType::English,
    AnswerType::Hiragana,
    AnswerType::Katakana,
    AnswerType::Kanji,
    AnswerType::Romaji,
];

#[derive(Debug)]
pub struct FlashcardValidator {
    validators: Arc<ValidatorFactory>,
    style: FeedbackStyle,
}

impl Default for FlashcardValidator {
    fn default() -> Self {
        Self::new(Arc::new(ValidatorFactory::new()))
    }
}

impl FlashcardValidator {
    pub fn new(validators: Arc<ValidatorFactory>) -> Self {
        Self {
            validators,
            style: FeedbackStyle::default(),
        }
    }

    pub fn with_feedback_style(mut self, style: FeedbackStyle) -> Self {
        self.style = style;
        self
    }
}

impl ActivityValidator for FlashcardValidator {
    fn validate_answer(&self, answer: &str, answers: &AnswerSet) -> ValidationResult {
        validate_in_order(&self.validators, &FLASHCARD_ORDER, answer, answers, "Incorrect answer")
            .apply_feedback_style(&self.style)
    }

    fn enabled_input_types(&self, settings: &UserSettings) -> Vec<AnswerType> {
        FLASHCARD_ORDER
            .into_iter()
            .filter(|&t| settings.is_enabled(t))
            .collect()
    }

    fn validate_multiple_inputs(
        &self,
        inputs: &BTreeMap<AnswerType, String>,
        answers: &AnswerSet,
    ) -> Vec<ValidationResult> {
        validate_each_input(&self.validators, inputs, answers, &self.style)
    }

    fn feedback_style(&self) -> &FeedbackStyle {
        &self.style
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::Flashcard
    }
}
