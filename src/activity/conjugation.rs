//! 동사/형용사 활용 카드 검증기
//!
//! 활용형은 가나 답이 기준이므로 히라가나부터 검사합니다.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::answer::{AnswerSet, ConjugationForm};
use super::summary::{validation_summary, ValidationSummary};
use super::validator::{
    check_field, validate_each_input, validate_in_order, ActivityKind, ActivityValidator, BestMiss,
};
use crate::config::{FeedbackStyle, UserSettings};
use crate::core::types::AnswerType;
use crate::validation::{ValidationResult, ValidatorFactory};

const CONJUGATION_ORDER: [AnswerType; 5] = [
    AnswerType::Hiragana,
    AnswerType::Kanji,
    AnswerType::Katakana,
    AnswerType::Romaji,
    AnswerType::English,
];

const INCORRECT_CONJUGATION: &str = "Incorrect conjugation";

#[derive(Debug)]
pub struct ConjugationValidator {
    validators: Arc<ValidatorFactory>,
    style: FeedbackStyle,
}

impl Default for ConjugationValidator {
    fn default() -> Self {
        Self::new(Arc::new(ValidatorFactory::new()))
    }
}

impl ConjugationValidator {
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

    /// 활용형 하나 검사: 히라가나 -> 별도 읽기 -> 한자 표기 순
    pub fn validate_conjugation(&self, answer: &str, form: &ConjugationForm) -> ValidationResult {
        let reading = form
            .reading
            .as_deref()
            .filter(|r| *r != form.hiragana);
        let candidates = [
            (AnswerType::Hiragana, Some(form.hiragana.as_str())),
            (AnswerType::Hiragana, reading),
            (AnswerType::Kanji, Some(form.kanji.as_str())),
        ];

        let mut best = BestMiss::default();
        for (field, expected) in candidates {
            let Some(expected) = expected.filter(|e| !e.trim().is_empty()) else {
                continue;
            };
            let result = check_field(&self.validators, field, answer, expected);
            if result.is_correct {
                return result.apply_feedback_style(&self.style);
            }
            best.offer(result);
        }

        best.into_failure(INCORRECT_CONJUGATION)
            .apply_feedback_style(&self.style)
    }

    /// 활용형 이름별 답안 요약 (답이 없는 활용형은 오답)
    pub fn conjugation_validation_summary(
        &self,
        answers: &BTreeMap<String, String>,
        forms: &BTreeMap<String, ConjugationForm>,
    ) -> ValidationSummary {
        let results = forms
            .iter()
            .map(|(name, form)| {
                let answer = answers.get(name).map(String::as_str).unwrap_or("");
                self.validate_conjugation(answer, form)
            })
            .collect();
        validation_summary(results)
    }

    pub fn are_all_conjugations_correct(
        &self,
        answers: &BTreeMap<String, String>,
        forms: &BTreeMap<String, ConjugationForm>,
    ) -> bool {
        self.conjugation_validation_summary(answers, forms).all_correct()
    }
}

impl ActivityValidator for ConjugationValidator {
    fn validate_answer(&self, answer: &str, answers: &AnswerSet) -> ValidationResult {
        validate_in_order(
            &self.validators,
            &CONJUGATION_ORDER,
            answer,
            answers,
            INCORRECT_CONJUGATION,
        )
        .apply_feedback_style(&self.style)
    }

    fn enabled_input_types(&self, settings: &UserSettings) -> Vec<AnswerType> {
        CONJUGATION_ORDER
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
        ActivityKind::Conjugation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, kanji: &str, hiragana: &str) -> ConjugationForm {
        ConjugationForm {
            form: name.to_string(),
            conjugation: hiragana.to_string(),
            kanji: kanji.to_string(),
            hiragana: hiragana.to_string(),
            reading: None,
        }
    }

    fn taberu_forms() -> BTreeMap<String, ConjugationForm> {
        let mut forms = BTreeMap::new();
        forms.insert("polite".to_string(), form("polite", "食べます", "たべます"));
        forms.insert("past".to_string(), form("past", "食べた", "たべた"));
        forms.insert("te".to_string(), form("te", "食べて", "たべて"));
        forms
    }

    #[test]
    fn test_conjugation_hiragana_and_romaji() {
        let validator = ConjugationValidator::default();
        let polite = form("polite", "食べます", "たべます");

        let result = validator.validate_conjugation("たべます", &polite);
        assert!(result.is_correct);
        assert_eq!(result.matched_type, Some(AnswerType::Hiragana));

        let result = validator.validate_conjugation("tabemasu", &polite);
        assert!(result.is_correct);
        assert_eq!(result.converted_answer.as_deref(), Some("たべます"));
    }

    #[test]
    fn test_conjugation_kanji_spelling() {
        let validator = ConjugationValidator::default();
        let polite = form("polite", "食べます", "たべます");
        let result = validator.validate_conjugation("食べます", &polite);
        assert!(result.is_correct);
        assert_eq!(result.matched_type, Some(AnswerType::Kanji));
    }

    #[test]
    fn test_conjugation_reading_fallback() {
        let validator = ConjugationValidator::default();
        let mut iku = form("te", "行って", "いって");
        iku.reading = Some("ゆって".to_string());
        assert!(validator.validate_conjugation("yutte", &iku).is_correct);
    }

    #[test]
    fn test_incorrect_conjugation() {
        let validator = ConjugationValidator::default();
        let polite = form("polite", "食べます", "たべます");
        let result = validator.validate_conjugation("tabeta", &polite);
        assert!(!result.is_correct);
        assert_eq!(result.feedback[0], "Incorrect conjugation");
        assert!(result.confidence.is_some());
    }

    #[test]
    fn test_conjugation_summary() {
        let validator = ConjugationValidator::default();
        let mut answers = BTreeMap::new();
        answers.insert("polite".to_string(), "tabemasu".to_string());
        answers.insert("past".to_string(), "たべた".to_string());

        let summary = validator.conjugation_validation_summary(&answers, &taberu_forms());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.incorrect, 1);
        assert!(!validator.are_all_conjugations_correct(&answers, &taberu_forms()));

        answers.insert("te".to_string(), "tabete".to_string());
        assert!(validator.are_all_conjugations_correct(&answers, &taberu_forms()));
    }

    #[test]
    fn test_validate_answer_order() {
        let validator = ConjugationValidator::default();
        let answers = AnswerSet::new()
            .with_hiragana("たべます")
            .with_kanji("食べます")
            .with_english("eat (polite)");
        let result = validator.validate_answer("tabemasu", &answers);
        assert!(result.is_correct);
        assert_eq!(result.matched_type, Some(AnswerType::Hiragana));

        let result = validator.validate_answer("tabenai", &answers);
        assert!(!result.is_correct);
        assert_eq!(result.feedback[0], "Incorrect conjugation");
    }

    #[test]
    fn test_enabled_input_types_order() {
        let validator = ConjugationValidator::default();
        let settings = UserSettings {
            input_kanji: true,
            input_romaji: true,
            ..UserSettings::default()
        };
        assert_eq!(
            validator.enabled_input_types(&settings),
            vec![
                AnswerType::Hiragana,
                AnswerType::Kanji,
                AnswerType::Romaji,
                AnswerType::English
            ]
        );
    }
}
