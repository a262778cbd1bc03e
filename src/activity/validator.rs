//! 학습 활동 검증기 인터페이스와 공용 검사 루틴

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::answer::AnswerSet;
use super::summary::{
    are_all_inputs_correct, combine_results, validation_summary, ValidationSummary,
};
use crate::config::{FeedbackStyle, UserSettings};
use crate::core::types::AnswerType;
use crate::validation::{ValidationResult, ValidatorFactory};

/// 활동 검증기 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Flashcard,
    Conjugation,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::Flashcard => write!(f, "flashcard"),
            ActivityKind::Conjugation => write!(f, "conjugation"),
        }
    }
}

/// 카드 하나에 대한 답안 검증기
pub trait ActivityValidator: Send + Sync + fmt::Debug {
    /// 답안 하나를 카드의 모든 칸과 비교 (첫 번째 일치에서 멈춤)
    fn validate_answer(&self, answer: &str, answers: &AnswerSet) -> ValidationResult;

    /// 설정에서 켜진 입력 칸 (검사 순서대로)
    fn enabled_input_types(&self, settings: &UserSettings) -> Vec<AnswerType>;

    /// 칸별 입력을 각각 검증
    fn validate_multiple_inputs(
        &self,
        inputs: &BTreeMap<AnswerType, String>,
        answers: &AnswerSet,
    ) -> Vec<ValidationResult>;

    fn kind(&self) -> ActivityKind;

    /// 결과에 붙일 색상/타이머 힌트
    fn feedback_style(&self) -> &FeedbackStyle;

    /// 칸별 입력을 검증해 하나의 판정으로 (칸별 정답 여부는 `results`)
    fn validate_all_inputs(
        &self,
        inputs: &BTreeMap<AnswerType, String>,
        answers: &AnswerSet,
    ) -> ValidationResult {
        combine_results(&self.validate_multiple_inputs(inputs, answers))
            .apply_feedback_style(self.feedback_style())
    }

    fn are_all_inputs_correct(
        &self,
        inputs: &BTreeMap<AnswerType, String>,
        answers: &AnswerSet,
    ) -> bool {
        are_all_inputs_correct(&self.validate_multiple_inputs(inputs, answers))
    }

    fn validation_summary(
        &self,
        inputs: &BTreeMap<AnswerType, String>,
        answers: &AnswerSet,
    ) -> ValidationSummary {
        validation_summary(self.validate_multiple_inputs(inputs, answers))
    }
}

/// 칸 하나 검사
///
/// 로마자 칸은 히라가나 검증기로 비교하고 일치 칸만 로마자로 표시합니다.
pub(crate) fn check_field(
    validators: &ValidatorFactory,
    field: AnswerType,
    answer: &str,
    expected: &str,
) -> ValidationResult {
    let strategy_type = match field {
        AnswerType::Romaji => AnswerType::Hiragana,
        other => other,
    };

    match validators.validator_for(strategy_type) {
        Ok(validator) => validator.validate(answer, expected).with_matched_type(field),
        Err(e) => ValidationResult::incorrect(e.to_string()).with_confidence(0.0),
    }
}

/// 가장 유사도가 높은 오답을 기억해두는 집계기
#[derive(Debug, Default)]
pub(crate) struct BestMiss(Option<ValidationResult>);

impl BestMiss {
    pub(crate) fn offer(&mut self, result: ValidationResult) {
        let better = match &self.0 {
            Some(best) => result.confidence_or_zero() > best.confidence_or_zero(),
            None => true,
        };
        if better {
            self.0 = Some(result);
        }
    }

    /// 일반 실패 메시지 + 가장 가까웠던 오답의 신뢰도/피드백
    pub(crate) fn into_failure(self, message: &str) -> ValidationResult {
        let mut failure = ValidationResult::incorrect(message);
        match self.0 {
            Some(best) => {
                failure.confidence = Some(best.confidence_or_zero());
                failure.is_close = best.is_close;
                failure.feedback.extend(best.feedback);
                failure.normalized_input = best.normalized_input;
                failure.converted_answer = best.converted_answer;
            }
            None => failure.confidence = Some(0.0),
        }
        failure
    }
}

/// 정해진 칸 순서대로 비교, 첫 정답 반환
pub(crate) fn validate_in_order(
    validators: &ValidatorFactory,
    order: &[AnswerType],
    answer: &str,
    answers: &AnswerSet,
    failure_message: &str,
) -> ValidationResult {
    let mut best = BestMiss::default();

    for &field in order {
        let Some(expected) = answers.get(field) else {
            continue;
        };
        let result = check_field(validators, field, answer, &expected);
        if result.is_correct {
            return result;
        }
        best.offer(result);
    }

    best.into_failure(failure_message)
}

/// 칸별 입력 검사 (빈 입력은 건너뜀)
pub(crate) fn validate_each_input(
    validators: &ValidatorFactory,
    inputs: &BTreeMap<AnswerType, String>,
    answers: &AnswerSet,
    style: &FeedbackStyle,
) -> Vec<ValidationResult> {
    inputs
        .iter()
        .filter(|(_, input)| !input.trim().is_empty())
        .map(|(&field, input)| {
            let result = match answers.get(field) {
                Some(expected) => check_field(validators, field, input, &expected),
                None => {
                    ValidationResult::incorrect(format!("No expected answer for type: {}", field))
                        .with_confidence(0.0)
                }
            };
            result.apply_feedback_style(style)
        })
        .collect()
}
