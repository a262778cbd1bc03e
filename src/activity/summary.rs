//! 여러 칸 검증 결과 집계

use serde::{Deserialize, Serialize};

use crate::validation::ValidationResult;

/// 칸별 결과 요약
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub correct: usize,
    pub incorrect: usize,
    pub total: usize,
    pub results: Vec<ValidationResult>,
}

impl ValidationSummary {
    pub fn all_correct(&self) -> bool {
        are_all_inputs_correct(&self.results)
    }

    /// 칸별 결과를 하나의 판정으로
    pub fn combined(&self) -> ValidationResult {
        combine_results(&self.results)
    }
}

/// 모든 칸이 정답인지
///
/// 입력이 하나도 없으면 false (빈 카드를 정답으로 넘기지 않음)
pub fn are_all_inputs_correct(results: &[ValidationResult]) -> bool {
    !results.is_empty() && results.iter().all(|r| r.is_correct)
}

pub fn validation_summary(results: Vec<ValidationResult>) -> ValidationSummary {
    let correct = results.iter().filter(|r| r.is_correct).count();
    ValidationSummary {
        correct,
        incorrect: results.len() - correct,
        total: results.len(),
        results,
    }
}

/// 여러 칸 결과를 하나로 합침
///
/// `results`에 칸별 정답 여부를 담고, 모든 칸이 맞아야 정답입니다.
/// 신뢰도는 가장 낮은 칸 기준, 오답 칸의 피드백은 그대로 이어 붙입니다.
pub fn combine_results(results: &[ValidationResult]) -> ValidationResult {
    let confidence = results
        .iter()
        .map(ValidationResult::confidence_or_zero)
        .reduce(f64::min)
        .unwrap_or(0.0);
    let matched_type = results.iter().find_map(|r| r.matched_type);

    let mut combined = match matched_type {
        Some(matched) if are_all_inputs_correct(results) => {
            ValidationResult::correct(matched, confidence)
        }
        _ => {
            let message = if results.is_empty() {
                "No answer provided"
            } else {
                "Some answers are incorrect"
            };
            let mut failure = ValidationResult::incorrect(message).with_confidence(confidence);
            for result in results.iter().filter(|r| !r.is_correct) {
                failure.feedback.extend(result.feedback.iter().cloned());
            }
            failure
        }
    };
    combined.results = Some(results.iter().map(|r| r.is_correct).collect());
    combined
}
