//! 문자 체계별 검증 전략 인터페이스

use std::fmt;

use super::result::ValidationResult;
use crate::core::types::AnswerType;

/// 한 가지 문자 체계(히라가나, 영어 ...)에 대한 답안 검증기
///
/// 구현체는 생성 후 상태가 없으므로 여러 호출자가 공유해도 됩니다.
pub trait ValidationStrategy: Send + Sync + fmt::Debug {
    /// 입력과 기대 답안 비교
    fn validate(&self, input: &str, expected: &str) -> ValidationResult;

    /// 비교 전 정규화
    fn normalize(&self, input: &str) -> String;

    /// 처리 가능한 답안 유형
    fn supported_types(&self) -> Vec<AnswerType>;

    fn can_handle(&self, answer_type: AnswerType) -> bool {
        self.supported_types().contains(&answer_type)
    }

    /// 부분 일치 임계값
    fn threshold(&self) -> f64;
}

/// 빈 입력
pub(crate) fn empty_answer(expected: &str) -> ValidationResult {
    ValidationResult::incorrect("No answer provided")
        .with_confidence(0.0)
        .with_normalized("", expected)
}

/// 일치하지 않은 답안: 임계값을 넘으면 "아깝다", 아니면 오답
///
/// 어느 쪽이든 `is_correct`는 false, `confidence`는 유사도 그대로
pub(crate) fn miss_result(
    input: &str,
    expected: &str,
    similarity: f64,
    threshold: f64,
) -> ValidationResult {
    let mut result = if similarity > threshold {
        let mut close = ValidationResult::incorrect(format!(
            "Close! Expected \"{}\" but got \"{}\"",
            expected, input
        ));
        close.is_close = true;
        close
    } else {
        let mut wrong = ValidationResult::incorrect(format!("Expected: {}", expected));
        wrong.feedback.push(format!("Your answer: {}", input));
        wrong
    };
    result.confidence = Some(similarity.clamp(0.0, 1.0));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_above_threshold_is_close() {
        let result = miss_result("たべた", "たべる", 0.75, 0.7);
        assert!(!result.is_correct);
        assert!(result.is_close);
        assert_eq!(result.confidence, Some(0.75));
        assert!(result.feedback[0].starts_with("Close!"));
    }

    #[test]
    fn test_miss_at_threshold_is_wrong() {
        let result = miss_result("a", "b", 0.7, 0.7);
        assert!(!result.is_correct);
        assert!(!result.is_close);
        assert_eq!(result.confidence, Some(0.7));
        assert_eq!(result.feedback, vec!["Expected: b".to_string(), "Your answer: a".to_string()]);
    }

    #[test]
    fn test_empty_answer() {
        let result = empty_answer("たべる");
        assert!(!result.is_correct);
        assert_eq!(result.feedback, vec!["No answer provided".to_string()]);
    }
}
