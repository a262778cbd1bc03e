//! 답안 검증 결과

use serde::{Deserialize, Serialize};

use crate::config::FeedbackStyle;
use crate::core::types::AnswerType;

/// 답안 하나(또는 여러 칸)에 대한 검증 결과
///
/// 정답이면 항상 `matched_type`이 채워집니다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_correct: bool,
    /// 어느 칸/체계와 일치했는지
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_type: Option<AnswerType>,
    /// 로마자 입력을 변환한 결과 등
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feedback: Vec<String>,
    /// 0.0 ~ 1.0 (1.0은 정규화 후 완전 일치)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// 오답이지만 임계값을 넘긴 근접 답안
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_close: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_expected: Option<String>,
    /// 여러 칸 동시 입력 시 칸별 정답 여부
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_color: Option<String>,
    /// 자동 진행까지 대기 시간 (ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_duration: Option<u64>,
}

impl ValidationResult {
    /// 정답
    pub fn correct(matched_type: AnswerType, confidence: f64) -> Self {
        Self {
            is_correct: true,
            matched_type: Some(matched_type),
            confidence: Some(confidence.clamp(0.0, 1.0)),
            ..Self::default()
        }
    }

    /// 오답
    pub fn incorrect(feedback: impl Into<String>) -> Self {
        Self {
            is_correct: false,
            feedback: vec![feedback.into()],
            ..Self::default()
        }
    }

    pub fn with_normalized(
        mut self,
        input: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        self.normalized_input = Some(input.into());
        self.normalized_expected = Some(expected.into());
        self
    }

    pub fn with_converted(mut self, converted: impl Into<String>) -> Self {
        self.converted_answer = Some(converted.into());
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence.clamp(0.0, 1.0));
        self
    }

    /// 일치한 칸을 덮어씀 (로마자 칸을 히라가나 검증기로 검사한 경우 등)
    pub fn with_matched_type(mut self, matched_type: AnswerType) -> Self {
        if self.is_correct {
            self.matched_type = Some(matched_type);
        }
        self
    }

    /// 색상/타이머 힌트 적용
    pub fn apply_feedback_style(mut self, style: &FeedbackStyle) -> Self {
        let (color, timer) = if self.is_correct {
            (&style.correct_color, style.correct_timer_ms)
        } else if self.is_close {
            (&style.partial_color, style.incorrect_timer_ms)
        } else {
            (&style.incorrect_color, style.incorrect_timer_ms)
        };
        self.feedback_color = Some(color.clone());
        self.timer_duration = Some(timer);
        self
    }

    pub fn confidence_or_zero(&self) -> f64 {
        self.confidence.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_carries_type() {
        let result = ValidationResult::correct(AnswerType::Hiragana, 1.0);
        assert!(result.is_correct);
        assert_eq!(result.matched_type, Some(AnswerType::Hiragana));
        assert_eq!(result.confidence, Some(1.0));
    }

    #[test]
    fn test_confidence_is_clamped() {
        let result = ValidationResult::correct(AnswerType::English, 1.5);
        assert_eq!(result.confidence, Some(1.0));
        let result = ValidationResult::incorrect("x").with_confidence(-0.2);
        assert_eq!(result.confidence, Some(0.0));
    }

    #[test]
    fn test_matched_type_only_on_success() {
        let result =
            ValidationResult::incorrect("Incorrect answer").with_matched_type(AnswerType::Romaji);
        assert_eq!(result.matched_type, None);
        let result = ValidationResult::correct(AnswerType::Hiragana, 0.9)
            .with_matched_type(AnswerType::Romaji);
        assert_eq!(result.matched_type, Some(AnswerType::Romaji));
    }

    #[test]
    fn test_feedback_style() {
        let style = FeedbackStyle::default();

        let ok = ValidationResult::correct(AnswerType::Kanji, 1.0).apply_feedback_style(&style);
        assert_eq!(ok.feedback_color.as_deref(), Some("green"));
        assert_eq!(ok.timer_duration, Some(style.correct_timer_ms));

        let mut close = ValidationResult::incorrect("Close!");
        close.is_close = true;
        let close = close.apply_feedback_style(&style);
        assert_eq!(close.feedback_color.as_deref(), Some("orange"));

        let wrong = ValidationResult::incorrect("Incorrect answer").apply_feedback_style(&style);
        assert_eq!(wrong.feedback_color.as_deref(), Some("red"));
        assert_eq!(wrong.timer_duration, Some(style.incorrect_timer_ms));
    }

    #[test]
    fn test_serialize_camel_case() {
        let result = ValidationResult::correct(AnswerType::Hiragana, 0.9)
            .with_converted("たべる")
            .with_normalized("taberu", "たべる");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isCorrect"], true);
        assert_eq!(json["matchedType"], "hiragana");
        assert_eq!(json["convertedAnswer"], "たべる");
        assert_eq!(json["normalizedInput"], "taberu");
        // 비어 있는 값은 생략
        assert!(json.get("feedback").is_none());
        assert!(json.get("isClose").is_none());
        assert!(json.get("timerDuration").is_none());
    }
}
