//! 히라가나/가타카나 검증기
//!
//! 1. 정규화 후 완전 일치 (1.0)
//! 2. 로마자(또는 가나+로마자 혼합) 입력을 가나로 변환해서 일치 (0.9)
//! 3. 기대 답안이 로마자이고 가나 입력과 일치 (0.9)
//! 4. 그 외에는 유사도로 근접/오답 판정

use super::result::ValidationResult;
use super::similarity::similarity;
use super::strategy::{empty_answer, miss_result, ValidationStrategy};
use crate::config::SimilarityThresholds;
use crate::core::converter::{convert_mixed_input, romaji_to_kana};
use crate::core::types::{AnswerType, KanaScript};
use crate::detection::{detect_script, is_kana, is_romaji, ScriptType};

/// 로마자 변환으로 맞힌 경우의 신뢰도
const CONVERTED_MATCH_CONFIDENCE: f64 = 0.9;

/// 가나 검증기
#[derive(Debug, Clone)]
pub struct KanaValidator {
    script: KanaScript,
    threshold: f64,
}

impl KanaValidator {
    pub fn new(script: KanaScript) -> Self {
        Self {
            script,
            threshold: SimilarityThresholds::default().kana,
        }
    }

    pub fn hiragana() -> Self {
        Self::new(KanaScript::Hiragana)
    }

    pub fn katakana() -> Self {
        Self::new(KanaScript::Katakana)
    }

    /// 부분 일치 임계값 설정
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn script(&self) -> KanaScript {
        self.script
    }
}

impl ValidationStrategy for KanaValidator {
    fn validate(&self, input: &str, expected: &str) -> ValidationResult {
        let answer_type = self.script.answer_type();
        let norm_input = self.normalize(input);
        let norm_expected = self.normalize(expected);

        if norm_input.is_empty() {
            return empty_answer(&norm_expected);
        }

        if norm_input == norm_expected {
            return ValidationResult::correct(answer_type, 1.0)
                .with_normalized(norm_input, norm_expected);
        }

        let expected_is_romaji = is_romaji(&norm_expected);
        let mut candidate = norm_input.clone();

        // 로마자 입력, 또는 가나와 섞인 로마자 구간 -> 가나
        let converted = if expected_is_romaji {
            None
        } else if is_romaji(&norm_input) {
            Some(romaji_to_kana(&norm_input, self.script).converted)
        } else if detect_script(&norm_input) == ScriptType::Mixed {
            Some(convert_mixed_input(&norm_input, self.script).converted)
        } else {
            None
        };
        if let Some(converted) = converted {
            if converted == norm_expected {
                return ValidationResult::correct(answer_type, CONVERTED_MATCH_CONFIDENCE)
                    .with_converted(converted)
                    .with_normalized(norm_input, norm_expected);
            }
            candidate = converted;
        }

        // 기대 답안이 로마자이고 입력이 가나인 경우 (반대 방향)
        if expected_is_romaji && is_kana(&norm_input) {
            let converted = romaji_to_kana(&norm_expected, self.script).converted;
            if converted == norm_input {
                return ValidationResult::correct(answer_type, CONVERTED_MATCH_CONFIDENCE)
                    .with_converted(converted)
                    .with_normalized(norm_input, norm_expected);
            }
        }

        let score = similarity(&candidate, &norm_expected);
        miss_result(&candidate, &norm_expected, score, self.threshold)
            .with_normalized(norm_input, norm_expected)
    }

    fn normalize(&self, input: &str) -> String {
        input.trim().to_lowercase()
    }

    fn supported_types(&self) -> Vec<AnswerType> {
        vec![self.script.answer_type()]
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }
}
