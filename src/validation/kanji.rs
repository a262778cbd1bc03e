//! 한자 검증기
//!
//! 사전 없이 동작하는 근사 검사입니다. 기대 답안에 후리가나 표기
//! (`食[た]べる`)가 있으면 그 읽기와 가나/로마자 입력을 비교합니다.

use super::result::ValidationResult;
use super::similarity::similarity;
use super::strategy::{empty_answer, miss_result, ValidationStrategy};
use crate::config::SimilarityThresholds;
use crate::core::converter::romaji_to_hiragana;
use crate::core::types::AnswerType;
use crate::core::unicode::{is_kanji, katakana_to_hiragana};
use crate::detection::{is_kana, is_romaji};

const READING_MATCH_CONFIDENCE: f64 = 0.9;
const FURIGANA_MATCH_CONFIDENCE: f64 = 0.95;

/// 후리가나 표기를 풀어낸 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Furigana {
    /// 괄호를 뺀 본문 (食べる)
    pub base: String,
    /// 한자를 괄호 속 읽기로 바꾼 문자열 (たべる)
    pub reading: String,
    /// 괄호 표기가 하나라도 있었는지
    pub annotated: bool,
}

/// `漢字[かんじ]` 형식 파싱
/// 괄호 바로 앞의 연속된 한자가 괄호 속 읽기로 대체됩니다.
pub fn parse_furigana(text: &str) -> Furigana {
    let mut base = String::with_capacity(text.len());
    let mut reading = String::with_capacity(text.len());
    let mut kanji_run = String::new();
    let mut annotated = false;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == '[' {
            let ruby: String = chars.by_ref().take_while(|&ch| ch != ']').collect();
            base.push_str(&kanji_run);
            reading.push_str(&ruby);
            kanji_run.clear();
            annotated = true;
        } else if is_kanji(c) || c == '々' {
            kanji_run.push(c);
        } else {
            base.push_str(&kanji_run);
            reading.push_str(&kanji_run);
            kanji_run.clear();
            base.push(c);
            reading.push(c);
        }
    }
    base.push_str(&kanji_run);
    reading.push_str(&kanji_run);

    Furigana {
        base,
        reading,
        annotated,
    }
}

/// 입력을 히라가나 읽기로 (로마자/가타카나 변환), 가나가 아니면 None
fn reading_of(text: &str) -> Option<String> {
    if is_romaji(text) {
        Some(romaji_to_hiragana(text).converted)
    } else if is_kana(text) {
        Some(katakana_to_hiragana(text))
    } else {
        None
    }
}

/// 한자 검증기
#[derive(Debug, Clone)]
pub struct KanjiValidator {
    threshold: f64,
}

impl Default for KanjiValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl KanjiValidator {
    pub fn new() -> Self {
        Self {
            threshold: SimilarityThresholds::default().kanji,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

impl ValidationStrategy for KanjiValidator {
    fn validate(&self, input: &str, expected: &str) -> ValidationResult {
        let norm_input = self.normalize(input);
        let norm_expected = self.normalize(expected);

        if norm_input.is_empty() {
            return empty_answer(&norm_expected);
        }

        if norm_input == norm_expected {
            return ValidationResult::correct(AnswerType::Kanji, 1.0)
                .with_normalized(norm_input, norm_expected);
        }

        let expected_parts = parse_furigana(&norm_expected);

        // 읽기 일치 (후리가나가 있는 경우만)
        if expected_parts.annotated {
            if let Some(reading) = reading_of(&norm_input) {
                if reading == katakana_to_hiragana(&expected_parts.reading) {
                    return ValidationResult::correct(AnswerType::Kanji, READING_MATCH_CONFIDENCE)
                        .with_converted(reading)
                        .with_normalized(norm_input, norm_expected);
                }
            }
        }

        // 후리가나를 뺀 본문 일치
        let input_parts = parse_furigana(&norm_input);
        if input_parts.base == expected_parts.base {
            return ValidationResult::correct(AnswerType::Kanji, FURIGANA_MATCH_CONFIDENCE)
                .with_converted(input_parts.base)
                .with_normalized(norm_input, norm_expected);
        }

        let score = similarity(&input_parts.base, &expected_parts.base);
        miss_result(&input_parts.base, &expected_parts.base, score, self.threshold)
            .with_normalized(norm_input, norm_expected)
    }

    fn normalize(&self, input: &str) -> String {
        input.trim().to_lowercase()
    }

    fn supported_types(&self) -> Vec<AnswerType> {
        vec![AnswerType::Kanji]
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }
}
