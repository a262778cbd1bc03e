//! 영어 뜻 검증기
//!
//! 기대 답안은 `/` 또는 `,`로 여러 개를 적을 수 있고 ("to eat / to consume"),
//! 각 답안은 "to X"와 "X"를 서로 같은 답으로 봅니다.
//! 축약형(don't = do not)과 단순 복수형(s)도 인정합니다.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::result::ValidationResult;
use super::similarity::similarity;
use super::strategy::{empty_answer, miss_result, ValidationStrategy};
use crate::config::SimilarityThresholds;
use crate::core::types::AnswerType;

const INFINITIVE_MATCH_CONFIDENCE: f64 = 0.95;
const CONTRACTION_MATCH_CONFIDENCE: f64 = 0.95;
const PLURAL_MATCH_CONFIDENCE: f64 = 0.9;

/// 축약형 -> 풀어 쓴 형태
static CONTRACTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("don't", "do not"),
        ("doesn't", "does not"),
        ("didn't", "did not"),
        ("won't", "will not"),
        ("wouldn't", "would not"),
        ("can't", "cannot"),
        ("couldn't", "could not"),
        ("shouldn't", "should not"),
        ("isn't", "is not"),
        ("aren't", "are not"),
        ("wasn't", "was not"),
        ("weren't", "were not"),
        ("haven't", "have not"),
        ("hasn't", "has not"),
        ("it's", "it is"),
        ("that's", "that is"),
        ("what's", "what is"),
        ("there's", "there is"),
        ("you're", "you are"),
        ("we're", "we are"),
        ("they're", "they are"),
        ("i'm", "i am"),
        ("he's", "he is"),
        ("she's", "she is"),
        ("i'll", "i will"),
        ("you'll", "you will"),
        ("let's", "let us"),
    ])
});

/// 축약형을 풀어 씀 (단어 단위)
fn expand_contractions(text: &str) -> String {
    text.split_whitespace()
        .map(|word| CONTRACTIONS.get(word).copied().unwrap_or(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 한쪽이 다른 쪽에 s만 붙인 형태인지
fn is_plural_pair(a: &str, b: &str) -> bool {
    let strip = |long: &str, short: &str| {
        short.chars().count() > 1 && long.strip_suffix('s') == Some(short)
    };
    strip(a, b) || strip(b, a)
}

/// 비교 대상 답안 하나
#[derive(Debug, Clone, PartialEq)]
struct Candidate {
    text: String,
    confidence: f64,
}

/// 영어 검증기
#[derive(Debug, Clone)]
pub struct EnglishValidator {
    threshold: f64,
}

impl Default for EnglishValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishValidator {
    pub fn new() -> Self {
        Self {
            threshold: SimilarityThresholds::default().english,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// 기대 답안을 나눠 정규화하고 "to X" / "X" 짝을 추가
    fn candidates(&self, expected: &str) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = Vec::new();

        for part in expected.split(['/', ',']) {
            let text = self.normalize(part);
            if text.is_empty() {
                continue;
            }
            let counterpart = match text.strip_prefix("to ") {
                Some(rest) => rest.to_string(),
                None => format!("to {}", text),
            };

            candidates.push(Candidate {
                text,
                confidence: 1.0,
            });
            if !counterpart.is_empty() && !candidates.iter().any(|c| c.text == counterpart) {
                candidates.push(Candidate {
                    text: counterpart,
                    confidence: INFINITIVE_MATCH_CONFIDENCE,
                });
            }
        }

        candidates
    }

    /// 입력과 일치하는 답안 (완전 일치 > 축약형 > 복수형 순)
    fn find_match(&self, input: &str, candidates: &[Candidate]) -> Option<f64> {
        // 원래 답안과의 완전 일치가 "to" 짝 일치보다 우선
        let mut exact: Option<f64> = None;
        for candidate in candidates.iter().filter(|c| c.text == input) {
            exact = Some(exact.map_or(candidate.confidence, |e: f64| e.max(candidate.confidence)));
        }
        if exact.is_some() {
            return exact;
        }

        let expanded_input = expand_contractions(input);
        if candidates
            .iter()
            .any(|c| expand_contractions(&c.text) == expanded_input)
        {
            return Some(CONTRACTION_MATCH_CONFIDENCE);
        }

        // 복수형은 원래 적힌 답안에만 적용 ("to eat"의 짝 "eat"에서 "eats"가 나오지 않도록)
        if candidates
            .iter()
            .filter(|c| c.confidence >= 1.0)
            .any(|c| is_plural_pair(input, &c.text))
        {
            return Some(PLURAL_MATCH_CONFIDENCE);
        }

        None
    }
}

impl ValidationStrategy for EnglishValidator {
    fn validate(&self, input: &str, expected: &str) -> ValidationResult {
        let norm_input = self.normalize(input);
        let candidates = self.candidates(expected);
        let norm_expected = candidates
            .iter()
            .filter(|c| c.confidence >= 1.0)
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(" / ");

        if norm_input.is_empty() {
            return empty_answer(&norm_expected);
        }

        if let Some(confidence) = self.find_match(&norm_input, &candidates) {
            return ValidationResult::correct(AnswerType::English, confidence)
                .with_normalized(norm_input, norm_expected);
        }

        // 가장 비슷한 답안 기준으로 근접/오답 판정
        let best = candidates
            .iter()
            .map(|c| (c, similarity(&norm_input, &c.text)))
            .max_by(|a, b| a.1.total_cmp(&b.1));

        match best {
            Some((candidate, score)) => {
                miss_result(&norm_input, &candidate.text, score, self.threshold)
                    .with_normalized(norm_input, norm_expected)
            }
            None => miss_result(&norm_input, expected.trim(), 0.0, self.threshold)
                .with_normalized(norm_input, norm_expected),
        }
    }

    /// 소문자화, 하이픈/아포스트로피 외 구두점 제거, 공백 정리
    fn normalize(&self, input: &str) -> String {
        let cleaned: String = input
            .to_lowercase()
            .chars()
            .map(|c| if c == '’' { '\'' } else { c })
            .filter(|&c| c.is_alphanumeric() || c.is_whitespace() || c == '-' || c == '\'')
            .collect();
        cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn supported_types(&self) -> Vec<AnswerType> {
        vec![AnswerType::English]
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }
}
