//! 답안 필드/문자 체계 공용 타입

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 답안 필드 유형 (카드의 어느 칸과 비교할지)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerType {
    English,
    Hiragana,
    Katakana,
    Kanji,
    Romaji,
}

impl AnswerType {
    /// 모든 필드 유형
    pub const ALL: [AnswerType; 5] = [
        AnswerType::English,
        AnswerType::Hiragana,
        AnswerType::Katakana,
        AnswerType::Kanji,
        AnswerType::Romaji,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerType::English => "english",
            AnswerType::Hiragana => "hiragana",
            AnswerType::Katakana => "katakana",
            AnswerType::Kanji => "kanji",
            AnswerType::Romaji => "romaji",
        }
    }
}

impl fmt::Display for AnswerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnswerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" => Ok(AnswerType::English),
            "hiragana" => Ok(AnswerType::Hiragana),
            "katakana" => Ok(AnswerType::Katakana),
            "kanji" => Ok(AnswerType::Kanji),
            "romaji" => Ok(AnswerType::Romaji),
            other => Err(format!("알 수 없는 답안 유형: {}", other)),
        }
    }
}

/// 로마자 변환 대상 가나 체계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KanaScript {
    #[default]
    Hiragana,
    Katakana,
}

impl KanaScript {
    /// 같은 이름의 답안 필드
    pub fn answer_type(&self) -> AnswerType {
        match self {
            KanaScript::Hiragana => AnswerType::Hiragana,
            KanaScript::Katakana => AnswerType::Katakana,
        }
    }
}
