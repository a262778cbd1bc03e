//! 카드 정답 데이터 모델

use serde::{Deserialize, Serialize};

use crate::core::types::AnswerType;

/// 영어 뜻: 문자열 하나 또는 여러 개 (JSON 문자열/배열 모두 허용)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnglishAnswer {
    Single(String),
    Multiple(Vec<String>),
}

impl EnglishAnswer {
    /// 영어 검증기가 나눠 읽는 " / " 구분 문자열로 합침
    pub fn joined(&self) -> String {
        match self {
            EnglishAnswer::Single(text) => text.clone(),
            EnglishAnswer::Multiple(list) => list
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" / "),
        }
    }
}

impl From<&str> for EnglishAnswer {
    fn from(text: &str) -> Self {
        EnglishAnswer::Single(text.to_string())
    }
}

/// 카드 한 장의 칸별 정답
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<EnglishAnswer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiragana: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub katakana: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kanji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romaji: Option<String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_english(mut self, english: impl Into<EnglishAnswer>) -> Self {
        self.english = Some(english.into());
        self
    }

    pub fn with_hiragana(mut self, hiragana: &str) -> Self {
        self.hiragana = Some(hiragana.to_string());
        self
    }

    pub fn with_katakana(mut self, katakana: &str) -> Self {
        self.katakana = Some(katakana.to_string());
        self
    }

    pub fn with_kanji(mut self, kanji: &str) -> Self {
        self.kanji = Some(kanji.to_string());
        self
    }

    pub fn with_romaji(mut self, romaji: &str) -> Self {
        self.romaji = Some(romaji.to_string());
        self
    }

    /// 칸의 정답 (빈 문자열은 없는 것으로 취급)
    pub fn get(&self, answer_type: AnswerType) -> Option<String> {
        let value = match answer_type {
            AnswerType::English => self.english.as_ref().map(EnglishAnswer::joined),
            AnswerType::Hiragana => self.hiragana.clone(),
            AnswerType::Katakana => self.katakana.clone(),
            AnswerType::Kanji => self.kanji.clone(),
            AnswerType::Romaji => self.romaji.clone(),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// 정답이 있는 칸 목록
    pub fn present_types(&self) -> Vec<AnswerType> {
        AnswerType::ALL
            .into_iter()
            .filter(|&t| self.get(t).is_some())
            .collect()
    }
}

/// 단어 데이터 (id, 분류 태그, 칸별 정답)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordItem {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub answers: AnswerSet,
}

/// 활용형 하나 (예: polite, past)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationForm {
    pub form: String,
    #[serde(default)]
    pub conjugation: String,
    #[serde(default)]
    pub kanji: String,
    #[serde(default)]
    pub hiragana: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_single_or_list() {
        let set: AnswerSet = serde_json::from_str(r#"{"english": "to eat"}"#).unwrap();
        assert_eq!(set.get(AnswerType::English).as_deref(), Some("to eat"));

        let set: AnswerSet =
            serde_json::from_str(r#"{"english": ["to eat", " ", "to consume"]}"#).unwrap();
        assert_eq!(set.get(AnswerType::English).as_deref(), Some("to eat / to consume"));
    }

    #[test]
    fn test_empty_fields_are_absent() {
        let set = AnswerSet::new().with_hiragana("たべる").with_kanji("").with_english("to eat");
        assert_eq!(set.get(AnswerType::Kanji), None);
        assert_eq!(set.get(AnswerType::Katakana), None);
        assert_eq!(
            set.present_types(),
            vec![AnswerType::English, AnswerType::Hiragana]
        );
    }

    #[test]
    fn test_word_item_flattened() {
        let json = r#"{"id": "w1", "type": "verb", "kanji": "食べる",
            "hiragana": "たべる", "english": "to eat"}"#;
        let word: WordItem = serde_json::from_str(json).unwrap();
        assert_eq!(word.id, "w1");
        assert_eq!(word.kind.as_deref(), Some("verb"));
        assert_eq!(word.answers.kanji.as_deref(), Some("食べる"));
        assert_eq!(word.answers.english, Some(EnglishAnswer::from("to eat")));
    }

    #[test]
    fn test_conjugation_form_reading_optional() {
        let json = r#"{"form": "polite", "kanji": "食べます", "hiragana": "たべます"}"#;
        let form: ConjugationForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.reading, None);
        assert_eq!(form.conjugation, "");
    }
}
