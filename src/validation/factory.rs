//! 유형 이름 -> 검증기 팩토리
//!
//! 유형별로 한 번만 만들고 캐시에 보관합니다. 캐시는 팩토리 인스턴스 소유입니다.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use super::english::EnglishValidator;
use super::error::ValidationError;
use super::kana::KanaValidator;
use super::kanji::KanjiValidator;
use super::strategy::ValidationStrategy;
use crate::config::SimilarityThresholds;
use crate::core::types::AnswerType;

/// 검증기 생성 함수
pub type ValidatorConstructor = fn(&SimilarityThresholds) -> Arc<dyn ValidationStrategy>;

fn hiragana_validator(thresholds: &SimilarityThresholds) -> Arc<dyn ValidationStrategy> {
    Arc::new(KanaValidator::hiragana().with_threshold(thresholds.kana))
}

fn katakana_validator(thresholds: &SimilarityThresholds) -> Arc<dyn ValidationStrategy> {
    Arc::new(KanaValidator::katakana().with_threshold(thresholds.kana))
}

fn english_validator(thresholds: &SimilarityThresholds) -> Arc<dyn ValidationStrategy> {
    Arc::new(EnglishValidator::new().with_threshold(thresholds.english))
}

fn kanji_validator(thresholds: &SimilarityThresholds) -> Arc<dyn ValidationStrategy> {
    Arc::new(KanjiValidator::new().with_threshold(thresholds.kanji))
}

/// 검증기 팩토리
pub struct ValidatorFactory {
    thresholds: SimilarityThresholds,
    constructors: HashMap<AnswerType, ValidatorConstructor>,
    cache: Mutex<HashMap<AnswerType, Arc<dyn ValidationStrategy>>>,
}

impl fmt::Debug for ValidatorFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorFactory")
            .field("thresholds", &self.thresholds)
            .field("types", &self.supported_types())
            .finish()
    }
}

impl Default for ValidatorFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorFactory {
    /// 기본 임계값, 기본 등록(hiragana, katakana, english, kanji)
    pub fn new() -> Self {
        Self::with_thresholds(SimilarityThresholds::default())
    }

    pub fn with_thresholds(thresholds: SimilarityThresholds) -> Self {
        let mut constructors: HashMap<AnswerType, ValidatorConstructor> = HashMap::new();
        constructors.insert(AnswerType::Hiragana, hiragana_validator);
        constructors.insert(AnswerType::Katakana, katakana_validator);
        constructors.insert(AnswerType::English, english_validator);
        constructors.insert(AnswerType::Kanji, kanji_validator);

        Self {
            thresholds,
            constructors,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// 검증기 등록 (기존 등록과 캐시를 교체)
    pub fn register(&mut self, answer_type: AnswerType, constructor: ValidatorConstructor) {
        self.constructors.insert(answer_type, constructor);
        self.cache
            .get_mut()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&answer_type);
    }

    /// 이름으로 검증기 조회
    ///
    /// 모르는 이름이나 등록되지 않은 유형(예: romaji)은 에러
    pub fn create_validator(
        &self,
        name: &str,
    ) -> Result<Arc<dyn ValidationStrategy>, ValidationError> {
        let answer_type: AnswerType = name
            .parse()
            .map_err(|_| ValidationError::UnknownValidatorType(name.to_string()))?;
        self.validator_for(answer_type)
    }

    /// 유형으로 검증기 조회
    pub fn validator_for(
        &self,
        answer_type: AnswerType,
    ) -> Result<Arc<dyn ValidationStrategy>, ValidationError> {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(validator) = cache.get(&answer_type) {
            return Ok(Arc::clone(validator));
        }

        let constructor = self
            .constructors
            .get(&answer_type)
            .ok_or_else(|| ValidationError::UnknownValidatorType(answer_type.to_string()))?;

        log::debug!("검증기 생성: {}", answer_type);
        let validator = constructor(&self.thresholds);
        cache.insert(answer_type, Arc::clone(&validator));
        Ok(validator)
    }

    /// 등록된 유형 목록 (정렬됨)
    pub fn supported_types(&self) -> Vec<AnswerType> {
        let mut types: Vec<AnswerType> = self.constructors.keys().copied().collect();
        types.sort();
        types
    }

    pub fn thresholds(&self) -> &SimilarityThresholds {
        &self.thresholds
    }
}
