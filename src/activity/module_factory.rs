//! 학습 모듈 이름 -> 활동 검증기
//!
//! 활용 모듈은 활용 검증기, 그 밖의 모든 모듈(모르는 이름 포함)은 단어 카드 검증기를 씁니다.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::conjugation::ConjugationValidator;
use super::flashcard::FlashcardValidator;
use super::validator::ActivityValidator;
use crate::config::{FeedbackStyle, KotobaConfig};
use crate::validation::ValidatorFactory;

/// 활용 검증기를 쓰는 모듈
const CONJUGATION_MODULES: &[&str] = &[
    "verbs",
    "adjectives",
    "conjugation",
    "verb-conjugation",
    "adjective-conjugation",
    "te-form",
];

/// 활용 모듈인지
pub fn is_conjugation_module(name: &str) -> bool {
    CONJUGATION_MODULES.contains(&name)
}

#[derive(Debug)]
pub struct ModuleValidatorFactory {
    validators: Arc<ValidatorFactory>,
    style: FeedbackStyle,
    cache: Mutex<HashMap<String, Arc<dyn ActivityValidator>>>,
}

impl Default for ModuleValidatorFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleValidatorFactory {
    pub fn new() -> Self {
        Self::with_validators(Arc::new(ValidatorFactory::new()))
    }

    /// 설정 파일의 임계값/피드백 스타일 반영
    pub fn from_config(config: &KotobaConfig) -> Self {
        Self::with_validators(Arc::new(ValidatorFactory::with_thresholds(config.thresholds)))
            .with_feedback_style(config.feedback.clone())
    }

    pub fn with_validators(validators: Arc<ValidatorFactory>) -> Self {
        Self {
            validators,
            style: FeedbackStyle::default(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_feedback_style(mut self, style: FeedbackStyle) -> Self {
        self.style = style;
        self.cache
            .get_mut()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
        self
    }

    /// 공유하는 문자 체계별 검증기 팩토리
    pub fn validators(&self) -> &Arc<ValidatorFactory> {
        &self.validators
    }

    /// 활용 전용 기능(활용형 요약 등)이 필요할 때
    pub fn conjugation_validator(&self) -> ConjugationValidator {
        ConjugationValidator::new(Arc::clone(&self.validators))
            .with_feedback_style(self.style.clone())
    }

    /// 모듈 이름으로 활동 검증기 조회 (실패하지 않음)
    pub fn create_module_validator(&self, name: &str) -> Arc<dyn ActivityValidator> {
        let key = name.trim().to_lowercase();
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(validator) = cache.get(&key) {
            return Arc::clone(validator);
        }

        let validator: Arc<dyn ActivityValidator> = if is_conjugation_module(&key) {
            Arc::new(self.conjugation_validator())
        } else {
            if key != "flashcard" {
                log::debug!("모듈 '{}': 전용 검증기 없음, flashcard 사용", key);
            }
            Arc::new(
                FlashcardValidator::new(Arc::clone(&self.validators))
                    .with_feedback_style(self.style.clone()),
            )
        };

        cache.insert(key, Arc::clone(&validator));
        validator
    }
}
