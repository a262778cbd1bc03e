//! 설정 파일 로드/저장 (JSON)
//!
//! 학습자 입력 설정, 유사도 임계값, 피드백 표시 힌트를 담습니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::types::{AnswerType, KanaScript};

/// 학습자 입력 설정 (어떤 칸에 입력할지, 로마자 변환 대상)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserSettings {
    #[serde(default = "default_true")]
    pub input_hiragana: bool,
    #[serde(default)]
    pub input_katakana: bool,
    #[serde(default)]
    pub input_kanji: bool,
    #[serde(default = "default_true")]
    pub input_english: bool,
    #[serde(default)]
    pub input_romaji: bool,
    /// 로마자 칸 입력을 어느 가나로 변환할지
    #[serde(default)]
    pub romaji_output_type: KanaScript,
}

fn default_true() -> bool {
    true
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            input_hiragana: true,
            input_katakana: false,
            input_kanji: false,
            input_english: true,
            input_romaji: false,
            romaji_output_type: KanaScript::Hiragana,
        }
    }
}

impl UserSettings {
    /// 해당 칸 입력이 켜져 있는지
    pub fn is_enabled(&self, answer_type: AnswerType) -> bool {
        match answer_type {
            AnswerType::English => self.input_english,
            AnswerType::Hiragana => self.input_hiragana,
            AnswerType::Katakana => self.input_katakana,
            AnswerType::Kanji => self.input_kanji,
            AnswerType::Romaji => self.input_romaji,
        }
    }
}

/// 부분 일치("아깝다") 판정 임계값
/// 유사도가 이 값을 넘어야 부분 일치로 봅니다.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SimilarityThresholds {
    #[serde(default = "default_kana_threshold")]
    pub kana: f64,
    #[serde(default = "default_kanji_threshold")]
    pub kanji: f64,
    #[serde(default = "default_english_threshold")]
    pub english: f64,
}

fn default_kana_threshold() -> f64 {
    0.7
}

fn default_kanji_threshold() -> f64 {
    0.7
}

fn default_english_threshold() -> f64 {
    0.8
}

impl Default for SimilarityThresholds {
    fn default() -> Self {
        Self {
            kana: default_kana_threshold(),
            kanji: default_kanji_threshold(),
            english: default_english_threshold(),
        }
    }
}

/// 결과 표시 힌트 (입력 칸 색상, 다음 카드로 넘어가기까지 대기 시간)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FeedbackStyle {
    #[serde(default = "default_correct_color")]
    pub correct_color: String,
    #[serde(default = "default_partial_color")]
    pub partial_color: String,
    #[serde(default = "default_incorrect_color")]
    pub incorrect_color: String,
    /// 정답 후 자동 진행 대기 시간 (ms)
    #[serde(default = "default_correct_timer_ms")]
    pub correct_timer_ms: u64,
    /// 오답/부분 일치 후 대기 시간 (ms)
    #[serde(default = "default_incorrect_timer_ms")]
    pub incorrect_timer_ms: u64,
}

fn default_correct_color() -> String {
    "green".to_string()
}

fn default_partial_color() -> String {
    "orange".to_string()
}

fn default_incorrect_color() -> String {
    "red".to_string()
}

fn default_correct_timer_ms() -> u64 {
    1000
}

fn default_incorrect_timer_ms() -> u64 {
    3000
}

impl Default for FeedbackStyle {
    fn default() -> Self {
        Self {
            correct_color: default_correct_color(),
            partial_color: default_partial_color(),
            incorrect_color: default_incorrect_color(),
            correct_timer_ms: default_correct_timer_ms(),
            incorrect_timer_ms: default_incorrect_timer_ms(),
        }
    }
}

/// Kotoba 설정
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct KotobaConfig {
    #[serde(default)]
    pub settings: UserSettings,
    #[serde(default)]
    pub thresholds: SimilarityThresholds,
    #[serde(default)]
    pub feedback: FeedbackStyle,
}

/// 설정 파일 읽기/쓰기 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 실패
    IoError(std::io::Error),
    /// JSON 파싱/직렬화 실패
    ParseError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::ParseError(s) => write!(f, "설정 JSON 오류: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

/// 설정 파일 경로: ~/.config/kotoba/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("kotoba").join("config.json")
}

/// 기본 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> KotobaConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(ConfigError::IoError(_)) => KotobaConfig::default(),
        Err(e) => {
            log::warn!("{} 무시, 기본 설정 사용: {}", path.display(), e);
            KotobaConfig::default()
        }
    }
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<KotobaConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &KotobaConfig) -> Result<(), ConfigError> {
    save_config_to(&config_path(), config)
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(path: &Path, config: &KotobaConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KotobaConfig::default();
        assert!(config.settings.input_hiragana);
        assert!(config.settings.input_english);
        assert!(!config.settings.input_kanji);
        assert_eq!(config.settings.romaji_output_type, KanaScript::Hiragana);
        assert!((config.thresholds.kana - 0.7).abs() < f64::EPSILON);
        assert!((config.thresholds.english - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serialize_deserialize() {
        let mut config = KotobaConfig::default();
        config.settings.input_katakana = true;
        config.settings.romaji_output_type = KanaScript::Katakana;
        config.feedback.correct_timer_ms = 500;

        let json = serde_json::to_string(&config).unwrap();
        let parsed: KotobaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 예전 설정 파일에 일부 필드가 없는 경우 기본값 사용
        let json = r#"{"settings": {"input_kanji": true, "romaji_output_type": "katakana"}}"#;
        let config: KotobaConfig = serde_json::from_str(json).unwrap();
        assert!(config.settings.input_kanji);
        assert!(config.settings.input_hiragana);
        assert_eq!(config.settings.romaji_output_type, KanaScript::Katakana);
        assert_eq!(config.feedback, FeedbackStyle::default());
    }

    #[test]
    fn test_is_enabled() {
        let settings = UserSettings {
            input_romaji: true,
            input_english: false,
            ..UserSettings::default()
        };
        assert!(settings.is_enabled(AnswerType::Romaji));
        assert!(settings.is_enabled(AnswerType::Hiragana));
        assert!(!settings.is_enabled(AnswerType::English));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("kotoba-config-test-{}", std::process::id()));
        let path = dir.join("config.json");
        let mut config = KotobaConfig::default();
        config.thresholds.english = 0.85;

        save_config_to(&path, &config).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = std::env::temp_dir().join(format!("kotoba-config-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::ParseError(_))));
        assert!(matches!(
            load_config_from(&dir.join("missing.json")),
            Err(ConfigError::IoError(_))
        ));

        let _ = fs::remove_dir_all(&dir);
    }
}
