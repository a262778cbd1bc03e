//! 입력 문자열의 문자 체계 판별
//!
//! 로마자 / 히라가나 / 가타카나 / 한자 중 어느 체계로 쓰였는지,
//! 둘 이상 섞였는지를 판별합니다.

use serde::{Deserialize, Serialize};

use crate::core::unicode::{is_hiragana, is_kanji, is_katakana, is_latin, LONG_VOWEL_MARK};

/// 어느 가나에도 붙는 기호 (장음 부호, 가운뎃점): 체계 판별에서 제외
fn is_script_neutral(c: char) -> bool {
    c == LONG_VOWEL_MARK || c == '・'
}

/// 문자 체계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptType {
    Romaji,
    Hiragana,
    Katakana,
    Kanji,
    Mixed,
}

/// 문자열의 문자 체계 판별
///
/// - 빈 문자열/공백만 있으면 `Romaji` (입력 대기 상태로 간주)
/// - 두 가지 이상의 체계가 섞여 있으면 `Mixed`
/// - 해당 체계가 하나도 없으면 (숫자, 구두점) `Romaji`
pub fn detect_script(text: &str) -> ScriptType {
    if text.trim().is_empty() {
        return ScriptType::Romaji;
    }

    let chars = || text.chars().filter(|&c| !is_script_neutral(c));
    let has_latin = chars().any(is_latin);
    let has_hiragana = chars().any(is_hiragana);
    let has_katakana = chars().any(is_katakana);
    let has_kanji = chars().any(is_kanji);

    let classes = [has_latin, has_hiragana, has_katakana, has_kanji]
        .iter()
        .filter(|&&present| present)
        .count();

    if classes > 1 {
        return ScriptType::Mixed;
    }

    if has_hiragana {
        ScriptType::Hiragana
    } else if has_katakana {
        ScriptType::Katakana
    } else if has_kanji {
        ScriptType::Kanji
    } else {
        ScriptType::Romaji
    }
}

/// 로마자 입력인지 (영문자가 하나라도 있고 다른 체계는 없음)
pub fn is_romaji(text: &str) -> bool {
    detect_script(text) == ScriptType::Romaji && text.chars().any(is_latin)
}

/// 가나로만 쓰였는지
pub fn is_kana(text: &str) -> bool {
    matches!(
        detect_script(text),
        ScriptType::Hiragana | ScriptType::Katakana
    )
}
