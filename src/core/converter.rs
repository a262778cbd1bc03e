//! 로마자 -> 가나 통합 변환기
//!
//! 최장 일치(3 -> 2 -> 1글자) 테이블 조회로 로마자를 히라가나로 바꾸고,
//! 가타카나는 히라가나 결과를 1:1 매핑해서 만듭니다.
//! 변환은 항상 성공합니다. 모르는 문자는 그대로 두고 `errors`에 기록합니다.

use serde::{Deserialize, Serialize};

use crate::config::UserSettings;
use crate::core::kana_table::{is_doubling_consonant, lookup, MAX_ROMAJI_LEN};
use crate::core::types::{AnswerType, KanaScript};
use crate::core::unicode::{hiragana_to_katakana, is_kana, is_latin, LONG_VOWEL_MARK, SMALL_TSU};
use crate::detection::{detect_script, is_romaji, ScriptType};

/// 변환 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// 호출자가 넘긴 원본
    pub original: String,
    /// 변환된 문자열
    pub converted: String,
    /// 모르는 문자가 없었는지
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ConversionResult {
    fn new(original: &str, converted: String, errors: Vec<String>) -> Self {
        Self {
            original: original.to_string(),
            converted,
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// 변환 없이 그대로 통과
    pub fn passthrough(text: &str) -> Self {
        Self::new(text, text.to_string(), Vec::new())
    }
}

/// 로마자를 히라가나로 변환
pub fn romaji_to_hiragana(text: &str) -> ConversionResult {
    let prepared = text.trim().to_lowercase();
    let (converted, errors) = transliterate(&prepared);
    ConversionResult::new(text, converted, errors)
}

/// 로마자를 가타카나로 변환
///
/// 장모음(aa, uu, ū ...)은 장음 부호(ー)로 바뀝니다: `juusu` -> `ジュース`
pub fn romaji_to_katakana(text: &str) -> ConversionResult {
    let prepared = prepare_katakana_romaji(&text.trim().to_lowercase());
    let (hiragana, errors) = transliterate(&prepared);
    ConversionResult::new(text, hiragana_to_katakana(&hiragana), errors)
}

/// 대상 가나 체계로 변환
pub fn romaji_to_kana(text: &str, target: KanaScript) -> ConversionResult {
    match target {
        KanaScript::Hiragana => romaji_to_hiragana(text),
        KanaScript::Katakana => romaji_to_katakana(text),
    }
}

/// 로마자와 다른 문자가 섞인 입력 변환
/// 연속된 영문자 구간만 변환하고 나머지는 그대로 둡니다.
pub fn convert_mixed_input(text: &str, target: KanaScript) -> ConversionResult {
    let mut converted = String::with_capacity(text.len() * 3);
    let mut errors = Vec::new();
    let mut run = String::new();

    let mut flush = |run: &mut String, converted: &mut String| {
        if run.is_empty() {
            return;
        }
        let result = romaji_to_kana(run, target);
        converted.push_str(&result.converted);
        errors.extend(result.errors);
        run.clear();
    };

    for c in text.chars() {
        if is_latin(c) {
            run.push(c);
        } else {
            flush(&mut run, &mut converted);
            converted.push(c);
        }
    }
    flush(&mut run, &mut converted);

    ConversionResult::new(text, converted, errors)
}

/// 입력 칸 유형에 맞게 변환
///
/// - 로마자 입력: 칸의 가나 체계로 변환
///   (로마자 칸은 설정의 `romaji_output_type`, 한자 칸은 읽기용 히라가나)
/// - 혼합 입력: 영문자 구간만 변환
/// - 이미 가나/한자이거나 영어 칸이면 그대로
pub fn convert_input_for_field(
    text: &str,
    field: AnswerType,
    settings: &UserSettings,
) -> ConversionResult {
    let target = match field {
        AnswerType::Hiragana | AnswerType::Kanji => KanaScript::Hiragana,
        AnswerType::Katakana => KanaScript::Katakana,
        AnswerType::Romaji => settings.romaji_output_type,
        AnswerType::English => return ConversionResult::passthrough(text),
    };

    match detect_script(text) {
        ScriptType::Romaji if is_romaji(text) => romaji_to_kana(text, target),
        ScriptType::Mixed => convert_mixed_input(text, target),
        _ => ConversionResult::passthrough(text),
    }
}

/// 겹자음을 촉음 + 자음으로 바꿈 (kitte -> kiっte, matcha -> maっcha)
fn mark_geminates(text: &str) -> Vec<char> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::with_capacity(chars.len() + 1);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if i + 1 < chars.len() && chars[i + 1] == c && is_doubling_consonant(c) {
            out.push(SMALL_TSU);
            out.push(c);
            i += 2;
        } else if c == 't' && chars.get(i + 1) == Some(&'c') && chars.get(i + 2) == Some(&'h') {
            // 헵번식 tch
            out.push(SMALL_TSU);
            i += 1;
        } else {
            out.push(c);
            i += 1;
        }
    }

    out
}

/// 최장 일치 테이블 스캔
fn transliterate(prepared: &str) -> (String, Vec<String>) {
    let chars = mark_geminates(prepared);
    let mut output = String::with_capacity(prepared.len() * 3);
    let mut errors = Vec::new();
    let mut pos = 0;

    'scan: while pos < chars.len() {
        for len in (1..=MAX_ROMAJI_LEN).rev() {
            if pos + len > chars.len() {
                continue;
            }
            let chunk: String = chars[pos..pos + len].iter().collect();
            if let Some(kana) = lookup(&chunk) {
                output.push_str(kana);
                pos += len;
                continue 'scan;
            }
        }

        let c = chars[pos];
        match c {
            ' ' => output.push(' '),
            '-' => output.push(LONG_VOWEL_MARK),
            // 이미 가나인 문자 (겹자음 처리로 넣은 っ 포함)
            _ if is_kana(c) => output.push(c),
            _ => {
                output.push(c);
                errors.push(format!("Unknown character: {}", c));
            }
        }
        pos += 1;
    }

    (output, errors)
}

/// 가타카나용 전처리: jy/zy 통일, 장음 표기를 '-'로
fn prepare_katakana_romaji(text: &str) -> String {
    let normalized = text.replace("jy", "j").replace("zy", "j");
    let chars: Vec<char> = normalized.chars().collect();
    let mut out = String::with_capacity(normalized.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if let Some(vowel) = macron_base(c) {
            out.push(vowel);
            out.push('-');
            i += 1;
        } else if matches!(c, 'a' | 'i' | 'u' | 'e' | 'o') && chars.get(i + 1) == Some(&c) {
            out.push(c);
            out.push('-');
            i += 2;
        } else {
            out.push(c);
            i += 1;
        }
    }

    out
}

/// 장음 기호가 붙은 모음의 기본 모음
fn macron_base(c: char) -> Option<char> {
    match c {
        'ā' | 'â' => Some('a'),
        'ī' | 'î' => Some('i'),
        'ū' | 'û' => Some('u'),
        'ē' | 'ê' => Some('e'),
        'ō' | 'ô' => Some('o'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kana_table::entries;

    #[test]
    fn test_basic_conversion() {
        assert_eq!(romaji_to_hiragana("taberu").converted, "たべる");
        assert_eq!(romaji_to_hiragana("konnichiwa").converted, "こんにちわ");
        assert_eq!(romaji_to_hiragana("sushi").converted, "すし");
        assert!(romaji_to_hiragana("taberu").is_valid);
    }

    #[test]
    fn test_case_and_whitespace() {
        let result = romaji_to_hiragana("  TaBeRu ");
        assert_eq!(result.converted, "たべる");
        assert_eq!(result.original, "  TaBeRu ");
    }

    #[test]
    fn test_longest_match() {
        // sha는 한 음절 (s + ha 아님)
        assert_eq!(romaji_to_hiragana("sha").converted, "しゃ");
        assert_eq!(romaji_to_hiragana("kyou").converted, "きょう");
        assert_eq!(romaji_to_hiragana("shinbun").converted, "しんぶん");
        assert_eq!(romaji_to_hiragana("kin'en").converted, "きんえん");
    }

    #[test]
    fn test_every_table_entry_roundtrips() {
        for (romaji, kana) in entries() {
            let result = romaji_to_hiragana(romaji);
            assert_eq!(result.converted, kana, "'{}' 변환 결과가 다름", romaji);
            assert!(result.is_valid);
            assert_eq!(detect_script(kana), ScriptType::Hiragana);
        }
    }

    #[test]
    fn test_geminates() {
        assert_eq!(romaji_to_hiragana("kitte").converted, "きって");
        assert_eq!(romaji_to_hiragana("maccha").converted, "まっちゃ");
        assert_eq!(romaji_to_hiragana("zasshi").converted, "ざっし");
        assert!(romaji_to_hiragana("kitte").is_valid);

        let doubling = [
            't', 'p', 'k', 's', 'm', 'r', 'g', 'd', 'b', 'j', 'z', 'f', 'h', 'y', 'w', 'v', 'l',
            'c', 'x',
        ];
        for c in doubling {
            let input = format!("a{}{}a", c, c);
            let converted = romaji_to_hiragana(&input).converted;
            assert!(
                converted.starts_with("あっ"),
                "'{}' -> '{}'에 촉음이 없음",
                input,
                converted
            );
        }
    }

    #[test]
    fn test_hepburn_tch() {
        let result = romaji_to_hiragana("matcha");
        assert_eq!(result.converted, "まっちゃ");
        assert!(result.is_valid);
        assert_eq!(romaji_to_hiragana("kotchi").converted, "こっち");
        assert_eq!(romaji_to_katakana("kyatchi").converted, "キャッチ");
    }

    #[test]
    fn test_unknown_characters() {
        let result = romaji_to_hiragana("ka!q");
        assert_eq!(result.converted, "か!q");
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec!["Unknown character: !".to_string(), "Unknown character: q".to_string()]
        );
    }

    #[test]
    fn test_space_and_hyphen() {
        let result = romaji_to_hiragana("ko-hi- nomu");
        assert_eq!(result.converted, "こーひー のむ");
        assert!(result.is_valid);
    }

    #[test]
    fn test_empty_string() {
        let result = romaji_to_hiragana("");
        assert_eq!(result.converted, "");
        assert!(result.is_valid);
    }

    #[test]
    fn test_katakana() {
        assert_eq!(romaji_to_katakana("juusu").converted, "ジュース");
        assert_eq!(romaji_to_katakana("jūsu").converted, "ジュース");
        assert_eq!(romaji_to_katakana("koohii").converted, "コーヒー");
        assert_eq!(romaji_to_katakana("ko-hi-").converted, "コーヒー");
        assert_eq!(romaji_to_katakana("konpyuutaa").converted, "コンピューター");
        assert_eq!(romaji_to_katakana("jyuusu").converted, "ジュース");
        assert_eq!(romaji_to_katakana("beddo").converted, "ベッド");
    }

    #[test]
    fn test_katakana_matches_hiragana_mapping() {
        // 장모음이 없는 입력은 히라가나 결과를 1:1 매핑한 것과 같아야 함
        for romaji in ["taberu", "sushi", "kyouto", "tenpura", "kitte", "ramen", "shashin"] {
            let hiragana = romaji_to_hiragana(romaji).converted;
            assert_eq!(
                romaji_to_katakana(romaji).converted,
                hiragana_to_katakana(&hiragana),
                "'{}'",
                romaji
            );
        }
    }

    #[test]
    fn test_long_vowels_differ_from_hiragana_mapping() {
        // 가타카나 변환은 장모음을 ー로 줄이므로 히라가나를 1:1 매핑한 결과와 다름
        let hiragana = romaji_to_hiragana("okaasan").converted;
        assert_eq!(hiragana, "おかあさん");
        assert_eq!(hiragana_to_katakana(&hiragana), "オカアサン");
        assert_eq!(romaji_to_katakana("okaasan").converted, "オカーサン");

        assert_eq!(hiragana_to_katakana(&romaji_to_hiragana("ookii").converted), "オオキイ");
        assert_eq!(romaji_to_katakana("ookii").converted, "オーキー");
        assert_eq!(romaji_to_katakana("ōkii").converted, "オーキー");
    }

    #[test]
    fn test_mixed_input() {
        let result = convert_mixed_input("たべru", KanaScript::Hiragana);
        assert_eq!(result.converted, "たべる");
        assert!(result.is_valid);

        let result = convert_mixed_input("食beru", KanaScript::Hiragana);
        assert_eq!(result.converted, "食べる");

        let result = convert_mixed_input("コーhii", KanaScript::Katakana);
        assert_eq!(result.converted, "コーヒー");
    }

    #[test]
    fn test_mixed_input_collects_errors() {
        let result = convert_mixed_input("たqべx", KanaScript::Hiragana);
        assert_eq!(result.converted, "たqべx");
        assert_eq!(result.errors.len(), 2);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_convert_for_field() {
        let settings = UserSettings::default();

        let result = convert_input_for_field("taberu", AnswerType::Hiragana, &settings);
        assert_eq!(result.converted, "たべる");

        let result = convert_input_for_field("juusu", AnswerType::Katakana, &settings);
        assert_eq!(result.converted, "ジュース");

        let result = convert_input_for_field("たべru", AnswerType::Hiragana, &settings);
        assert_eq!(result.converted, "たべる");

        // 이미 올바른 체계
        let result = convert_input_for_field("たべる", AnswerType::Hiragana, &settings);
        assert_eq!(result.converted, result.original);
        assert!(result.is_valid);

        // 영어 칸은 변환하지 않음
        let result = convert_input_for_field("to eat", AnswerType::English, &settings);
        assert_eq!(result.converted, "to eat");
    }

    #[test]
    fn test_convert_for_romaji_field_uses_output_setting() {
        let mut settings = UserSettings::default();
        let result = convert_input_for_field("sushi", AnswerType::Romaji, &settings);
        assert_eq!(result.converted, "すし");

        settings.romaji_output_type = KanaScript::Katakana;
        let result = convert_input_for_field("sushi", AnswerType::Romaji, &settings);
        assert_eq!(result.converted, "スシ");
    }
}
