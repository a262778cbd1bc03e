//! 유니코드 가나/한자 범위 및 히라가나↔가타카나 변환 유틸리티

/// 히라가나 블록 (U+3040 ~ U+309F)
const HIRAGANA_BLOCK: std::ops::RangeInclusive<u32> = 0x3040..=0x309F;
/// 가타카나 블록 (U+30A0 ~ U+30FF)
const KATAKANA_BLOCK: std::ops::RangeInclusive<u32> = 0x30A0..=0x30FF;
/// CJK 통합 한자 (U+4E00 ~ U+9FAF)
const KANJI_BLOCK: std::ops::RangeInclusive<u32> = 0x4E00..=0x9FAF;

/// 1:1 대응되는 히라가나 구간 (ぁ ~ ゖ)
const HIRAGANA_MAPPED: std::ops::RangeInclusive<u32> = 0x3041..=0x3096;
/// 1:1 대응되는 가타카나 구간 (ァ ~ ヶ)
const KATAKANA_MAPPED: std::ops::RangeInclusive<u32> = 0x30A1..=0x30F6;
/// 히라가나와 가타카나 블록 간 오프셋
const KANA_OFFSET: u32 = 0x60;

/// 장음 부호 (ー)
pub const LONG_VOWEL_MARK: char = 'ー';
/// 촉음 (っ)
pub const SMALL_TSU: char = 'っ';

pub fn is_hiragana(c: char) -> bool {
    HIRAGANA_BLOCK.contains(&(c as u32))
}

pub fn is_katakana(c: char) -> bool {
    KATAKANA_BLOCK.contains(&(c as u32))
}

pub fn is_kanji(c: char) -> bool {
    KANJI_BLOCK.contains(&(c as u32))
}

/// 히라가나 또는 가타카나 (장음 부호 포함)
pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// 로마자로 취급하는 문자 (ASCII 영문자)
pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// 히라가나 한 글자를 가타카나로 변환
/// 대응이 없는 문자(장음 부호, 구두점 등)는 None
pub fn hiragana_to_katakana_char(c: char) -> Option<char> {
    let cp = c as u32;
    match c {
        'ゝ' => Some('ヽ'),
        'ゞ' => Some('ヾ'),
        _ if HIRAGANA_MAPPED.contains(&cp) => char::from_u32(cp + KANA_OFFSET),
        _ => None,
    }
}

/// 가타카나 한 글자를 히라가나로 변환
pub fn katakana_to_hiragana_char(c: char) -> Option<char> {
    let cp = c as u32;
    match c {
        'ヽ' => Some('ゝ'),
        'ヾ' => Some('ゞ'),
        _ if KATAKANA_MAPPED.contains(&cp) => char::from_u32(cp - KANA_OFFSET),
        _ => None,
    }
}

/// 문자열 전체를 가타카나로 (대응 없는 문자는 그대로)
pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| hiragana_to_katakana_char(c).unwrap_or(c))
        .collect()
}

/// 문자열 전체를 히라가나로 (대응 없는 문자는 그대로)
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| katakana_to_hiragana_char(c).unwrap_or(c))
        .collect()
}
