//! 로마자 -> 히라가나 매핑 테이블 (헵번식 + 훈령식 + IME 관용 입력)

use lazy_static::lazy_static;
use std::collections::HashMap;

/// 테이블 키의 최대 길이 (kya, shi, xtu ...)
pub const MAX_ROMAJI_LEN: usize = 3;

#[rustfmt::skip]
const ROMAJI_HIRAGANA: &[(&str, &str)] = &[
    // 모음
    ("a", "あ"), ("i", "い"), ("u", "う"), ("e", "え"), ("o", "お"),
    // か행 / が행
    ("ka", "か"), ("ki", "き"), ("ku", "く"), ("ke", "け"), ("ko", "こ"),
    ("ga", "が"), ("gi", "ぎ"), ("gu", "ぐ"), ("ge", "げ"), ("go", "ご"),
    // さ행 / ざ행
    ("sa", "さ"), ("shi", "し"), ("si", "し"), ("su", "す"), ("se", "せ"), ("so", "そ"),
    ("za", "ざ"), ("ji", "じ"), ("zi", "じ"), ("zu", "ず"), ("ze", "ぜ"), ("zo", "ぞ"),
    // た행 / だ행
    ("ta", "た"), ("chi", "ち"), ("ti", "ち"), ("tsu", "つ"), ("tu", "つ"), ("te", "て"), ("to", "と"),
    ("da", "だ"), ("di", "ぢ"), ("du", "づ"), ("de", "で"), ("do", "ど"),
    // な행
    ("na", "な"), ("ni", "に"), ("nu", "ぬ"), ("ne", "ね"), ("no", "の"),
    // は행 / ば행 / ぱ행
    ("ha", "は"), ("hi", "ひ"), ("fu", "ふ"), ("hu", "ふ"), ("he", "へ"), ("ho", "ほ"),
    ("ba", "ば"), ("bi", "び"), ("bu", "ぶ"), ("be", "べ"), ("bo", "ぼ"),
    ("pa", "ぱ"), ("pi", "ぴ"), ("pu", "ぷ"), ("pe", "ぺ"), ("po", "ぽ"),
    // ま행 / や행 / ら행 / わ행
    ("ma", "ま"), ("mi", "み"), ("mu", "む"), ("me", "め"), ("mo", "も"),
    ("ya", "や"), ("yu", "ゆ"), ("yo", "よ"),
    ("ra", "ら"), ("ri", "り"), ("ru", "る"), ("re", "れ"), ("ro", "ろ"),
    ("wa", "わ"), ("wo", "を"), ("wi", "うぃ"), ("we", "うぇ"),
    // ん (nn은 넣지 않음: "konnichiwa"가 こんいちわ가 되어버림)
    ("n", "ん"), ("n'", "ん"),
    // 요음
    ("kya", "きゃ"), ("kyu", "きゅ"), ("kyo", "きょ"),
    ("gya", "ぎゃ"), ("gyu", "ぎゅ"), ("gyo", "ぎょ"),
    ("sha", "しゃ"), ("shu", "しゅ"), ("sho", "しょ"), ("she", "しぇ"),
    ("sya", "しゃ"), ("syu", "しゅ"), ("syo", "しょ"),
    ("ja", "じゃ"), ("ju", "じゅ"), ("jo", "じょ"), ("je", "じぇ"),
    ("jya", "じゃ"), ("jyu", "じゅ"), ("jyo", "じょ"),
    ("zya", "じゃ"), ("zyu", "じゅ"), ("zyo", "じょ"),
    ("cha", "ちゃ"), ("chu", "ちゅ"), ("cho", "ちょ"), ("che", "ちぇ"),
    ("tya", "ちゃ"), ("tyu", "ちゅ"), ("tyo", "ちょ"),
    ("dya", "ぢゃ"), ("dyu", "ぢゅ"), ("dyo", "ぢょ"),
    ("nya", "にゃ"), ("nyu", "にゅ"), ("nyo", "にょ"),
    ("hya", "ひゃ"), ("hyu", "ひゅ"), ("hyo", "ひょ"),
    ("bya", "びゃ"), ("byu", "びゅ"), ("byo", "びょ"),
    ("pya", "ぴゃ"), ("pyu", "ぴゅ"), ("pyo", "ぴょ"),
    ("mya", "みゃ"), ("myu", "みゅ"), ("myo", "みょ"),
    ("rya", "りゃ"), ("ryu", "りゅ"), ("ryo", "りょ"),
    // 외래어 표기
    ("fa", "ふぁ"), ("fi", "ふぃ"), ("fe", "ふぇ"), ("fo", "ふぉ"),
    ("va", "ゔぁ"), ("vi", "ゔぃ"), ("vu", "ゔ"), ("ve", "ゔぇ"), ("vo", "ゔぉ"),
    ("thi", "てぃ"), ("dhi", "でぃ"), ("tsa", "つぁ"),
    // 작은 가나 (x/l 접두)
    ("xa", "ぁ"), ("xi", "ぃ"), ("xu", "ぅ"), ("xe", "ぇ"), ("xo", "ぉ"),
    ("la", "ぁ"), ("li", "ぃ"), ("lu", "ぅ"), ("le", "ぇ"), ("lo", "ぉ"),
    ("xya", "ゃ"), ("xyu", "ゅ"), ("xyo", "ょ"),
    ("lya", "ゃ"), ("lyu", "ゅ"), ("lyo", "ょ"),
    ("xtu", "っ"), ("ltu", "っ"), ("xwa", "ゎ"),
];

lazy_static! {
    static ref ROMAJI_TABLE: HashMap<&'static str, &'static str> =
        ROMAJI_HIRAGANA.iter().copied().collect();
}

/// 로마자 조각 하나를 히라가나로 조회
pub fn lookup(romaji: &str) -> Option<&'static str> {
    ROMAJI_TABLE.get(romaji).copied()
}

/// 테이블 전체 (키, 히라가나) 쌍
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    ROMAJI_HIRAGANA.iter().copied()
}

/// 겹쳐 쓰면 촉음(っ)이 되는 자음
/// n은 제외 (nn은 ん 계열로 처리)
pub fn is_doubling_consonant(c: char) -> bool {
    matches!(
        c,
        't' | 'p' | 'k' | 's' | 'm' | 'r' | 'g' | 'd' | 'b' | 'j'
            | 'z' | 'f' | 'h' | 'y' | 'w' | 'v' | 'l' | 'c' | 'x'
    )
}
