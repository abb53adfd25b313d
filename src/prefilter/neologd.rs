//! Normalization recommended for the mecab-ipadic-NEologd dictionary.
//!
//! # Pipeline
//!
//! 1. Character folding: full-width ASCII to half-width, half-width katakana
//!    (including voiced forms) to full-width, hyphen and dash variants, tilde
//!    removal, whitespace control characters to a space
//! 2. Whitespace elimination: runs of whitespace are removed unless they sit
//!    between two Latin letters or ASCII symbols, where one space is kept
//! 3. Prolonged sound mark runs (`ーーー`) shrink to a single mark

use crate::error::Result;
use crate::pipeline::PreFilter;
use crate::util::replacer::Replacer;

const PROLONGED_SOUND_MARK: char = '\u{30FC}';

const NEOLOGD_REPLACEMENTS: &[(&str, &str)] = &[
    ("０", "0"), ("１", "1"), ("２", "2"), ("３", "3"), ("４", "4"),
    ("５", "5"), ("６", "6"), ("７", "7"), ("８", "8"), ("９", "9"),
    ("Ａ", "A"), ("Ｂ", "B"), ("Ｃ", "C"), ("Ｄ", "D"), ("Ｅ", "E"),
    ("Ｆ", "F"), ("Ｇ", "G"), ("Ｈ", "H"), ("Ｉ", "I"), ("Ｊ", "J"),
    ("Ｋ", "K"), ("Ｌ", "L"), ("Ｍ", "M"), ("Ｎ", "N"), ("Ｏ", "O"),
    ("Ｐ", "P"), ("Ｑ", "Q"), ("Ｒ", "R"), ("Ｓ", "S"), ("Ｔ", "T"),
    ("Ｕ", "U"), ("Ｖ", "V"), ("Ｗ", "W"), ("Ｘ", "X"), ("Ｙ", "Y"),
    ("Ｚ", "Z"),
    ("ａ", "a"), ("ｂ", "b"), ("ｃ", "c"), ("ｄ", "d"), ("ｅ", "e"),
    ("ｆ", "f"), ("ｇ", "g"), ("ｈ", "h"), ("ｉ", "i"), ("ｊ", "j"),
    ("ｋ", "k"), ("ｌ", "l"), ("ｍ", "m"), ("ｎ", "n"), ("ｏ", "o"),
    ("ｐ", "p"), ("ｑ", "q"), ("ｒ", "r"), ("ｓ", "s"), ("ｔ", "t"),
    ("ｕ", "u"), ("ｖ", "v"), ("ｗ", "w"), ("ｘ", "x"), ("ｙ", "y"),
    ("ｚ", "z"),
    // small kana
    ("ｧ", "ァ"), ("ｨ", "ィ"), ("ｩ", "ゥ"), ("ｪ", "ェ"), ("ｫ", "ォ"),
    ("ｬ", "ャ"), ("ｭ", "ュ"), ("ｮ", "ョ"), ("ｯ", "ッ"),
    // voiced forms come before their plain kana
    ("ｱ", "ア"), ("ｲ", "イ"), ("ｳ", "ウ"), ("ｴ", "エ"), ("ｵ", "オ"),
    ("ｶﾞ", "ガ"), ("ｷﾞ", "ギ"), ("ｸﾞ", "グ"), ("ｹﾞ", "ゲ"), ("ｺﾞ", "ゴ"),
    ("ｶ", "カ"), ("ｷ", "キ"), ("ｸ", "ク"), ("ｹ", "ケ"), ("ｺ", "コ"),
    ("ｻﾞ", "ザ"), ("ｼﾞ", "ジ"), ("ｽﾞ", "ズ"), ("ｾﾞ", "ゼ"), ("ｿﾞ", "ゾ"),
    ("ｻ", "サ"), ("ｼ", "シ"), ("ｽ", "ス"), ("ｾ", "セ"), ("ｿ", "ソ"),
    ("ﾀﾞ", "ダ"), ("ﾁﾞ", "ヂ"), ("ﾂﾞ", "ヅ"), ("ﾃﾞ", "デ"), ("ﾄﾞ", "ド"),
    ("ﾀ", "タ"), ("ﾁ", "チ"), ("ﾂ", "ツ"), ("ﾃ", "テ"), ("ﾄ", "ト"),
    ("ﾅ", "ナ"), ("ﾆ", "ニ"), ("ﾇ", "ヌ"), ("ﾈ", "ネ"), ("ﾉ", "ノ"),
    ("ﾊﾞ", "バ"), ("ﾋﾞ", "ビ"), ("ﾌﾞ", "ブ"), ("ﾍﾞ", "ベ"), ("ﾎﾞ", "ボ"),
    ("ﾊﾟ", "パ"), ("ﾋﾟ", "ピ"), ("ﾌﾟ", "プ"), ("ﾍﾟ", "ペ"), ("ﾎﾟ", "ポ"),
    ("ﾊ", "ハ"), ("ﾋ", "ヒ"), ("ﾌ", "フ"), ("ﾍ", "ヘ"), ("ﾎ", "ホ"),
    ("ﾏ", "マ"), ("ﾐ", "ミ"), ("ﾑ", "ム"), ("ﾒ", "メ"), ("ﾓ", "モ"),
    ("ﾔ", "ヤ"), ("ﾕ", "ユ"), ("ﾖ", "ヨ"),
    ("ﾗ", "ラ"), ("ﾘ", "リ"), ("ﾙ", "ル"), ("ﾚ", "レ"), ("ﾛ", "ロ"),
    ("ﾜ", "ワ"), ("ｦ", "ヲ"), ("ﾝ", "ン"),
    // hyphens
    ("\u{02D7}", "-"), ("\u{058A}", "-"), ("\u{2010}", "-"), ("\u{2011}", "-"),
    ("\u{2012}", "-"), ("\u{2013}", "-"), ("\u{2043}", "-"), ("\u{207B}", "-"),
    ("\u{208B}", "-"), ("\u{2212}", "-"),
    // bars
    ("\u{2014}", "\u{30FC}"), // em dash
    ("\u{2015}", "\u{30FC}"), // horizontal bar
    ("\u{2500}", "\u{30FC}"), // box drawings light horizontal
    ("\u{2501}", "\u{30FC}"), // box drawings heavy horizontal
    ("\u{FE63}", "\u{30FC}"), // small hyphen-minus
    ("\u{FF0D}", "\u{30FC}"), // full-width hyphen-minus
    ("\u{FF70}", "\u{30FC}"), // half-width prolonged sound mark
    // tildes
    ("~", ""), ("\u{223C}", ""), ("\u{223E}", ""), ("\u{301C}", ""),
    ("\u{3030}", ""), ("\u{FF5E}", ""),
    // full-width symbols to half-width
    ("！", "!"), ("”", "\""), ("＃", "#"), ("＄", "$"), ("％", "%"),
    ("＆", "&"), ("’", "'"), ("（", "("), ("）", ")"), ("＊", "*"),
    ("＋", "+"), ("，", ","), ("．", "."), ("／", "/"),
    ("：", ":"), ("；", ";"), ("＜", "<"), ("＞", ">"), ("？", "?"),
    ("＠", "@"), ("［", "["), ("￥", "\u{00A5}"), ("］", "]"), ("＾", "^"),
    ("＿", "_"), ("｀", "`"), ("｛", "{"), ("｜", "|"), ("｝", "}"),
    ("　", " "),
    // half-width symbols to full-width
    ("｡", "。"), ("､", "、"), ("･", "・"), ("=", "＝"), ("｢", "「"), ("｣", "」"),
    ("\n", " "), ("\\n", " "), ("\t", " "), ("\\t", " "), ("\u{000B}", " "), ("\\v", " "),
];

#[derive(Clone, Debug)]
pub struct NeologdNormalizer {
    replacer: Replacer,
}

impl NeologdNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            replacer: Replacer::new(NEOLOGD_REPLACEMENTS)?,
        })
    }

    pub fn normalize(&self, text: &str) -> String {
        let folded = self.replacer.replace(text);
        let spaced = eliminate_space(&folded);
        shrink_prolonged_sound_mark(&spaced)
    }
}

impl PreFilter for NeologdNormalizer {
    fn title(&self) -> &str {
        "neologd"
    }

    fn apply(&self, text: &str) -> String {
        self.normalize(text)
    }
}

/// Latin script letters or ASCII symbols (including digits).
fn is_latin_or_symbol(c: char) -> bool {
    matches!(c,
        '\u{0021}'..='\u{0040}' |
        '\u{005B}'..='\u{0060}' |
        '\u{007B}'..='\u{007E}' |
        'A'..='Z' | 'a'..='z' |
        '\u{00AA}' | '\u{00BA}' |
        '\u{00C0}'..='\u{00D6}' |
        '\u{00D8}'..='\u{00F6}' |
        '\u{00F8}'..='\u{02B8}' |
        '\u{1E00}'..='\u{1EFF}' |
        '\u{FF21}'..='\u{FF3A}' |
        '\u{FF41}'..='\u{FF5A}'
    )
}

fn eliminate_space(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    let mut pending_space = false;

    for c in s.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            if prev.is_some_and(is_latin_or_symbol) && is_latin_or_symbol(c) {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

fn shrink_prolonged_sound_mark(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_mark = false;
    for c in s.chars() {
        let is_mark = c == PROLONGED_SOUND_MARK;
        if !(is_mark && prev_mark) {
            out.push(c);
        }
        prev_mark = is_mark;
    }
    out
}
