use once_cell::sync::Lazy;
use regex::Regex;

// Letters of every case and modifier form, non-spacing marks, decimal digits,
// connector punctuation, plus apostrophe and hyphen.
static WORD_CHAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{Lu}\p{Ll}\p{Lt}\p{Lm}\p{Lo}\p{Mn}\p{Nd}\p{Pc}'\-]$")
        .expect("word character class is a valid pattern")
});

/// Returns true if `ch` belongs inside a word; everything else separates words.
///
/// Apostrophes and hyphens count as word characters so that `john's` and
/// `high-school` stay single words.
pub fn is_word_char(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '\'');
    }
    let mut buf = [0u8; 4];
    WORD_CHAR.is_match(ch.encode_utf8(&mut buf))
}

/// Appends the lower-case form of `ch` to `word`, one character for one.
///
/// Only the leading character of the full Unicode lowercase mapping is kept,
/// which is the simple case mapping: `İ` becomes `i` rather than `i` plus a
/// combining dot.
pub fn push_lowercase(word: &mut String, ch: char) {
    word.push(ch.to_lowercase().next().unwrap_or(ch));
}
