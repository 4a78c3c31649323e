use regex::Regex;
use std::sync::LazyLock;

/// Age/gender boilerplate phrases removed from exam reasons
///
/// Order matters: the phrases are combined into a single alternation and
/// matched leftmost-first, so at each position the first listed phrase that
/// matches wins. `___` is the de-identification placeholder used by the
/// source reports.
pub const BOILERPLATE_PATTERNS: [&str; 24] = [
    "___F",
    "___M",
    "F",
    "M",
    "Male",
    "Man",
    "male",
    "man",
    "Female",
    "female",
    "woman",
    "Woman",
    "___ year old man",
    "___ year old",
    "___ year old woman",
    "___-year-old female",
    "___-year-old male",
    "___-year-old female",
    "___-year-old",
    "___",
    "A ___-year-old",
    "year old",
    "-year-old",
    "years old",
];

static BOILERPLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // The phrases contain no regex metacharacters, so a plain join suffices.
    Regex::new(&BOILERPLATE_PATTERNS.join("|")).expect("boilerplate alternation must compile")
});

/// Strips age/gender boilerplate from a free-text exam reason
///
/// A missing (null) reason maps to the empty string. No whitespace or
/// punctuation normalization is applied to the remainder.
pub fn clean_reason(reason: Option<&str>) -> String {
    match reason {
        Some(text) => BOILERPLATE_RE.replace_all(text, "").into_owned(),
        None => String::new(),
    }
}
