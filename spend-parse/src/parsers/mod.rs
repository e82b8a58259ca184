//! Heuristic field extractors. Each one is fail-soft: no match yields `None`.

use regex::Regex;

/// Compiled-once regex accessor.
macro_rules! re {
    ($name:ident, $pat:expr) => {
        pub(crate) fn $name() -> &'static regex::Regex {
            static R: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
            R.get_or_init(|| regex::Regex::new($pat).expect("invalid regex"))
        }
    };
}
pub(crate) use re;

pub mod amount;
pub mod category;
pub mod confidence;
pub mod currency;
pub mod merchant;
pub mod note;

/// Currency words recognised anywhere in an utterance (alternation, longest first).
pub const CURRENCY_WORDS: &str = "baht|thb|euro|eur|bath";

/// A decimal with optional thousands groups and up to two decimals. Groups are
/// separated by a comma or any whitespace (tab, NBSP).
pub const NUMBER: &str = r"(?:[0-9]{1,3}(?:[,\s][0-9]{3})+|[0-9]+)(?:\.[0-9]{1,2})?";

re!(re_currency_word, &format!(r"(?i)\b(?:{CURRENCY_WORDS})\b"));

/// Word-bounded, optionally case-insensitive literal.
pub(crate) fn word_regex(literal: &str, case_insensitive: bool) -> Option<Regex> {
    let flags = if case_insensitive { "(?i)" } else { "" };
    Regex::new(&format!(r"{flags}\b{}\b", regex::escape(literal))).ok()
}
