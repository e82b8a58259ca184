//! Amount extraction.
//!
//! Patterns are tried in priority order and the first one yielding a
//! positive, finite number wins:
//!   1. `<number> <currency>`   e.g. "1200 baht", "1,200thb"
//!   2. `<currency> <number>`   e.g. "eur 50"
//!   3. first standalone number anywhere

use regex::Regex;

use super::{re, CURRENCY_WORDS, NUMBER};

re!(re_number_then_currency, &format!(r"(?i)\b({NUMBER})\s*(?:{CURRENCY_WORDS})"));
re!(re_currency_then_number, &format!(r"(?i)\b(?:{CURRENCY_WORDS})\s*({NUMBER})\b"));
re!(re_standalone_number, &format!(r"\b({NUMBER})\b"));

/// Priority-ordered amount patterns. Capture group 1 holds the number.
pub const AMOUNT_PATTERNS: [(&str, fn() -> &'static Regex); 3] = [
    ("number-then-currency", re_number_then_currency),
    ("currency-then-number", re_currency_then_number),
    ("standalone-number", re_standalone_number),
];

/// First acceptable amount in `text`, if any.
pub fn extract_amount(text: &str) -> Option<f64> {
    AMOUNT_PATTERNS.iter().find_map(|(_, pattern)| {
        let caps = pattern().captures(text)?;
        parse_number(&caps[1])
    })
}

/// Strip thousands separators and accept only finite values above zero.
fn parse_number(raw: &str) -> Option<f64> {
    let digits: String = raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    let amount: f64 = digits.parse().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

/// Shortest decimal rendering of an amount ("1200", "12.5").
pub fn amount_string(amount: f64) -> String {
    format!("{amount}")
}

/// Index of the first whitespace-separated word carrying the amount.
pub fn amount_word_index(text: &str, amount: f64) -> Option<usize> {
    let needle = amount_string(amount);
    text.split_whitespace()
        .position(|word| word.replace(',', "").contains(&needle))
}
