//! Merchant extraction.
//!
//! Phrasing is usually "<merchant> <amount> <currency> ...", so the words
//! right before the amount win. Without an amount anchor, fall back to the
//! first meaningful words of the utterance.

/// Words taken before the amount, and words scanned in the fallback.
const MERCHANT_WORDS: usize = 3;

pub fn extract_merchant(text: &str, amount_word_index: Option<usize>) -> Option<String> {
    let words: Vec<&str> = text.split_whitespace().collect();

    if let Some(idx) = amount_word_index.filter(|i| *i > 0) {
        let start = idx.saturating_sub(MERCHANT_WORDS);
        let candidate = words[start..idx.min(words.len())].join(" ");
        if candidate.chars().count() > 1 {
            return Some(candidate);
        }
    }

    let meaningful: Vec<&str> = words
        .iter()
        .take(MERCHANT_WORDS)
        .filter(|w| w.chars().count() > 2 && !is_numeric(w))
        .copied()
        .collect();

    (!meaningful.is_empty()).then(|| meaningful.join(" "))
}

fn is_numeric(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_digit())
}
