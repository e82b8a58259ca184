//! Note extraction: whatever is left once amount, currency words and merchant
//! words are stripped.
//!
//! Merchant words are removed everywhere they occur, not only inside the
//! merchant span, so "market 40 baht fish market" loses both "market"s.

use tracing::debug;

use super::amount::amount_string;
use super::{re_currency_word, word_regex};

pub fn extract_note(text: &str, amount: Option<f64>, merchant: Option<&str>) -> Option<String> {
    let mut note = text.trim().to_string();

    if let Some(amount) = amount {
        note = remove_word(&note, &amount_string(amount), false);
    }

    note = re_currency_word().replace_all(&note, "").into_owned();

    if let Some(merchant) = merchant {
        for word in merchant.split_whitespace() {
            note = remove_word(&note, word, true);
        }
    }

    let note = note.split_whitespace().collect::<Vec<_>>().join(" ");
    (!note.is_empty()).then_some(note)
}

fn remove_word(text: &str, word: &str, case_insensitive: bool) -> String {
    match word_regex(word, case_insensitive) {
        Some(re) => re.replace_all(text, "").into_owned(),
        None => {
            debug!(word, "skipping note cleanup for unbuildable pattern");
            text.to_string()
        }
    }
}
