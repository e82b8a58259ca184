use spend_core::Currency;

use super::re;

re!(re_euro, r"(?i)\b(?:eur|euro)\b");

/// Currency named in `text`. THB when nothing (or baht) is mentioned.
pub fn extract_currency(text: &str) -> Currency {
    if re_euro().is_match(text) {
        Currency::Eur
    } else {
        Currency::Thb
    }
}
