//! spend-parse: heuristic free-text spend parser.
//!
//! Turns an utterance like "bbq hogfather 1200 baht ribs with Dasha" into a
//! [`ParsedSpend`] draft. Pure: no I/O, no settings, no shared mutable state.

pub mod parsers;
pub mod types;

use tracing::debug;

use parsers::amount::{amount_word_index, extract_amount};
use parsers::category::guess_category;
use parsers::confidence;
use parsers::currency::extract_currency;
use parsers::merchant::extract_merchant;
use parsers::note::extract_note;

pub use types::ParsedSpend;

/// Parse one utterance. Blank input yields a zero-confidence result.
pub fn parse_spend(text: &str) -> ParsedSpend {
    let normalized = text.trim();
    if normalized.is_empty() {
        return ParsedSpend::empty(text);
    }

    let amount = extract_amount(normalized);
    let amount_idx = amount.and_then(|a| amount_word_index(normalized, a));

    let currency = extract_currency(normalized);
    let merchant = extract_merchant(normalized, amount_idx);
    let note = extract_note(normalized, amount, merchant.as_deref());
    let group_guess = guess_category(normalized);

    let mut parsed = ParsedSpend {
        raw_text: normalized.to_string(),
        amount,
        currency: Some(currency),
        merchant,
        note,
        group_guess,
        confidence: 0.0,
    };
    parsed.confidence = confidence::score(&parsed);

    debug!(
        amount = ?parsed.amount,
        currency = %currency,
        merchant = ?parsed.merchant,
        group = ?parsed.group_guess,
        confidence = parsed.confidence,
        "parsed spend"
    );

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use spend_core::{CategoryKey, Currency};

    #[test]
    fn test_full_utterance() {
        let p = parse_spend("bbq hogfather 1200 baht ribs with Dasha");
        assert_eq!(p.raw_text, "bbq hogfather 1200 baht ribs with Dasha");
        assert_eq!(p.amount, Some(1200.0));
        assert_eq!(p.currency, Some(Currency::Thb));
        assert_eq!(p.merchant.as_deref(), Some("bbq hogfather"));
        assert_eq!(p.note.as_deref(), Some("ribs with Dasha"));
        assert_eq!(p.group_guess, Some(CategoryKey::Food));
        assert!(p.confidence >= 0.8);
    }

    #[test]
    fn test_euro_subscription() {
        let p = parse_spend("50 eur netflix subscription");
        assert_eq!(p.amount, Some(50.0));
        assert_eq!(p.currency, Some(Currency::Eur));
        assert_eq!(p.group_guess, Some(CategoryKey::Bills));
        assert_eq!(p.note.as_deref(), Some("subscription"));
    }

    #[test]
    fn test_single_word() {
        let p = parse_spend("coffee");
        assert_eq!(p.amount, None);
        assert_eq!(p.currency, Some(Currency::Thb));
        assert_eq!(p.merchant.as_deref(), Some("coffee"));
        assert_eq!(p.note, None);
        assert_eq!(p.group_guess, Some(CategoryKey::Food));
        assert!((p.confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_bare_number() {
        let p = parse_spend("1200");
        assert_eq!(p.amount, Some(1200.0));
        assert_eq!(p.currency, Some(Currency::Thb));
        assert_eq!(p.merchant, None);
        assert_eq!(p.note, None);
        assert_eq!(p.group_guess, None);
        assert!((p.confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(parse_spend(""), ParsedSpend::empty(""));
        let p = parse_spend("   ");
        assert_eq!(p.raw_text, "   ");
        assert_eq!(p.confidence, 0.0);
        assert!(p.amount.is_none() && p.currency.is_none() && p.merchant.is_none());
        assert!(p.note.is_none() && p.group_guess.is_none());
    }

    #[test]
    fn test_input_is_trimmed() {
        let p = parse_spend("  rent 15000 baht \n");
        assert_eq!(p.raw_text, "rent 15000 baht");
        assert_eq!(p.merchant.as_deref(), Some("rent"));
    }

    #[test]
    fn test_tagged_amount_preferred() {
        let p = parse_spend("table 5 lunch 1200 baht");
        assert_eq!(p.amount, Some(1200.0));
        assert_eq!(p.merchant.as_deref(), Some("table 5 lunch"));
    }

    #[test]
    fn test_tab_inside_amount() {
        let p = parse_spend("taxi 1\t200 baht");
        assert_eq!(p.amount, Some(1200.0));
        assert_eq!(p.merchant.as_deref(), Some("taxi"));
    }

    #[test]
    fn test_category_priority() {
        assert_eq!(parse_spend("pizza and movie 400").group_guess, Some(CategoryKey::Food));
    }

    #[test]
    fn test_idempotent() {
        for s in ["bbq hogfather 1200 baht ribs with Dasha", "eur 9,99", "???", "0", "1 2 3"] {
            assert_eq!(parse_spend(s), parse_spend(s));
        }
    }

    #[test]
    fn test_pathological_input_never_panics() {
        let inputs = [
            "0 baht",
            "baht baht baht",
            "((( [[[ +++ ***",
            "999999999999999999999999999999999999999999999999 thb",
            "١٢٣ baht",
            "ข้าวมันไก่ 60 บาท",
            "\u{0}\t\u{7f}",
        ];
        for s in inputs {
            let p = parse_spend(s);
            assert!((0.0..=1.0).contains(&p.confidence), "{s}: {}", p.confidence);
            if let Some(a) = p.amount {
                assert!(a > 0.0 && a.is_finite(), "{s}: {a}");
            }
            assert!(p.currency.is_some(), "{s}: currency missing");
            if let Some(n) = &p.note {
                assert!(!n.trim().is_empty());
            }
        }
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(parse_spend("coffee")).unwrap();
        assert_eq!(json["rawText"], "coffee");
        assert_eq!(json["groupGuess"], "food");
        assert_eq!(json["currency"], "THB");
        assert!(json.get("amount").is_none());
    }
}
