//! Weighted-completeness confidence.
//!
//! Scoring (max 5):
//! - amount 2
//! - currency 1
//! - merchant 1
//! - note 0.5
//! - category guess 0.5

use crate::types::ParsedSpend;

pub const AMOUNT_WEIGHT: f64 = 2.0;
pub const CURRENCY_WEIGHT: f64 = 1.0;
pub const MERCHANT_WEIGHT: f64 = 1.0;
pub const NOTE_WEIGHT: f64 = 0.5;
pub const CATEGORY_WEIGHT: f64 = 0.5;

pub fn score(parsed: &ParsedSpend) -> f64 {
    let weighted = [
        (parsed.amount.is_some(), AMOUNT_WEIGHT),
        (parsed.currency.is_some(), CURRENCY_WEIGHT),
        (parsed.merchant.is_some(), MERCHANT_WEIGHT),
        (parsed.note.is_some(), NOTE_WEIGHT),
        (parsed.group_guess.is_some(), CATEGORY_WEIGHT),
    ];
    let (got, max) = weighted
        .iter()
        .fold((0.0, 0.0), |(s, m), (present, w)| {
            (if *present { s + w } else { s }, m + w)
        });
    if max > 0.0 { (got / max).min(1.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spend_core::{CategoryKey, Currency};

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(score(&ParsedSpend::empty("")), 0.0);
    }

    #[test]
    fn test_currency_only_floor() {
        let p = ParsedSpend {
            currency: Some(Currency::Thb),
            ..ParsedSpend::default()
        };
        assert!((score(&p) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_all_fields() {
        let p = ParsedSpend {
            raw_text: "x".to_string(),
            amount: Some(1.0),
            currency: Some(Currency::Eur),
            merchant: Some("m".to_string()),
            note: Some("n".to_string()),
            group_guess: Some(CategoryKey::Fun),
            confidence: 0.0,
        };
        assert_eq!(score(&p), 1.0);
    }

    #[test]
    fn test_adding_a_field_never_lowers_score() {
        let mut p = ParsedSpend {
            currency: Some(Currency::Thb),
            ..ParsedSpend::default()
        };
        let mut last = score(&p);
        p.note = Some("n".to_string());
        assert!(score(&p) >= last);
        last = score(&p);
        p.merchant = Some("m".to_string());
        assert!(score(&p) >= last);
        last = score(&p);
        p.amount = Some(5.0);
        assert!(score(&p) >= last);
    }
}
