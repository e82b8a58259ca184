//! Expense record types persisted after a draft has been confirmed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported currencies. THB is the default everywhere.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Currency {
    #[default]
    #[serde(rename = "THB")]
    Thb,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Thb => "THB",
            Currency::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "thb" | "baht" | "bath" => Ok(Currency::Thb),
            "eur" | "euro" => Ok(Currency::Eur),
            other => Err(anyhow::anyhow!("unsupported currency: {other} (expected THB or EUR)")),
        }
    }
}

/// A confirmed, persisted expense
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    /// Positive magnitude in `currency`
    pub amount: f64,
    pub currency: Currency,
    pub merchant: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub occurred_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// User-confirmed values from which an [`Expense`] is created.
///
/// `currency` and `occurred_at` fall back to the main currency and the
/// creation time respectively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewExpenseInput {
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<Currency>,
    pub merchant: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub occurred_at: Option<DateTime<Utc>>,
}

impl Expense {
    /// Build an expense from confirmed input.
    pub fn from_input(
        id: impl Into<String>,
        input: NewExpenseInput,
        main_currency: Currency,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            amount: input.amount,
            currency: input.currency.unwrap_or(main_currency),
            merchant: input.merchant,
            note: input.note,
            category_id: input.category_id,
            occurred_at: input.occurred_at.unwrap_or(now),
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn input() -> NewExpenseInput {
        NewExpenseInput {
            amount: 1200.0,
            currency: None,
            merchant: "bbq hogfather".to_string(),
            note: Some("ribs with Dasha".to_string()),
            category_id: Some("cat-food".to_string()),
            occurred_at: None,
        }
    }

    #[test]
    fn test_currency_defaults_to_main() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let e = Expense::from_input("e-1", input(), Currency::Eur, now);
        assert_eq!(e.currency, Currency::Eur);
        assert_eq!(e.occurred_at, now);
        assert_eq!(e.created_at, now);
    }

    #[test]
    fn test_explicit_currency_wins() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let mut i = input();
        i.currency = Some(Currency::Thb);
        let e = Expense::from_input("e-1", i, Currency::Eur, now);
        assert_eq!(e.currency, Currency::Thb);
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("thb".parse::<Currency>().unwrap(), Currency::Thb);
        assert_eq!("Euro".parse::<Currency>().unwrap(), Currency::Eur);
        assert!("usd".parse::<Currency>().is_err());
    }

    #[test]
    fn test_expense_wire_shape() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let e = Expense::from_input("e-1", input(), Currency::Thb, now);
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["currency"], "THB");
        assert_eq!(json["categoryId"], "cat-food");
        assert!(json.get("occurredAt").is_some());
    }
}
