//! Draft review: the editable form between a parse and a stored expense.

use chrono::{DateTime, Utc};
use spend_core::category::find_by_key;
use spend_core::{Category, Currency, NewExpenseInput};
use spend_parse::ParsedSpend;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DraftError {
    #[error("amount is required")]
    MissingAmount,
    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(f64),
    #[error("merchant is required")]
    MissingMerchant,
    #[error("unknown category key: {0}")]
    UnknownCategory(String),
}

/// Editable draft prefilled from a parse
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub amount: Option<f64>,
    /// `None` means "use the main currency"
    pub currency: Option<Currency>,
    pub merchant: String,
    pub note: String,
    pub category_key: Option<String>,
    pub occurred_at: Option<DateTime<Utc>>,
    /// Parser confidence, for display only
    pub confidence: f64,
}

impl Draft {
    pub fn from_parsed(parsed: &ParsedSpend) -> Self {
        Self {
            amount: parsed.amount,
            currency: Some(parsed.currency.unwrap_or_default()),
            merchant: parsed.merchant.clone().unwrap_or_default(),
            note: parsed.note.clone().unwrap_or_default(),
            category_key: parsed.group_guess.map(|k| k.as_str().to_string()),
            occurred_at: None,
            confidence: parsed.confidence,
        }
    }

    /// A draft worth reviewing: the parse found at least an amount or a merchant.
    pub fn offer(parsed: &ParsedSpend) -> Option<Self> {
        parsed.has_anchor().then(|| Self::from_parsed(parsed))
    }

    pub fn is_valid(&self) -> bool {
        self.check_amount().is_ok() && !self.merchant.trim().is_empty()
    }

    fn check_amount(&self) -> Result<f64, DraftError> {
        match self.amount {
            None => Err(DraftError::MissingAmount),
            Some(a) if a.is_finite() && a > 0.0 => Ok(a),
            Some(a) => Err(DraftError::InvalidAmount(a)),
        }
    }

    /// Validate and turn the draft into input for a stored expense.
    pub fn confirm(&self, categories: &[Category]) -> Result<NewExpenseInput, DraftError> {
        let amount = self.check_amount()?;

        let merchant = self.merchant.trim();
        if merchant.is_empty() {
            return Err(DraftError::MissingMerchant);
        }

        let note = Some(self.note.trim()).filter(|n| !n.is_empty());

        let category_id = match self.category_key.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(key) => Some(
                find_by_key(categories, key)
                    .ok_or_else(|| DraftError::UnknownCategory(key.to_string()))?
                    .id
                    .clone(),
            ),
        };

        Ok(NewExpenseInput {
            amount,
            currency: self.currency,
            merchant: merchant.to_string(),
            note: note.map(str::to_string),
            category_id,
            occurred_at: self.occurred_at,
        })
    }
}
