use serde::{Deserialize, Serialize};
use spend_core::{CategoryKey, Currency};

/// Structured draft recovered from one utterance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSpend {
    /// Trimmed input; the untouched input when it was blank
    pub raw_text: String,
    /// Strictly positive and finite when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Present for every non-blank input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_guess: Option<CategoryKey>,
    /// 0.0 - 1.0
    pub confidence: f64,
}

impl ParsedSpend {
    /// Zero-confidence result for blank input
    pub fn empty(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            ..Self::default()
        }
    }

    /// True when there is enough to offer the draft for review
    pub fn has_anchor(&self) -> bool {
        self.amount.is_some() || self.merchant.is_some()
    }
}
