use serde::{Deserialize, Serialize};

use crate::category::{default_categories, Category};
use crate::expense::Currency;

/// User settings kept under the `settings` store key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub main_currency: Currency,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            main_currency: Currency::Thb,
            categories: Vec::new(),
        }
    }
}

impl Settings {
    /// Categories to resolve against: stored ones, or the built-ins when none are stored.
    pub fn effective_categories(&self) -> Vec<Category> {
        if self.categories.is_empty() {
            default_categories()
        } else {
            self.categories.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.main_currency, Currency::Thb);
        assert_eq!(s.effective_categories().len(), 3);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"mainCurrency":"EUR"}"#).unwrap();
        assert_eq!(s.main_currency, Currency::Eur);
        assert!(s.categories.is_empty());
    }
}
