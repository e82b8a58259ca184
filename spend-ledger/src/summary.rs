//! Rolling-window spending summary in the main currency, grouped by category.

use chrono::{DateTime, Utc};
use spend_core::category::find_by_id;
use spend_core::{Category, Currency, Expense, Window};
use std::collections::BTreeMap;

pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub window: Window,
    pub currency: Currency,
    pub total: f64,
    pub count: usize,
    /// Category label -> total, ordered by label
    pub by_group: BTreeMap<String, f64>,
}

/// Summarize expenses in `currency` that occurred inside `window` ending at `now`.
///
/// Expenses in other currencies are left out rather than converted.
pub fn summarize(
    expenses: &[Expense],
    categories: &[Category],
    currency: Currency,
    window: Window,
    now: DateTime<Utc>,
) -> Summary {
    let (start, end) = window.bounds(now);
    let mut summary = Summary {
        window,
        currency,
        total: 0.0,
        count: 0,
        by_group: BTreeMap::new(),
    };

    for e in expenses
        .iter()
        .filter(|e| e.currency == currency && e.occurred_at >= start && e.occurred_at <= end)
    {
        let label = e
            .category_id
            .as_deref()
            .and_then(|id| find_by_id(categories, id))
            .map(|c| c.label.clone())
            .unwrap_or_else(|| UNCATEGORIZED.to_string());

        summary.total += e.amount;
        summary.count += 1;
        *summary.by_group.entry(label).or_insert(0.0) += e.amount;
    }

    summary
}
