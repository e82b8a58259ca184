//! Persisted expense history, kept newest-first by occurrence time.

use anyhow::Result;
use chrono::{DateTime, Utc};
use spend_core::{Currency, Expense, NewExpenseInput};
use tracing::info;
use uuid::Uuid;

use crate::store::{KvStore, StoreKey};

pub struct ExpenseBook {
    store: KvStore,
    expenses: Vec<Expense>,
}

impl ExpenseBook {
    pub fn open(store: KvStore) -> Self {
        let mut expenses: Vec<Expense> = store.load(StoreKey::Expenses, Vec::new());
        sort_newest_first(&mut expenses);
        Self { store, expenses }
    }

    /// Create, store and return a new expense.
    pub fn add(
        &mut self,
        input: NewExpenseInput,
        main_currency: Currency,
        now: DateTime<Utc>,
    ) -> Result<Expense> {
        let expense = Expense::from_input(Uuid::new_v4().to_string(), input, main_currency, now);
        self.expenses.insert(0, expense.clone());
        sort_newest_first(&mut self.expenses);
        self.store.save(StoreKey::Expenses, &self.expenses)?;

        info!(
            id = %expense.id,
            amount = expense.amount,
            currency = %expense.currency,
            "expense saved"
        );
        Ok(expense)
    }

    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses that occurred within `[start, end]`.
    pub fn in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.occurred_at >= start && e.occurred_at <= end)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

// Stable, so same-time entries keep insertion order (newest add first).
fn sort_newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
}
