//! Debug feedback: what the parser made of a phrase next to what the user
//! meant. Stored for offline review only; nothing reads it back into parsing.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use spend_core::{CategoryKey, Currency};
use spend_parse::ParsedSpend;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::store::{KvStore, StoreKey};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugEntry {
    pub timestamp: DateTime<Utc>,
    pub user_prompt: String,
    pub recognized_phrase: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_merchant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_category: Option<CategoryKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl DebugEntry {
    pub fn from_parse(
        user_prompt: &str,
        recognized_phrase: &str,
        parsed: Option<&ParsedSpend>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp: now,
            user_prompt: user_prompt.trim().to_string(),
            recognized_phrase: recognized_phrase.to_string(),
            parsed_amount: parsed.and_then(|p| p.amount),
            parsed_currency: parsed.and_then(|p| p.currency),
            parsed_merchant: parsed.and_then(|p| p.merchant.clone()),
            parsed_note: parsed.and_then(|p| p.note.clone()),
            parsed_category: parsed.and_then(|p| p.group_guess),
            confidence: parsed.map(|p| p.confidence),
        }
    }
}

pub struct DebugLog {
    store: KvStore,
}

impl DebugLog {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Append an entry; returns the number of entries now stored.
    pub fn record(&self, entry: DebugEntry) -> Result<usize> {
        if entry.user_prompt.trim().is_empty() {
            bail!("debug entry needs a description of what was meant");
        }
        let mut entries = self.entries();
        entries.push(entry);
        self.store.save(StoreKey::Debug, &entries)?;
        info!(count = entries.len(), "debug entry recorded");
        Ok(entries.len())
    }

    pub fn entries(&self) -> Vec<DebugEntry> {
        self.store.load(StoreKey::Debug, Vec::new())
    }

    /// Write all entries as a JSON array to `path`; returns how many were written.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let entries = self.entries();
        let json = serde_json::to_string_pretty(&entries).context("serialize debug entries")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        Ok(entries.len())
    }

    pub fn clear(&self) -> Result<()> {
        self.store.save(StoreKey::Debug, &Vec::<DebugEntry>::new())
    }
}
