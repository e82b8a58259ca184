use anyhow::Result;
use spend_core::{Category, Currency, Settings};
use tracing::info;

use crate::store::{KvStore, StoreKey};

pub fn load_settings(store: &KvStore) -> Settings {
    store.load(StoreKey::Settings, Settings::default())
}

pub fn set_main_currency(store: &KvStore, currency: Currency) -> Result<Settings> {
    let mut settings = load_settings(store);
    settings.main_currency = currency;
    store.save(StoreKey::Settings, &settings)?;
    info!(%currency, "main currency updated");
    Ok(settings)
}

/// Stored categories, falling back to the built-ins.
pub fn load_categories(store: &KvStore) -> Vec<Category> {
    let stored: Vec<Category> = store.load(StoreKey::Categories, Vec::new());
    if stored.is_empty() {
        load_settings(store).effective_categories()
    } else {
        stored
    }
}

pub fn save_categories(store: &KvStore, categories: &[Category]) -> Result<()> {
    if categories.is_empty() {
        store.remove(StoreKey::Categories);
        return Ok(());
    }
    store.save(StoreKey::Categories, categories)
}
