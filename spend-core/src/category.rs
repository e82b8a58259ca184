//! Spending categories and the keys the parser guesses

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category keys the parser can guess
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "fun")]
    Fun,
    #[serde(rename = "bills")]
    Bills,
}

impl CategoryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Food => "food",
            CategoryKey::Fun => "fun",
            CategoryKey::Bills => "bills",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-visible spending category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    /// Matches a [`CategoryKey`] for built-in categories; free-form otherwise
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        key: impl Into<String>,
        label: impl Into<String>,
        color: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            label: label.into(),
            color: color.map(str::to_string),
        }
    }
}

/// Built-in categories, one per [`CategoryKey`]
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("cat-food", CategoryKey::Food.as_str(), "Food", Some("#ff6f61")),
        Category::new("cat-fun", CategoryKey::Fun.as_str(), "Fun", Some("#50e3c2")),
        Category::new("cat-bills", CategoryKey::Bills.as_str(), "Bills", Some("#ffd166")),
    ]
}

pub fn find_by_id<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.id == id)
}

pub fn find_by_key<'a>(categories: &'a [Category], key: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.key == key)
}
