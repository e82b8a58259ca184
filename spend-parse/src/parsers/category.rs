//! Keyword category guess.
//!
//! Substring match against fixed keyword lists, checked in table order:
//! the first list with any hit wins ("pizza and a movie" is food).

use spend_core::CategoryKey;

const FOOD_KEYWORDS: &[&str] = &[
    "food", "restaurant", "cafe", "coffee", "lunch", "dinner", "breakfast",
    "bbq", "burger", "pizza", "pasta", "sushi", "thai", "chinese", "indian",
    "meal", "eat", "dining", "takeout", "delivery", "grocery", "supermarket",
    "market", "ribs", "steak", "chicken", "fish", "vegetable", "fruit",
];

const FUN_KEYWORDS: &[&str] = &[
    "fun", "entertainment", "movie", "cinema", "theater", "concert", "show",
    "game", "gaming", "arcade", "bowling", "karaoke", "bar", "pub", "club",
    "drink", "beer", "wine", "cocktail", "party", "event", "festival",
    "amusement", "park", "zoo", "museum", "gallery", "sport", "gym", "fitness",
];

const BILLS_KEYWORDS: &[&str] = &[
    "bill", "bills", "utility", "electric", "electricity", "water", "gas",
    "internet", "wifi", "phone", "mobile", "rent", "mortgage", "insurance",
    "tax", "subscription", "netflix", "spotify", "youtube", "premium",
    "service", "maintenance", "repair", "fuel", "petrol", "diesel",
];

/// Priority-ordered keyword table.
pub const CATEGORY_RULES: [(CategoryKey, &[&str]); 3] = [
    (CategoryKey::Food, FOOD_KEYWORDS),
    (CategoryKey::Fun, FUN_KEYWORDS),
    (CategoryKey::Bills, BILLS_KEYWORDS),
];

pub fn guess_category(text: &str) -> Option<CategoryKey> {
    let lower = text.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(key, _)| *key)
}
