//! spend-core: shared types for Smart Spends (expenses, categories, settings,
//! transcript capture)

pub mod category;
pub mod expense;
pub mod settings;
pub mod time;
pub mod transcript;

pub use category::{default_categories, Category, CategoryKey};
pub use expense::{Currency, Expense, NewExpenseInput};
pub use settings::Settings;
pub use time::{parse_occurred_at, Window};
pub use transcript::{CaptureStatus, ScriptedTranscript, TranscriptEvent, TranscriptSource};
