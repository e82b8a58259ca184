//! spend-ledger: everything around the parser: key/value storage, draft
//! review, expense history, summaries, debug feedback and quick-add sessions

pub mod debug_log;
pub mod expenses;
pub mod quick_add;
pub mod review;
pub mod settings;
pub mod store;
pub mod summary;

pub use debug_log::{DebugEntry, DebugLog};
pub use expenses::ExpenseBook;
pub use quick_add::QuickAdd;
pub use review::{Draft, DraftError};
pub use store::{KvStore, StoreKey};
pub use summary::{summarize, Summary};
