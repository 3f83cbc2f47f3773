//! The domain models for the finance tracker.

mod category;
mod transaction;

pub use category::{FALLBACK_CATEGORY, KNOWN_CATEGORIES, display_label};
pub use transaction::{Transaction, TransactionBuilder, TransactionId};
