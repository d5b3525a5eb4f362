//! passbook-core: transaction types, categorization rules, and statement dates

pub mod categorizer;
pub mod date;
pub mod error;
pub mod transaction;

pub use categorizer::{categorize, Rule, RULES};
pub use date::{parse_statement_date, within};
pub use error::{Result, StatementError};
pub use transaction::{Category, Transaction, TxnKind};
