use thiserror::Error;

/// Reasons a statement row or a piece of user input is rejected.
///
/// Row-level variants never abort a document: the parser logs them and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatementError {
    /// The date field is not three `/`-separated numeric parts with a 2 or 4 digit year.
    #[error("Malformed date: {0:?}")]
    MalformedDate(String),

    /// The date field is well-formed but names a day that does not exist.
    #[error("Invalid calendar date: {0:?}")]
    InvalidDate(String),

    /// Fewer than seven fields remain after row repair.
    #[error("Expected at least 7 fields, found {0}")]
    TooFewFields(usize),

    /// The date column is empty.
    #[error("Missing date")]
    MissingDate,

    /// Neither the debit nor the credit column carries a nonzero amount.
    #[error("Row carries no debit or credit amount")]
    NoAmount,

    /// Both amount columns are nonzero; a row is either a debit or a credit.
    #[error("Row carries both a debit and a credit amount")]
    BothAmounts,

    /// A category label did not match any known category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A granularity name was not one of daily, weekly, monthly.
    #[error("Unknown granularity: {0}")]
    UnknownGranularity(String),
}

/// Convenience alias used throughout the passbook crates.
pub type Result<T> = std::result::Result<T, StatementError>;
