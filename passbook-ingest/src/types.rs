use serde::Serialize;

/// Field separator of the statement export. Free text is never escaped.
pub const DELIMITER: char = ',';

/// Logical fields per row after repair.
pub const FIELD_COUNT: usize = 7;

/// Canonical column positions:
/// `date, narration, valueDate, debit, credit, chequeRef, closingBalance`.
pub mod column {
    pub const DATE: usize = 0;
    pub const NARRATION: usize = 1;
    pub const VALUE_DATE: usize = 2;
    pub const DEBIT: usize = 3;
    pub const CREDIT: usize = 4;
    pub const CHEQUE_REF: usize = 5;
    pub const CLOSING_BALANCE: usize = 6;
}

/// A data line that did not become a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based line number in the source document
    pub line: usize,
    pub reason: String,
}
