//! passbook-ingest: tolerant parsing of delimited bank-statement exports.

pub mod fields;
pub mod record;
pub mod repair;
pub mod types;

pub use fields::{clean_amount, clean_field, parse_amount};
pub use record::{ParsedStatement, parse_document, parse_line, parse_statement, try_parse_line};
pub use repair::{Repair, RepairedRow, repair_row};
pub use types::{DELIMITER, FIELD_COUNT, SkippedRow};
