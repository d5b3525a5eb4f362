//! Statement record parser: one delimited line to one `Transaction`.
//!
//! Expected export layout (header line first, then one entry per line):
//!   Date,Narration,Value Dat,Debit Amount,Credit Amount,Chq/Ref Number,Closing Balance
//!   05/01/24,UPI-ZOMATO-zomato@icici,05/01/24,450.00,,0000401234567,52340.10

use passbook_core::{Result, StatementError, Transaction, categorize, parse_statement_date};
use tracing::{debug, info};

use crate::fields::{clean_amount, clean_field};
use crate::repair::{Repair, repair_row};
use crate::types::{DELIMITER, FIELD_COUNT, SkippedRow, column};

/// Result of parsing a whole document: kept transactions plus the rows that were dropped.
#[derive(Debug, Clone, Default)]
pub struct ParsedStatement {
    pub transactions: Vec<Transaction>,
    pub skipped: Vec<SkippedRow>,
}

/// Parse one data line, reporting why it was rejected.
pub fn try_parse_line(line: &str) -> Result<Transaction> {
    let tokens: Vec<String> = line
        .split(DELIMITER)
        .map(|t| t.trim().to_string())
        .collect();

    let row = repair_row(tokens);
    match row.repair {
        Repair::DroppedFiller | Repair::MergedNarration { .. } => {
            debug!(repair = ?row.repair, "repaired statement row");
        }
        Repair::Intact | Repair::Unrepaired => {}
    }

    let fields = row.fields;
    if fields.len() < FIELD_COUNT {
        return Err(StatementError::TooFewFields(fields.len()));
    }

    let date_raw = clean_field(&fields[column::DATE]);
    let narration = clean_field(&fields[column::NARRATION]);
    let debit_amount = clean_amount(&clean_field(&fields[column::DEBIT]));
    let credit_amount = clean_amount(&clean_field(&fields[column::CREDIT]));
    let closing_balance = clean_amount(&clean_field(&fields[column::CLOSING_BALANCE]));

    if date_raw.is_empty() {
        return Err(StatementError::MissingDate);
    }
    if debit_amount == 0.0 && credit_amount == 0.0 {
        return Err(StatementError::NoAmount);
    }
    if debit_amount > 0.0 && credit_amount > 0.0 {
        return Err(StatementError::BothAmounts);
    }
    let date = parse_statement_date(&date_raw)?;

    let category = categorize(&narration);
    Ok(Transaction::new(
        date,
        narration,
        debit_amount,
        credit_amount,
        closing_balance,
        category,
    ))
}

/// Parse one data line; rejected rows become `None`.
pub fn parse_line(line: &str) -> Option<Transaction> {
    try_parse_line(line)
        .inspect_err(|e| debug!(reason = %e, "skipping statement row"))
        .ok()
}

/// Parse a whole export, keeping track of dropped rows.
///
/// The first line is the header. Blank lines are ignored and never reported.
pub fn parse_statement(text: &str) -> ParsedStatement {
    let mut out = ParsedStatement::default();
    let lines: Vec<&str> = text.trim().lines().collect();
    if lines.len() < 2 {
        return out;
    }

    for (idx, raw) in lines.iter().enumerate().skip(1) {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match try_parse_line(line) {
            Ok(txn) => out.transactions.push(txn),
            Err(e) => {
                debug!(line = idx + 1, reason = %e, "skipping statement row");
                out.skipped.push(SkippedRow {
                    line: idx + 1,
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        parsed = out.transactions.len(),
        skipped = out.skipped.len(),
        "parsed statement"
    );
    out
}

/// Parse a whole export into transactions in source order.
pub fn parse_document(text: &str) -> Vec<Transaction> {
    parse_statement(text).transactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use passbook_core::{Category, TxnKind};

    const HEADER: &str =
        "Date,Narration,Value Dat,Debit Amount,Credit Amount,Chq/Ref Number,Closing Balance";

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_debit_row() {
        let t = parse_line("05/01/24,UPI-ZOMATO-zomato@icici,05/01/24,450.00,,0000401234567,52340.10")
            .unwrap();
        assert_eq!(t.date, ymd(2024, 1, 5));
        assert_eq!(t.narration, "UPI-ZOMATO-zomato@icici");
        assert_eq!(t.debit_amount, 450.0);
        assert_eq!(t.credit_amount, 0.0);
        assert_eq!(t.net_amount, -450.0);
        assert_eq!(t.closing_balance, 52340.10);
        assert_eq!(t.category, Category::ZomatoFoodOrders);
        assert_eq!(t.kind, TxnKind::Debit);
    }

    #[test]
    fn test_parse_credit_row_with_quotes() {
        let t = parse_line("\"06/01/2024\",\"NEFT CR-ACME SALARY\",06/01/24,,\"85000.00\",REF,\"137340.10\"")
            .unwrap();
        assert_eq!(t.date, ymd(2024, 1, 6));
        assert_eq!(t.narration, "NEFT CR-ACME SALARY");
        assert_eq!(t.credit_amount, 85000.0);
        assert_eq!(t.kind, TxnKind::Credit);
        assert_eq!(t.category, Category::Others);
    }

    #[test]
    fn test_filler_row_matches_clean_row() {
        let clean = parse_line("01/04/24,ABC STORE,01/04/24,1500.00,,REF1,50000.00").unwrap();
        let filler = parse_line("01/04/24,ABC STORE,,01/04/24,1500.00,,REF1,50000.00").unwrap();
        assert_eq!(clean, filler);
        assert_eq!(filler.debit_amount, 1500.0);
        assert_eq!(filler.narration, "ABC STORE");
    }

    #[test]
    fn test_short_filler_row_reads_positionally() {
        // seven tokens, so no repair: the 1500 sits in the credit column
        let t = parse_line("01/04/24,ABC STORE, ,,1500.00,,50000.00").unwrap();
        assert_eq!(t.narration, "ABC STORE");
        assert_eq!(t.debit_amount, 0.0);
        assert_eq!(t.credit_amount, 1500.0);
    }

    #[test]
    fn test_narration_with_commas_is_rebuilt() {
        let t = parse_line(
            "02/04/24,POS AMAZON, RETAIL, BLR,02/04/24,2999.00,,0000412345,47001.00",
        )
        .unwrap();
        assert_eq!(t.narration, "POS AMAZON,RETAIL,BLR");
        assert_eq!(t.debit_amount, 2999.0);
        assert_eq!(t.closing_balance, 47001.0);
        assert_eq!(t.category, Category::Amazon);
    }

    #[test]
    fn test_rejections() {
        assert_eq!(
            try_parse_line("01/04/24,EMPTY,01/04/24,,,REF,100.00"),
            Err(StatementError::NoAmount)
        );
        assert_eq!(
            try_parse_line(",NO DATE,01/04/24,10.00,,REF,100.00"),
            Err(StatementError::MissingDate)
        );
        assert_eq!(
            try_parse_line("01/04/24,ABC,100"),
            Err(StatementError::TooFewFields(3))
        );
        assert_eq!(
            try_parse_line("01/04/24,BOTH,01/04/24,10.00,20.00,REF,100.00"),
            Err(StatementError::BothAmounts)
        );
        assert!(matches!(
            try_parse_line("2024-04-01,ISO DATE,01/04/24,10.00,,REF,100.00"),
            Err(StatementError::MalformedDate(_))
        ));
        assert!(matches!(
            try_parse_line("31/04/24,NO SUCH DAY,01/04/24,10.00,,REF,100.00"),
            Err(StatementError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_unparseable_amount_counts_as_zero() {
        let t = parse_line("01/04/24,FEE,01/04/24,N/A,12.00,REF,100.00").unwrap();
        assert_eq!(t.debit_amount, 0.0);
        assert_eq!(t.credit_amount, 12.0);
    }

    #[test]
    fn test_parse_document_skips_header_blank_and_bad_rows() {
        let text = format!(
            "{HEADER}\n\
             05/01/24,UPI-ZOMATO-zomato@icici,05/01/24,450.00,,R1,52340.10\n\
             \n\
             06/01/24,NOTHING HERE,06/01/24,,,R2,52340.10\r\n\
             20/01/24,BSNL BROADBAND,20/01/24,799.00,,R3,51541.10\n"
        );
        let parsed = parse_statement(&text);
        assert_eq!(parsed.transactions.len(), 2);
        assert_eq!(parsed.transactions[0].date, ymd(2024, 1, 5));
        assert_eq!(parsed.transactions[1].category, Category::BroadbandExpense);
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].line, 4);

        assert_eq!(parse_document(&text), parsed.transactions);
    }

    #[test]
    fn test_short_documents_are_empty() {
        assert!(parse_document("").is_empty());
        assert!(parse_document(HEADER).is_empty());
        assert!(parse_document("\n\n  \n").is_empty());
    }
}
