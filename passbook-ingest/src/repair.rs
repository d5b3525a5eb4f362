//! Row repair for statement lines whose narration contains stray delimiters.
//!
//! Input is the naive split of one line; quotes do not protect delimiters. The
//! trailing columns (`debit, credit, chequeRef, closingBalance`) are trusted to be
//! positional, so a misaligned row is rebuilt by locating the debit column from the
//! end and folding everything between the date and the value date back into the
//! narration.

use crate::fields::parse_amount;
use crate::types::{DELIMITER, FIELD_COUNT};

/// What the repair pass did to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repair {
    /// Already had the expected field count.
    Intact,
    /// An empty filler token at index 2 was dropped.
    DroppedFiller,
    /// Narration pieces `1..=last` were rejoined with the delimiter.
    MergedNarration { pieces: usize },
    /// Nothing could be done; the row keeps its original tokens.
    Unrepaired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairedRow {
    pub fields: Vec<String>,
    pub repair: Repair,
}

/// Normalize a split row toward the 7-field layout.
///
/// Rows shorter than seven fields are returned untouched; the caller rejects them.
pub fn repair_row(tokens: Vec<String>) -> RepairedRow {
    match tokens.len() {
        FIELD_COUNT => RepairedRow {
            fields: tokens,
            repair: Repair::Intact,
        },
        8 if tokens[2].is_empty() => {
            let mut fields = tokens;
            fields.remove(2);
            RepairedRow {
                fields,
                repair: Repair::DroppedFiller,
            }
        }
        n if n > 8 => merge_narration(tokens),
        _ => RepairedRow {
            fields: tokens,
            repair: Repair::Unrepaired,
        },
    }
}

/// Rightmost index in `len-4 ..= 2` whose token reads as a number.
fn find_debit_column(tokens: &[String]) -> Option<usize> {
    let upper = tokens.len().checked_sub(4)?;
    (2..=upper).rev().find(|&i| parse_amount(&tokens[i]).is_some())
}

fn merge_narration(tokens: Vec<String>) -> RepairedRow {
    let amount_start = match find_debit_column(&tokens) {
        Some(i) if i > 2 => i,
        _ => {
            return RepairedRow {
                fields: tokens,
                repair: Repair::Unrepaired,
            };
        }
    };

    let narration_end = amount_start - 2;
    let narration = tokens[1..=narration_end].join(&DELIMITER.to_string());
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    fields.push(tokens[0].clone());
    fields.push(narration);
    fields.extend_from_slice(&tokens[amount_start - 1..=amount_start + 3]);

    RepairedRow {
        fields,
        repair: Repair::MergedNarration {
            pieces: narration_end,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &str) -> Vec<String> {
        line.split(DELIMITER).map(|t| t.trim().to_string()).collect()
    }

    #[test]
    fn test_seven_fields_pass_through() {
        let row = repair_row(split("01/04/24,ABC STORE,01/04/24,1500.00,,REF1,50000.00"));
        assert_eq!(row.repair, Repair::Intact);
        assert_eq!(row.fields.len(), 7);
    }

    #[test]
    fn test_eight_fields_with_empty_filler() {
        let row = repair_row(split("01/04/24,ABC STORE,,01/04/24,1500.00,,REF1,50000.00"));
        assert_eq!(row.repair, Repair::DroppedFiller);
        assert_eq!(
            row.fields,
            split("01/04/24,ABC STORE,01/04/24,1500.00,,REF1,50000.00")
        );
    }

    #[test]
    fn test_eight_fields_without_empty_filler_is_left_alone() {
        let tokens = split("01/04/24,ABC,STORE,01/04/24,1500.00,,REF1,50000.00");
        let row = repair_row(tokens.clone());
        assert_eq!(row.repair, Repair::Unrepaired);
        assert_eq!(row.fields, tokens);
    }

    #[test]
    fn test_merges_narration_with_many_commas() {
        let row = repair_row(split(
            "02/04/24,UPI-SHOP, MAIN ROAD, BLOCK A,02/04/24,250.00,,0000412345,49750.00",
        ));
        assert_eq!(row.repair, Repair::MergedNarration { pieces: 3 });
        assert_eq!(
            row.fields,
            vec![
                "02/04/24",
                "UPI-SHOP,MAIN ROAD,BLOCK A",
                "02/04/24",
                "250.00",
                "",
                "0000412345",
                "49750.00",
            ]
        );
    }

    #[test]
    fn test_scan_stops_at_rightmost_numeric_token() {
        // debit column empty on a credit row: the scan walks back to the value date
        let row = repair_row(split("03/04/24,NEFT,ACME,LTD,03/04/24,,9000.00,REF9,58750.00"));
        assert_eq!(row.repair, Repair::MergedNarration { pieces: 2 });
        assert_eq!(row.fields[1], "NEFT,ACME");
        assert_eq!(row.fields[2], "LTD");
        assert_eq!(row.fields[3], "03/04/24");
    }

    #[test]
    fn test_no_numeric_column_is_unrepaired() {
        let tokens = split("x,a,b,c,d,e,f,g,h");
        let row = repair_row(tokens.clone());
        assert_eq!(row.repair, Repair::Unrepaired);
        assert_eq!(row.fields, tokens);
    }

    #[test]
    fn test_numeric_only_at_index_two_is_unrepaired() {
        let tokens = split("01/04/24,a,5,c,d,e,f,g,h");
        let row = repair_row(tokens.clone());
        assert_eq!(row.repair, Repair::Unrepaired);
    }

    #[test]
    fn test_short_rows_untouched() {
        let row = repair_row(split("01/04/24,ABC,100"));
        assert_eq!(row.repair, Repair::Unrepaired);
        assert_eq!(row.fields.len(), 3);
    }
}
