//! Headline totals and the income / recent transaction lists.

use passbook_core::Transaction;
use serde::Serialize;

/// Number of rows shown by [`recent`] when the host does not say otherwise.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total_spending: f64,
    pub total_income: f64,
    pub net_flow: f64,
    pub transaction_count: usize,
    pub avg_spend_per_transaction: f64,
}

pub fn summarize(view: &[Transaction]) -> Summary {
    let total_spending: f64 = view.iter().map(|t| t.debit_amount).sum();
    let total_income: f64 = view.iter().map(|t| t.credit_amount).sum();
    let transaction_count = view.len();
    let avg_spend_per_transaction = if transaction_count == 0 {
        0.0
    } else {
        total_spending / transaction_count as f64
    };

    Summary {
        total_spending,
        total_income,
        net_flow: total_income - total_spending,
        transaction_count,
        avg_spend_per_transaction,
    }
}

/// Credits only, largest first.
pub fn income_list(view: &[Transaction]) -> Vec<Transaction> {
    let mut income: Vec<Transaction> = view.iter().filter(|t| t.is_credit()).cloned().collect();
    income.sort_by(|a, b| b.credit_amount.total_cmp(&a.credit_amount));
    income
}

/// The first `limit` rows of the view, in ledger order.
pub fn recent(view: &[Transaction], limit: usize) -> &[Transaction] {
    &view[..limit.min(view.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use passbook_core::Category;

    fn txn(day: u32, debit: f64, credit: f64) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        Transaction::new(date, "ENTRY", debit, credit, 0.0, Category::Others)
    }

    #[test]
    fn test_summary_totals() {
        let view = vec![txn(1, 100.0, 0.0), txn(2, 0.0, 1000.0), txn(3, 50.0, 0.0)];
        let s = summarize(&view);
        assert_eq!(s.total_spending, 150.0);
        assert_eq!(s.total_income, 1000.0);
        assert_eq!(s.net_flow, 850.0);
        assert_eq!(s.transaction_count, 3);
        assert_eq!(s.avg_spend_per_transaction, 50.0);
    }

    #[test]
    fn test_empty_summary_is_zeroed() {
        assert_eq!(summarize(&[]), Summary::default());
    }

    #[test]
    fn test_income_list_sorted_descending() {
        let view = vec![txn(1, 0.0, 200.0), txn(2, 30.0, 0.0), txn(3, 0.0, 900.0)];
        let income = income_list(&view);
        assert_eq!(income.len(), 2);
        assert_eq!(income[0].credit_amount, 900.0);
        assert_eq!(income[1].credit_amount, 200.0);
    }

    #[test]
    fn test_recent_caps_at_view_length() {
        let view = vec![txn(1, 1.0, 0.0), txn(2, 2.0, 0.0)];
        assert_eq!(recent(&view, DEFAULT_RECENT_LIMIT).len(), 2);
        assert_eq!(recent(&view, 1)[0].debit_amount, 1.0);
        assert!(recent(&[], 5).is_empty());
    }
}
