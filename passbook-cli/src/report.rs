//! Plain-text and JSON rendering of ledger aggregates.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use passbook_analysis::{CategoryFilter, CategoryRollup, MerchantRollup, PeriodBucket, Summary};
use passbook_core::Transaction;
use serde::Serialize;
use std::io::Write;

/// Narrations in transaction lists are cut to this many characters.
const NARRATION_WIDTH: usize = 50;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{s}");
    Ok(())
}

pub fn money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// `-` for money out, `+` for money in, followed by the absolute net amount.
pub fn signed_money(txn: &Transaction) -> String {
    let sign = if txn.is_debit() { '-' } else { '+' };
    format!("{sign}{}", money(txn.signed_amount().abs()))
}

pub fn truncate_narration(narration: &str) -> String {
    if narration.chars().count() <= NARRATION_WIDTH {
        return narration.to_string();
    }
    let cut: String = narration.chars().take(NARRATION_WIDTH).collect();
    format!("{cut}...")
}

#[derive(Serialize)]
pub struct SummaryReport<'a> {
    pub summary: &'a Summary,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub categories: &'a [CategoryFilter],
    pub skipped_rows: usize,
}

pub fn print_summary(report: &SummaryReport<'_>) {
    let s = report.summary;
    if let Some((start, end)) = report.date_range {
        println!("Statement range: {} to {}", start, end);
    }
    println!("Total spending:  {}", money(s.total_spending));
    println!("Total income:    {}", money(s.total_income));
    println!("Net flow:        {}", money(s.net_flow));
    println!("Transactions:    {}", s.transaction_count);
    println!("Avg spend/txn:   {}", money(s.avg_spend_per_transaction));
    if report.skipped_rows > 0 {
        println!("Skipped rows:    {}", report.skipped_rows);
    }
    let labels: Vec<String> = report.categories.iter().map(|c| c.to_string()).collect();
    println!("\nCategories: {}", labels.join(", "));
}

pub fn print_periods(buckets: &[PeriodBucket]) {
    for b in buckets {
        println!(
            "{:<16} spending={:>12} income={:>12} count={}",
            b.label,
            money(b.spending),
            money(b.income),
            b.transactions.len()
        );
    }
}

pub fn print_categories(rollups: &[CategoryRollup]) {
    for r in rollups {
        println!(
            "{:<22} {:>12} {:>5.1}% count={}",
            r.category,
            money(r.amount),
            r.percentage,
            r.transactions.len()
        );
    }
}

pub fn print_merchants(rollups: &[MerchantRollup]) {
    for (i, m) in rollups.iter().enumerate() {
        println!("{}. {:<30} {:>12} count={}", i + 1, m.name, money(m.amount), m.count);
    }
}

pub fn print_transactions(txns: &[Transaction]) {
    for t in txns {
        println!(
            "{}  {:<53} {:<22} {:>13}",
            t.date.format("%d/%m/%Y"),
            truncate_narration(&t.narration),
            t.category,
            signed_money(t)
        );
    }
}

#[derive(Serialize)]
struct ExportRow<'a> {
    date: NaiveDate,
    narration: &'a str,
    debit: f64,
    credit: f64,
    net: f64,
    closing_balance: f64,
    category: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Write the view as CSV with a header row.
pub fn write_csv<W: Write>(txns: &[Transaction], out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for t in txns {
        wtr.serialize(ExportRow {
            date: t.date,
            narration: &t.narration,
            debit: t.debit_amount,
            credit: t.credit_amount,
            net: t.net_amount,
            closing_balance: t.closing_balance,
            category: t.category.label(),
            kind: t.kind.as_str(),
        })
        .context("write csv row")?;
    }
    wtr.flush().context("flush csv")?;
    Ok(())
}
