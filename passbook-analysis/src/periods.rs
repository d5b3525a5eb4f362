//! Period bucketing of a filtered view: daily, weekly (Sunday start) or monthly.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use passbook_core::{StatementError, Transaction};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

impl Granularity {
    /// First day of the period containing `date`.
    pub fn anchor(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Daily => date,
            Granularity::Weekly => {
                date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
            }
            Granularity::Monthly => date - Days::new(u64::from(date.day0())),
        }
    }

    /// Sortable key for the period starting at `anchor`.
    pub fn period_key(&self, anchor: NaiveDate) -> String {
        match self {
            Granularity::Daily | Granularity::Weekly => anchor.format("%Y-%m-%d").to_string(),
            Granularity::Monthly => anchor.format("%Y-%m").to_string(),
        }
    }

    /// Display label: `DD/MM`, `D/M - D/M`, or `Jan 2024`.
    pub fn label(&self, anchor: NaiveDate) -> String {
        match self {
            Granularity::Daily => anchor.format("%d/%m").to_string(),
            Granularity::Weekly => {
                let end = anchor + Days::new(6);
                format!(
                    "{}/{} - {}/{}",
                    anchor.day(),
                    anchor.month(),
                    end.day(),
                    end.month()
                )
            }
            Granularity::Monthly => anchor.format("%b %Y").to_string(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Granularity::Daily),
            "weekly" | "week" => Ok(Granularity::Weekly),
            "monthly" | "month" => Ok(Granularity::Monthly),
            other => Err(StatementError::UnknownGranularity(other.to_string())),
        }
    }
}

/// Spending and income within one day, week or month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodBucket {
    pub label: String,
    pub period_key: String,
    /// First day of the period
    pub anchor: NaiveDate,
    pub spending: f64,
    pub income: f64,
    pub transactions: Vec<Transaction>,
}

impl PeriodBucket {
    fn new(granularity: Granularity, anchor: NaiveDate) -> Self {
        Self {
            label: granularity.label(anchor),
            period_key: granularity.period_key(anchor),
            anchor,
            spending: 0.0,
            income: 0.0,
            transactions: Vec::new(),
        }
    }

    fn add(&mut self, txn: &Transaction) {
        self.spending += txn.debit_amount;
        self.income += txn.credit_amount;
        self.transactions.push(txn.clone());
    }

    pub fn net(&self) -> f64 {
        self.income - self.spending
    }
}

/// Group `view` into buckets ordered by anchor date, oldest first.
pub fn group_by_period(view: &[Transaction], granularity: Granularity) -> Vec<PeriodBucket> {
    let mut buckets: BTreeMap<NaiveDate, PeriodBucket> = BTreeMap::new();
    for txn in view {
        let anchor = granularity.anchor(txn.date);
        buckets
            .entry(anchor)
            .or_insert_with(|| PeriodBucket::new(granularity, anchor))
            .add(txn);
    }
    buckets.into_values().collect()
}
