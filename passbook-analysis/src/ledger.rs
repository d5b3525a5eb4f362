//! The in-memory ledger for one loaded statement, and filtering over it.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use passbook_core::{Category, StatementError, Transaction, within};
use passbook_ingest::{ParsedStatement, parse_statement};
use serde::{Serialize, Serializer};
use tracing::debug;

/// Category selector: a single category or the `all` sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.pad("all"),
            CategoryFilter::Only(c) => f.pad(c.label()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What the host currently wants to see. Independent of any ledger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Inclusive; `None` is unbounded
    pub date_start: Option<NaiveDate>,
    /// Inclusive; `None` is unbounded
    pub date_end: Option<NaiveDate>,
    /// Case-insensitive narration substring; empty matches everything
    pub search_term: String,
    pub category: CategoryFilter,
}

impl FilterCriteria {
    pub fn between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.date_start = start;
        self.date_end = end;
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Date range, search and category tests, all of which must pass.
    pub fn matches(&self, txn: &Transaction) -> bool {
        within(txn.date, self.date_start, self.date_end)
            && self.matches_search(&txn.narration)
            && self.category.matches(txn.category)
    }

    fn matches_search(&self, narration: &str) -> bool {
        self.search_term.is_empty()
            || narration
                .to_lowercase()
                .contains(&self.search_term.to_lowercase())
    }
}

/// Transactions passing `criteria`, in their original order.
pub fn filter(transactions: &[Transaction], criteria: &FilterCriteria) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| criteria.matches(t))
        .cloned()
        .collect()
}

/// Parsed transactions of one statement, in source-file order.
///
/// A new statement replaces the ledger wholesale; it is never edited in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Parse raw statement text into a ledger. Bad rows are dropped, never fatal.
    pub fn from_document(text: &str) -> Self {
        Self::from(parse_statement(text))
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Transaction> {
        let view = filter(&self.transactions, criteria);
        debug!(total = self.len(), kept = view.len(), "filtered ledger");
        view
    }

    /// Earliest and latest transaction dates, used as the default filter range.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.transactions.iter().map(|t| t.date).min()?;
        let max = self.transactions.iter().map(|t| t.date).max()?;
        Some((min, max))
    }

    /// `all` followed by every category present, in first-seen order.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut seen = HashSet::new();
        let mut out = vec![CategoryFilter::All];
        for t in &self.transactions {
            if seen.insert(t.category) {
                out.push(CategoryFilter::Only(t.category));
            }
        }
        out
    }
}

impl From<ParsedStatement> for Ledger {
    fn from(parsed: ParsedStatement) -> Self {
        Self::new(parsed.transactions)
    }
}
