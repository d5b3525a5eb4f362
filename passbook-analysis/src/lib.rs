//! passbook-analysis: the statement ledger, filtering, and derived aggregates.
//!
//! Every aggregate is a pure function of a filtered view; nothing is cached.

pub mod ledger;
pub mod periods;
pub mod rollups;
pub mod summary;

pub use ledger::{CategoryFilter, FilterCriteria, Ledger, filter};
pub use periods::{Granularity, PeriodBucket, group_by_period};
pub use rollups::{
    CategoryRollup, MerchantRollup, merchant_name, rollup_by_category, rollup_by_merchant,
    top_merchants,
};
pub use summary::{DEFAULT_RECENT_LIMIT, Summary, income_list, recent, summarize};
