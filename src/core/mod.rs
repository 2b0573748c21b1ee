pub mod calculator;
pub mod ledger;
pub mod normality;
pub mod stats;

pub use ledger::{ChartSeries, Ledger, RangeSummary};
