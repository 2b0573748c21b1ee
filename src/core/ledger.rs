//! The OT ledger: owns the entries, validates new ones, persists the whole
//! document after every mutation and answers statistics queries.
//!
//! One `Ledger` is built at startup and handed to whoever needs it; the
//! store and the clock are injected.

use crate::core::normality::{self, ShapiroWilk};
use crate::core::stats;
use crate::errors::{AppResult, StorageResult};
use crate::models::entry::{parse_amount, parse_entry_date};
use crate::models::{DateRange, LedgerDocument, OtEntry, WorkhourConfig};
use crate::store::DocumentStore;
use crate::utils::clock::Clock;
use crate::utils::date::Period;
use chrono::{Days, NaiveDate, NaiveDateTime};

/// Aggregate over one calendar window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSummary {
    pub range: DateRange,
    pub minutes: u64,
    pub count: usize,
    /// Minutes per entry, 0.0 when the window is empty.
    pub mean: f64,
}

/// Date-ordered points plus padded axis bounds, ready for plotting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    pub points: Vec<(NaiveDate, u32)>,
    pub x_min: NaiveDate,
    pub x_max: NaiveDate,
    pub y_max: u32,
}

pub struct Ledger<S: DocumentStore, C: Clock> {
    store: S,
    clock: C,
    doc: LedgerDocument,
}

impl<S: DocumentStore, C: Clock> Ledger<S, C> {
    /// An empty ledger; call [`Ledger::load`] before use.
    pub fn new(store: S, clock: C) -> Self {
        let doc = LedgerDocument::bootstrap(clock.now());
        Self { store, clock, doc }
    }

    /// `new` followed by `load`.
    pub fn open(store: S, clock: C) -> StorageResult<Self> {
        let mut ledger = Self::new(store, clock);
        ledger.load()?;
        Ok(ledger)
    }

    /// Read the persisted document, or create and persist a default one on
    /// first run.
    pub fn load(&mut self) -> StorageResult<()> {
        match self.store.load()? {
            Some(doc) => self.doc = doc,
            None => {
                self.doc = LedgerDocument::bootstrap(self.clock.now());
                self.store.save(&self.doc)?;
            }
        }
        Ok(())
    }

    pub fn save(&self) -> StorageResult<()> {
        self.store.save(&self.doc)
    }

    // ---------------------------
    // Mutations
    // ---------------------------

    /// Validate raw input and record it.
    ///
    /// Nothing changes when validation fails. If the document cannot be
    /// persisted the entry is taken back out before the error is returned.
    pub fn new_entry(
        &mut self,
        date: &str,
        amount: &str,
        reason: Option<&str>,
        by: Option<&str>,
    ) -> AppResult<OtEntry> {
        let amount = parse_amount(amount)?;
        let date = parse_entry_date(date)?;

        let entry = OtEntry::new(date, amount, reason, by);
        self.record(entry.clone())?;
        Ok(entry)
    }

    /// Append an already valid entry, bump the counter, stamp and persist.
    pub fn record(&mut self, entry: OtEntry) -> StorageResult<()> {
        let (prev_total, prev_stamp) = (self.doc.total, self.doc.last_updated);

        self.doc.entries.push(entry);
        self.doc.total = self.doc.total.saturating_add(1);
        self.doc.last_updated = self.clock.now();

        if let Err(e) = self.store.save(&self.doc) {
            self.doc.entries.pop();
            self.doc.total = prev_total;
            self.doc.last_updated = prev_stamp;
            return Err(e);
        }
        Ok(())
    }

    /// Reorder entries by date (stable for equal dates) and persist.
    /// Already sorted entries are left alone and nothing is written.
    pub fn sort_by_date(&mut self) -> StorageResult<()> {
        if self.doc.entries.is_sorted_by_key(|e| e.date) {
            return Ok(());
        }

        let before = self.doc.clone();
        self.doc.entries.sort_by_key(|e| e.date);
        self.doc.last_updated = self.clock.now();

        if let Err(e) = self.store.save(&self.doc) {
            self.doc = before;
            return Err(e);
        }
        Ok(())
    }

    pub fn set_workhour(&mut self, workhour: WorkhourConfig) -> StorageResult<()> {
        let before = (self.doc.workhour, self.doc.last_updated);

        self.doc.workhour = workhour;
        self.doc.last_updated = self.clock.now();

        if let Err(e) = self.store.save(&self.doc) {
            (self.doc.workhour, self.doc.last_updated) = before;
            return Err(e);
        }
        Ok(())
    }

    // ---------------------------
    // Accessors
    // ---------------------------

    pub fn entries(&self) -> &[OtEntry] {
        &self.doc.entries
    }

    pub fn document(&self) -> &LedgerDocument {
        &self.doc
    }

    pub fn workhour(&self) -> &WorkhourConfig {
        &self.doc.workhour
    }

    pub fn last_updated(&self) -> NaiveDateTime {
        self.doc.last_updated
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // ---------------------------
    // Statistics
    // ---------------------------

    fn amounts(&self) -> Vec<f64> {
        self.doc.entries.iter().map(|e| e.amount as f64).collect()
    }

    fn in_range<'a>(&'a self, range: &'a DateRange) -> impl Iterator<Item = &'a OtEntry> + 'a {
        self.doc.entries.iter().filter(|e| range.contains(e.date))
    }

    pub fn total_minutes(&self) -> u64 {
        self.doc.entries.iter().map(|e| e.amount as u64).sum()
    }

    /// Number of entries currently in the ledger.
    pub fn entry_count(&self) -> usize {
        self.doc.entries.len()
    }

    /// The persisted lifetime counter (`total` in the document).
    pub fn recorded_total(&self) -> u64 {
        self.doc.total
    }

    pub fn ranged_total_minutes(&self, range: &DateRange) -> u64 {
        self.in_range(range).map(|e| e.amount as u64).sum()
    }

    pub fn ranged_count(&self, range: &DateRange) -> usize {
        self.in_range(range).count()
    }

    pub fn ranged_mean(&self, range: &DateRange) -> f64 {
        per_entry(self.ranged_total_minutes(range), self.ranged_count(range))
    }

    pub fn range_summary(&self, range: DateRange) -> RangeSummary {
        let minutes = self.ranged_total_minutes(&range);
        let count = self.ranged_count(&range);
        RangeSummary {
            range,
            minutes,
            count,
            mean: per_entry(minutes, count),
        }
    }

    /// Summary of a named period relative to the ledger's clock.
    pub fn period_summary(&self, period: Period) -> RangeSummary {
        self.range_summary(period.range(self.clock.today()))
    }

    pub fn mean(&self) -> f64 {
        per_entry(self.total_minutes(), self.entry_count())
    }

    pub fn median(&self) -> f64 {
        stats::median(&self.amounts())
    }

    /// Population standard deviation (divides by the entry count).
    pub fn standard_deviation(&self) -> f64 {
        stats::population_std_dev(&self.amounts())
    }

    pub fn skewness(&self) -> Option<f64> {
        stats::skewness(&self.amounts())
    }

    /// Excess kurtosis.
    pub fn kurtosis(&self) -> Option<f64> {
        stats::excess_kurtosis(&self.amounts())
    }

    pub fn shapiro_wilk(&self) -> Option<ShapiroWilk> {
        normality::shapiro_wilk(&self.amounts())
    }

    pub fn maximum_length(&self) -> Option<u32> {
        self.doc.entries.iter().map(|e| e.amount).max()
    }

    pub fn minimum_length(&self) -> Option<u32> {
        self.doc.entries.iter().map(|e| e.amount).min()
    }

    /// Earliest date; entries are not assumed to be sorted.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.doc.entries.iter().map(|e| e.date).min()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.doc.entries.iter().map(|e| e.date).max()
    }

    /// Days from the earliest entry to today, 0 for an empty ledger.
    pub fn days_since_first_entry(&self) -> i64 {
        self.first_date()
            .map(|first| (self.clock.today() - first).num_days())
            .unwrap_or(0)
    }

    /// Entries ordered by date without touching the stored order.
    /// The x axis is padded by one day on each side, the y axis by 10 minutes.
    pub fn series(&self) -> Option<ChartSeries> {
        let mut points: Vec<(NaiveDate, u32)> =
            self.doc.entries.iter().map(|e| (e.date, e.amount)).collect();
        points.sort_by_key(|(d, _)| *d);

        let (first, _) = *points.first()?;
        let (last, _) = *points.last()?;
        let y_max = points.iter().map(|(_, m)| *m).max().unwrap_or(0);

        Some(ChartSeries {
            x_min: first.checked_sub_days(Days::new(1)).unwrap_or(first),
            x_max: last.checked_add_days(Days::new(1)).unwrap_or(last),
            y_max: y_max.saturating_add(10),
            points,
        })
    }
}

fn per_entry(minutes: u64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        minutes as f64 / count as f64
    }
}
