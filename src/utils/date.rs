//! Calendar arithmetic relative to a given "today".
//!
//! Every function here is pure: callers pass the current date explicitly
//! (usually `Clock::today()`), weeks start on Monday.

use crate::errors::ValidationError;
use crate::models::DateRange;
use crate::models::entry::parse_entry_date;
use chrono::{Datelike, Days, Months, NaiveDate};

/// Named relative windows used by the statistics view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::ThisWeek,
        Period::LastWeek,
        Period::ThisMonth,
        Period::LastMonth,
    ];

    pub fn range(&self, today: NaiveDate) -> DateRange {
        match self {
            Period::ThisWeek => this_week_range(today),
            Period::LastWeek => last_week_range(today),
            Period::ThisMonth => this_month_range(today),
            Period::LastMonth => last_month_range(today),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::ThisWeek => "This week",
            Period::LastWeek => "Last week",
            Period::ThisMonth => "This month",
            Period::LastMonth => "Last month",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "this-week" => Some(Period::ThisWeek),
            "last-week" => Some(Period::LastWeek),
            "this-month" => Some(Period::ThisMonth),
            "last-month" => Some(Period::LastMonth),
            _ => None,
        }
    }
}

fn monday_of(d: NaiveDate) -> NaiveDate {
    d - Days::new(d.weekday().num_days_from_monday() as u64)
}

fn first_of_month(d: NaiveDate) -> NaiveDate {
    d - Days::new(d.day0() as u64)
}

/// Last day of `d`'s month: day 28 plus four days always lands in the next
/// month, and stepping back by that date's day-of-month returns to the end
/// of the original month.
fn last_of_month(d: NaiveDate) -> NaiveDate {
    let next = first_of_month(d) + Days::new(27) + Days::new(4);
    next - Days::new(next.day() as u64)
}

pub fn this_week_range(today: NaiveDate) -> DateRange {
    let monday = monday_of(today);
    DateRange::new(monday, monday + Days::new(6))
}

pub fn last_week_range(today: NaiveDate) -> DateRange {
    this_week_range(today - Days::new(7))
}

pub fn this_month_range(today: NaiveDate) -> DateRange {
    DateRange::new(first_of_month(today), last_of_month(today))
}

pub fn last_month_range(today: NaiveDate) -> DateRange {
    let end = first_of_month(today) - Days::new(1);
    DateRange::new(first_of_month(end), end)
}

/// The last `n` days including today, most recent first.
pub fn last_n_days(today: NaiveDate, n: u64) -> Vec<NaiveDate> {
    (0..n)
        .map_while(|i| today.checked_sub_days(Days::new(i)))
        .collect()
}

/// The `n` complete weeks before the current one.
pub fn last_n_weeks_range(today: NaiveDate, n: u64) -> DateRange {
    let monday = monday_of(today);
    let start = n
        .checked_mul(7)
        .and_then(|days| monday.checked_sub_days(Days::new(days)))
        .unwrap_or(NaiveDate::MIN);
    let end = monday.checked_sub_days(Days::new(1)).unwrap_or(NaiveDate::MIN);
    DateRange::new(start, end)
}

/// The `n` complete calendar months before the current one.
pub fn last_n_months_range(today: NaiveDate, n: u32) -> DateRange {
    let first = first_of_month(today);
    let start = first
        .checked_sub_months(Months::new(n))
        .unwrap_or(NaiveDate::MIN);
    DateRange::new(start, first - Days::new(1))
}

/// Resolve a `--period` argument.
///
/// Accepts a named period (`this-week`, `last-week`, `this-month`,
/// `last-month`) or a calendar expression:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any of the above as `start:end` (both sides with the same shape)
pub fn resolve_period(expr: &str, today: NaiveDate) -> Result<DateRange, ValidationError> {
    let expr = expr.trim();

    if let Some(p) = Period::from_name(expr) {
        return Ok(p.range(today));
    }

    if let Some((start_raw, end_raw)) = expr.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());

        if start.len() != end.len() {
            return Err(ValidationError::InvalidDate(expr.to_string()));
        }

        let first = calendar_span(start)?;
        let last = calendar_span(end)?;
        return Ok(DateRange::new(first.start(), last.end()));
    }

    calendar_span(expr)
}

/// The span covered by a single year, month or day expression.
fn calendar_span(s: &str) -> Result<DateRange, ValidationError> {
    let invalid = || ValidationError::InvalidDate(s.to_string());

    match s.len() {
        // YYYY
        4 => {
            if !s.bytes().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            let y: i32 = s.parse().map_err(|_| invalid())?;
            let start = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let end = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok(DateRange::new(start, end))
        }
        // YYYY-MM
        7 => {
            let start = parse_entry_date(&format!("{s}-01")).map_err(|_| invalid())?;
            Ok(DateRange::new(start, last_of_month(start)))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_entry_date(s)?;
            Ok(DateRange::new(d, d))
        }
        _ => Err(invalid()),
    }
}
