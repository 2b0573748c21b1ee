//! OT against the ideal workday.
//!
//! Given the four punches of a day (arrival, leaving for lunch, back from
//! lunch, leaving work), compare the time spent at work with the configured
//! workday length.

use crate::errors::FormatError;
use crate::models::WorkhourConfig;
use crate::utils::time::diff_minutes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvertimeCalculation {
    pub lunch_minutes: i64,
    /// Arrival to leave, lunch included.
    pub presence_minutes: i64,
    /// Presence minus lunch.
    pub work_minutes: i64,
    /// `workhour.end - workhour.start`.
    pub ideal_minutes: i64,
    /// Presence minus the ideal day; negative when leaving early.
    pub overtime_minutes: i64,
}

impl OvertimeCalculation {
    pub fn compute(
        arrive: &str,
        lunch_out: &str,
        lunch_back: &str,
        leave: &str,
        workhour: &WorkhourConfig,
    ) -> Result<Self, FormatError> {
        let lunch_minutes = diff_minutes(lunch_out, lunch_back)?;
        let presence_minutes = diff_minutes(arrive, leave)?;
        let ideal_minutes = workhour.ideal_minutes();

        Ok(Self {
            lunch_minutes,
            presence_minutes,
            work_minutes: presence_minutes - lunch_minutes,
            ideal_minutes,
            overtime_minutes: presence_minutes - ideal_minutes,
        })
    }
}
