use crate::models::formats;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// The "ideal" workday: clock-in/out and the lunch window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkhourConfig {
    #[serde(with = "formats::clock")]
    pub start: NaiveTime,
    #[serde(with = "formats::clock")]
    pub end: NaiveTime,
    #[serde(with = "formats::clock")]
    pub lunch_start: NaiveTime,
    #[serde(with = "formats::clock")]
    pub lunch_end: NaiveTime,
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

impl Default for WorkhourConfig {
    fn default() -> Self {
        Self {
            start: hm(8, 10),
            end: hm(16, 58),
            lunch_start: hm(12, 30),
            lunch_end: hm(13, 30),
        }
    }
}

impl WorkhourConfig {
    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }
    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }
    pub fn lunch_start_str(&self) -> String {
        self.lunch_start.format("%H:%M").to_string()
    }
    pub fn lunch_end_str(&self) -> String {
        self.lunch_end.format("%H:%M").to_string()
    }

    /// Length of the ideal workday, `end - start`, lunch included.
    pub fn ideal_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn lunch_minutes(&self) -> i64 {
        (self.lunch_end - self.lunch_start).num_minutes()
    }
}
