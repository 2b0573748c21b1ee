// src/export/model.rs

use crate::models::OtEntry;
use serde::Serialize;

/// Flat row used by both CSV and JSON exports.
/// Optional fields become empty strings so every CSV row has four columns.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EntryExport {
    pub date: String,
    pub amount: u32,
    pub reason: String,
    pub by: String,
}

impl From<&OtEntry> for EntryExport {
    fn from(e: &OtEntry) -> Self {
        Self {
            date: e.date_str(),
            amount: e.amount,
            reason: e.reason.clone().unwrap_or_default(),
            by: e.by.clone().unwrap_or_default(),
        }
    }
}
