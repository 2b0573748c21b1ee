use crate::models::{OtEntry, WorkhourConfig, formats};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The persisted ledger: the only durable state of the application.
///
/// Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerDocument {
    pub entries: Vec<OtEntry>,
    /// Lifetime counter of recorded entries, maintained independently of
    /// `entries.len()`.
    #[serde(default)]
    pub total: u64,
    /// `1970-01-01 00:00:00` when missing; restamped by the next mutation.
    #[serde(default, with = "formats::timestamp")]
    pub last_updated: NaiveDateTime,
    #[serde(default)]
    pub workhour: WorkhourConfig,
}

impl LedgerDocument {
    /// First-run document: no entries, default workday.
    pub fn bootstrap(now: NaiveDateTime) -> Self {
        Self {
            entries: Vec::new(),
            total: 0,
            last_updated: now,
            workhour: WorkhourConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_total_and_workhour_fall_back_to_defaults() {
        let doc: LedgerDocument = serde_json::from_str(
            r#"{"entries":[{"date":"2025-01-02","amount":30}],"last_updated":"2025-01-02 18:00:00"}"#,
        )
        .unwrap();
        assert_eq!(doc.total, 0);
        assert_eq!(doc.workhour, WorkhourConfig::default());
        assert_eq!(doc.entries.len(), 1);
    }

    #[test]
    fn missing_last_updated_falls_back_to_epoch() {
        let doc: LedgerDocument =
            serde_json::from_str(r#"{"entries":[],"total":2}"#).unwrap();
        assert_eq!(doc.total, 2);
        assert_eq!(
            doc.last_updated.format(formats::timestamp::FORMAT).to_string(),
            "1970-01-01 00:00:00"
        );
    }

    #[test]
    fn serializes_keys_in_document_order() {
        let now = NaiveDateTime::parse_from_str("2025-01-02 18:00:00", formats::timestamp::FORMAT)
            .unwrap();
        let json = serde_json::to_string(&LedgerDocument::bootstrap(now)).unwrap();
        assert_eq!(
            json,
            r#"{"entries":[],"total":0,"last_updated":"2025-01-02 18:00:00","workhour":{"start":"08:10","end":"16:58","lunch_start":"12:30","lunch_end":"13:30"}}"#
        );
    }
}
