use crate::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded overtime session.
///
/// `amount` is unsigned, so a document carrying a negative amount fails to
/// deserialize instead of entering the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtEntry {
    pub date: NaiveDate, // ⇔ "date" (TEXT "YYYY-MM-DD")
    pub amount: u32,     // ⇔ "amount" (minutes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
}

impl OtEntry {
    /// Build an entry; empty `reason`/`by` are dropped so they are never
    /// written as `""`.
    pub fn new(date: NaiveDate, amount: u32, reason: Option<&str>, by: Option<&str>) -> Self {
        Self {
            date,
            amount,
            reason: non_empty(reason),
            by: non_empty(by),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Convert raw user input into a minute amount.
///
/// Surrounding whitespace and a leading `+` are accepted, anything else that
/// is not an integer is `NotAnInteger`; integers below zero are `Negative`
/// and integers beyond `u32::MAX` are `TooLarge`.
pub fn parse_amount(raw: &str) -> Result<u32, ValidationError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotAnInteger(raw.to_string()))?;

    if value < 0 {
        return Err(ValidationError::Negative(value));
    }

    u32::try_from(value).map_err(|_| ValidationError::TooLarge(raw.trim().to_string()))
}

/// Parse a calendar date in strict `YYYY-MM-DD` form.
///
/// `chrono` alone would also accept `2025-6-1` or `+2025-06-01`, so the
/// shape is checked first.
pub fn parse_entry_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let b = raw.as_bytes();
    let shaped = b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && [&b[..4], &b[5..7], &b[8..]]
            .iter()
            .all(|part| part.iter().all(u8::is_ascii_digit));

    if !shaped {
        return Err(ValidationError::InvalidDate(raw.to_string()));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn empty_optional_fields_are_omitted_from_json() {
        let entry = OtEntry::new(d("2025-03-04"), 45, Some(""), None);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"date":"2025-03-04","amount":45}"#);
    }

    #[test]
    fn optional_fields_are_kept_when_present() {
        let entry = OtEntry::new(d("2025-03-04"), 45, Some("release"), Some("Ming"));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2025-03-04","amount":45,"reason":"release","by":"Ming"}"#
        );
    }

    #[test]
    fn parse_amount_accepts_integers() {
        assert_eq!(parse_amount("0"), Ok(0));
        assert_eq!(parse_amount(" 90 "), Ok(90));
        assert_eq!(parse_amount("+15"), Ok(15));
    }

    #[test]
    fn parse_amount_distinguishes_error_kinds() {
        assert_eq!(
            parse_amount("abc"),
            Err(ValidationError::NotAnInteger("abc".into()))
        );
        assert_eq!(
            parse_amount("12.5"),
            Err(ValidationError::NotAnInteger("12.5".into()))
        );
        assert_eq!(parse_amount("-5"), Err(ValidationError::Negative(-5)));
        assert_eq!(
            parse_amount("4294967296"),
            Err(ValidationError::TooLarge("4294967296".into()))
        );
        assert_eq!(parse_amount("4294967295"), Ok(u32::MAX));
    }

    #[test]
    fn negative_amount_in_document_is_rejected() {
        let res: Result<OtEntry, _> = serde_json::from_str(r#"{"date":"2025-03-04","amount":-3}"#);
        assert!(res.is_err());
    }

    #[test]
    fn parse_entry_date_rejects_impossible_dates() {
        assert!(parse_entry_date("2025-02-29").is_err());
        assert!(parse_entry_date("not-a-date").is_err());
        assert!(parse_entry_date("2025-6-1").is_err());
        assert!(parse_entry_date("+2025-06-01").is_err());
        assert!(parse_entry_date(" 2025-06-01").is_err());
        assert!(parse_entry_date("2025/06/01").is_err());
        assert_eq!(parse_entry_date("2024-02-29"), Ok(d("2024-02-29")));
    }
}
