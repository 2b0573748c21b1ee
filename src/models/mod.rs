pub mod date_range;
pub mod document;
pub mod entry;
pub mod formats;
pub mod workhour;

pub use date_range::DateRange;
pub use document::LedgerDocument;
pub use entry::OtEntry;
pub use workhour::WorkhourConfig;
