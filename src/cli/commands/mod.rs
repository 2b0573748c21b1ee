pub mod add;
pub mod calc;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod stats;
pub mod workhour;

use crate::config::Config;
use crate::core::Ledger;
use crate::errors::AppResult;
use crate::store::JsonFileStore;
use crate::utils::clock::SystemClock;

pub(crate) type FileLedger = Ledger<JsonFileStore, SystemClock>;

/// Open the ledger configured in `cfg`, creating it on first use.
pub(crate) fn open_ledger(cfg: &Config) -> AppResult<FileLedger> {
    let path = cfg.ledger_path();
    tracing::debug!(path = %path.display(), "opening ledger");
    Ok(Ledger::open(JsonFileStore::new(path), SystemClock)?)
}
