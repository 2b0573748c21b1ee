use crate::cli::commands::open_ledger;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the ledger document, when it does not exist yet
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.file.as_deref(), cli.test)?;
    tracing::debug!(test = cli.test, ledger = %cfg.ledger, "init");

    info("Initializing otledger…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Ledger      : {}", cfg.ledger_path().display());

    let ledger = open_ledger(&cfg)?;

    success(format!(
        "Ledger ready with {} entries (last updated {})",
        ledger.entry_count(),
        ledger.last_updated().format("%Y-%m-%d %H:%M:%S")
    ));
    Ok(())
}
