use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::date::resolve_period;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        out,
        period,
        force,
    } = cmd
    {
        let ledger = open_ledger(cfg)?;
        if ledger.entry_count() == 0 {
            return Err(AppError::EmptyLedger);
        }

        let range = period
            .as_deref()
            .map(|p| resolve_period(p, ledger.today()))
            .transpose()?;

        let path = expand_tilde(out);
        tracing::debug!(format = format.as_str(), path = %path.display(), ?range, "export");

        let rows = ExportLogic::export(ledger.entries(), format, &path, range.as_ref(), *force)?;
        if rows > 0 {
            println!("   {rows} entries written");
        }
    }
    Ok(())
}
