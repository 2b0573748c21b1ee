use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::mins2readable;

/// Record one overtime session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        amount,
        reason,
        by,
    } = cmd
    {
        let mut ledger = open_ledger(cfg)?;

        let entry = ledger.new_entry(date, amount, reason.as_deref(), by.as_deref())?;
        tracing::debug!(date = %entry.date, amount = entry.amount, "entry recorded");

        success(format!(
            "Recorded {} min ({}) on {}",
            entry.amount,
            mins2readable(entry.amount as i64, false, false),
            entry.date_str()
        ));
        println!(
            "   {} entries, {} min in total",
            ledger.entry_count(),
            ledger.total_minutes()
        );
    }
    Ok(())
}
