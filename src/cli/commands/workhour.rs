use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::WorkhourConfig;
use crate::ui::messages::{field, header, success};
use crate::utils::time::{format_h_mm, parse_clock};

/// Show the reference workday, or update the given fields.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Workhour {
        start,
        end,
        lunch_start,
        lunch_end,
    } = cmd
    {
        let mut ledger = open_ledger(cfg)?;
        let current = *ledger.workhour();

        // Parse everything before touching the ledger
        let parse = |raw: &Option<String>, fallback| match raw {
            Some(t) => parse_clock(t),
            None => Ok(fallback),
        };
        let updated = WorkhourConfig {
            start: parse(start, current.start)?,
            end: parse(end, current.end)?,
            lunch_start: parse(lunch_start, current.lunch_start)?,
            lunch_end: parse(lunch_end, current.lunch_end)?,
        };

        if updated != current {
            ledger.set_workhour(updated)?;
            tracing::debug!(?updated, "workhour updated");
            success("Workhour updated");
        }

        print_workhour(ledger.workhour());
    }
    Ok(())
}

fn print_workhour(w: &WorkhourConfig) {
    header("Workhour");
    field("Start", w.start_str());
    field("End", w.end_str());
    field("Lunch start", w.lunch_start_str());
    field("Lunch end", w.lunch_end_str());
    field(
        "Workday",
        format!(
            "{} (lunch {})",
            format_h_mm(w.ideal_minutes()),
            format_h_mm(w.lunch_minutes())
        ),
    );
}
