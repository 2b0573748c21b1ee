use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::OvertimeCalculation;
use crate::errors::AppResult;
use crate::ui::messages::{field, header};
use crate::utils::colors::{BOLD, RESET, color_for_overtime};
use crate::utils::time::{diff_readable, format_h_mm};

/// Compare a day's punches with the ledger's reference workday.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        arrive,
        lunch_out,
        lunch_back,
        leave,
    } = cmd
    {
        let ledger = open_ledger(cfg)?;
        let workhour = ledger.workhour();

        let calc = OvertimeCalculation::compute(arrive, lunch_out, lunch_back, leave, workhour)?;
        tracing::debug!(?calc, "overtime computed");

        header(format!("{arrive} → {leave}"));
        field("Lunch", diff_readable(lunch_out, lunch_back)?);
        field("Presence", format_h_mm(calc.presence_minutes));
        field("Worked", format_h_mm(calc.work_minutes));
        field(
            "Workday",
            format!(
                "{} ({} → {})",
                format_h_mm(calc.ideal_minutes),
                workhour.start_str(),
                workhour.end_str()
            ),
        );

        let color = color_for_overtime(calc.overtime_minutes);
        field(
            "Overtime",
            format!(
                "{color}{BOLD}{} min ({}){RESET}",
                calc.overtime_minutes,
                format_h_mm(calc.overtime_minutes)
            ),
        );
    }
    Ok(())
}
