use crate::cli::commands::{FileLedger, open_ledger};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::RangeSummary;
use crate::errors::AppResult;
use crate::ui::messages::{field, header, info};
use crate::utils::date::Period;
use crate::utils::formatting::opt_stat;
use crate::utils::mins2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { detailed } = cmd {
        let ledger = open_ledger(cfg)?;
        tracing::debug!(entries = ledger.entry_count(), detailed, "stats");

        if ledger.entry_count() == 0 {
            info("The ledger has no entries yet.");
        }

        print_overall(&ledger);

        for period in Period::ALL {
            print_period(period.label(), &ledger.period_summary(period));
        }

        if *detailed {
            print_detailed(&ledger);
        }
    }
    Ok(())
}

fn print_overall(ledger: &FileLedger) {
    header("Overall");
    let total = ledger.total_minutes();
    field(
        "Total",
        format!("{total} min ({})", mins2readable(total as i64, false, false)),
    );
    field("Entries", ledger.entry_count());
    field("Mean", format!("{:.2} min", ledger.mean()));
    field("Median", format!("{:.2} min", ledger.median()));
    field("Std deviation", format!("{:.2} min", ledger.standard_deviation()));
}

fn print_period(label: &str, s: &RangeSummary) {
    header(format!("{label} ({})", s.range));
    field("Total", format!("{} min", s.minutes));
    field("Entries", s.count);
    field("Mean", format!("{:.2} min", s.mean));
}

fn print_detailed(ledger: &FileLedger) {
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "--".to_string());

    header("Details");
    field(
        "Longest",
        or_dash(ledger.maximum_length().map(|m| format!("{m} min"))),
    );
    field(
        "Shortest",
        or_dash(ledger.minimum_length().map(|m| format!("{m} min"))),
    );
    field(
        "First entry",
        or_dash(ledger.first_date().map(|d| d.to_string())),
    );
    field(
        "Last entry",
        or_dash(ledger.last_date().map(|d| d.to_string())),
    );
    field("Days since first", ledger.days_since_first_entry());
    field("Skewness", opt_stat(ledger.skewness()));
    field("Kurtosis (excess)", opt_stat(ledger.kurtosis()));

    match ledger.shapiro_wilk() {
        Some(sw) => field(
            "Shapiro-Wilk",
            format!("W = {:.4}, p = {:.4}", sw.w, sw.p_value),
        ),
        None => field("Shapiro-Wilk", "--"),
    }
    field("Records written", ledger.recorded_total());
}
