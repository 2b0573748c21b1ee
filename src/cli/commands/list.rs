use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{DateRange, OtEntry};
use crate::ui::messages::{header, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::date::resolve_period;
use crate::utils::formatting::bar;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_h_mm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        from,
        to,
        sort,
    } = cmd
    {
        let mut ledger = open_ledger(cfg)?;

        if *sort {
            ledger.sort_by_date()?;
            tracing::debug!("ledger sorted by date");
        }

        let range = match (period, from, to) {
            (Some(p), _, _) => Some(resolve_period(p, ledger.today())?),
            (None, Some(f), Some(t)) => Some(DateRange::parse(f, t)?),
            _ => None,
        };

        let shown: Vec<&OtEntry> = ledger
            .entries()
            .iter()
            .filter(|e| range.is_none_or(|r| r.contains(e.date)))
            .collect();

        if shown.is_empty() {
            warning("No entries found for the selected period.");
            return Ok(());
        }

        // Same scale for every listing, whatever the filter
        let scale = ledger.series().map(|s| s.y_max).unwrap_or(0);

        match range {
            Some(r) => header(r),
            None => header("All entries"),
        }
        print!(
            "{}",
            render(&shown, scale, cfg.bar_width, cfg.show_reason).render()
        );

        let minutes: u64 = shown.iter().map(|e| e.amount as u64).sum();
        println!(
            "\n{} entries, {} min ({})",
            shown.len(),
            minutes,
            format_h_mm(minutes as i64)
        );
    }
    Ok(())
}

fn render(entries: &[&OtEntry], scale: u32, bar_width: usize, show_reason: bool) -> Table {
    let mut columns = vec![
        Column::left("Date", 10),
        Column::right("Min", 5),
        Column::right("H:MM", 6),
        Column::left("", bar_width),
    ];
    if show_reason {
        columns.push(Column::left("Reason", 20));
        columns.push(Column::left("By", 12));
    }

    let mut table = Table::new(columns);
    for e in entries {
        let mut row = vec![
            e.date_str(),
            e.amount.to_string(),
            format_h_mm(e.amount as i64),
            bar(e.amount, scale, bar_width),
        ];
        if show_reason {
            row.push(colorize_optional(e.reason.as_deref()));
            row.push(colorize_optional(e.by.as_deref()));
        }
        table.add_row(row);
    }
    table
}
