//! Formatting utilities used for CLI and export outputs.

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    if short {
        // +02:25, -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // +02h 25m, -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Horizontal bar proportional to `value / max`, at most `width` cells.
pub fn bar(value: u32, max: u32, width: usize) -> String {
    if max == 0 || width == 0 {
        return String::new();
    }
    let cells = (value as f64 / max as f64 * width as f64).round() as usize;
    "█".repeat(cells.min(width))
}

/// Two decimals, or `--` when the statistic is not defined.
pub fn opt_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mins2readable_formats() {
        assert_eq!(mins2readable(145, true, true), "+02:25");
        assert_eq!(mins2readable(-70, false, false), "-01h 10m");
        assert_eq!(mins2readable(0, true, false), "00h 00m");
    }

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(50, 100, 10).chars().count(), 5);
        assert_eq!(bar(100, 100, 10).chars().count(), 10);
        assert_eq!(bar(0, 100, 10), "");
        assert_eq!(bar(10, 0, 10), "");
    }

    #[test]
    fn opt_stat_marks_undefined() {
        assert_eq!(opt_stat(Some(8.164_965)), "8.16");
        assert_eq!(opt_stat(None), "--");
    }
}
