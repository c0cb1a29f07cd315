//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `1 hr`, `5 hrs`
pub fn hours_label(hours: u64) -> String {
    if hours == 1 {
        "1 hr".to_string()
    } else {
        format!("{hours} hrs")
    }
}

/// Fractional hours with two decimals, as shown in the statistics summary.
pub fn hours_2dp(hours: f64) -> String {
    format!("{:.2} hrs", hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_labels() {
        assert_eq!(hours_label(1), "1 hr");
        assert_eq!(hours_label(0), "0 hrs");
        assert_eq!(hours_2dp(5.0 / 365.0), "0.01 hrs");
    }
}
