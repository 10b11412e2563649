//! Utility helpers shared across the portal views.

/// Two-decimal rendering for average scores, e.g. `90.0 -> "90.00"`.
pub fn format_average(average: f64) -> String {
    format!("{:.2}", average)
}

/// Total scores render as the backend sent them; whole numbers lose the
/// trailing `.0` so `450.0` shows as `450`.
pub fn format_total(total: f64) -> String {
    if total.fract() == 0.0 {
        format!("{}", total as i64)
    } else {
        format!("{}", total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_always_gets_two_decimals() {
        assert_eq!(format_average(90.0), "90.00");
        assert_eq!(format_average(72.5), "72.50");
        assert_eq!(format_average(66.666), "66.67");
    }

    #[test]
    fn whole_totals_drop_the_fraction() {
        assert_eq!(format_total(450.0), "450");
        assert_eq!(format_total(387.5), "387.5");
    }
}
