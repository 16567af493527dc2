//! Currency and count formatting for terminal output.

use num_format::{Buffer, Locale};

/// Format a dollar amount with thousands grouping, e.g. `268543.74` ->
/// `"$268,543.74"`. Rounds to cents.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let mut buf = Buffer::default();
    buf.write_formatted(&(cents / 100), &Locale::en);
    let sign = if negative { "-" } else { "" };
    format!("{sign}${}.{:02}", buf.as_str(), cents % 100)
}

/// Format a count with thousands grouping, e.g. `1500` -> `"1,500"`.
pub fn format_count(n: u64) -> String {
    let mut buf = Buffer::default();
    buf.write_formatted(&n, &Locale::en);
    buf.as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(268543.74), "$268,543.74");
    }

    #[test]
    fn test_format_currency_pads_cents() {
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1895.7), "-$1,895.70");
    }

    #[test]
    fn test_format_currency_rounds_to_cents() {
        assert_eq!(format_currency(9.999), "$10.00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(500), "500");
        assert_eq!(format_count(114505), "114,505");
    }
}
