//! Display formatting for summary cards and tables

/// Whole pesos with `.` thousands separators: `$1.234.568`
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// A ratio as a percentage with two decimals: `0.1234` -> `12.34%`
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1000.0), "$1.000");
        assert_eq!(format_currency(1_234_567.6), "$1.234.568");
        assert_eq!(format_currency(2_500_000_000.0), "$2.500.000.000");
        assert_eq!(format_currency(-45_000.0), "-$45.000");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(0.1234), "12.34%");
        assert_eq!(format_percentage(1.5), "150.00%");
        assert_eq!(format_percentage(-0.02), "-2.00%");
    }
}
