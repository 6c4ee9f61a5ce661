/// Insert thousands separators into a non-negative integer string.
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a whole-dollar currency value with thousands separators.
pub fn format_currency(value: f64) -> String {
    let dollars = value.abs().round() as i64;
    let formatted = group_thousands(&dollars.to_string());

    if value < 0.0 {
        format!("-${}", formatted)
    } else {
        format!("${}", formatted)
    }
}

/// Format a currency value in compact form (e.g., $2.1M, $450K, $50).
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}${:.0}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs_value)
    }
}

/// Compact currency with an explicit sign for deltas (e.g., +$2.1M).
pub fn format_signed_compact(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_compact_currency(value))
    } else {
        format_compact_currency(value)
    }
}

/// Format a count with thousands separators.
pub fn format_count(value: u32) -> String {
    group_thousands(&value.to_string())
}

/// Format a signed count delta (e.g., +20, -150).
pub fn format_signed_count(value: i64) -> String {
    if value >= 0 {
        format!("+{}", group_thousands(&value.to_string()))
    } else {
        format!("-{}", group_thousands(&value.unsigned_abs().to_string()))
    }
}

/// Format a fraction as a percentage (e.g., 0.62 -> 62%).
pub fn format_percentage(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(-980.4), "-$980");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn test_format_compact_currency() {
        assert_eq!(format_compact_currency(72_800_000.0), "$72.8M");
        assert_eq!(format_compact_currency(-2_100_000.0), "-$2.1M");
        assert_eq!(format_compact_currency(450_000.0), "$450K");
        assert_eq!(format_compact_currency(50.0), "$50");
    }

    #[test]
    fn test_format_signed_compact() {
        assert_eq!(format_signed_compact(1_500_000.0), "+$1.5M");
        assert_eq!(format_signed_compact(-1_500_000.0), "-$1.5M");
        assert_eq!(format_signed_compact(0.0), "+$0");
    }

    #[test]
    fn test_format_counts() {
        assert_eq!(format_count(770), "770");
        assert_eq!(format_count(250_250), "250,250");
        assert_eq!(format_signed_count(20), "+20");
        assert_eq!(format_signed_count(-1_500), "-1,500");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.62), "62%");
        assert_eq!(format_percentage(-0.05), "-5%");
    }
}
