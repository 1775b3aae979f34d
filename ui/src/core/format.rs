//! Formatting helpers for presenting metric values.

/// Whole numbers get thousands separators (`7,500`); fractional values keep
/// two decimals (`1,234.50`). Non-finite input renders as an em dash.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let magnitude = rounded.abs();
    let whole = magnitude.trunc() as u64;
    let cents = ((magnitude - magnitude.trunc()) * 100.0).round() as u64;

    let mut out = String::new();
    if negative && (whole > 0 || cents > 0) {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if cents > 0 {
        out.push_str(&format!(".{cents:02}"));
    }
    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_whole_numbers() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(205.0), "205");
        assert_eq!(format_value(7500.0), "7,500");
        assert_eq!(format_value(1_234_567.0), "1,234,567");
    }

    #[test]
    fn keeps_two_decimals_for_fractions() {
        assert_eq!(format_value(1234.5), "1,234.50");
        assert_eq!(format_value(-3.25), "-3.25");
        assert_eq!(format_value(-0.001), "0");
    }

    #[test]
    fn non_finite_renders_placeholder() {
        assert_eq!(format_value(f64::NAN), "—");
        assert_eq!(format_value(f64::INFINITY), "—");
    }
}
