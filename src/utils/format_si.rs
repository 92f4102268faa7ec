const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

const SIGNIFICANT_DIGITS: i32 = 6;

fn trim_trailing_zeros(formatted: &str) -> &str {
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted
    }
}

/// Formats `value` with an SI prefix at six significant digits, dropping trailing zeros
/// (`12345.0` -> `"12.345k"`, `1_500_000.0` -> `"1.5M"`).
pub fn format_si(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to significant digits before picking the prefix
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let (Ok(mantissa), Ok(exponent)) = (mantissa.parse::<f64>(), exponent.parse::<i32>()) else {
        return scientific;
    };

    let prefix_index = exponent.div_euclid(3).clamp(-8, 8);
    let shift = exponent - prefix_index * 3;
    let coefficient = mantissa * 10f64.powi(shift);
    let decimals = (SIGNIFICANT_DIGITS - 1 - shift).max(0) as usize;

    let formatted = format!("{:.*}", decimals, coefficient);

    format!(
        "{}{}",
        trim_trailing_zeros(&formatted),
        SI_PREFIXES[(prefix_index + 8) as usize]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_and_millions() {
        assert_eq!(format_si(12345.0), "12.345k");
        assert_eq!(format_si(1_500_000.0), "1.5M");
        assert_eq!(format_si(250_000_000.0), "250M");
    }

    #[test]
    fn test_no_prefix() {
        assert_eq!(format_si(100.0), "100");
        assert_eq!(format_si(0.0), "0");
    }

    #[test]
    fn test_sub_unit() {
        assert_eq!(format_si(0.5), "500m");
    }

    #[test]
    fn test_rounding_carries_into_next_prefix() {
        assert_eq!(format_si(999_999.9), "1M");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_si(-2500.0), "-2.5k");
    }
}
