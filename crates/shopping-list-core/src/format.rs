//! Price Formatting

/// Two-decimal amount, e.g. `77.50`.
///
/// Exact half-cent values round away from zero (`1.125` → `1.13`), the way
/// browsers render `toFixed(2)`. `format!` alone would round them to even.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", round_half_cents(amount))
}

/// Amount prefixed with the currency symbol, e.g. `$2.50`
pub fn format_price(price: f64, currency_symbol: &str) -> String {
    format!("{}{}", currency_symbol, format_amount(price))
}

/// Parse a price field; anything unparseable becomes NaN and fails validation later
pub fn parse_price(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

// A double is exactly halfway between two cents only when it is an odd
// multiple of 1/8, since (2k + 1) / 200 must reduce to a power-of-two denominator.
fn round_half_cents(amount: f64) -> f64 {
    let eighths = amount * 8.0;
    if eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        (amount * 100.0).round() / 100.0
    } else {
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format_amount(77.5), "77.50");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_price(3.456, "$"), "$3.46");
        assert_eq!(format_price(15.0, "$"), "$15.00");
    }

    #[test]
    fn test_half_cent_ties_round_up() {
        assert_eq!(format_price(1.125, "$"), "$1.13");
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(0.625), "0.63");
        assert_eq!(format_amount(2.375), "2.38");
        assert_eq!(format_amount(-1.125), "-1.13");
    }

    #[test]
    fn test_near_ties_follow_exact_value() {
        // 1.005 is stored just below the tie
        assert_eq!(format_amount(1.005), "1.00");
        assert_eq!(format_amount(2.25), "2.25");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(" 9.99 "), 9.99);
        assert_eq!(parse_price("-1"), -1.0);
        assert!(parse_price("").is_nan());
        assert!(parse_price("abc").is_nan());
    }
}
