//! Currency rendering of prediction results.
//!
//! A prediction is displayed as a dollar string with two decimal places and
//! thousands separators, e.g. `$1,234.50`. Negative amounts keep the sign
//! inside the symbol (`$-1,234.50`); a negative prediction is displayed,
//! never treated as an error.

use std::fmt;

use crate::predictor::Prediction;

/// Format a dollar amount with grouping and two decimals.
pub fn format_usd(amount: f64) -> String {
    let negative = amount.is_sign_negative() && amount != 0.0;
    let fixed = format!("{:.2}", amount.abs());
    // fixed is digits '.' digits; group the integer part in threes.
    let (int_part, frac_part) = fixed
        .split_once('.')
        .unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("$-{grouped}.{frac_part}")
    } else {
        format!("${grouped}.{frac_part}")
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_usd(self.amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_amount() {
        assert_eq!(format_usd(493.0), "$493.00");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(0.005), "$0.01");
        assert_eq!(format_usd(999.999), "$1,000.00");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_usd(-1234.5), "$-1,234.50");
        assert_eq!(format_usd(-0.4), "$-0.40");
    }

    #[test]
    fn test_negative_zero_renders_unsigned() {
        assert_eq!(format_usd(-0.0), "$0.00");
    }

    #[test]
    fn test_prediction_display() {
        let p = Prediction { amount: 493.0 };
        assert_eq!(p.to_string(), "$493.00");
    }
}
