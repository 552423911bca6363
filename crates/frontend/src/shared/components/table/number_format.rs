//! Number formatting for tables and cards (Brazilian convention)

/// Prefix of the Brazilian real
pub const CURRENCY_SYMBOL: &str = "R$";

/// Format a number with `.` as thousands separator and `,` as decimal mark
///
/// # Examples
///
/// ```rust,ignore
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1.234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    // -0.0 would print as "-0,00"
    let value = if value == 0.0 { 0.0 } else { value };
    let decimals = decimals.min(3) as usize;
    let formatted = format!("{:.prec$}", value, prec = decimals);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money value with 2 decimals: `1.234,56`
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Money value with the currency symbol: `R$ 1.234,56`
pub fn format_currency(value: f64) -> String {
    format!("{} {}", CURRENCY_SYMBOL, format_money(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1.234,56");
        assert_eq!(format_money(1234567.89), "1.234.567,89");
        assert_eq!(format_money(0.0), "0,00");
        assert_eq!(format_money(-1234.56), "-1.234,56");
        assert_eq!(format_money(999.999), "1.000,00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1.234,6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1.234,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(200.0), "R$ 200,00");
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
        assert_eq!(format_currency(-0.0), "R$ 0,00");
    }
}
