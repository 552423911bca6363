/// Group digits in threes with `separator`
///
/// # Examples
/// ```rust,ignore
/// use backend::shared::format::format_thousands;
/// assert_eq!(format_thousands(1234567, '.'), "1.234.567");
/// assert_eq!(format_thousands(42, '.'), "42");
/// ```
pub fn format_thousands(n: usize, separator: char) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result
}

/// Response sizes in the request log
pub fn format_size(bytes: usize) -> String {
    format!("{} B", format_thousands(bytes, '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0, '.'), "0");
        assert_eq!(format_thousands(999, '.'), "999");
        assert_eq!(format_thousands(1000, '.'), "1.000");
        assert_eq!(format_thousands(1234567, ' '), "1 234 567");
        assert_eq!(format_thousands(1234567890, '.'), "1.234.567.890");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(2048), "2.048 B");
    }
}
