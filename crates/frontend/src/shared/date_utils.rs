/// Utilities for date formatting
///
/// Calendar dates travel as `YYYY-MM-DD`; the UI shows them as `DD/MM/YYYY`.
use contracts::shared::calendar::parse_calendar_date;

/// Format a calendar date string to DD/MM/YYYY
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
///
/// Strings that are not a calendar date are returned unchanged.
pub fn format_date(date_str: &str) -> String {
    match parse_calendar_date(date_str) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_non_padded_date() {
        assert_eq!(format_date("2024-1-5"), "05/01/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }
}
