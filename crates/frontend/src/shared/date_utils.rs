/// Utilities for date formatting
///
/// Provides consistent date formatting across the application

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Thousands separator for stock/forecast quantities, e.g. 45200 -> "45,200".
pub fn format_quantity(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        format!("-{}", out)
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(0), "0");
        assert_eq!(format_quantity(999), "999");
        assert_eq!(format_quantity(45200), "45,200");
        assert_eq!(format_quantity(1234567), "1,234,567");
        assert_eq!(format_quantity(-1250), "-1,250");
    }
}
