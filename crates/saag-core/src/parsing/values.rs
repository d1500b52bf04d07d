use crate::error::SaagError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Cell contents that mean "not entered".
fn is_placeholder(s: &str) -> bool {
    matches!(
        s.to_lowercase().as_str(),
        "" | "-" | "—" | "–" | "*" | "n.a." | "n/a" | "na" | "nd" | "not done"
    )
}

/// Parse a numeric lab value.
///
/// Handles formats like:
/// - "3.0" -> Some(3.0)
/// - "3,0" -> Some(3.0) (decimal comma)
/// - "250 U/L" -> Some(250) (trailing unit text is ignored)
/// - "-" or "—" -> None
pub fn parse_number(s: &str) -> Result<Option<Decimal>, SaagError> {
    let s = s.trim();
    if is_placeholder(s) {
        return Ok(None);
    }

    let numeric = numeric_prefix(s)?;
    parse_decimal(numeric).map(Some)
}

/// Parse a cell count, where `.` or `,` may separate thousands.
///
/// - "12.000" -> Some(12000)
/// - "1,200 /µL" -> Some(1200)
/// - "250" -> Some(250)
/// - "12.5" -> Some(12.5) (not a thousands grouping)
pub fn parse_count(s: &str) -> Result<Option<Decimal>, SaagError> {
    let s = s.trim();
    if is_placeholder(s) {
        return Ok(None);
    }

    let numeric = numeric_prefix(s)?;
    if has_thousands_groups(numeric) {
        let digits: String = numeric.chars().filter(|c| c.is_ascii_digit()).collect();
        return parse_decimal(&digits).map(Some);
    }
    parse_decimal(numeric).map(Some)
}

/// True when the leading number of `s` looks like "1.200", "12,000" or
/// "1.000.000": one to three digits without a leading zero, then one or more
/// groups of exactly three digits behind the same separator.
pub fn has_thousands_groups(s: &str) -> bool {
    let Ok(numeric) = numeric_prefix(s.trim()) else {
        return false;
    };
    let Some(sep) = numeric.chars().find(|c| matches!(c, '.' | ',')) else {
        return false;
    };

    let mut groups = numeric.split(sep);
    let Some(head) = groups.next() else {
        return false;
    };
    if head.is_empty()
        || head.len() > 3
        || head.starts_with('0')
        || !head.chars().all(|c| c.is_ascii_digit())
    {
        return false;
    }
    groups.all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
}

/// Leading run of characters that can belong to a number.
fn numeric_prefix(s: &str) -> Result<&str, SaagError> {
    let end = s
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+')))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    if end == 0 {
        return Err(SaagError::ParseError(format!("invalid number '{}'", s)));
    }
    Ok(&s[..end])
}

/// Parse a decimal value, accepting a decimal comma.
pub fn parse_decimal(s: &str) -> Result<Decimal, SaagError> {
    let s = s.trim();
    let normalized = s.replace(',', ".");
    Decimal::from_str(&normalized)
        .map_err(|e| SaagError::ParseError(format!("invalid number '{}': {}", s, e)))
}

/// Parse a Rivalta result: positive/negative in English or Indonesian, or +/-.
///
/// A lone "-" reads as negative here, unlike in numeric and text cells.
pub fn parse_flag(s: &str) -> Result<Option<bool>, SaagError> {
    let s = s.trim();
    if s == "-" {
        return Ok(Some(false));
    }
    if is_placeholder(s) {
        return Ok(None);
    }
    match s.to_lowercase().as_str() {
        "positive" | "positif" | "pos" | "+" | "yes" | "ya" | "true" | "1" => Ok(Some(true)),
        "negative" | "negatif" | "neg" | "−" | "no" | "tidak" | "false" | "0" => Ok(Some(false)),
        _ => Err(SaagError::ParseError(format!(
            "invalid test result '{}' (expected positive or negative)",
            s
        ))),
    }
}

/// Free-text value; placeholders yield `None`.
pub fn parse_text(s: &str) -> Option<String> {
    let s = s.trim();
    if is_placeholder(s) {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_number() {
        assert_eq!(parse_number("3.0").unwrap(), Some(dec!(3.0)));
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(parse_number("6,5").unwrap(), Some(dec!(6.5)));
    }

    #[test]
    fn test_trailing_unit() {
        assert_eq!(parse_number("250 U/L").unwrap(), Some(dec!(250)));
        assert_eq!(parse_number("2.0g/dL").unwrap(), Some(dec!(2.0)));
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(parse_number("").unwrap(), None);
        assert_eq!(parse_number(" — ").unwrap(), None);
        assert_eq!(parse_number("N/A").unwrap(), None);
    }

    #[test]
    fn test_invalid_number() {
        assert!(parse_number("cloudy").is_err());
        assert!(parse_number("1.2.3").is_err());
    }

    #[test]
    fn test_count_thousands_groups() {
        assert_eq!(parse_count("12.000").unwrap(), Some(dec!(12000)));
        assert_eq!(parse_count("1,200").unwrap(), Some(dec!(1200)));
        assert_eq!(parse_count("1.000.000 sel/µL").unwrap(), Some(dec!(1000000)));
        assert_eq!(parse_count("250").unwrap(), Some(dec!(250)));
        assert_eq!(parse_count("12.5").unwrap(), Some(dec!(12.5)));
        assert_eq!(parse_count("0.250").unwrap(), Some(dec!(0.250)));
        assert_eq!(parse_count("-").unwrap(), None);
    }

    #[test]
    fn test_has_thousands_groups() {
        assert!(has_thousands_groups("12.000"));
        assert!(has_thousands_groups("1,200 U/L"));
        assert!(has_thousands_groups("10.000.000"));
        assert!(!has_thousands_groups("3.0"));
        assert!(!has_thousands_groups("2,50"));
        assert!(!has_thousands_groups("0.500"));
        assert!(!has_thousands_groups("1234.000"));
        assert!(!has_thousands_groups("1.000,5"));
        assert!(!has_thousands_groups("180"));
    }

    #[test]
    fn test_flags() {
        assert_eq!(parse_flag("Positif").unwrap(), Some(true));
        assert_eq!(parse_flag("+").unwrap(), Some(true));
        assert_eq!(parse_flag("negative").unwrap(), Some(false));
        assert_eq!(parse_flag("-").unwrap(), Some(false));
        assert_eq!(parse_flag("−").unwrap(), Some(false));
        assert_eq!(parse_flag("—").unwrap(), None);
        assert!(parse_flag("maybe").is_err());
    }

    #[test]
    fn test_text() {
        assert_eq!(parse_text("  milky/chylous "), Some("milky/chylous".into()));
        assert_eq!(parse_text("—"), None);
    }
}
