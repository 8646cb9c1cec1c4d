//! Offset field parsing
//!
//! The steps field is free text. It is read the way a browser reads an
//! integer prefix: surrounding whitespace is ignored, an optional sign is
//! accepted, and digits are consumed until the first non-digit. Text with no
//! leading digits reads as 0.

/// Parse a raw offset field value; invalid input yields 0
pub fn parse_steps(raw: &str) -> i32 {
    parse_integer_prefix(raw).unwrap_or(0)
}

/// Integer prefix of `raw`, saturating at the `i32` bounds
pub fn parse_integer_prefix(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = digits.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digit_count == 0 {
        return None;
    }

    let magnitude = digits[..digit_count]
        .bytes()
        .fold(0i64, |acc, b| (acc * 10 + (b - b'0') as i64).min(i64::from(i32::MAX) + 1));
    let value = if negative { -magnitude } else { magnitude };

    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers() {
        assert_eq!(parse_steps("0"), 0);
        assert_eq!(parse_steps("7"), 7);
        assert_eq!(parse_steps("-3"), -3);
        assert_eq!(parse_steps("+5"), 5);
    }

    #[test]
    fn test_whitespace_and_trailing_text() {
        assert_eq!(parse_steps("  4  "), 4);
        assert_eq!(parse_steps("3abc"), 3);
        assert_eq!(parse_steps("2.9"), 2);
    }

    #[test]
    fn test_invalid_reads_as_zero() {
        assert_eq!(parse_steps(""), 0);
        assert_eq!(parse_steps("abc"), 0);
        assert_eq!(parse_steps("-"), 0);
        assert_eq!(parse_steps("--2"), 0);
        assert_eq!(parse_integer_prefix("x1"), None);
    }

    #[test]
    fn test_huge_values_saturate() {
        assert_eq!(parse_steps("99999999999999999999"), i32::MAX);
        assert_eq!(parse_steps("-99999999999999999999"), i32::MIN);
    }
}
