//! Lenient score parsing.
//!
//! Score inputs never fail. Text is read as leading whitespace, an optional
//! sign, then the longest run of ASCII digits. Anything after the digits is
//! ignored. No digits means 0. Out-of-range values saturate.

/// Parse a raw score input.
///
/// ```
/// use card_scorer::core::parse_score;
///
/// assert_eq!(parse_score("42"), 42);
/// assert_eq!(parse_score("abc"), 0);
/// assert_eq!(parse_score("-7"), -7);
/// assert_eq!(parse_score("12pts"), 12);
/// ```
#[must_use]
pub fn parse_score(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }

    if seen {
        value
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_score("0"), 0);
        assert_eq!(parse_score("42"), 42);
        assert_eq!(parse_score("999"), 999);
        assert_eq!(parse_score("1500"), 1500);
    }

    #[test]
    fn test_signs() {
        assert_eq!(parse_score("-15"), -15);
        assert_eq!(parse_score("+15"), 15);
        assert_eq!(parse_score("-"), 0);
        assert_eq!(parse_score("+"), 0);
        assert_eq!(parse_score("--3"), 0);
    }

    #[test]
    fn test_non_numeric_is_zero() {
        assert_eq!(parse_score("abc"), 0);
        assert_eq!(parse_score(""), 0);
        assert_eq!(parse_score("   "), 0);
        assert_eq!(parse_score("x12"), 0);
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        assert_eq!(parse_score("42abc"), 42);
        assert_eq!(parse_score("3.9"), 3);
        assert_eq!(parse_score("-2.5"), -2);
        assert_eq!(parse_score("7 8"), 7);
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(parse_score("  12"), 12);
        assert_eq!(parse_score("\t-4"), -4);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(parse_score("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_score("-99999999999999999999999"), i64::MIN);
    }
}
