//! Numeric field reading.
//!
//! Lenient reading follows C `atof`: leading whitespace is skipped, the
//! longest numeric prefix is used and anything after it is ignored. A field
//! with no numeric prefix reads as zero. Strict reading accepts only a
//! complete number surrounded by optional whitespace.

/// Reads a field leniently. Never fails.
///
/// ```
/// use batch_tone::input::parse_lenient;
///
/// assert_eq!(parse_lenient("1.5abc"), 1.5);
/// assert_eq!(parse_lenient("abc"), 0.0);
/// ```
pub fn parse_lenient(field: &str) -> f64 {
    leading_number(field).map(|(value, _)| value).unwrap_or(0.0)
}

/// Reads a field strictly, returning None unless it is a whole number.
pub fn parse_strict(field: &str) -> Option<f64> {
    let trimmed = field.trim();
    let (value, end) = leading_number(trimmed)?;
    (end == trimmed.len()).then_some(value)
}

/// Finds the longest numeric prefix after leading whitespace.
///
/// Returns the value and the byte offset just past the prefix.
fn leading_number(s: &str) -> Option<(f64, usize)> {
    let bytes = s.as_bytes();
    let start = bytes
        .iter()
        .position(|b| !is_c_space(*b))
        .unwrap_or(bytes.len());

    let mut i = start;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    if let Some(len) = special_value_len(&s[i..]) {
        let end = i + len;
        return s[start..end].parse().ok().map(|v| (v, end));
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;
    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        frac_digits = count_digits(&bytes[i + 1..]);
        i += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    s[start..i].parse().ok().map(|v| (v, i))
}

/// C `isspace`: ASCII whitespace plus vertical tab.
fn is_c_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b'\x0b'
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of a leading `infinity`, `inf` or `nan`, case-insensitive.
fn special_value_len(s: &str) -> Option<usize> {
    ["infinity", "inf", "nan"]
        .iter()
        .find(|word| {
            s.get(..word.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(word))
        })
        .map(|word| word.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_plain_numbers() {
        assert_eq!(parse_lenient("440"), 440.0);
        assert_eq!(parse_lenient("0.5"), 0.5);
        assert_eq!(parse_lenient("-3.25"), -3.25);
        assert_eq!(parse_lenient("+2"), 2.0);
        assert_eq!(parse_lenient(".5"), 0.5);
        assert_eq!(parse_lenient("5."), 5.0);
        assert_eq!(parse_lenient("1e3"), 1000.0);
        assert_eq!(parse_lenient("2.5E-1"), 0.25);
    }

    #[test]
    fn lenient_uses_longest_prefix() {
        assert_eq!(parse_lenient("1.5abc"), 1.5);
        assert_eq!(parse_lenient("  2"), 2.0);
        assert_eq!(parse_lenient("1.0\n"), 1.0);
        assert_eq!(parse_lenient("1e"), 1.0);
        assert_eq!(parse_lenient("1e+"), 1.0);
        assert_eq!(parse_lenient("3.5.2"), 3.5);
    }

    #[test]
    fn lenient_skips_vertical_tab() {
        assert_eq!(parse_lenient("\x0b2"), 2.0);
        assert_eq!(parse_lenient("\x0c\t\x0b 3.5"), 3.5);
        assert_eq!(parse_strict("\x0b4\x0b"), Some(4.0));
    }

    #[test]
    fn lenient_non_numeric_is_zero() {
        assert_eq!(parse_lenient("abc"), 0.0);
        assert_eq!(parse_lenient(""), 0.0);
        assert_eq!(parse_lenient("   "), 0.0);
        assert_eq!(parse_lenient("-"), 0.0);
        assert_eq!(parse_lenient("."), 0.0);
    }

    #[test]
    fn lenient_special_values() {
        assert_eq!(parse_lenient("inf"), f64::INFINITY);
        assert_eq!(parse_lenient("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_lenient("NaN").is_nan());
        assert_eq!(parse_lenient("info"), f64::INFINITY);
    }

    #[test]
    fn strict_accepts_whole_numbers() {
        assert_eq!(parse_strict("440"), Some(440.0));
        assert_eq!(parse_strict(" 1.0 "), Some(1.0));
        assert_eq!(parse_strict("1.0\r"), Some(1.0));
        assert_eq!(parse_strict("-0.5e1"), Some(-5.0));
    }

    #[test]
    fn strict_rejects_garbage() {
        assert_eq!(parse_strict("abc"), None);
        assert_eq!(parse_strict("1.5abc"), None);
        assert_eq!(parse_strict("1 2"), None);
        assert_eq!(parse_strict(""), None);
    }
}
