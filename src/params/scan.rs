//! Leading-number scanning shared by the parameter grammars.

/// Parse the integer at the start of `s`.
///
/// Leading whitespace and an optional `+`/`-` sign are accepted, then as many
/// ASCII digits as follow. Anything after the digits is ignored, so `"12px"`
/// scans as `12`. Returns `None` when no digit follows the sign or the value
/// does not fit in an `i64`.
///
/// # Example
///
/// ```
/// use iviewer::params::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("-3|0:255"), Some(-3));
/// assert_eq!(parse_int_prefix("abc"), None);
/// ```
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let digits = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }

    let sign_len = s.len() - unsigned.len();
    s[..sign_len + digits].parse().ok()
}

/// Parse the real number at the start of `s`.
///
/// Accepts leading whitespace, an optional sign, digits with an optional
/// fraction (`1.`, `.5`, `0.25`) and an optional exponent. Anything after the
/// number is ignored, so `"0.5px"` scans as `0.5`. Returns `None` when no
/// digit is found before the exponent.
///
/// # Example
///
/// ```
/// use iviewer::params::parse_real_prefix;
///
/// assert_eq!(parse_real_prefix("0.5)"), Some(0.5));
/// assert_eq!(parse_real_prefix(".25e1x"), Some(2.5));
/// assert_eq!(parse_real_prefix("e5"), None);
/// ```
pub fn parse_real_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer_digits = count_digits(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(end + 1);
        end += 1 + fraction_digits;
    }
    if integer_digits + fraction_digits == 0 {
        return None;
    }

    // The exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_digits = count_digits(end + 1 + sign);
        if exponent_digits > 0 {
            end += 1 + sign + exponent_digits;
        }
    }

    s[..end].parse().ok()
}
