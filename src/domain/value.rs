//! Numeric check for node values.
//!
//! The tree stores raw tokens. Renderers flag tokens that do not read as numbers,
//! using the same coercion rules a browser applies to `Number(token)`.

/// Coerce a token to a number, or `None` if it is not numeric.
///
/// - surrounding whitespace is ignored, whitespace-only reads as `0`; whitespace
///   is the browser's set (see [`is_js_whitespace`]), not Rust's `char::is_whitespace`
/// - `Infinity` with an optional sign is numeric
/// - `0x`, `0o` and `0b` prefixes are accepted (unsigned only)
/// - `NaN`, `inf` and other spellings are rejected
pub fn numeric_value(token: &str) -> Option<f64> {
    let trimmed = token.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if unsigned == "Infinity" {
        return Some(sign * f64::INFINITY);
    }
    // f64::from_str also takes "inf" and "nan"
    if unsigned
        .chars()
        .any(|c| c.is_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// True if the token reads as a number.
pub fn is_numeric(token: &str) -> bool {
    numeric_value(token).is_some()
}

/// Whitespace and line terminators as trimmed by `Number()`.
///
/// Covers the Unicode space separators plus tab, vertical tab, form feed,
/// U+FEFF and the line terminators. U+0085 is not included.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("5", Some(5.0))]
    #[case(" 42 ", Some(42.0))]
    #[case("-3.5", Some(-3.5))]
    #[case("+7", Some(7.0))]
    #[case(".5", Some(0.5))]
    #[case("1.", Some(1.0))]
    #[case("1e3", Some(1000.0))]
    #[case("0x1F", Some(31.0))]
    #[case("0b101", Some(5.0))]
    #[case("0o17", Some(15.0))]
    #[case("   ", Some(0.0))]
    #[case("-Infinity", Some(f64::NEG_INFINITY))]
    #[case("\u{FEFF}5", Some(5.0))]
    #[case("\u{3000}7\u{2028}", Some(7.0))]
    #[case("\u{A0}\t", Some(0.0))]
    fn given_numeric_token_when_coercing_then_returns_number(
        #[case] token: &str,
        #[case] expected: Option<f64>,
    ) {
        assert_eq!(numeric_value(token), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("NaN")]
    #[case("inf")]
    #[case("infinity")]
    #[case("0x")]
    #[case("0xZZ")]
    #[case("-0x10")]
    #[case("1,5")]
    #[case("e5")]
    #[case("12px")]
    #[case("\u{85}5")]
    #[case("5\u{200B}")]
    fn given_non_numeric_token_when_coercing_then_returns_none(#[case] token: &str) {
        assert_eq!(numeric_value(token), None);
        assert!(!is_numeric(token));
    }
}
