//! Token-level parsing for the coordinate matrix text format
//!
//! Pure functions over single lines with no I/O. Failures are reported as a
//! [`FormatErrorKind`]; the caller attaches the line number.

use crate::format::constants::{CLOSE_PAREN, FIELD_SEPARATOR, HEADER_SEPARATOR, OPEN_PAREN};
use crate::FormatErrorKind;

/// Parse a header line of the form `key=integer`
///
/// The key is not inspected. The text between the first `=` and the next
/// `=` (or the end of the line) must be a non-negative integer, optionally
/// surrounded by whitespace, so `rows=3=4` reads as 3.
pub fn parse_header(line: &str) -> Result<usize, FormatErrorKind> {
    let value = line
        .split(HEADER_SEPARATOR)
        .nth(1)
        .ok_or(FormatErrorKind::InvalidHeader)?;

    parse_usize(value.trim()).ok_or(FormatErrorKind::InvalidHeader)
}

/// Parse a coordinate triple of the form `(row, col, value)`
///
/// Whitespace is allowed around each integer. Each integer is an optional
/// `-` followed by ASCII digits and must fit in an `i64`.
pub fn parse_triple(line: &str) -> Result<(i64, i64, i64), FormatErrorKind> {
    let inner = line
        .trim()
        .strip_prefix(OPEN_PAREN)
        .and_then(|rest| rest.strip_suffix(CLOSE_PAREN))
        .ok_or(FormatErrorKind::InvalidEntry)?;

    let mut fields = inner.split(FIELD_SEPARATOR);
    let mut next_field = || {
        fields
            .next()
            .and_then(|field| parse_i64(field.trim()))
            .ok_or(FormatErrorKind::InvalidEntry)
    };

    let row = next_field()?;
    let col = next_field()?;
    let value = next_field()?;

    if fields.next().is_some() {
        return Err(FormatErrorKind::InvalidEntry);
    }

    Ok((row, col, value))
}

/// Parse a usize from ASCII digits with overflow checking
fn parse_usize(s: &str) -> Option<usize> {
    if s.is_empty() {
        return None;
    }

    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }

        let digit = (byte - b'0') as usize;
        result = result.checked_mul(10)?.checked_add(digit)?;
    }

    Some(result)
}

/// Parse a signed i64 with an optional leading `-`
///
/// Negative values accumulate downwards so `i64::MIN` is accepted.
fn parse_i64(s: &str) -> Option<i64> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    if digits.is_empty() {
        return None;
    }

    let mut result: i64 = 0;

    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }

        let digit = (byte - b'0') as i64;
        result = result.checked_mul(10)?;
        result = if negative {
            result.checked_sub(digit)?
        } else {
            result.checked_add(digit)?
        };
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        assert_eq!(parse_header("rows=3"), Ok(3));
        assert_eq!(parse_header("cols = 12 "), Ok(12));
        assert_eq!(parse_header("anything=0"), Ok(0));
        assert_eq!(parse_header("=7"), Ok(7));
        assert_eq!(parse_header("rows=3=4"), Ok(3));
        assert_eq!(parse_header("rows= 5 ="), Ok(5));

        // Invalid cases
        assert_eq!(parse_header("rows"), Err(FormatErrorKind::InvalidHeader));
        assert_eq!(parse_header("rows="), Err(FormatErrorKind::InvalidHeader));
        assert_eq!(parse_header("rows=abc"), Err(FormatErrorKind::InvalidHeader));
        assert_eq!(parse_header("rows=-1"), Err(FormatErrorKind::InvalidHeader));
        assert_eq!(parse_header("rows=1.5"), Err(FormatErrorKind::InvalidHeader));
    }

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple("(0,0,5)"), Ok((0, 0, 5)));
        assert_eq!(parse_triple("(1, 1, -3)"), Ok((1, 1, -3)));
        assert_eq!(parse_triple("  ( 2 ,3 , 4 )  "), Ok((2, 3, 4)));
        assert_eq!(parse_triple("(-1,-2,-3)"), Ok((-1, -2, -3)));

        // Invalid cases
        assert_eq!(parse_triple("(1,2)"), Err(FormatErrorKind::InvalidEntry));
        assert_eq!(parse_triple("(1,2,3,4)"), Err(FormatErrorKind::InvalidEntry));
        assert_eq!(parse_triple("1,2,3"), Err(FormatErrorKind::InvalidEntry));
        assert_eq!(parse_triple("(1,2,3"), Err(FormatErrorKind::InvalidEntry));
        assert_eq!(parse_triple("(a,2,3)"), Err(FormatErrorKind::InvalidEntry));
        assert_eq!(parse_triple("(1,,3)"), Err(FormatErrorKind::InvalidEntry));
        assert_eq!(parse_triple("(1,2,3.0)"), Err(FormatErrorKind::InvalidEntry));
        assert_eq!(parse_triple("(1,2,--3)"), Err(FormatErrorKind::InvalidEntry));
        assert_eq!(parse_triple("(1,2,-)"), Err(FormatErrorKind::InvalidEntry));
        assert_eq!(parse_triple("(1,2,+4)"), Err(FormatErrorKind::InvalidEntry));
        assert_eq!(parse_triple("(1,2,- 4)"), Err(FormatErrorKind::InvalidEntry));
    }

    #[test]
    fn test_parse_usize() {
        assert_eq!(parse_usize("0"), Some(0));
        assert_eq!(parse_usize("123"), Some(123));

        // Invalid cases
        assert_eq!(parse_usize(""), None);
        assert_eq!(parse_usize("12a"), None);
        assert_eq!(parse_usize("-123"), None);
        assert_eq!(parse_usize("99999999999999999999999"), None);
    }

    #[test]
    fn test_parse_i64_limits() {
        assert_eq!(parse_i64("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_i64("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_i64("9223372036854775808"), None);
        assert_eq!(parse_i64("-9223372036854775809"), None);
        assert_eq!(parse_i64("+5"), None);
        assert_eq!(parse_i64("-"), None);
        assert_eq!(parse_i64(""), None);
    }
}
