//! Primitive text-to-number conversions for field values.

use core::str;

use bstr::BString;

use crate::error::TokenizeError;

fn conversion_error(text: &[u8]) -> TokenizeError {
    TokenizeError::ConversionError {
        text: BString::from(text),
    }
}

/// Parses a field value as a signed 64-bit integer.
///
/// ASCII whitespace around the value is ignored and a single optional
/// leading sign is accepted; a `0x`/`0X` prefix selects hexadecimal. The whole trimmed
/// text must be consumed by the parse, so empty fields and trailing
/// garbage fail with [`TokenizeError::ConversionError`], as does overflow.
///
/// # Errors
///
/// Returns [`TokenizeError::ConversionError`] carrying the offending text.
///
/// # Examples
///
/// ```rust
/// assert_eq!(rowscan::parse_int(b" 42 "), Ok(42));
/// assert_eq!(rowscan::parse_int(b"-0x10"), Ok(-16));
/// assert!(rowscan::parse_int(b"12abc").is_err());
/// ```
pub fn parse_int(text: &[u8]) -> Result<i64, TokenizeError> {
    let trimmed = text.trim_ascii();
    let s = str::from_utf8(trimmed).map_err(|_| conversion_error(text))?;
    if s.is_empty() {
        return Err(conversion_error(text));
    }

    let (sign, digits) = match s.as_bytes()[0] {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => (1, s),
    };
    // The sign is consumed above; the standard parses below accept one of
    // their own, which would let doubled signs through.
    let parsed = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) if !hex.starts_with(['+', '-']) => i64::from_str_radix(hex, 16),
        None if !digits.starts_with(['+', '-']) => digits.parse::<i64>(),
        _ => return Err(conversion_error(text)),
    };
    match parsed {
        Ok(value) => Ok(sign * value),
        Err(_) => Err(conversion_error(text)),
    }
}

/// Parses a field value as a 64-bit float.
///
/// ASCII whitespace around the value is ignored; the numeric syntax is
/// locale-independent. The whole trimmed text must be consumed by the
/// parse, so empty fields and trailing garbage fail with
/// [`TokenizeError::ConversionError`].
///
/// # Errors
///
/// Returns [`TokenizeError::ConversionError`] carrying the offending text.
///
/// # Examples
///
/// ```rust
/// assert_eq!(rowscan::parse_float(b"2.5e3"), Ok(2500.0));
/// assert!(rowscan::parse_float(b"").is_err());
/// ```
pub fn parse_float(text: &[u8]) -> Result<f64, TokenizeError> {
    let trimmed = text.trim_ascii();
    let s = str::from_utf8(trimmed).map_err(|_| conversion_error(text))?;
    if s.is_empty() {
        return Err(conversion_error(text));
    }
    s.parse::<f64>().map_err(|_| conversion_error(text))
}
