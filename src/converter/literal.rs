//! Hexadecimal literal parsing and decimal rendering
//!
//! A literal may be surrounded by whitespace and may carry a `0x`/`0X`
//! prefix. Everything else that is not a hexadecimal digit is rejected.

use num_bigint::BigUint;
use num_traits::Num;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{FLOAT_WIDTH_BYTES, HEX_PREFIXES};
use crate::converter::ConversionMode;
use crate::errors::{malformed_literal_error, Result};

/// Extract the hexadecimal digits of a literal
///
/// # Errors
/// Returns a malformed literal error if the text is empty or contains a
/// character that is not a hexadecimal digit.
pub fn extract_digits(text: &str) -> Result<&str> {
    static HEX_LITERAL: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?:0[xX])?([0-9a-fA-F]+)$")
            .expect("Failed to compile regex pattern for HEX_LITERAL")
    });

    let trimmed = text.trim();
    if let Some(digits) = HEX_LITERAL.captures(trimmed).and_then(|c| c.get(1)) {
        return Ok(digits.as_str());
    }

    Err(malformed_literal_error(text, &describe_mismatch(trimmed)))
}

fn describe_mismatch(trimmed: &str) -> String {
    let digits = HEX_PREFIXES
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed);

    match digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        Some(c) => format!("invalid hexadecimal digit '{c}'"),
        None => "no digits found".to_string(),
    }
}

/// Parse a hexadecimal literal into an unbounded unsigned integer
pub fn parse_integer(text: &str) -> Result<BigUint> {
    let digits = extract_digits(text)?;
    BigUint::from_str_radix(digits, 16)
        .map_err(|e| malformed_literal_error(text, &e.to_string()))
}

/// Parse a hexadecimal literal holding an 8-byte big-endian double
pub fn parse_float(text: &str) -> Result<f64> {
    let digits = extract_digits(text)?;
    let bytes = hex::decode(digits).map_err(|e| malformed_literal_error(text, &e.to_string()))?;

    let bytes: [u8; FLOAT_WIDTH_BYTES] = bytes.try_into().map_err(|bytes: Vec<u8>| {
        malformed_literal_error(
            text,
            &format!(
                "expected {FLOAT_WIDTH_BYTES} bytes for a double, found {}",
                bytes.len()
            ),
        )
    })?;

    Ok(f64::from_be_bytes(bytes))
}

/// Render a double in its shortest form that reads back to the same value
///
/// Whole numbers keep a trailing `.0` so they are not mistaken for integers.
/// Exponents are signed and at least two digits wide (`1e+16`, `1e-05`), and
/// NaN is written as `nan`.
pub fn render_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let rendered = format!("{value:?}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => rendered,
    }
}

/// Convert one line of text according to the given mode
///
/// The line terminator must already be stripped.
///
/// # Examples
/// ```
/// use hex2dec::converter::{convert_line, ConversionMode};
///
/// assert_eq!(convert_line("ff", ConversionMode::Integer).unwrap(), "255");
/// assert_eq!(convert_line("3ff0000000000000", ConversionMode::Float).unwrap(), "1.0");
/// ```
pub fn convert_line(text: &str, mode: ConversionMode) -> Result<String> {
    match mode {
        ConversionMode::Integer => parse_integer(text).map(|value| value.to_str_radix(10)),
        ConversionMode::Float => parse_float(text).map(render_float),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn integer(text: &str) -> String {
        convert_line(text, ConversionMode::Integer).unwrap()
    }

    #[test]
    fn test_convert_integer_scenarios() {
        assert_eq!(integer("ff"), "255");
        assert_eq!(integer("0"), "0");
        assert_eq!(integer("1a"), "26");
        assert_eq!(integer("2b"), "43");
    }

    #[test]
    fn test_convert_integer_case_insensitive() {
        assert_eq!(integer("DEADBEEF"), "3735928559");
        assert_eq!(integer("deadBEEF"), "3735928559");
    }

    #[test]
    fn test_convert_integer_leading_zeros_and_prefix() {
        assert_eq!(integer("00ff"), "255");
        assert_eq!(integer("0xff"), "255");
        assert_eq!(integer("0XFF"), "255");
        assert_eq!(integer("  ff\t"), "255");
    }

    #[test]
    fn test_convert_integer_unbounded() {
        assert_eq!(
            integer(&"f".repeat(34)),
            "87112285931760246646623899502532662132735"
        );
        assert_eq!(
            integer(&format!("1{}", "0".repeat(32))),
            "340282366920938463463374607431768211456"
        );
    }

    #[test]
    fn test_integer_round_trip() {
        for text in ["1", "ff", "deadbeef", "123456789abcdef0123456789abcdef"] {
            let value = parse_integer(text).unwrap();
            assert_eq!(value.to_str_radix(16), text);
        }
    }

    #[test]
    fn test_reject_invalid_digit() {
        let error = convert_line("g1", ConversionMode::Integer).unwrap_err();
        match error {
            Error::MalformedLiteral {
                content, detail, ..
            } => {
                assert_eq!(content, "g1");
                assert_eq!(detail, "invalid hexadecimal digit 'g'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_reject_empty_and_bare_prefix() {
        for text in ["", "   ", "0x"] {
            let error = convert_line(text, ConversionMode::Integer).unwrap_err();
            assert!(
                format!("{error}").contains("no digits found"),
                "unexpected message for {text:?}: {error}"
            );
        }
    }

    #[test]
    fn test_reject_sign_separator_and_interior_space() {
        for text in ["-ff", "+ff", "f_f", "f f"] {
            assert!(
                convert_line(text, ConversionMode::Integer).is_err(),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_convert_float() {
        let float = |text| convert_line(text, ConversionMode::Float).unwrap();
        assert_eq!(float("3ff0000000000000"), "1.0");
        assert_eq!(float("4000000000000000"), "2.0");
        assert_eq!(float("c000000000000000"), "-2.0");
        assert_eq!(float("400921fb54442d18"), "3.141592653589793");
        assert_eq!(float("0x0000000000000000"), "0.0");
        assert_eq!(float("3f1a36e2eb1c432d"), "0.0001");
    }

    #[test]
    fn test_convert_float_exponent_form() {
        let float = |text| convert_line(text, ConversionMode::Float).unwrap();
        assert_eq!(float("4341c37937e08000"), "1e+16");
        assert_eq!(float("c341c37937e08000"), "-1e+16");
        assert_eq!(float("3ee4f8b588e368f1"), "1e-05");
        assert_eq!(float("54b249ad2594c37d"), "1e+100");
    }

    #[test]
    fn test_float_special_values() {
        assert!(parse_float("7ff8000000000000").unwrap().is_nan());
        assert_eq!(parse_float("7ff0000000000000").unwrap(), f64::INFINITY);

        let float = |text| convert_line(text, ConversionMode::Float).unwrap();
        assert_eq!(float("7ff8000000000000"), "nan");
        assert_eq!(float("7ff0000000000000"), "inf");
        assert_eq!(float("fff0000000000000"), "-inf");
    }

    #[test]
    fn test_render_float_pads_exponent() {
        assert_eq!(render_float(1.5e-7), "1.5e-07");
        assert_eq!(render_float(2.5e300), "2.5e+300");
        assert_eq!(render_float(123.25), "123.25");
    }

    #[test]
    fn test_reject_float_with_wrong_width() {
        let error = convert_line("3ff0", ConversionMode::Float).unwrap_err();
        assert!(format!("{error}").contains("expected 8 bytes for a double, found 2"));

        // Odd number of digits cannot form whole bytes
        assert!(convert_line("3ff000000000000", ConversionMode::Float).is_err());
    }
}
