//! Formatting and parsing of `#RRGGBB` hex color codes

use palette::Srgb;
use std::fmt::{self, Display};
use std::num::ParseIntError;
use std::ops::Range;

/// Formats a color as an uppercase `#RRGGBB` hex code.
///
/// Each channel is zero padded to two digits, so the result is always
/// exactly seven characters. Downstream consumers rely on this exact shape.
#[must_use]
pub fn hex(color: Srgb<u8>) -> String {
	format!("#{color:X}")
}

/// Error cases for parsing a hex color code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseHexError {
	/// The code was not exactly six hex digits long
	Length,
	/// A channel was not a valid hexadecimal number
	Digit(ParseIntError),
}

impl Display for ParseHexError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			ParseHexError::Length => write!(f, "Hex color codes must be exactly six digits"),
			ParseHexError::Digit(e) => write!(f, "Invalid hex digit: {e}"),
		}
	}
}

impl std::error::Error for ParseHexError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			ParseHexError::Length => None,
			ParseHexError::Digit(e) => Some(e),
		}
	}
}

/// Parses a `#RRGGBB` hex code into a color.
///
/// The leading `#` is optional and digits may be in either case,
/// but the code must be exactly six digits long.
pub fn parse_hex(code: &str) -> Result<Srgb<u8>, ParseHexError> {
	let code = code.strip_prefix('#').unwrap_or(code);
	if code.len() != 6 {
		return Err(ParseHexError::Length);
	}

	let channel = |range: Range<usize>| -> Result<u8, ParseHexError> {
		// `get` also rejects ranges that split a non-ascii character
		let digits = code.get(range).ok_or(ParseHexError::Length)?;
		u8::from_str_radix(digits, 16).map_err(ParseHexError::Digit)
	};

	Ok(Srgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
