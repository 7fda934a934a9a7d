//! The one-byte profile of an open string literal.
//!
//! See [`Delimiter`] for more.

use std::fmt;

use arrayvec::ArrayVec;
use ascii::{AsciiChar, AsciiStr};
use thiserror::Error;

/// Namespace for flag bits.
///
/// The bit positions are part of the persisted state format and must never move.
pub mod flags {
	/// The literal is closed by `'`.
	pub const SINGLE_QUOTE : u8 = 1<<0;

	/// The literal is closed by `"`.
	pub const DOUBLE_QUOTE : u8 = 1<<1;

	/// The literal is closed by `` ` ``.
	pub const BACK_QUOTE   : u8 = 1<<2;

	/// Backslashes do not start escapes (`r` prefix).
	pub const RAW          : u8 = 1<<3;

	/// Braces break the literal for an embedded expression (`f` prefix).
	pub const FORMAT       : u8 = 1<<4;

	/// The literal is closed by three quote characters in a row.
	pub const TRIPLE       : u8 = 1<<5;

	/// Byte-string literal (`b` prefix).
	pub const BYTES        : u8 = 1<<6;

	/// Marks the bits holding the closing quote. At most one may be set.
	pub const QUOTE_MASK   : u8 = SINGLE_QUOTE | DOUBLE_QUOTE | BACK_QUOTE;

	/// Never set by the scanner.
	pub const RESERVED     : u8 = 1<<7;
}

/// One of the three characters that can open and close a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
	/// `'`
	Single,
	/// `"`
	Double,
	/// `` ` ``
	Back,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{0:?} is not a string quote character")]
pub struct QuoteError(pub char);

impl Quote {
	/// Returns the quote as an ASCII character.
	pub const fn as_ascii(self) -> AsciiChar {
		match self {
			Self::Single => AsciiChar::Apostrophe,
			Self::Double => AsciiChar::Quotation,
			Self::Back => AsciiChar::Grave,
		}
	}

	#[inline]
	pub fn as_char(self) -> char {
		self.as_ascii().as_char()
	}

	/// Whether the quote may open a triple-quoted literal. Back quotes never do.
	#[inline]
	pub const fn can_triple(self) -> bool {
		!matches!(self, Self::Back)
	}

	const fn flag(self) -> u8 {
		match self {
			Self::Single => flags::SINGLE_QUOTE,
			Self::Double => flags::DOUBLE_QUOTE,
			Self::Back => flags::BACK_QUOTE,
		}
	}
}

impl TryFrom<char> for Quote {
	type Error = QuoteError;

	fn try_from(ch: char) -> Result<Self, Self::Error> {
		match ch {
			'\'' => Ok(Self::Single),
			'"' => Ok(Self::Double),
			'`' => Ok(Self::Back),
			other => Err(QuoteError(other)),
		}
	}
}

impl From<Quote> for char {
	#[inline]
	fn from(src: Quote) -> Self {
		src.as_char()
	}
}


/// The closing character and modifier profile of an open string literal.
///
/// A `Delimiter` is exactly one byte wide, so a run of them can be persisted verbatim. The byte
/// layout is described by the [`flags`] namespace: zero or one quote bit, plus any combination of
/// the four modifier bits.
///
/// The zero value has no quote and stands for "not yet a delimiter": the scanner builds one up
/// while it reads a string prefix and only pushes it once a quote has been seen.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Delimiter(u8);

static_assertions::assert_eq_size!(u8, Delimiter);

/// Reasons a byte is not a valid [`Delimiter`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterError {
	#[error("delimiter byte {0:#04x} has more than one quote bit set")]
	ManyQuotes(u8),
	#[error("delimiter byte {0:#04x} has the reserved bit set")]
	Reserved(u8),
}

impl Delimiter {
	/// Constructs an empty delimiter, with no quote and no modifiers.
	#[inline]
	pub const fn new() -> Self {
		Self(0)
	}

	/// Reinterprets a persisted byte as a delimiter, without validation.
	///
	/// This is the path taken when replaying state the scanner wrote itself. Use
	/// [`Delimiter::try_from`] for bytes of unknown origin.
	#[inline]
	pub const fn from_byte(byte: u8) -> Self {
		Self(byte)
	}

	/// Returns the persisted form of this delimiter.
	#[inline]
	pub const fn as_byte(self) -> u8 {
		self.0
	}

	#[inline]
	pub const fn is_raw(self) -> bool {
		self.0 & flags::RAW != 0
	}

	#[inline]
	pub const fn is_format(self) -> bool {
		self.0 & flags::FORMAT != 0
	}

	#[inline]
	pub const fn is_triple(self) -> bool {
		self.0 & flags::TRIPLE != 0
	}

	#[inline]
	pub const fn is_bytes(self) -> bool {
		self.0 & flags::BYTES != 0
	}

	/// Returns the quote that closes this literal, or `None` if no quote has been set.
	pub const fn quote(self) -> Option<Quote> {
		match self.0 & flags::QUOTE_MASK {
			flags::SINGLE_QUOTE => Some(Quote::Single),
			flags::DOUBLE_QUOTE => Some(Quote::Double),
			flags::BACK_QUOTE => Some(Quote::Back),
			_ => None,
		}
	}

	/// Returns the character that closes this literal, if any.
	#[inline]
	pub fn end_character(self) -> Option<char> {
		self.quote().map(Quote::as_char)
	}

	#[inline]
	pub fn set_raw(&mut self) {
		self.0 |= flags::RAW;
	}

	#[inline]
	pub fn set_format(&mut self) {
		self.0 |= flags::FORMAT;
	}

	#[inline]
	pub fn set_triple(&mut self) {
		self.0 |= flags::TRIPLE;
	}

	#[inline]
	pub fn set_bytes(&mut self) {
		self.0 |= flags::BYTES;
	}

	/// Sets the closing quote, replacing any quote set before.
	#[inline]
	pub fn set_quote(&mut self, quote: Quote) {
		self.0 = (self.0 & !flags::QUOTE_MASK) | quote.flag();
	}
}

impl TryFrom<u8> for Delimiter {
	type Error = DelimiterError;

	fn try_from(byte: u8) -> Result<Self, Self::Error> {
		if byte & flags::RESERVED != 0 {
			return Err(DelimiterError::Reserved(byte));
		}
		if (byte & flags::QUOTE_MASK).count_ones() > 1 {
			return Err(DelimiterError::ManyQuotes(byte));
		}
		Ok(Self(byte))
	}
}

impl From<Delimiter> for u8 {
	#[inline]
	fn from(src: Delimiter) -> Self {
		src.0
	}
}

impl fmt::Debug for Delimiter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Delimiter(")?;
		match self.quote() {
			Some(q) if self.is_triple() => write!(f, "{0}{0}{0}", q.as_char()),
			Some(q) => write!(f, "{}", q.as_char()),
			None => f.write_str("-"),
		}?;

		let mut flag_chars = ArrayVec::<AsciiChar, 3>::new();
		for (set, ch) in [
			(self.is_format(), AsciiChar::f),
			(self.is_raw(), AsciiChar::r),
			(self.is_bytes(), AsciiChar::b),
		] {
			if set {
				flag_chars.push(ch);
			}
		}
		if !flag_chars.is_empty() {
			write!(f, " [{}]", <&AsciiStr>::from(&*flag_chars))?;
		}
		f.write_str(")")
	}
}
