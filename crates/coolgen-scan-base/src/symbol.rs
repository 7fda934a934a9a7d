//! External token kinds and the per-call candidate set.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Every token kind the external scanner knows about, across both grammar variants.
///
/// The discriminant is only used for [`ValidSymbols`] bit positions; host parsers index their
/// candidate tables by [`Variant::externals`] order instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
	/// Sequence number, separators and a line feed closing a statement.
	NoteTerminator = 0,
	/// Optional sequence number and separators closing a block, confirmed by `\n` or `+`.
	BlockTerminator = 1,
	/// Noise and sequence numbers swallowed up to an `AND`.
	BoolAndBreak = 2,
	/// Noise and sequence numbers swallowed up to an `OR`.
	BoolOrBreak = 3,
	StringStart = 4,
	StringContent = 5,
	StringEnd = 6,
	/// Never produced. When the host marks it valid, the parser is recovering from an error.
	ErrorSentinel = 7,
}

impl TokenKind {
	/// Returns the grammar's name for this external.
	pub const fn name(self) -> &'static str {
		match self {
			Self::NoteTerminator => "note_terminator",
			Self::BlockTerminator => "block_terminator",
			Self::BoolAndBreak => "booland_break",
			Self::BoolOrBreak => "boolor_break",
			Self::StringStart => "string_start",
			Self::StringContent => "string_content",
			Self::StringEnd => "string_end",
			Self::ErrorSentinel => "error_sentinel",
		}
	}

	#[inline]
	const fn bit(self) -> u8 {
		1 << self as u8
	}
}

impl fmt::Display for TokenKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}


/// The two grammar configurations the scanner serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
	/// String literal tokenization plus the statement terminator.
	#[default]
	StringAware,
	/// Statement and block terminators plus boolean-operator breaks; no strings.
	TerminatorFocused,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown scanner variant `{0}` (expected `strings` or `terminators`)")]
pub struct VariantError(pub String);

static EXTERNALS_STRING_AWARE: [TokenKind; 5] = [
	TokenKind::NoteTerminator,
	TokenKind::StringStart,
	TokenKind::StringContent,
	TokenKind::StringEnd,
	TokenKind::ErrorSentinel,
];

static EXTERNALS_TERMINATOR_FOCUSED: [TokenKind; 5] = [
	TokenKind::NoteTerminator,
	TokenKind::BlockTerminator,
	TokenKind::BoolAndBreak,
	TokenKind::BoolOrBreak,
	TokenKind::ErrorSentinel,
];

impl Variant {
	/// Returns the grammar's `externals` list for this variant, in declaration order.
	///
	/// Host candidate tables are indexed by position in this slice.
	pub fn externals(self) -> &'static [TokenKind] {
		match self {
			Self::StringAware => &EXTERNALS_STRING_AWARE,
			Self::TerminatorFocused => &EXTERNALS_TERMINATOR_FOCUSED,
		}
	}

	/// Returns `true` if this variant can ever produce `kind`.
	pub fn produces(self, kind: TokenKind) -> bool {
		kind != TokenKind::ErrorSentinel && self.externals().contains(&kind)
	}

	/// Whether `.` belongs to the separator run after a statement terminator's sequence number.
	#[inline]
	pub const fn dot_separates_terminator(self) -> bool {
		matches!(self, Self::TerminatorFocused)
	}
}

impl FromStr for Variant {
	type Err = VariantError;

	fn from_str(input: &str) -> Result<Self, Self::Err> {
		match input {
			"strings" | "string-aware" | "a" | "" => Ok(Self::StringAware),
			"terminators" | "terminator-focused" | "b" => Ok(Self::TerminatorFocused),
			other => Err(VariantError(other.to_owned())),
		}
	}
}


/// The set of token kinds the host parser would accept at the current position.
///
/// This is read-only input to a scan. The [`TokenKind::ErrorSentinel`] bit doubles as the
/// "error recovery" flag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValidSymbols(u8);

impl ValidSymbols {
	/// The empty set. No recognizer matches anything against it.
	#[inline]
	pub const fn none() -> Self {
		Self(0)
	}

	/// Every kind, as a host parser reports during error recovery.
	#[inline]
	pub const fn all() -> Self {
		Self(u8::MAX)
	}

	/// Builds a set from a host table indexed in `variant`'s external order.
	///
	/// Extra trailing flags are ignored; missing ones count as `false`.
	pub fn from_flags(variant: Variant, flags: &[bool]) -> Self {
		variant.externals().iter()
			.zip(flags)
			.filter(|&(_, &valid)| valid)
			.fold(Self::none(), |set, (&kind, _)| set.with(kind))
	}

	/// Returns a copy of this set with `kind` added.
	#[inline]
	#[must_use]
	pub const fn with(self, kind: TokenKind) -> Self {
		Self(self.0 | kind.bit())
	}

	/// Returns a copy of this set with `kind` removed.
	#[inline]
	#[must_use]
	pub const fn without(self, kind: TokenKind) -> Self {
		Self(self.0 & !kind.bit())
	}

	#[inline]
	pub const fn contains(self, kind: TokenKind) -> bool {
		self.0 & kind.bit() != 0
	}

	#[inline]
	pub const fn is_empty(self) -> bool {
		self.0 == 0
	}

	/// Returns `true` while the host parser is recovering from a syntax error.
	#[inline]
	pub const fn is_error_recovery(self) -> bool {
		self.contains(TokenKind::ErrorSentinel)
	}

	/// Returns `true` if `kind` is acceptable and the host is not recovering.
	#[inline]
	pub const fn allows(self, kind: TokenKind) -> bool {
		self.contains(kind) && !self.is_error_recovery()
	}
}

impl FromIterator<TokenKind> for ValidSymbols {
	fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
		iter.into_iter().fold(Self::none(), Self::with)
	}
}

impl fmt::Debug for ValidSymbols {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		const ALL: [TokenKind; 8] = [
			TokenKind::NoteTerminator,
			TokenKind::BlockTerminator,
			TokenKind::BoolAndBreak,
			TokenKind::BoolOrBreak,
			TokenKind::StringStart,
			TokenKind::StringContent,
			TokenKind::StringEnd,
			TokenKind::ErrorSentinel,
		];
		f.debug_set()
			.entries(ALL.iter().copied().filter(|&k| self.contains(k)).map(TokenKind::name))
			.finish()
	}
}
