//! State that survives from one scan to the next, and across incremental reparses.
//!
//! The host parser keeps a snapshot of this state (see [`codec`]) with every token the scanner
//! produces, and replays it before scanning again from that point.

use std::fmt;

use arrayvec::ArrayVec;

use coolgen_scan_base::Delimiter;

use crate::config::SERIALIZATION_BUFFER_SIZE;

pub mod codec;
pub use codec::DecodeError;

/// A serialized [`ScannerState`], no larger than the host's state buffer.
pub type SerializedState = ArrayVec<u8, SERIALIZATION_BUFFER_SIZE>;

/// Open string literals, innermost last.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DelimiterStack(Vec<Delimiter>);

impl DelimiterStack {
	#[inline]
	pub const fn new() -> Self {
		Self(Vec::new())
	}

	#[inline]
	pub fn push(&mut self, delimiter: Delimiter) {
		self.0.push(delimiter);
	}

	/// Removes the innermost delimiter. Returns `None` if no literal is open.
	#[inline]
	pub fn pop(&mut self) -> Option<Delimiter> {
		self.0.pop()
	}

	/// Returns the innermost open delimiter.
	#[inline]
	pub fn top(&self) -> Option<Delimiter> {
		self.0.last().copied()
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[inline]
	pub fn clear(&mut self) {
		self.0.clear();
	}

	/// Returns the open delimiters, outermost first.
	#[inline]
	pub fn as_slice(&self) -> &[Delimiter] {
		&self.0
	}
}

impl Extend<Delimiter> for DelimiterStack {
	fn extend<I: IntoIterator<Item = Delimiter>>(&mut self, iter: I) {
		self.0.extend(iter);
	}
}

impl FromIterator<Delimiter> for DelimiterStack {
	fn from_iter<I: IntoIterator<Item = Delimiter>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl fmt::Debug for DelimiterStack {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}


/// Everything a [`Scanner`](crate::Scanner) remembers between scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerState {
	/// Open string literals
	delimiters: DelimiterStack,
	/// Set by a format literal's start, cleared by any literal's end
	inside_f_string: bool,
	/// Indentation levels from an older state layout. Nothing pushes to this any more, but
	/// buffers written with it must still replay. Element 0 is always the `0` sentinel.
	legacy_indents: Vec<u16>,
}

impl ScannerState {
	/// Constructs the state of a fresh parse.
	pub fn new() -> Self {
		Self {
			delimiters: DelimiterStack::new(),
			inside_f_string: false,
			legacy_indents: vec![0],
		}
	}

	/// Returns to the state of a fresh parse, keeping allocations.
	pub fn reset(&mut self) {
		self.delimiters.clear();
		self.inside_f_string = false;
		self.legacy_indents.clear();
		self.legacy_indents.push(0);
	}

	#[inline]
	pub fn delimiters(&self) -> &DelimiterStack {
		&self.delimiters
	}

	/// Returns `true` between the start of a format literal and the end of a literal.
	#[inline]
	pub fn is_inside_f_string(&self) -> bool {
		self.inside_f_string
	}

	/// Returns the legacy indentation sequence, sentinel included.
	#[inline]
	pub fn legacy_indents(&self) -> &[u16] {
		&self.legacy_indents
	}

	/// Records a newly opened literal.
	pub(crate) fn open_string(&mut self, delimiter: Delimiter) {
		debug_assert!(delimiter.quote().is_some(), "opened a literal without a quote");
		self.delimiters.push(delimiter);
		self.inside_f_string = delimiter.is_format();
	}

	/// Forgets the innermost literal once its closing quote has been read.
	pub(crate) fn close_string(&mut self) -> Option<Delimiter> {
		self.inside_f_string = false;
		self.delimiters.pop()
	}
}

impl Default for ScannerState {
	#[inline(always)]
	fn default() -> Self {
		Self::new()
	}
}
