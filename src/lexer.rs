//! The cursor the scanner reads through.
//!
//! A scan never owns its input. The host parser exposes its own position through [`Lexer`], and
//! the scanner only ever peeks one code point ahead, steps over it (as token content or as
//! ignorable noise), and marks where the token it is building ends.
//!
//! # Two cursors
//!
//! Recognizers routinely look past the end of the token they are about to return (a triple
//! quote that turns out to be only two quotes, a `\n` that confirms a terminator). The scan
//! position and the token end are therefore tracked separately: [`Lexer::advance`] moves the
//! former, [`Lexer::mark_end`] pins the latter, and only the last mark before a scan returns
//! counts.

use std::ops::Range;

use coolgen_scan_base::TokenKind;

/// Cursor contract between the scanner and its host parser.
pub trait Lexer {
	/// Returns the code point under the cursor, or `None` at end of input.
	fn lookahead(&self) -> Option<char>;

	/// Steps over the current code point.
	///
	/// With `skip` set, the code point is noise rather than token content, and the token start
	/// moves past it. Does nothing at end of input.
	fn advance(&mut self, skip: bool);

	/// Pins the end of the token being built to the current position.
	fn mark_end(&mut self);

	/// Steps over the current code point as token content.
	#[inline]
	fn eat(&mut self) {
		self.advance(false);
	}

	/// Steps over the current code point as noise.
	#[inline]
	fn skip(&mut self) {
		self.advance(true);
	}

	/// Returns `true` if the code point under the cursor is `ch`.
	#[inline]
	fn at(&self, ch: char) -> bool {
		self.lookahead() == Some(ch)
	}

	/// Skips code points while `pred` holds, returning how many were skipped.
	fn skip_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize
	where Self: Sized {
		let mut count = 0;
		while self.lookahead().is_some_and(&mut pred) {
			self.skip();
			count += 1;
		}
		count
	}
}

impl<L: Lexer + ?Sized> Lexer for &mut L {
	#[inline]
	fn lookahead(&self) -> Option<char> {
		(**self).lookahead()
	}

	#[inline]
	fn advance(&mut self, skip: bool) {
		(**self).advance(skip)
	}

	#[inline]
	fn mark_end(&mut self) {
		(**self).mark_end()
	}
}


/// A recognized token and the byte range it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
	pub kind: TokenKind,
	pub span: Range<usize>,
}

impl Token {
	/// Returns the source text the token covers.
	pub fn text<'s>(&self, source: &'s str) -> &'s str {
		source.get(self.span.clone()).unwrap_or_default()
	}

	/// Returns `true` if the token covers no text. Terminators made only of skipped noise are.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.span.is_empty()
	}
}


/// A [`Lexer`] over a string slice, positioned in byte offsets.
///
/// Each scan runs between [`StrLexer::begin`] and either [`StrLexer::finish`] (the scanner
/// produced a token) or another `begin` (it did not, and anything it stepped over is discarded).
#[derive(Debug, Clone)]
pub struct StrLexer<'a> {
	source: &'a str,
	/// Moves along with every skip; the token never includes noise in front of it
	token_start: usize,
	/// Current read position
	pos: usize,
	/// Last `mark_end` position, if any during this scan
	marked_end: Option<usize>,
}

impl<'a> StrLexer<'a> {
	pub fn new(source: &'a str) -> Self {
		Self {
			source,
			token_start: 0,
			pos: 0,
			marked_end: None,
		}
	}

	#[inline]
	pub fn source(&self) -> &'a str {
		self.source
	}

	/// Returns the current read position.
	#[inline]
	pub fn position(&self) -> usize {
		self.pos
	}

	/// Starts a new scan at `offset`, forgetting anything the previous scan stepped over.
	///
	/// Offsets past the end of the source, or inside a multi-byte code point, read as end of
	/// input.
	pub fn begin(&mut self, offset: usize) {
		self.token_start = offset;
		self.pos = offset;
		self.marked_end = None;
	}

	/// Closes the current scan as a token of `kind`.
	///
	/// The token ends at the last marked position, or at the read position if the scan never
	/// marked one. Noise skipped before the token is not part of its span.
	pub fn finish(&self, kind: TokenKind) -> Token {
		let end = self.marked_end.unwrap_or(self.pos);
		Token {
			kind,
			span: self.token_start.min(end)..end,
		}
	}
}

impl<'a> Lexer for StrLexer<'a> {
	#[inline]
	fn lookahead(&self) -> Option<char> {
		self.source.get(self.pos..)?.chars().next()
	}

	fn advance(&mut self, skip: bool) {
		if let Some(ch) = self.lookahead() {
			self.pos += ch.len_utf8();
		}
		if skip {
			self.token_start = self.pos;
		}
	}

	#[inline]
	fn mark_end(&mut self) {
		self.marked_end = Some(self.pos);
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn walks_code_points() {
		let mut lexer = StrLexer::new("aé\n");
		assert_eq!(Some('a'), lexer.lookahead());
		lexer.eat();
		assert_eq!(Some('é'), lexer.lookahead());
		lexer.eat();
		assert_eq!(3, lexer.position());
		assert!(lexer.at('\n'));
		lexer.eat();
		assert_eq!(None, lexer.lookahead());
		lexer.eat(); // no-op at the end
		assert_eq!(4, lexer.position());
	}

	#[test]
	fn skips_move_token_start() {
		let mut lexer = StrLexer::new("  12x");
		assert_eq!(2, lexer.skip_while(|c| c == ' '));
		lexer.eat();
		lexer.eat();
		lexer.mark_end();
		lexer.eat();
		assert_eq!(2..4, lexer.finish(TokenKind::StringContent).span);
	}

	#[test]
	fn unmarked_scan_ends_at_position() {
		let mut lexer = StrLexer::new("abc");
		lexer.eat();
		lexer.eat();
		let token = lexer.finish(TokenKind::StringContent);
		assert_eq!(0..2, token.span);
		assert_eq!("ab", token.text("abc"));
	}

	#[test]
	fn begin_discards_scan() {
		let mut lexer = StrLexer::new("abc");
		lexer.eat();
		lexer.mark_end();
		lexer.begin(2);
		assert_eq!(Some('c'), lexer.lookahead());
		assert_eq!(2..2, lexer.finish(TokenKind::StringEnd).span);
	}

	#[test]
	fn bad_offsets_read_as_end() {
		let mut lexer = StrLexer::new("é");
		lexer.begin(1);
		assert_eq!(None, lexer.lookahead());
		lexer.begin(10);
		assert_eq!(None, lexer.lookahead());
	}
}
