//! Statement and block terminators.
//!
//! CoolGen source lines end in a sequence number and `!` padding. Everything a terminator steps
//! over is skipped rather than eaten, so a successful terminator covers no text; it only moves
//! the parser past the line.

use crate::lexer::Lexer;
use crate::support::{is_digit, is_separator};

/// Recognizes `[ ]* digit+ separator* \n`.
///
/// With `dot_separates`, `.` also counts as a separator. On failure, any skipped noise stays
/// skipped.
pub(super) fn scan_note_terminator<L: Lexer>(lexer: &mut L, dot_separates: bool) -> bool {
	lexer.skip_while(|c| c == ' ');

	if lexer.skip_while(is_digit) == 0 {
		return false;
	}
	lexer.skip_while(|c| is_separator(c) || (dot_separates && c == '.'));

	if !lexer.at('\n') {
		return false;
	}
	lexer.skip();
	lexer.mark_end();
	true
}

/// Recognizes `[ ]* digit* separator*` confirmed by `\n` (skipped) or `+` (left in place).
pub(super) fn scan_block_terminator<L: Lexer>(lexer: &mut L) -> bool {
	lexer.skip_while(|c| c == ' ');
	lexer.skip_while(is_digit);
	lexer.skip_while(is_separator);

	match lexer.lookahead() {
		Some('\n') => {
			lexer.skip();
			lexer.mark_end();
			true
		},
		Some('+') => {
			lexer.mark_end();
			true
		},
		_ => false,
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	use crate::lexer::StrLexer;

	/// Runs `scan` over `input`; returns whether it matched and where the cursor stopped.
	fn run<'a>(input: &'a str, scan: impl FnOnce(&mut StrLexer<'a>) -> bool) -> (bool, usize) {
		let mut lexer = StrLexer::new(input);
		let matched = scan(&mut lexer);
		(matched, lexer.position())
	}

	#[test]
	fn note_terminator() {
		assert_eq!((true, 8), run("  12 ! \nX", |l| scan_note_terminator(l, false)));
		assert_eq!((true, 5), run("7!\r!\n", |l| scan_note_terminator(l, false)));
	}

	#[test]
	fn note_terminator_needs_digits() {
		assert_eq!((false, 2), run("  !! \n", |l| scan_note_terminator(l, false)));
		assert_eq!((false, 0), run("\n", |l| scan_note_terminator(l, false)));
	}

	#[test]
	fn note_terminator_needs_line_feed() {
		assert_eq!((false, 4), run("12 !x\n", |l| scan_note_terminator(l, false)));
		assert_eq!((false, 3), run("12 ", |l| scan_note_terminator(l, false)));
	}

	#[test]
	fn dots_in_separator_run() {
		assert_eq!((false, 3), run("12 . \n", |l| scan_note_terminator(l, false)));
		assert_eq!((true, 6), run("12 . \n", |l| scan_note_terminator(l, true)));
	}

	#[test]
	fn terminator_span_is_empty() {
		let mut lexer = StrLexer::new(" 5\n");
		assert!(scan_note_terminator(&mut lexer, false));
		let token = lexer.finish(coolgen_scan_base::TokenKind::NoteTerminator);
		assert_eq!(3..3, token.span);
	}

	#[test]
	fn block_terminator() {
		assert_eq!((true, 7), run("  12 !\n", scan_block_terminator));
		// digits are optional here
		assert_eq!((true, 3), run(" !\n", scan_block_terminator));
		assert_eq!((true, 1), run("\n", scan_block_terminator));
	}

	#[test]
	fn block_continuation() {
		let mut lexer = StrLexer::new(" 3 +x");
		assert!(scan_block_terminator(&mut lexer));
		assert_eq!(Some('+'), lexer.lookahead());
		assert_eq!(3..3, lexer.finish(coolgen_scan_base::TokenKind::BlockTerminator).span);
	}

	#[test]
	fn block_terminator_rejects() {
		assert_eq!((false, 3), run(" 3 x\n", scan_block_terminator));
		assert_eq!((false, 0), run("", scan_block_terminator));
	}
}
