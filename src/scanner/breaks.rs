//! Boolean operator breaks.
//!
//! A condition may continue on the next source line, behind that line's sequence number, with
//! `AND` or `OR`. The break token swallows the line break and numbering noise together with the
//! keyword, so the grammar sees one operator.

use ascii::AsciiChar;
use tracing::trace;

use coolgen_scan_base::{TokenKind, ValidSymbols};

use crate::lexer::Lexer;
use crate::support::{is_digit, is_separator, is_word_char};

static AND: [AsciiChar; 3] = [AsciiChar::A, AsciiChar::N, AsciiChar::D];
static OR: [AsciiChar; 2] = [AsciiChar::O, AsciiChar::R];

/// Recognizes `[ \r\n]* digit* separator*` followed by `AND` or `OR` as a whole word.
///
/// Only kinds present in `valid` are produced. On failure the cursor stays wherever matching
/// stopped, and nothing is marked.
pub(super) fn scan_bool_break<L: Lexer>(lexer: &mut L, valid: ValidSymbols) -> Option<TokenKind> {
	lexer.skip_while(|c| matches!(c, ' ' | '\n' | '\r'));
	lexer.skip_while(is_digit);
	lexer.skip_while(is_separator);

	let (kind, keyword) = match lexer.lookahead() {
		Some('A') => (TokenKind::BoolAndBreak, &AND[..]),
		Some('O') => (TokenKind::BoolOrBreak, &OR[..]),
		_ => return None,
	};
	if !valid.contains(kind) {
		trace!(%kind, "keyword found but not acceptable here");
		return None;
	}

	for &expected in keyword {
		if !lexer.at(expected.as_char()) {
			return None;
		}
		lexer.eat();
	}
	if lexer.lookahead().is_some_and(is_word_char) {
		// ANDX, ORDER: an identifier, not an operator
		return None;
	}

	lexer.mark_end();
	Some(kind)
}
