//! String literal recognition: `string_start`, `string_content` and `string_end`.
//!
//! A literal is lexed as a start token (prefix letters and the opening quote), any number of
//! content tokens, and an end token. Escapes and the `{...}` of format literals are left to the
//! grammar: content stops in front of them and the grammar takes over until the scanner is asked
//! for content again.

use std::ops::ControlFlow;

use coolgen_scan_base::{Delimiter, Quote, TokenKind};

use crate::lexer::Lexer;

/// Scans literal text up to the next break, inside the literal described by `delimiter`.
///
/// Returns `Break(Some(kind))` for a content or end token, `Break(None)` when nothing may be
/// produced here (a break right at the cursor, or a line feed in a single-line literal), and
/// `Continue` if the input ran out before any decision.
///
/// On [`TokenKind::StringEnd`] the caller must pop `delimiter`.
pub(super) fn scan_content<L: Lexer>(lexer: &mut L, delimiter: Delimiter)
-> ControlFlow<Option<TokenKind>> {
	let end_char = delimiter.end_character();
	let mut has_content = false;

	macro_rules! content_so_far {
		() => { ControlFlow::Break(has_content.then_some(TokenKind::StringContent)) };
	}

	while let Some(ch) = lexer.lookahead() {
		if delimiter.is_format() && matches!(ch, '{' | '}') {
			lexer.mark_end();
			return content_so_far!();
		}

		if ch == '\\' {
			if delimiter.is_raw() {
				lexer.eat();
				// the backslash keeps an escaped quote or backslash from closing anything
				if lexer.lookahead() == end_char || lexer.at('\\') {
					lexer.eat();
				}
				// and may also sit in front of a line break
				if lexer.at('\r') {
					lexer.eat();
					if lexer.at('\n') {
						lexer.eat();
					}
				} else if lexer.at('\n') {
					lexer.eat();
				}
				has_content = true;
				continue;
			}

			lexer.mark_end();
			if delimiter.is_bytes() {
				lexer.eat();
				// \N{..}, \u and \U are plain text in byte literals
				if matches!(lexer.lookahead(), Some('N' | 'u' | 'U')) {
					lexer.eat();
					has_content = true;
					continue;
				}
			}
			return content_so_far!();
		}

		if Some(ch) == end_char {
			if delimiter.is_triple() {
				lexer.mark_end();
				lexer.eat();
				if lexer.lookahead() == end_char {
					lexer.eat();
					if lexer.lookahead() == end_char {
						if has_content {
							return ControlFlow::Break(Some(TokenKind::StringContent));
						}
						lexer.eat();
						lexer.mark_end();
						return ControlFlow::Break(Some(TokenKind::StringEnd));
					}
				}
				// one or two quotes are text
				lexer.mark_end();
				return ControlFlow::Break(Some(TokenKind::StringContent));
			}

			if has_content {
				lexer.mark_end();
				return ControlFlow::Break(Some(TokenKind::StringContent));
			}
			lexer.eat();
			lexer.mark_end();
			return ControlFlow::Break(Some(TokenKind::StringEnd));
		}

		if ch == '\n' && has_content && !delimiter.is_triple() {
			return ControlFlow::Break(None);
		}

		lexer.eat();
		has_content = true;
	}

	ControlFlow::Continue(())
}

/// Scans an optional run of prefix letters and an opening quote.
///
/// Returns `Break(Some(delimiter))` once a quote is found, `Break(None)` when prefix letters are
/// not followed by a quote (they are an identifier), and `Continue` when there was neither.
pub(super) fn scan_start<L: Lexer>(lexer: &mut L) -> ControlFlow<Option<Delimiter>> {
	let mut delimiter = Delimiter::new();
	let mut has_prefix = false;

	while let Some(ch) = lexer.lookahead() {
		match ch {
			'f' | 'F' => delimiter.set_format(),
			'r' | 'R' => delimiter.set_raw(),
			'b' | 'B' => delimiter.set_bytes(),
			'u' | 'U' => {}, // accepted, means nothing
			_ => break,
		}
		has_prefix = true;
		lexer.eat();
	}

	let Some(quote) = lexer.lookahead().and_then(|ch| Quote::try_from(ch).ok()) else {
		return match has_prefix {
			true => ControlFlow::Break(None),
			false => ControlFlow::Continue(()),
		};
	};

	delimiter.set_quote(quote);
	lexer.eat();
	lexer.mark_end();

	if quote.can_triple() && lexer.at(quote.as_char()) {
		lexer.eat();
		if lexer.at(quote.as_char()) {
			lexer.eat();
			lexer.mark_end();
			delimiter.set_triple();
		}
		// two quotes are an empty literal; only the first belongs to the start
	}

	ControlFlow::Break(Some(delimiter))
}
