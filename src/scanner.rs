//! The scanner proper: one decision per lexer position.

use std::ops::ControlFlow;

use tracing::{debug, trace};

use coolgen_scan_base::{TokenKind, ValidSymbols, Variant};

use crate::{
	config::{ConfigError, ScannerConfig},
	lexer::Lexer,
	state::{DecodeError, ScannerState, SerializedState},
};

mod breaks;
mod strings;
mod terminators;

/// The external scanner of one parse.
///
/// Token families are tried in a fixed order, and the first to reach a decision wins, whether
/// that decision is a token or a refusal. Families the host did not ask for are never tried, so
/// a scan against an empty [`ValidSymbols`] reads nothing.
///
/// | variant | order |
/// |---|---|
/// | [`StringAware`](Variant::StringAware) | content/end, start, note terminator |
/// | [`TerminatorFocused`](Variant::TerminatorFocused) | note terminator, block terminator, boolean break |
#[derive(Debug, Clone)]
pub struct Scanner {
	config: ScannerConfig,
	state: ScannerState,
}

impl Scanner {
	pub fn new(config: ScannerConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self {
			config,
			state: ScannerState::new(),
		})
	}

	/// Constructs a scanner for `variant` with the default buffer size.
	pub fn with_variant(variant: Variant) -> Self {
		Self {
			config: ScannerConfig::new(variant),
			state: ScannerState::new(),
		}
	}

	#[inline]
	pub fn variant(&self) -> Variant {
		self.config.variant
	}

	#[inline]
	pub fn config(&self) -> &ScannerConfig {
		&self.config
	}

	#[inline]
	pub fn state(&self) -> &ScannerState {
		&self.state
	}

	/// Decides the token at the lexer's position.
	///
	/// Returns the kind of token produced, its end pinned with [`Lexer::mark_end`]. `None` means
	/// the host should fall back to its own lexing; whatever the lexer stepped over is then
	/// discarded.
	pub fn scan<L: Lexer>(&mut self, lexer: &mut L, valid: ValidSymbols) -> Option<TokenKind> {
		let decision = match self.config.variant {
			Variant::StringAware => self.scan_string_aware(lexer, valid),
			Variant::TerminatorFocused => self.scan_terminator_focused(lexer, valid),
		};
		trace!(
			variant = ?self.config.variant,
			?valid,
			?decision,
			open = self.state.delimiters().len(),
			"scan"
		);
		decision
	}

	fn scan_string_aware<L: Lexer>(&mut self, lexer: &mut L, valid: ValidSymbols)
	-> Option<TokenKind> {
		if valid.allows(TokenKind::StringContent) && lexer.lookahead().is_some() {
			if let Some(delimiter) = self.state.delimiters().top() {
				match strings::scan_content(lexer, delimiter) {
					ControlFlow::Break(Some(TokenKind::StringEnd)) => {
						self.state.close_string();
						return Some(TokenKind::StringEnd);
					},
					ControlFlow::Break(decision) => return decision,
					ControlFlow::Continue(()) => {}, // ran out of input
				}
			}
		}

		if valid.allows(TokenKind::StringStart) && lexer.lookahead().is_some() {
			match strings::scan_start(lexer) {
				ControlFlow::Break(Some(delimiter)) => {
					trace!(?delimiter, "string opened");
					self.state.open_string(delimiter);
					return Some(TokenKind::StringStart);
				},
				ControlFlow::Break(None) => return None, // prefix letters are an identifier
				ControlFlow::Continue(()) => {},
			}
		}

		self.try_note_terminator(lexer, valid)
	}

	fn scan_terminator_focused<L: Lexer>(&mut self, lexer: &mut L, valid: ValidSymbols)
	-> Option<TokenKind> {
		// a token made only of skipped noise ends where it starts
		lexer.mark_end();

		if let found @ Some(_) = self.try_note_terminator(lexer, valid) {
			return found;
		}

		if valid.allows(TokenKind::BlockTerminator) && terminators::scan_block_terminator(lexer) {
			return Some(TokenKind::BlockTerminator);
		}

		if valid.allows(TokenKind::BoolAndBreak) || valid.allows(TokenKind::BoolOrBreak) {
			return breaks::scan_bool_break(lexer, valid);
		}

		None
	}

	fn try_note_terminator<L: Lexer>(&self, lexer: &mut L, valid: ValidSymbols)
	-> Option<TokenKind> {
		let dot_separates = self.config.variant.dot_separates_terminator();
		(valid.allows(TokenKind::NoteTerminator)
			&& terminators::scan_note_terminator(lexer, dot_separates))
			.then_some(TokenKind::NoteTerminator)
	}

	/// Snapshots the persisted state, within the configured buffer size.
	pub fn serialize(&self) -> SerializedState {
		self.state.serialize_capped(self.config.buffer_size)
	}

	/// Writes the persisted state into the host's buffer, returning the length written.
	pub fn serialize_into(&self, buf: &mut [u8]) -> usize {
		let len = buf.len().min(self.config.buffer_size);
		self.state.serialize_into(&mut buf[..len])
	}

	/// Replays a snapshot from [`serialize`](Self::serialize). An empty one starts a fresh parse.
	pub fn deserialize(&mut self, buf: &[u8]) {
		self.state.deserialize(buf);
	}

	/// Replays a snapshot of unknown origin. On error, the current state is kept.
	pub fn try_deserialize(&mut self, buf: &[u8]) -> Result<(), DecodeError> {
		self.state = ScannerState::try_deserialize(buf).map_err(|e| {
			debug!(%e, "rejected state buffer");
			e
		})?;
		Ok(())
	}

	/// Forgets all open literals.
	pub fn reset(&mut self) {
		self.state.reset();
	}
}

impl Default for Scanner {
	#[inline]
	fn default() -> Self {
		Self::with_variant(Variant::default())
	}
}
