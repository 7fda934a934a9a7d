//! Drives a [`Scanner`] over a string the way a host parser would.

use std::fmt;

use tracing::debug;

use coolgen_scan_base::ValidSymbols;

use crate::{
	config::{ConfigError, ScannerConfig, SERIALIZATION_BUFFER_SIZE},
	lexer::{StrLexer, Token},
	scanner::Scanner,
	state::SerializedState,
	support::HexArray,
};

/// One parse of `source`, one scan per call.
///
/// Every scan starts by replaying the snapshot taken after the last token, as a host does when
/// it resumes an incremental reparse. Text the grammar lexes by itself, such as the expression
/// inside a format literal's braces, is passed over with [`seek`](Self::seek).
pub struct Session<'a> {
	lexer: StrLexer<'a>,
	scanner: Scanner,
	/// Where the next scan starts
	pos: usize,
	snapshot: SerializedState,
}

impl<'a> Session<'a> {
	pub fn new(source: &'a str, config: ScannerConfig) -> Result<Self, ConfigError> {
		let scanner = Scanner::new(config)?;
		Ok(Self {
			lexer: StrLexer::new(source),
			scanner,
			pos: 0,
			snapshot: SerializedState::new(),
		})
	}

	#[inline]
	pub fn source(&self) -> &'a str {
		self.lexer.source()
	}

	/// Returns where the next scan starts.
	#[inline]
	pub fn position(&self) -> usize {
		self.pos
	}

	/// Moves the next scan to `offset`, keeping the scanner state.
	pub fn seek(&mut self, offset: usize) {
		self.pos = offset;
	}

	#[inline]
	pub fn scanner(&self) -> &Scanner {
		&self.scanner
	}

	/// Returns the state snapshot the next scan replays.
	#[inline]
	pub fn snapshot(&self) -> &[u8] {
		&self.snapshot
	}

	/// Restarts from `offset` with a snapshot saved earlier, as after an edit.
	///
	/// Bytes past the host buffer size are ignored.
	pub fn resume(&mut self, offset: usize, snapshot: &[u8]) {
		self.pos = offset;
		self.snapshot.clear();
		self.snapshot.extend(snapshot.iter().copied().take(SERIALIZATION_BUFFER_SIZE));
	}

	/// Scans once at the current position.
	///
	/// On a token, the session moves to its end and snapshots the new state. Otherwise nothing
	/// moves and the host is expected to lex by other means.
	pub fn next_token(&mut self, valid: ValidSymbols) -> Option<Token> {
		self.scanner.deserialize(&self.snapshot);
		self.lexer.begin(self.pos);

		let Some(kind) = self.scanner.scan(&mut self.lexer, valid) else {
			self.lexer.begin(self.pos);
			return None;
		};

		let token = self.lexer.finish(kind);
		debug!(%kind, span = ?token.span, "token");
		self.pos = token.span.end;
		self.snapshot = self.scanner.serialize();
		Some(token)
	}
}

impl<'a> fmt::Debug for Session<'a> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Session")
			.field("pos", &self.pos)
			.field("variant", &self.scanner.variant())
			.field("snapshot", &HexArray(&self.snapshot))
			.finish()
	}
}
