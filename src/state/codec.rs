//! Byte layout of a persisted [`ScannerState`].
//!
//! ```text
//! byte 0           inside-f-string flag (0 or 1)
//! byte 1           delimiter count N (0..=255)
//! bytes 2..2+N     delimiter bytes, outermost first
//! remaining bytes  legacy indentation levels after the sentinel, one byte each
//! ```
//!
//! An empty buffer stands for a fresh parse. The layout must keep reading buffers written by
//! earlier versions, so fields are never reordered or widened.
//!
//! Two limits are silent by design: more than 255 open literals serialize as the outermost 255,
//! and legacy levels that do not fit the buffer are dropped.

use thiserror::Error;
use tracing::debug;

use coolgen_scan_base::{Delimiter, DelimiterError};

use crate::config::SERIALIZATION_BUFFER_SIZE;

use super::{ScannerState, SerializedState};

/// Reasons [`ScannerState::try_deserialize`] rejects a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
	#[error("flag byte must be 0 or 1, got {0:#04x}")]
	BadFlag(u8),
	#[error("buffer ends before the delimiter count")]
	MissingCount,
	#[error("buffer declares {declared} delimiters but only {available} bytes follow")]
	ShortDelimiters { declared: u8, available: usize },
	#[error("invalid delimiter: {0}")]
	BadDelimiter(#[from] DelimiterError),
	#[error("delimiter byte {0:#04x} has no closing quote")]
	Unquoted(u8),
}

impl ScannerState {
	/// Serializes into a buffer the size of the host's.
	pub fn serialize(&self) -> SerializedState {
		self.serialize_capped(SERIALIZATION_BUFFER_SIZE)
	}

	/// Serializes into at most `capacity` bytes (clamped to the host buffer size).
	pub fn serialize_capped(&self, capacity: usize) -> SerializedState {
		let mut out = SerializedState::from([0u8; SERIALIZATION_BUFFER_SIZE]);
		let len = self.serialize_into(&mut out[..capacity.min(SERIALIZATION_BUFFER_SIZE)]);
		out.truncate(len);
		out
	}

	/// Serializes into `buf`, returning the number of bytes written.
	///
	/// A buffer too short for the two header bytes receives nothing, which replays as a fresh
	/// state.
	pub fn serialize_into(&self, buf: &mut [u8]) -> usize {
		let len = buf.len();
		let [flag, count_byte, rest @ ..] = buf else {
			debug!(len, "state buffer cannot hold a header");
			return 0;
		};

		*flag = u8::from(self.inside_f_string);

		let open = self.delimiters.len();
		let count = open.min(u8::MAX as usize).min(rest.len());
		if count < open {
			debug!(open, kept = count, "delimiter stack truncated in serialized state");
		}
		*count_byte = count as u8; // fits: capped to u8::MAX above

		let (delimiter_bytes, legacy_bytes) = rest.split_at_mut(count);
		for (dst, delimiter) in delimiter_bytes.iter_mut().zip(self.delimiters.as_slice()) {
			*dst = delimiter.as_byte();
		}

		// the sentinel is implied
		let legacy = self.legacy_indents.get(1..).unwrap_or_default();
		let legacy_len = legacy.len().min(legacy_bytes.len());
		if legacy_len < legacy.len() {
			debug!(levels = legacy.len(), kept = legacy_len, "legacy levels truncated in serialized state");
		}
		for (dst, &level) in legacy_bytes.iter_mut().zip(legacy) {
			*dst = level as u8; // layout stores the low byte only
		}

		2 + count + legacy_len
	}

	/// Overwrites this state from a buffer written by [`serialize`](Self::serialize).
	///
	/// An empty buffer resets to a fresh parse. Buffers from anywhere else are not validated, but
	/// never cause a panic: missing bytes read as zero and the delimiter count is clamped to the
	/// bytes present.
	pub fn deserialize(&mut self, buf: &[u8]) {
		self.reset();

		let Some((&flag, rest)) = buf.split_first() else {
			debug!("empty state buffer, starting fresh");
			return;
		};
		self.inside_f_string = flag != 0;

		let (count, rest) = match rest.split_first() {
			Some((&count, rest)) => (count as usize, rest),
			None => (0, rest),
		};
		let (delimiter_bytes, legacy_bytes) = rest.split_at(count.min(rest.len()));

		self.delimiters.extend(delimiter_bytes.iter().copied().map(Delimiter::from_byte));
		self.legacy_indents.extend(legacy_bytes.iter().copied().map(u16::from));
	}

	/// Builds a state from a buffer of unknown origin, validating every field.
	pub fn try_deserialize(buf: &[u8]) -> Result<Self, DecodeError> {
		let mut state = Self::new();

		let Some((&flag, rest)) = buf.split_first() else {
			return Ok(state);
		};
		state.inside_f_string = match flag {
			0 => false,
			1 => true,
			other => return Err(DecodeError::BadFlag(other)),
		};

		let (&count, rest) = rest.split_first().ok_or(DecodeError::MissingCount)?;
		let delimiter_bytes = rest.get(..count as usize).ok_or(DecodeError::ShortDelimiters {
			declared: count,
			available: rest.len(),
		})?;

		for &byte in delimiter_bytes {
			let delimiter = Delimiter::try_from(byte)?;
			if delimiter.quote().is_none() {
				return Err(DecodeError::Unquoted(byte));
			}
			state.delimiters.push(delimiter);
		}

		state.legacy_indents.extend(rest[delimiter_bytes.len()..].iter().copied().map(u16::from));
		Ok(state)
	}
}
