//! Scanner configuration.

use thiserror::Error;

use coolgen_scan_base::Variant;

/// Size of the state buffer the host parser hands to every serialize call.
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// Smallest buffer that can hold the header and a full run of 255 delimiters.
pub const MIN_BUFFER_SIZE: usize = 2 + u8::MAX as usize;

static_assertions::const_assert!(MIN_BUFFER_SIZE <= SERIALIZATION_BUFFER_SIZE);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
	#[error("serialization buffer of {0} bytes is too small (need at least {MIN_BUFFER_SIZE})")]
	BufferTooSmall(usize),
	#[error("serialization buffer of {0} bytes is too large (at most {SERIALIZATION_BUFFER_SIZE})")]
	BufferTooLarge(usize),
}

/// Selects which token families a [`Scanner`](crate::Scanner) runs, and how much room its
/// persisted state may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerConfig {
	pub variant: Variant,
	pub buffer_size: usize,
}

impl ScannerConfig {
	#[inline]
	pub const fn new(variant: Variant) -> Self {
		Self {
			variant,
			buffer_size: SERIALIZATION_BUFFER_SIZE,
		}
	}

	/// Sets the capacity of the host's state buffer.
	///
	/// Only the legacy tail of the state is cut to fit; see
	/// [`ScannerState::serialize`](crate::ScannerState::serialize).
	#[inline]
	#[must_use]
	pub const fn with_buffer_size(mut self, buffer_size: usize) -> Self {
		self.buffer_size = buffer_size;
		self
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		match self.buffer_size {
			n if n < MIN_BUFFER_SIZE => Err(ConfigError::BufferTooSmall(n)),
			n if n > SERIALIZATION_BUFFER_SIZE => Err(ConfigError::BufferTooLarge(n)),
			_ => Ok(()),
		}
	}
}

impl Default for ScannerConfig {
	#[inline(always)]
	fn default() -> Self {
		Self::new(Variant::default())
	}
}

impl From<Variant> for ScannerConfig {
	#[inline]
	fn from(variant: Variant) -> Self {
		Self::new(variant)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_valid() {
		assert_eq!(Ok(()), ScannerConfig::default().validate());
		assert_eq!(Variant::StringAware, ScannerConfig::default().variant);
	}

	#[test]
	fn buffer_bounds() {
		let config = ScannerConfig::new(Variant::TerminatorFocused);
		assert_eq!(Ok(()), config.with_buffer_size(MIN_BUFFER_SIZE).validate());
		assert_eq!(Err(ConfigError::BufferTooSmall(256)), config.with_buffer_size(256).validate());
		assert_eq!(Err(ConfigError::BufferTooLarge(1025)), config.with_buffer_size(1025).validate());
	}
}
