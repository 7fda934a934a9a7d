use core::fmt;
use std::fmt::Write;

/// Decimal digits of a sequence number. Only ASCII digits count.
#[inline]
pub(crate) fn is_digit(ch: char) -> bool {
	ch.is_ascii_digit()
}

/// Noise allowed between a sequence number and what confirms it.
#[inline]
pub(crate) fn is_separator(ch: char) -> bool {
	matches!(ch, ' ' | '!' | '\r')
}

/// Characters that continue an identifier, so a keyword directly before one is not a keyword.
#[inline]
pub(crate) fn is_word_char(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || ch == '_'
}


pub(crate) struct HexArray<'a>(pub &'a [u8]);

impl<'a> fmt::Debug for HexArray<'a> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_char('[')?;
		let mut show_comma = false;
		for &b in self.0 {
			if show_comma {
				f.write_str(", ")?;
			}
			show_comma = true;
			write!(f, "{:02x}", b)?;
		}
		f.write_char(']')
	}
}

impl<'a> fmt::Display for HexArray<'a> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		<Self as fmt::Debug>::fmt(self, f)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn char_classes() {
		assert!("0123456789".chars().all(is_digit));
		assert!(!is_digit('٣')); // Arabic-Indic digit three
		assert!(" !\r".chars().all(is_separator));
		assert!(!is_separator('.'));
		assert!(!is_separator('\n'));
		assert!("aZ9_".chars().all(is_word_char));
		assert!(!is_word_char('-'));
	}

	#[test]
	fn hex_array() {
		assert_eq!("[00, 1f, ff]", format!("{:?}", HexArray(&[0, 0x1f, 0xff])));
		assert_eq!("[]", HexArray(&[]).to_string());
	}
}
