//! Context-sensitive external scanner for the CoolGen 4GL grammar.
//!
//! A table-driven parser cannot tell, from local grammar context alone, where some CoolGen
//! tokens end: a sequence number followed by `!` noise and a newline closes a statement, a
//! boolean operator may sit behind line breaks and a stray sequence number, and string literals
//! carry quote, triple, raw, format and bytes modifiers. The [`Scanner`] decides those tokens
//! from the current input, the set of kinds the parser would accept, and a small amount of state
//! that survives incremental reparses through a byte buffer.
//!
//! The host parser drives everything: it hands the scanner a [`Lexer`] cursor and a
//! [`ValidSymbols`] set, and stores whatever [`Scanner::serialize`] returns next to the parse
//! tree. [`Session`] plays that role over a plain string.

pub mod config;
pub mod lexer;
pub mod scanner;
pub mod session;
pub mod state;
pub(crate) mod support;

pub use coolgen_scan_base::{
	delimiter::{self, Delimiter, DelimiterError, Quote, QuoteError},
	symbol::{TokenKind, ValidSymbols, Variant, VariantError},
};

pub use config::{ConfigError, ScannerConfig, SERIALIZATION_BUFFER_SIZE};
pub use lexer::{Lexer, StrLexer, Token};
pub use scanner::Scanner;
pub use session::Session;
pub use state::{DecodeError, DelimiterStack, ScannerState, SerializedState};
