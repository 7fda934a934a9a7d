//! Plain data shared between the CoolGen external scanner and its hosts.
//!
//! Nothing in here scans text. The types describe what the scanner persists
//! ([`Delimiter`]) and what it talks about with its host ([`TokenKind`],
//! [`Variant`], [`ValidSymbols`]).

pub mod delimiter;
pub mod symbol;

pub use delimiter::{Delimiter, DelimiterError, Quote, QuoteError};
pub use symbol::{TokenKind, ValidSymbols, Variant, VariantError};
