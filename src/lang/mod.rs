/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of calculator
expressions. Identifiers are resolved against the variable store while
lexing, so an unknown name is reported before any parsing happens.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::Ident;
pub use lex::lex;
pub use lex::Spanned;
pub use parse::parse;

/// Character range of a token or expression in the entered line.
pub type Column = std::ops::Range<usize>;

/// Largest number of tokens a single line may produce.
pub const MAX_TOKENS: usize = 100;

/// Longest identifier accepted by the lexer and by assignments.
pub const MAX_IDENT_LEN: usize = 31;
