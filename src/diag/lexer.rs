//! Lexer module for type expressions
//!
//! Tokenizes the type names that compilers quote inside diagnostics, e.g.
//! `std::vector<int,std::alloc>` or `int [with Region = blah]`. The token set
//! is defined with the logos derive macro; the wrapper in [`lexer_impl`] adds
//! span tracking and non-fatal error recovery on top.
//!
//! Recovery
//!
//! A character matching no token is a lexical error. It is logged, recorded and
//! skipped; scanning carries on with the next character, so one bad character
//! never costs the rest of the expression.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, LexError, Span, Tokenized, TypeLexer};
pub use tokens::Token;
