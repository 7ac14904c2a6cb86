//! Main module for diagtree library functionality
//!
//! Components, leaf to root:
//!
//!     lexer       type-expression tokens (logos)
//!     brackets    `<...>` group decomposition, a pre-pass for the parser
//!     parser      type-expression grammar (chumsky)
//!     classifier  ordered line-pattern cascade
//!     annotator   quoted-span extraction and splicing into message bodies
//!
//! The processor drives them over a whole captured run and the formats module
//! renders the resulting tree.

pub mod annotator;
pub mod ast;
pub mod brackets;
pub mod classifier;
pub mod config;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod testing;
