//! Implementation of the type-expression lexer
//!
//! Tokenization itself is handled entirely by logos. [`TypeLexer`] wraps the
//! logos lexer to attach spans and to turn unmatched characters into recorded,
//! non-fatal [`LexError`]s.

use crate::diag::lexer::tokens::Token;
use log::{debug, trace};
use logos::Logos;
use std::ops::Range;
use thiserror::Error;

/// Byte range of a token in the source expression
pub type Span = Range<usize>;

/// A character that matches no token pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot tokenize {found:?} at offset {position}")]
pub struct LexError {
    pub position: usize,
    pub found: char,
}

/// Lazy token stream over one type expression.
///
/// Yields `(Token, Span)` pairs. Characters that match nothing are skipped and
/// collected in [`errors`](TypeLexer::errors). Cloning or calling
/// [`restart`](TypeLexer::restart) gives a fresh pass over the same source.
#[derive(Clone)]
pub struct TypeLexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, Token>,
    errors: Vec<LexError>,
}

impl<'src> TypeLexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            inner: Token::lexer(source),
            errors: Vec::new(),
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Lexical errors seen so far
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Rewinds to the start of the source and forgets recorded errors
    pub fn restart(&mut self) {
        self.inner = Token::lexer(self.source);
        self.errors.clear();
    }
}

impl<'src> Iterator for TypeLexer<'src> {
    type Item = (Token, Span);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(token) => {
                    let span = self.inner.span();
                    trace!("token {} at {:?}", token, span);
                    return Some((token, span));
                }
                Err(()) => {
                    let position = self.inner.span().start;
                    let found = self
                        .source
                        .get(position..)
                        .and_then(|rest| rest.chars().next())
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    debug!("cannot tokenize {:?} at offset {}", found, position);
                    self.errors.push(LexError { position, found });
                }
            }
        }
    }
}

/// Everything the lexer produced for one expression
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tokenized {
    pub tokens: Vec<(Token, Span)>,
    pub errors: Vec<LexError>,
}

impl Tokenized {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// The tokens without their spans
    pub fn tokens_only(&self) -> Vec<Token> {
        self.tokens.iter().map(|(token, _)| token.clone()).collect()
    }
}

/// Convenience function to tokenize a string, collecting tokens and errors
pub fn tokenize(source: &str) -> Tokenized {
    let mut lexer = TypeLexer::new(source);
    let tokens: Vec<(Token, Span)> = lexer.by_ref().collect();
    Tokenized {
        tokens,
        errors: lexer.errors().to_vec(),
    }
}
