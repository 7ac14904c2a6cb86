//! Error types for type-expression parsing

use chumsky::prelude::Simple;
use thiserror::Error;

use crate::diag::lexer::{LexError, Token};

/// Why a type expression could not be turned into a tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No tokens at all
    #[error("empty type expression")]
    Empty,

    /// Characters outside the token set (strict parsing only)
    #[error("{}", describe_lexical(.0))]
    Lexical(Vec<LexError>),

    /// A token sequence matching no production
    #[error(
        "syntax error at offset {}: expected {}, found {}",
        .position,
        describe_expected(.expected),
        describe_found(.found)
    )]
    Syntax {
        position: usize,
        found: Option<Token>,
        expected: Vec<Token>,
    },

    /// Template nesting or scope chains beyond the allowed depth
    #[error("nesting depth {depth} exceeds the limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },
}

impl ParseError {
    /// Keeps the first chumsky error; parsing never continues past it
    pub(crate) fn from_simple(errors: Vec<Simple<Token>>) -> Self {
        let error = match errors.into_iter().next() {
            Some(error) => error,
            None => {
                return ParseError::Syntax {
                    position: 0,
                    found: None,
                    expected: Vec::new(),
                }
            }
        };

        let mut expected: Vec<Token> = error.expected().filter_map(|e| e.clone()).collect();
        expected.sort_by_key(|token| token.to_string());
        expected.dedup();

        ParseError::Syntax {
            position: error.span().start,
            found: error.found().cloned(),
            expected,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }
}

fn describe_lexical(errors: &[LexError]) -> String {
    match errors.first() {
        Some(first) if errors.len() == 1 => first.to_string(),
        Some(first) => format!("{} (and {} more)", first, errors.len() - 1),
        None => "lexical error".to_string(),
    }
}

fn describe_expected(expected: &[Token]) -> String {
    if expected.is_empty() {
        return "something else".to_string();
    }
    expected
        .iter()
        .map(|token| token.kind_name())
        .collect::<Vec<_>>()
        .join(" or ")
}

fn describe_found(found: &Option<Token>) -> String {
    match found {
        Some(token) => token.to_string(),
        None => "end of input".to_string(),
    }
}
