//! Public API for the parser.

use chumsky::prelude::*;
use chumsky::{BoxedParser, Stream};
use log::debug;

use crate::diag::ast::Node;
use crate::diag::brackets::MAX_NESTING_DEPTH;
use crate::diag::lexer::{tokenize, Span, Token, Tokenized};
use crate::diag::parser::error::ParseError;
use crate::diag::parser::grammar::{blurb, ParserError};

/// Ceiling on the height of any type tree, however the template limit is set
pub const MAX_TREE_DEPTH: usize = 256;

thread_local! {
    // Built once per thread; chumsky's recursive parsers are not `Sync`
    static GRAMMAR: BoxedParser<'static, Token, Node, ParserError> = blurb().boxed();
}

/// Parse one type expression, skipping characters the lexer can't match
pub fn parse_type(source: &str) -> Result<Node, ParseError> {
    parse_type_with_limit(source, MAX_NESTING_DEPTH)
}

/// Like [`parse_type`] with an explicit template nesting limit
pub fn parse_type_with_limit(source: &str, max_depth: usize) -> Result<Node, ParseError> {
    parse_tokens(tokenize(source), source.len(), max_depth)
}

/// Parse one type expression, rejecting it if any character failed to lex.
///
/// The annotator uses this so that a run it splices into a message body
/// renders back to exactly the text it came from.
pub fn parse_type_strict(source: &str, max_depth: usize) -> Result<Node, ParseError> {
    let tokenized = tokenize(source);
    if !tokenized.is_clean() {
        return Err(ParseError::Lexical(tokenized.errors));
    }
    parse_tokens(tokenized, source.len(), max_depth)
}

/// Parse an already tokenized expression of `source_len` bytes
pub fn parse_tokens(
    tokenized: Tokenized,
    source_len: usize,
    max_depth: usize,
) -> Result<Node, ParseError> {
    if tokenized.tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    // The grammar recurses once per template level; refuse before descending
    let depth = max_angle_depth(&tokenized.tokens);
    if depth > max_depth {
        return Err(ParseError::NestingTooDeep {
            depth,
            limit: max_depth,
        });
    }

    // `a::b::c` folds into left-nested scopes, one level per `::`
    let height = max_tree_depth(&tokenized.tokens);
    if height > MAX_TREE_DEPTH {
        return Err(ParseError::NestingTooDeep {
            depth: height,
            limit: MAX_TREE_DEPTH,
        });
    }

    let eoi: Span = source_len..source_len + 1;
    let stream = Stream::from_iter(eoi, tokenized.tokens.into_iter());
    GRAMMAR
        .with(|grammar| grammar.parse(stream))
        .map_err(|errors| {
            let error = ParseError::from_simple(errors);
            debug!("type expression rejected: {}", error);
            error
        })
}

/// Deepest `<` nesting in a token stream
pub fn max_angle_depth(tokens: &[(Token, Span)]) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    for (token, _) in tokens {
        match token {
            Token::LAngle => {
                depth += 1;
                max = max.max(depth);
            }
            Token::RAngle => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}

/// Upper estimate of the tree height a token stream folds into: one level
/// per open `<` plus one per `::` in each scope chain still being built.
pub fn max_tree_depth(tokens: &[(Token, Span)]) -> usize {
    // Scope count of the chain at each open angle level
    let mut chains: Vec<usize> = vec![0];
    let mut scopes = 0usize;
    let mut max = 0usize;
    for (token, _) in tokens {
        match token {
            Token::LAngle => chains.push(0),
            Token::RAngle if chains.len() > 1 => {
                scopes -= chains.pop().unwrap_or(0);
            }
            Token::Comma | Token::Equals | Token::WithBracket => {
                if let Some(top) = chains.last_mut() {
                    scopes -= *top;
                    *top = 0;
                }
            }
            Token::Scope => {
                if let Some(top) = chains.last_mut() {
                    *top += 1;
                    scopes += 1;
                }
            }
            _ => {}
        }
        max = max.max(chains.len() - 1 + scopes);
    }
    max
}
