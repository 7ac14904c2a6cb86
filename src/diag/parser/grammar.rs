//! Parser combinators for the type-expression grammar.

use chumsky::prelude::*;

use crate::diag::ast::Node;
use crate::diag::lexer::Token;

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// `const`, `unsigned`, `&`, `*`, ...
pub(crate) fn modifier() -> impl Parser<Token, Node, Error = ParserError> + Clone {
    select! { Token::Modifier(text) => Node::modifier(text) }.labelled("modifier")
}

/// A name, an atomic keyword, or `operator()`
pub(crate) fn atom() -> impl Parser<Token, Node, Error = ParserError> + Clone {
    let operator_call = just(Token::Operator)
        .ignore_then(just(Token::LParen))
        .ignore_then(just(Token::RParen))
        .to(Node::name("operator()"));

    select! {
        Token::Name(name) => Node::name(name),
        Token::Atomic(name) => Node::name(name),
    }
    .or(operator_call)
    .labelled("type name")
}

/// A type with its leading and trailing modifiers
pub(crate) fn qualified() -> impl Parser<Token, Node, Error = ParserError> + Clone {
    recursive(|qualified| {
        let arguments = qualified
            .separated_by(just(Token::Comma))
            .at_least(1)
            .delimited_by(just(Token::LAngle), just(Token::RAngle));

        let primary = atom().then(arguments.repeated()).foldl(Node::templated);

        let scoped = primary
            .clone()
            .then(just(Token::Scope).ignore_then(primary).repeated())
            .foldl(Node::scope);

        modifier()
            .repeated()
            .then(scoped)
            .then(modifier().repeated())
            .map(|((before, ty), after)| Node::qualified(before, ty, after))
    })
}

/// `[with T = U, ...]`
pub(crate) fn with_clause() -> impl Parser<Token, Node, Error = ParserError> + Clone {
    let equality = qualified()
        .then_ignore(just(Token::Equals))
        .then(qualified())
        .map(|(left, right)| Node::equality(left, right));

    equality
        .separated_by(just(Token::Comma))
        .at_least(1)
        .map(Node::equality_list)
        .delimited_by(just(Token::WithBracket), just(Token::RBracket))
}

/// The whole quoted expression: a qualified type, optionally followed by a
/// substitution clause
pub fn blurb() -> impl Parser<Token, Node, Error = ParserError> {
    qualified()
        .then(with_clause().or_not())
        .map(|(ty, with)| match with {
            Some(equalities) => Node::with_clause(ty, equalities),
            None => ty,
        })
        .then_ignore(end())
}
