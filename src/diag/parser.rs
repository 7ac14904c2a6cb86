//! Parser module for type expressions
//!
//! This module turns the token stream of one quoted type name into a single
//! type-expression tree (`Name`, `Qualified`, `Templated`, `Scope` or `With`).
//!
//! ## Grammar
//!
//! ```text
//! blurb         := qualified ( '[with' equality_list ']' )?
//! qualified     := MODIFIER* type MODIFIER*
//! type          := primary ( '::' primary )*
//! primary       := atom ( '<' qualified ( ',' qualified )* '>' )*
//! atom          := NAME | ATOMIC | 'operator' '(' ')'
//! equality_list := equality ( ',' equality )*
//! equality      := qualified '=' qualified
//! ```
//!
//! Angle application binds tighter than scope resolution and both fold to the
//! left: `a::b<c>::d` is `Scope(Scope(a, Templated(b, c)), d)`.
//!
//! Input is refused before parsing when its `<` nesting exceeds the
//! configured limit or its tree would be taller than [`MAX_TREE_DEPTH`].
//!
//! `<` and `>` are template delimiters only. An expression such as `x < y`
//! leaves the `<` unclosed and is rejected with a syntax error.

pub mod api;
pub mod error;
pub mod grammar;

pub use api::{
    max_angle_depth, max_tree_depth, parse_tokens, parse_type, parse_type_strict,
    parse_type_with_limit, MAX_TREE_DEPTH,
};
pub use error::ParseError;
