//! Token definitions for type expressions
//!
//! Keywords are declared as literal tokens and identifiers as a regex; logos
//! prefers the longest match and, on equal length, the literal. `int` is an
//! `Atomic`, while `integer` and `constant` are plain `Name`s.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All tokens of the type-expression grammar
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    #[token("::")]
    Scope,

    // Opens a substitution clause: `[with T = U]`
    #[token("[with")]
    WithBracket,

    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // Template delimiters only; never relational operators in this grammar
    #[token("<")]
    LAngle,
    #[token(">")]
    RAngle,

    #[token("=")]
    Equals,
    #[token(",")]
    Comma,

    #[token("operator")]
    Operator,

    #[token("long", |lex| lex.slice().to_owned())]
    #[token("short", |lex| lex.slice().to_owned())]
    #[token("const", |lex| lex.slice().to_owned())]
    #[token("unsigned", |lex| lex.slice().to_owned())]
    #[token("static", |lex| lex.slice().to_owned())]
    #[token("volatile", |lex| lex.slice().to_owned())]
    #[token("&", |lex| lex.slice().to_owned())]
    #[token("*", |lex| lex.slice().to_owned())]
    Modifier(String),

    #[token("byte", |lex| lex.slice().to_owned())]
    #[token("int", |lex| lex.slice().to_owned())]
    #[token("double", |lex| lex.slice().to_owned())]
    #[token("char", |lex| lex.slice().to_owned())]
    #[token("float", |lex| lex.slice().to_owned())]
    #[token("void", |lex| lex.slice().to_owned())]
    #[token("size_t", |lex| lex.slice().to_owned())]
    Atomic(String),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_owned())]
    Name(String),
}

impl Token {
    /// Short kind name, as used in token dumps and error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Scope => "SCOPE",
            Token::WithBracket => "WITHBRACKET",
            Token::LBracket => "LBRACKET",
            Token::RBracket => "RBRACKET",
            Token::LParen => "LPAREN",
            Token::RParen => "RPAREN",
            Token::LAngle => "LANGLE",
            Token::RAngle => "RANGLE",
            Token::Equals => "EQUALS",
            Token::Comma => "COMMA",
            Token::Operator => "OPERATOR",
            Token::Modifier(_) => "MODIFIER",
            Token::Atomic(_) => "ATOMIC",
            Token::Name(_) => "NAME",
        }
    }

    /// The source text this token stands for
    pub fn text(&self) -> &str {
        match self {
            Token::Scope => "::",
            Token::WithBracket => "[with",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LAngle => "<",
            Token::RAngle => ">",
            Token::Equals => "=",
            Token::Comma => ",",
            Token::Operator => "operator",
            Token::Modifier(text) | Token::Atomic(text) | Token::Name(text) => text,
        }
    }

    pub fn is_modifier(&self) -> bool {
        matches!(self, Token::Modifier(_))
    }

    /// Tokens that can start a type on their own
    pub fn is_type_start(&self) -> bool {
        matches!(self, Token::Name(_) | Token::Atomic(_) | Token::Operator)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Modifier(text) | Token::Atomic(text) | Token::Name(text) => {
                write!(f, "{}({})", self.kind_name(), text)
            }
            _ => write!(f, "{}", self.kind_name()),
        }
    }
}
