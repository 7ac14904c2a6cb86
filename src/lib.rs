//! # diagtree
//!
//! Turns raw C++ compiler diagnostics into a navigable tree of typed nodes.
//!
//! Each captured output line is classified (message, location, inclusion chain or
//! plain text) and any type signature quoted inside a message is re-parsed into a
//! type-expression tree (templates, scopes, qualifiers, `[with T = U]` clauses).
//!
//! ## Testing
//!
//! The fluent assertion API lives in the [testing module](diag::testing).

pub mod diag;

pub use diag::ast::{Node, NodeKind, NodeValue, Site};
pub use diag::config::Config;
pub use diag::processor::{process_lines, process_str};
