//! Testing utilities for node-tree assertions
//!
//! This module provides a fluent API for asserting on classified lines and
//! parsed type expressions, making tests read like the tree they expect.
//!
//! # Example
//!
//! ```rust,ignore
//! use diagtree::diag::testing::assert_node;
//!
//! let node = parse_type("gdal::caster<double>").unwrap();
//!
//! assert_node(&node)
//!     .kind(NodeKind::Scope)
//!     .child(0, |c| { c.name("gdal"); })
//!     .child(1, |c| { c.kind(NodeKind::Templated).child_count(2); });
//! ```

mod testing_assertions;
mod testing_matchers;

pub use testing_assertions::{assert_node, NodeAssertion};
pub use testing_matchers::TextMatch;
