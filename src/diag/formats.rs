//! Renderers for node trees
//!
//! - [`dump`]: one node per line, `kind[: value]`, indented two spaces per
//!   depth level. Stable, used by golden-file tests.
//! - [`treeviz`]: box-drawing tree for reading in a terminal; works on any
//!   [`AstNode`](crate::diag::ast::AstNode).
//! - [`text`]: turns a tree back into the text it was built from.
//!
//! JSON and YAML go through serde in the processor.

pub mod dump;
pub mod text;
pub mod treeviz;

pub use dump::to_dump_str;
pub use text::render;
pub use treeviz::to_treeviz_str;
