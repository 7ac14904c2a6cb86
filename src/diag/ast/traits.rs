//! AST traits - Common interfaces for uniform node access
//!
//! Both the diagnostic [`Node`](super::Node) tree and the bracket decomposer's
//! segments implement [`AstNode`], so the tree formatters work on either.

/// Common interface for all tree nodes
pub trait AstNode: Sized {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
    fn children(&self) -> &[Self];
}
