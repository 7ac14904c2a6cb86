//! Node tree shared by the line-structure and type-expression layers
//!
//! A single tagged [`Node`] type is used for both trees: classified lines
//! (`Group`, `Message`, `Location`, ...) and parsed type expressions (`Name`,
//! `Templated`, `Scope`, ...). Nodes own their children exclusively; parent
//! navigation is provided by [`TreeView`], an arena built over a finished tree.

pub mod node;
pub mod traits;
pub mod tree;

pub use node::{Node, NodeKind, NodeValue, Site};
pub use traits::AstNode;
pub use tree::{NodeId, TreeView};
