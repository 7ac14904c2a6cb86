//! Indented `kind[: value]` dump

use crate::diag::ast::{Node, TreeView};

/// Indentation per depth level
const INDENT: &str = "  ";

pub fn to_dump_str(root: &Node) -> String {
    let view = TreeView::new(root);
    let mut result = String::new();
    for id in view.ids() {
        let node = view.node(id);
        for _ in 0..view.depth(id) {
            result.push_str(INDENT);
        }
        result.push_str(node.kind.as_str());
        if let Some(value) = &node.value {
            result.push_str(": ");
            result.push_str(&value.to_string());
        }
        result.push('\n');
    }
    result
}
