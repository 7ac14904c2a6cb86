//! Treeviz formatter
//!
//! ```text
//! └─ Message: foo.cpp:10:5: error
//!   └─ MessageBody:  no match for ‘￼’
//!     └─ Scope:
//!       ├─ Name: gdal
//!       └─ Templated:
//! ```

use crate::diag::ast::AstNode;

/// Labels longer than this are cut and marked with `...`
const LABEL_WIDTH: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str<N: AstNode>(roots: &[N]) -> String {
    let mut result = String::new();
    append_children(&mut result, roots, "");
    result
}

fn append_children<N: AstNode>(result: &mut String, children: &[N], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        append_node(result, child, prefix, is_last);
    }
}

fn append_node<N: AstNode>(result: &mut String, node: &N, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = truncate(&node.display_label(), LABEL_WIDTH);

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        label
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, node.children(), &new_prefix);
}
