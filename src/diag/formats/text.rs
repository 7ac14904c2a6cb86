//! Render a tree back to text
//!
//! Line structure renders byte-for-byte: a classified node prints the prefix
//! its pattern consumed, then its children. Inside a `MessageBody` the
//! placeholder is replaced by the rendered quoted children. Type expressions
//! print in compact form (`a::b<c,d>`), which is the normalized spelling of
//! the quoted text the annotator saw.

use crate::diag::annotator::PLACEHOLDER;
use crate::diag::ast::{Node, NodeKind};

/// Pending output: a node still to expand, or literal text
enum Piece<'a> {
    Node(&'a Node),
    Text(&'a str),
}

/// Iterative, so tree height never grows the call stack
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    let mut stack = vec![Piece::Node(node)];

    while let Some(piece) = stack.pop() {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Node(node) => {
                // Pushed in reverse of output order
                let mut pieces = Vec::new();
                expand(node, &mut pieces);
                stack.extend(pieces.into_iter().rev());
            }
        }
    }
    out
}

fn expand<'a>(node: &'a Node, pieces: &mut Vec<Piece<'a>>) {
    match node.kind {
        NodeKind::Group => joined(pieces, &node.children, "\n"),
        NodeKind::Message | NodeKind::Location | NodeKind::From | NodeKind::Include => {
            if let Some(site) = node.site() {
                pieces.push(Piece::Text(&site.matched));
            }
            pieces.extend(node.children.iter().map(Piece::Node));
        }
        NodeKind::MessageBody => {
            let value = node.text_value().unwrap_or_default();
            match value.split_once(PLACEHOLDER) {
                Some((before, after)) if !node.children.is_empty() => {
                    pieces.push(Piece::Text(before));
                    pieces.extend(node.children.iter().map(Piece::Node));
                    pieces.push(Piece::Text(after));
                }
                _ => pieces.push(Piece::Text(value)),
            }
        }
        NodeKind::Text | NodeKind::TextFragment | NodeKind::Name | NodeKind::Modifier => {
            if let Some(text) = node.text_value() {
                pieces.push(Piece::Text(text));
            }
        }
        NodeKind::Qualified => {
            for (i, child) in node.children.iter().enumerate() {
                let attached = matches!(child.text_value(), Some("&") | Some("*"));
                if i > 0 && !(attached && child.is(NodeKind::Modifier)) {
                    pieces.push(Piece::Text(" "));
                }
                pieces.push(Piece::Node(child));
            }
        }
        NodeKind::Scope => joined(pieces, &node.children, "::"),
        NodeKind::Templated => {
            if let Some((base, arguments)) = node.children.split_first() {
                pieces.push(Piece::Node(base));
                pieces.push(Piece::Text("<"));
                joined(pieces, arguments, ",");
                pieces.push(Piece::Text(">"));
            }
        }
        NodeKind::TypeList => joined(pieces, &node.children, ","),
        NodeKind::With => {
            if let Some((ty, rest)) = node.children.split_first() {
                pieces.push(Piece::Node(ty));
                pieces.push(Piece::Text(" [with "));
                pieces.extend(rest.iter().map(Piece::Node));
                pieces.push(Piece::Text("]"));
            }
        }
        NodeKind::EqualityList => joined(pieces, &node.children, ", "),
        NodeKind::Equality => joined(pieces, &node.children, " = "),
    }
}

fn joined<'a>(pieces: &mut Vec<Piece<'a>>, nodes: &'a [Node], separator: &'static str) {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            pieces.push(Piece::Text(separator));
        }
        pieces.push(Piece::Node(node));
    }
}
