//! Line classifier - declarative pattern cascade
//!
//! Each captured line is matched against an ordered table of anchored regex
//! rules; the first rule that matches wins:
//!
//! 1. message              `file:line:col: level:`
//! 2. location             `file:line:col:`
//! 3. from                 `file: ` (the file must look like a path)
//! 4. include              `In file included from file:line[:col][,:]`
//! 5. include_continuation `                 from file:line[:col][,:]`
//!
//! A match consumes only its prefix. The tail goes back through the same
//! cascade, so one physical line can carry a chain of nested nodes. This is
//! an explicit loop over the line, never recursion. When the cascade stops
//! matching, or the chain reaches the configured nesting depth, the tail
//! becomes the annotated `MessageBody` leaf of the innermost node. A line that
//! matches nothing at all is a `Text` node.

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::diag::annotator::annotate;
use crate::diag::ast::{Node, NodeKind, Site};
use crate::diag::config::Config;
use crate::diag::parser::MAX_TREE_DEPTH;

/// Grammar patterns as (name, node kind, regex)
/// Order matters: rules are tried in declaration order.
const LINE_GRAMMAR: &[(&str, NodeKind, &str)] = &[
    (
        "message",
        NodeKind::Message,
        r"^(?P<file>[a-zA-Z0-9./_+\-]+):(?P<line>\d+):(?P<col>\d+): (?P<level>\w+):",
    ),
    (
        "location",
        NodeKind::Location,
        r"^(?P<file>[a-zA-Z0-9./_+\-]+):(?P<line>\d+):(?P<col>\d+):",
    ),
    (
        "from",
        NodeKind::From,
        r"^(?P<file>[a-zA-Z0-9_+\-]*[./][a-zA-Z0-9./_+\-]*): ",
    ),
    (
        "include",
        NodeKind::Include,
        r"^In file included from (?P<file>[a-zA-Z0-9./_+\-]+):(?P<line>\d+)(?::(?P<col>\d+))?[,:]",
    ),
    (
        "include_continuation",
        NodeKind::Include,
        r"^ {17}from (?P<file>[a-zA-Z0-9./_+\-]+):(?P<line>\d+)(?::(?P<col>\d+))?[,:]",
    ),
];

/// One compiled rule of the cascade
#[derive(Debug)]
pub struct LinePattern {
    pub name: &'static str,
    pub kind: NodeKind,
    pub regex: Regex,
}

static LINE_PATTERNS: Lazy<Vec<LinePattern>> = Lazy::new(|| {
    LINE_GRAMMAR
        .iter()
        .map(|(name, kind, pattern)| LinePattern {
            name,
            kind: *kind,
            regex: Regex::new(pattern).unwrap(),
        })
        .collect()
});

/// The compiled cascade, in matching order
pub fn line_patterns() -> &'static [LinePattern] {
    &LINE_PATTERNS
}

/// Match the cascade at the head of `text`.
///
/// Returns the classified node (without children) and the number of bytes
/// its pattern consumed.
pub fn classify_prefix(text: &str) -> Option<(Node, usize)> {
    for pattern in line_patterns() {
        let captures = match pattern.regex.captures(text) {
            Some(captures) => captures,
            None => continue,
        };
        let matched = match captures.get(0) {
            Some(matched) if matched.end() > 0 => matched,
            _ => continue,
        };
        let site = site_from(&captures, matched.as_str());
        debug!("{}: {}", pattern.name, site);
        return Some((Node::with_site(pattern.kind, site), matched.end()));
    }
    None
}

fn site_from(captures: &Captures<'_>, matched: &str) -> Site {
    let group = |name: &str| captures.name(name).map(|m| m.as_str().to_string());
    Site {
        file: group("file").unwrap_or_default(),
        line: group("line"),
        column: group("col"),
        level: group("level"),
        matched: matched.to_string(),
    }
}

/// Classify one line into a node tree
pub fn classify_line(line: &str, config: &Config) -> Node {
    let mut chain: Vec<Node> = Vec::new();
    let mut rest = line;
    let max_chain = config.max_nesting_depth.min(MAX_TREE_DEPTH);

    while !rest.is_empty() && chain.len() < max_chain {
        match classify_prefix(rest) {
            Some((node, consumed)) => {
                chain.push(node);
                rest = &rest[consumed..];
            }
            None => break,
        }
    }

    if chain.is_empty() {
        return Node::text(line);
    }

    let mut tail = if rest.is_empty() {
        None
    } else {
        Some(annotate(rest, config))
    };
    // Fold the chain bottom-up: the innermost match receives the body
    for mut node in chain.into_iter().rev() {
        if let Some(child) = tail.take() {
            node.append(child);
        }
        tail = Some(node);
    }
    tail.unwrap_or_else(|| Node::text(line))
}
