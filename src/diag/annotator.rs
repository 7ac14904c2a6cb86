//! Message-body annotation
//!
//!     Compilers set identifiers and types off with typographic quotes:
//!
//!         error: no match for call to ‘(gdal::caster<double>) (int)’
//!
//!     The first quoted span of a body is cut out and replaced by a placeholder.
//!     Its text is normalized, then scanned for runs of type characters. Each
//!     run that brackets cleanly and parses becomes a type-expression subtree.
//!     Everything else stays literal `TextFragment`s, so a bad run never costs
//!     the rest of the body.
//!
//!     An ASCII-quoted span ('x') is ordinary text and is not annotated.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::diag::ast::Node;
use crate::diag::brackets::decompose_with_limit;
use crate::diag::config::Config;
use crate::diag::formats::render;
use crate::diag::parser::parse_type_strict;

/// Stands in for the quoted span inside a `MessageBody` value
pub const PLACEHOLDER: char = '\u{FFFC}';
pub const OPEN_QUOTE: char = '\u{2018}';
pub const CLOSE_QUOTE: char = '\u{2019}';

static QUOTED_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new("\u{2018}([^\u{2019}]+)\u{2019}").unwrap());

/// Letters, digits, `:`, `_`, `<`, `>` and `,`
static TYPE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z0-9:_<>,]+").unwrap());

/// Build the `MessageBody` node for the trailing text of a classified line
pub fn annotate(text: &str, config: &Config) -> Node {
    if !config.annotate_quoted {
        return Node::message_body(text);
    }

    let captures = match QUOTED_SPAN.captures(text) {
        Some(captures) => captures,
        None => return Node::message_body(text),
    };
    let (whole, inner) = match (captures.get(0), captures.get(1)) {
        (Some(whole), Some(inner)) => (whole, inner),
        _ => return Node::message_body(text),
    };

    let value = format!(
        "{}{}{}{}{}",
        &text[..whole.start()],
        OPEN_QUOTE,
        PLACEHOLDER,
        CLOSE_QUOTE,
        &text[whole.end()..]
    );

    let quoted = if config.normalize_spacing {
        normalize_quoted(inner.as_str())
    } else {
        inner.as_str().to_string()
    };
    debug!("quoted: {}", quoted);

    let mut body = Node::message_body(value);
    for child in annotate_quoted(&quoted, config) {
        body.append(child);
    }
    body
}

/// Undo the spacing compilers add for readability: `", "` and `" >"`
pub fn normalize_quoted(quoted: &str) -> String {
    quoted.replace(", ", ",").replace(" >", ">")
}

/// Split quoted text into literal gaps and parsed type runs, left to right
pub fn annotate_quoted(quoted: &str, config: &Config) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut cursor = 0;

    for run in TYPE_RUN.find_iter(quoted) {
        if run.start() > cursor {
            nodes.push(Node::text_fragment(&quoted[cursor..run.start()]));
        }
        nodes.push(annotate_run(run.as_str(), config));
        cursor = run.end();
    }
    if cursor < quoted.len() {
        nodes.push(Node::text_fragment(&quoted[cursor..]));
    }

    nodes
}

/// One run of type characters: a type subtree, or the raw run as text.
///
/// A subtree is only kept when it renders back to exactly `run`.
pub fn annotate_run(run: &str, config: &Config) -> Node {
    let brackets = decompose_with_limit(run, config.max_nesting_depth);
    if !brackets.is_balanced() {
        debug!("unbalanced brackets, kept as text: {}", run);
        return Node::text_fragment(run);
    }

    match parse_type_strict(run, config.max_nesting_depth) {
        Ok(node) if render(&node) == run => node,
        Ok(node) => {
            debug!("kept as text: {} (renders as {})", run, render(&node));
            Node::text_fragment(run)
        }
        Err(error) => {
            debug!("kept as text: {} ({})", run, error);
            Node::text_fragment(run)
        }
    }
}
