//! Bracket decomposer
//!
//!     Splits a flat string into literal text and nested `<...>` groups in one
//!     left-to-right scan, without any grammar. The annotator runs it over each
//!     type-ish run before the full parser: a run whose brackets don't balance,
//!     or nest too deeply, is never handed to the recursive grammar.
//!
//!     Spans are half-open character offsets into the scanned string. A group
//!     whose closing `>` never arrives keeps `end == None` and is still part of
//!     the returned tree. A `>` with no open group is kept as literal text.
//!
//!     `<` is always taken as a template opener. Input here comes from type
//!     names in compiler output, which never hold a relational `<`.

use serde::Serialize;

use crate::diag::ast::AstNode;

/// Groups nested deeper than this are not opened
pub const MAX_NESTING_DEPTH: usize = 64;

/// Half-open `[start, end)` character range of a group, brackets included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupSpan {
    pub start: usize,
    pub end: Option<usize>,
}

impl GroupSpan {
    /// The closing bracket was never seen
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

/// One `<...>` group and what it contains
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketGroup {
    pub span: GroupSpan,
    pub segments: Vec<Segment>,
}

/// A child entry: literal text, or a nested group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    Literal(String),
    Group(BracketGroup),
}

/// Result of [`decompose`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BracketTree {
    pub segments: Vec<Segment>,
    /// `>` characters seen with no group open
    pub stray_closers: usize,
    /// Some `<` was left unopened because of the depth limit
    pub overflowed: bool,
}

impl BracketTree {
    /// All groups, pre-order
    pub fn groups(&self) -> Vec<&BracketGroup> {
        let mut result = Vec::new();
        let mut stack: Vec<&Segment> = self.segments.iter().rev().collect();
        while let Some(segment) = stack.pop() {
            if let Segment::Group(group) = segment {
                result.push(group);
                stack.extend(group.segments.iter().rev());
            }
        }
        result
    }

    pub fn has_open_groups(&self) -> bool {
        self.groups().iter().any(|group| group.span.is_open())
    }

    /// Every group closed, no stray `>` and nothing cut off by the depth limit
    pub fn is_balanced(&self) -> bool {
        self.stray_closers == 0 && !self.overflowed && !self.has_open_groups()
    }

    /// Deepest group nesting; 0 when there are no groups
    pub fn max_depth(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(&Segment, usize)> =
            self.segments.iter().map(|segment| (segment, 1)).collect();
        while let Some((segment, depth)) = stack.pop() {
            if let Segment::Group(group) = segment {
                max = max.max(depth);
                stack.extend(group.segments.iter().map(|child| (child, depth + 1)));
            }
        }
        max
    }

    /// The literal text of every segment, brackets dropped
    pub fn literal_text(&self) -> String {
        let mut text = String::new();
        let mut stack: Vec<&Segment> = self.segments.iter().rev().collect();
        while let Some(segment) = stack.pop() {
            match segment {
                Segment::Literal(literal) => text.push_str(literal),
                Segment::Group(group) => stack.extend(group.segments.iter().rev()),
            }
        }
        text
    }
}

/// Decompose `source` with the default [`MAX_NESTING_DEPTH`]
pub fn decompose(source: &str) -> BracketTree {
    decompose_with_limit(source, MAX_NESTING_DEPTH)
}

/// Decompose `source`, opening at most `max_depth` nested groups
pub fn decompose_with_limit(source: &str, max_depth: usize) -> BracketTree {
    let mut tree = BracketTree::default();
    let mut open: Vec<BracketGroup> = Vec::new();
    let mut pending = String::new();
    // `<` characters kept literal by the depth limit, awaiting their `>`
    let mut suppressed = 0usize;

    for (index, c) in source.chars().enumerate() {
        match c {
            '<' if open.len() >= max_depth => {
                tree.overflowed = true;
                suppressed += 1;
                pending.push(c);
            }
            '<' => {
                flush(current(&mut tree.segments, &mut open), &mut pending);
                open.push(BracketGroup {
                    span: GroupSpan {
                        start: index,
                        end: None,
                    },
                    segments: Vec::new(),
                });
            }
            '>' if suppressed > 0 => {
                suppressed -= 1;
                pending.push(c);
            }
            '>' => match open.pop() {
                Some(mut group) => {
                    flush(&mut group.segments, &mut pending);
                    group.span.end = Some(index + 1);
                    current(&mut tree.segments, &mut open).push(Segment::Group(group));
                }
                None => {
                    tree.stray_closers += 1;
                    pending.push(c);
                }
            },
            _ => pending.push(c),
        }
    }

    flush(current(&mut tree.segments, &mut open), &mut pending);
    // Unterminated groups stay in the tree with no end offset
    while let Some(group) = open.pop() {
        current(&mut tree.segments, &mut open).push(Segment::Group(group));
    }
    tree
}

fn current<'a>(
    root: &'a mut Vec<Segment>,
    open: &'a mut [BracketGroup],
) -> &'a mut Vec<Segment> {
    match open.last_mut() {
        Some(group) => &mut group.segments,
        None => root,
    }
}

fn flush(segments: &mut Vec<Segment>, pending: &mut String) {
    if !pending.is_empty() {
        segments.push(Segment::Literal(std::mem::take(pending)));
    }
}

impl AstNode for Segment {
    fn node_type(&self) -> &'static str {
        match self {
            Segment::Literal(_) => "Literal",
            Segment::Group(_) => "Group",
        }
    }

    fn display_label(&self) -> String {
        match self {
            Segment::Literal(text) => text.clone(),
            Segment::Group(group) => match group.span.end {
                Some(end) => format!("[{}, {})", group.span.start, end),
                None => format!("[{}, open)", group.span.start),
            },
        }
    }

    fn children(&self) -> &[Segment] {
        match self {
            Segment::Literal(_) => &[],
            Segment::Group(group) => &group.segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(text: &str) -> Segment {
        Segment::Literal(text.to_string())
    }

    #[test]
    fn test_plain_text_is_one_literal() {
        let tree = decompose("std::vector");
        assert_eq!(tree.segments, vec![literal("std::vector")]);
        assert!(tree.groups().is_empty());
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_single_group() {
        let tree = decompose("caster<double>");
        assert_eq!(
            tree.segments,
            vec![
                literal("caster"),
                Segment::Group(BracketGroup {
                    span: GroupSpan {
                        start: 6,
                        end: Some(14)
                    },
                    segments: vec![literal("double")],
                })
            ]
        );
    }

    #[test]
    fn test_nested_groups_and_trailing_text() {
        let tree = decompose("a<b<c>,d>::e");
        assert_eq!(tree.max_depth(), 2);
        let groups = tree.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].span, GroupSpan { start: 1, end: Some(9) });
        assert_eq!(groups[1].span, GroupSpan { start: 3, end: Some(6) });
        assert_eq!(tree.segments.last(), Some(&literal("::e")));
        assert_eq!(tree.literal_text(), "abc,d::e");
    }

    #[test]
    fn test_unterminated_group_stays_open() {
        let tree = decompose("std::vector<int");
        let groups = tree.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].span, GroupSpan { start: 11, end: None });
        assert_eq!(groups[0].segments, vec![literal("int")]);
        assert!(tree.has_open_groups());
        assert!(!tree.is_balanced());
    }

    #[test]
    fn test_unterminated_nested_groups_are_attached_to_parents() {
        let tree = decompose("a<b<c");
        assert_eq!(tree.max_depth(), 2);
        assert!(tree.groups().iter().all(|group| group.span.is_open()));
    }

    #[test]
    fn test_stray_closer_is_literal() {
        let tree = decompose("a>b");
        assert_eq!(tree.segments, vec![literal("a>b")]);
        assert_eq!(tree.stray_closers, 1);
        assert!(!tree.is_balanced());
    }

    #[test]
    fn test_depth_limit() {
        let tree = decompose_with_limit("a<b<c<d>>>", 2);
        assert!(tree.overflowed);
        assert_eq!(tree.max_depth(), 2);
        assert_eq!(tree.stray_closers, 0);
        assert_eq!(tree.groups()[1].segments, vec![literal("c<d>")]);
    }

    #[test]
    fn test_empty_input() {
        let tree = decompose("");
        assert!(tree.segments.is_empty());
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_segment_labels() {
        let tree = decompose("x<y");
        let labels: Vec<String> = tree.segments.iter().map(|s| s.display_label()).collect();
        assert_eq!(labels, vec!["x".to_string(), "[1, open)".to_string()]);
    }
}
