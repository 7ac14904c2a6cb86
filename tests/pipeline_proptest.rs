//! Property-based tests for the diagnostic pipeline
//!
//! Arbitrary input must never panic, and every line must render back to the
//! text it came from whenever its quoted span is already in compact spelling.

use diagtree::diag::brackets::decompose;
use diagtree::diag::classifier::classify_line;
use diagtree::diag::formats::render;
use diagtree::diag::parser::parse_type;
use diagtree::{process_str, Config, NodeKind};
use proptest::prelude::*;

/// Identifier-ish words, keywords included
fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,6}",
        Just("int".to_string()),
        Just("const".to_string()),
        Just("unsigned".to_string()),
        Just("operator".to_string()),
    ]
}

/// Compact type spellings: `a`, `a::b`, `a<b,c>`
fn compact_type() -> impl Strategy<Value = String> {
    word().prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{}::{}", a, b)),
            (inner.clone(), prop::collection::vec(inner, 1..3))
                .prop_map(|(base, args)| format!("{}<{}>", base, args.join(","))),
        ]
    })
}

proptest! {
    #[test]
    fn test_classify_never_panics(line in "\\PC{0,80}") {
        let _ = classify_line(&line, &Config::default());
    }

    #[test]
    fn test_parse_never_panics(source in "[a-z:<>,&* \\[\\]=()]{0,40}") {
        let _ = parse_type(&source);
    }

    #[test]
    fn test_unquoted_lines_render_back(line in "[a-zA-Z0-9./_ :;*+-]{0,60}") {
        let node = classify_line(&line, &Config::default());
        prop_assert_eq!(render(&node), line);
    }

    #[test]
    fn test_quoted_lines_render_back(content in "[a-zA-Z0-9:_<>,()&* ]{1,30}") {
        prop_assume!(!content.contains(", ") && !content.contains(" >"));
        let line = format!("f.cpp:1:2: error: no match for ‘{}’ here", content);
        let node = classify_line(&line, &Config::default());
        prop_assert_eq!(render(&node), line);
    }

    #[test]
    fn test_compact_types_are_annotated(ty in compact_type()) {
        let line = format!("f.cpp:1:2: note: ‘{}’", ty);
        let node = classify_line(&line, &Config::default());
        prop_assert_eq!(render(&node), line.clone());

        let body = &node.children[0];
        prop_assert_eq!(body.kind, NodeKind::MessageBody);
        prop_assert!(!body.children.is_empty());
    }

    #[test]
    fn test_one_child_per_line(lines in prop::collection::vec("[a-z.:0-9 ]{0,20}", 0..10)) {
        let text = lines.join("\n");
        let tree = process_str(&text, &Config::default());
        prop_assert_eq!(tree.children.len(), text.lines().count());
    }

    #[test]
    fn test_bracket_free_text_is_one_literal(text in "[^<>]{1,40}") {
        let tree = decompose(&text);
        prop_assert!(tree.is_balanced());
        prop_assert_eq!(tree.groups().len(), 0);
        prop_assert_eq!(tree.literal_text(), text);
    }

    #[test]
    fn test_balanced_groups_keep_all_text(text in "[ab<>]{0,30}") {
        let tree = decompose(&text);
        if tree.is_balanced() {
            prop_assert_eq!(tree.literal_text(), text.replace(['<', '>'], ""));
            prop_assert_eq!(tree.groups().len(), text.matches('<').count());
        }
    }
}
