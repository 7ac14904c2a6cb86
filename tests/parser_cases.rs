//! Type-expression grammar case tables

use diagtree::diag::formats::render;
use diagtree::diag::parser::{parse_type, parse_type_strict, ParseError};
use diagtree::diag::testing::assert_node;
use diagtree::NodeKind;
use rstest::rstest;

#[rstest]
#[case::name("Region", NodeKind::Name, &["Region"])]
#[case::atomic("double", NodeKind::Name, &["double"])]
#[case::size_t("size_t", NodeKind::Name, &["size_t"])]
#[case::modifiers("long unsigned int", NodeKind::Qualified, &["long", "unsigned", "int"])]
#[case::reference("const Region&", NodeKind::Qualified, &["const", "Region", "&"])]
#[case::pointer("char *", NodeKind::Qualified, &["char", "*"])]
#[case::scope("std::string", NodeKind::Scope, &["std", "string"])]
#[case::templated("caster<double>", NodeKind::Templated, &["caster", "double"])]
#[case::scoped_template("gdal::caster<double>", NodeKind::Scope, &["gdal", "caster", "double"])]
#[case::template_then_scope("a<b>::c", NodeKind::Scope, &["a", "b", "c"])]
#[case::argument_list("std::pair<int,char>", NodeKind::Scope, &["std", "pair", "int", "char"])]
#[case::qualified_argument("std::vector<const char *>", NodeKind::Scope, &["std", "vector", "const", "char", "*"])]
#[case::operator("Foo::operator()", NodeKind::Scope, &["Foo", "operator()"])]
#[case::with_clause("T [with T = int]", NodeKind::With, &["T", "T", "int"])]
fn test_parse_shape(#[case] source: &str, #[case] kind: NodeKind, #[case] words: &[&str]) {
    let node = parse_type(source).unwrap();
    assert_node(&node).kind(kind).leaf_words(words);
}

#[rstest]
#[case("gdal::caster<double>")]
#[case("std::map<int,std::set<char>>")]
#[case("a<b>::c<d>::e")]
#[case("const Region&")]
#[case("int [with Region = blah]")]
fn test_compact_spelling_renders_back(#[case] source: &str) {
    let node = parse_type(source).unwrap();
    assert_eq!(render(&node), source);
}

#[rstest]
#[case::empty("")]
#[case::blank("   ")]
#[case::unclosed("vector<int")]
#[case::empty_arguments("vector<>")]
#[case::trailing_scope("std::")]
#[case::bare_modifier("const")]
#[case::dangling_comma("a<b,>")]
#[case::stray_bracket("int ]")]
#[case::missing_equals("int [with T]")]
fn test_rejected(#[case] source: &str) {
    assert!(parse_type(source).is_err(), "{:?} should not parse", source);
}

#[test]
fn test_empty_input_error_kind() {
    assert!(matches!(parse_type(""), Err(ParseError::Empty)));
}

#[test]
fn test_strict_parsing_rejects_unknown_characters() {
    assert!(parse_type("int $").is_ok());
    assert!(matches!(
        parse_type_strict("int $", 64),
        Err(ParseError::Lexical(_))
    ));
}

#[test]
fn test_left_associative_scope() {
    let node = parse_type("a::b::c").unwrap();
    assert_node(&node)
        .kind(NodeKind::Scope)
        .child(0, |left| {
            left.kind(NodeKind::Scope).leaf_words(&["a", "b"]);
        })
        .child(1, |right| {
            right.name("c");
        });
}

#[test]
fn test_nested_templates() {
    let node = parse_type("std::map<int,std::set<char>>").unwrap();
    assert_node(&node).kind(NodeKind::Scope).child(1, |map| {
        map.kind(NodeKind::Templated)
            .child(0, |base| {
                base.name("map");
            })
            .child(1, |arguments| {
                arguments.kind(NodeKind::TypeList).child_count(2);
            });
    });
}
