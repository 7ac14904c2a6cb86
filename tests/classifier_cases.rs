//! Line classification case tables

use diagtree::diag::classifier::classify_line;
use diagtree::diag::formats::render;
use diagtree::diag::testing::assert_node;
use diagtree::{Config, NodeKind};
use rstest::rstest;

#[rstest]
#[case::message("foo.cpp:10:5: error: expected ';'", NodeKind::Message)]
#[case::warning("lib/a-b+c.h:1:1: warning: unused variable", NodeKind::Message)]
#[case::location("foo.cpp:12:3:   required from here", NodeKind::Location)]
#[case::location_no_body("foo.cpp:12:3:", NodeKind::Location)]
#[case::from("foo.cpp: In function ‘int main()’:", NodeKind::From)]
#[case::from_path("/usr/include/c++/9/bits/stl_vector.h: In member function:", NodeKind::From)]
#[case::include("In file included from foo.hpp:3:0,", NodeKind::Include)]
#[case::include_colon("In file included from foo.hpp:3:", NodeKind::Include)]
#[case::continuation("                 from main.cpp:7:", NodeKind::Include)]
#[case::program_name("make: *** Error 1", NodeKind::Text)]
#[case::collect2("collect2: error: ld returned 1 exit status", NodeKind::Text)]
#[case::plain("compilation terminated.", NodeKind::Text)]
#[case::caret("     ^~~~", NodeKind::Text)]
#[case::empty("", NodeKind::Text)]
fn test_line_kind(#[case] line: &str, #[case] expected: NodeKind) {
    let node = classify_line(line, &Config::default());
    assert_node(&node).kind(expected);
}

#[rstest]
#[case("foo.cpp:10:5: error: expected ';'", "foo.cpp", Some("10"), Some("5"), Some("error"))]
#[case("foo.cpp:12:3:   required from here", "foo.cpp", Some("12"), Some("3"), None)]
#[case("foo.cpp: In function ‘f’:", "foo.cpp", None, None, None)]
#[case("In file included from x/y.h:3:9,", "x/y.h", Some("3"), Some("9"), None)]
#[case("                 from main.cpp:7,", "main.cpp", Some("7"), None, None)]
fn test_site_fields(
    #[case] line: &str,
    #[case] file: &str,
    #[case] line_no: Option<&str>,
    #[case] column: Option<&str>,
    #[case] level: Option<&str>,
) {
    let node = classify_line(line, &Config::default());
    let site = node.site().unwrap();
    assert_eq!(site.file, file);
    assert_eq!(site.line.as_deref(), line_no);
    assert_eq!(site.column.as_deref(), column);
    assert_eq!(site.level.as_deref(), level);
}

#[rstest]
#[case("foo.cpp:10:5: error: expected ';'")]
#[case("foo.cpp: In function ‘int main()’:")]
#[case("a.h:1:2:b.h:3:4: note: candidate: ‘gdal::caster<int>’")]
#[case("make: *** Error 1")]
#[case("In file included from foo.hpp:3:0,")]
fn test_lines_render_back(#[case] line: &str) {
    let node = classify_line(line, &Config::default());
    assert_eq!(render(&node), line);
}

#[test]
fn test_message_body_scenario() {
    let node = classify_line("foo.cpp:10:5: error: expected ';'", &Config::default());
    assert_node(&node)
        .kind(NodeKind::Message)
        .child_count(1)
        .child(0, |body| {
            body.kind(NodeKind::MessageBody)
                .text(" expected ';'")
                .child_count(0);
        });
}

#[test]
fn test_quoted_type_in_location_chain() {
    let node = classify_line(
        "a.h:1:2:b.h:3:4: note: candidate: ‘gdal::caster<int>’",
        &Config::default(),
    );
    assert_node(&node).kind(NodeKind::Location).child(0, |message| {
        message
            .kind(NodeKind::Message)
            .level("note")
            .child(0, |body| {
                body.kind(NodeKind::MessageBody)
                    .text(" candidate: ‘\u{FFFC}’")
                    .child(0, |ty| {
                        ty.kind(NodeKind::Scope)
                            .leaf_words(&["gdal", "caster", "int"]);
                    });
            });
    });
}
