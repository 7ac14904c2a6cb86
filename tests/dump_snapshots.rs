//! Dump-format snapshots over captured g++ output
//!
//! The dump format (two spaces per depth level, `kind[: value]`) is what
//! golden files are written in, so any change to it shows up here.

use diagtree::diag::formats::to_dump_str;
use diagtree::{process_str, Config};

const CAPTURE: &str = include_str!("fixtures/gcc_template_error.txt");

#[test]
fn test_gcc_template_error_dump() {
    let tree = process_str(CAPTURE, &Config::default());

    insta::assert_snapshot!(to_dump_str(&tree), @r"
    Group
      Include: src/raster.cpp:4:0
      From: src/gdal_io.hpp
        MessageBody: In instantiation of ‘￼’:
          Scope
            Name: gdal
            Templated
              Name: caster
              Name: float
      Message: src/gdal_io.hpp:42:12: error
        MessageBody:  no match for call to ‘￼’
          TextFragment: (
          Scope
            Name: gdal
            Templated
              Name: caster
              Name: double
          TextFragment: ) (
          Name: int
          TextFragment: )
      Location: src/raster.cpp:18:31
        MessageBody:    required from here
      Text: make: *** [Makefile:12: raster.o] Error 1
    ");
}

#[test]
fn test_gcc_template_error_dump_without_annotation() {
    let config = Config {
        annotate_quoted: false,
        ..Config::default()
    };
    let tree = process_str(CAPTURE, &config);

    insta::assert_snapshot!(to_dump_str(&tree), @r"
    Group
      Include: src/raster.cpp:4:0
      From: src/gdal_io.hpp
        MessageBody: In instantiation of ‘gdal::caster<float>’:
      Message: src/gdal_io.hpp:42:12: error
        MessageBody:  no match for call to ‘(gdal::caster<double>) (int)’
      Location: src/raster.cpp:18:31
        MessageBody:    required from here
      Text: make: *** [Makefile:12: raster.o] Error 1
    ");
}

#[test]
fn test_type_with_clause_dump() {
    let node = diagtree::diag::parser::parse_type("int [with Region=blah]").unwrap();

    insta::assert_snapshot!(to_dump_str(&node), @r"
    With
      Name: int
      EqualityList
        Equality
          Name: Region
          Name: blah
    ");
}
