//! Tests for offset to line/column mapping

use tmplcheck::location::{LineIndex, Position, snippet};

#[test]
fn test_single_line_positions() {
    let index = LineIndex::new("hello");
    assert_eq!(index.position(0), Position { line: 1, column: 1 });
    assert_eq!(index.position(4), Position { line: 1, column: 5 });
}

#[test]
fn test_multi_line_positions() {
    let index = LineIndex::new("ab\ncd\nef");
    assert_eq!(index.position(3), Position { line: 2, column: 1 });
    assert_eq!(index.position(7), Position { line: 3, column: 2 });
}

#[test]
fn test_newline_belongs_to_its_line() {
    let index = LineIndex::new("ab\ncd");
    assert_eq!(index.position(2), Position { line: 1, column: 3 });
}

#[test]
fn test_empty_document() {
    let index = LineIndex::new("");
    assert_eq!(index.position(0), Position { line: 1, column: 1 });
}

#[test]
fn test_offset_past_end_resolves_to_last_line() {
    let index = LineIndex::new("ab\ncd");
    assert_eq!(index.position(99), Position { line: 2, column: 97 });
}

#[test]
fn test_unicode_offsets_are_character_based() {
    let index = LineIndex::new("é\n{{");
    assert_eq!(index.position(2), Position { line: 2, column: 1 });
}

#[test]
fn test_snippet_from_offset() {
    assert_eq!(snippet("abc {{.Name}}", 4, 50), "{{.Name}}");
}

#[test]
fn test_snippet_truncates() {
    let long = "x".repeat(100);
    assert_eq!(snippet(&long, 0, 50).len(), 50);
}

#[test]
fn test_snippet_stops_at_newline() {
    assert_eq!(snippet("{{a\n{{b", 0, 50), "{{a");
}

#[test]
fn test_snippet_past_end_is_empty() {
    assert_eq!(snippet("abc", 10, 50), "");
}
