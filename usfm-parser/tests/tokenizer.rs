//! Token stream snapshots for representative USFM lines

use usfm_parser::usfm::lexing::tokenize;

fn render(source: &str) -> String {
    tokenize(source)
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_verse_with_footnote() {
    insta::assert_snapshot!(render(r"\v 2 Isaac\f + \ft A note.\f* and"), @r#"
    <verse:\v 2>
    <text:" Isaac">
    <character:\f>
    <text:"+ ">
    <character:\ft>
    <text:"A note.">
    <end:\f*>
    <text:"and">
    <text:"\n">
    "#);
}

#[test]
fn test_footnote_glued_to_verse_number() {
    insta::assert_snapshot!(render(r"\v 1\f + \ft note\f* In"), @r#"
    <verse:\v 1>
    <character:\f>
    <text:"+ ">
    <character:\ft>
    <text:"note">
    <end:\f*>
    <text:"In">
    <text:"\n">
    "#);
}

#[test]
fn test_header_markers_on_one_line() {
    insta::assert_snapshot!(render(r"\id GEN\c 1\v 1 In the beginning."), @r#"
    <book:\id GEN>
    <chapter:\c 1>
    <verse:\v 1>
    <text:" In the beginning.">
    <text:"\n">
    "#);
}

#[test]
fn test_document_header_with_crlf() {
    insta::assert_snapshot!(render("\\id JHN\r\n\\c 1\r\n\\q1\r\n\\v 1 In the beginning"), @r#"
    <book:\id JHN>
    <text:"\n">
    <chapter:\c 1>
    <text:"\n">
    <paragraph:\q1>
    <text:"\n">
    <verse:\v 1>
    <text:" In the beginning">
    <text:"\n">
    "#);
}

#[test]
fn test_end_marker_glued_to_next_marker_is_text() {
    // `\+nd*` is directly followed by a backslash, so it is not a marker
    insta::assert_snapshot!(render(r"\wj \+nd Lord\+nd*\wj*"), @r#"
    <character:\wj>
    <character:\+nd>
    <text:"Lord\\+nd*">
    <end:\wj*>
    <text:"\n">
    "#);
}
