use indoc::indoc;

use crate::error::Error;
use crate::lines::{Lines, LogicalLine};

fn lines(source: &str) -> Vec<LogicalLine> {
    Lines::new(source)
        .collect::<Result<_, _>>()
        .expect("source splits into lines")
}

fn dump(source: &str) -> String {
    lines(source)
        .iter()
        .map(|l| match &l.comment {
            Some(c) => format!("{}: {:?} //{:?}\n", l.number, l.text, c),
            None => format!("{}: {:?}\n", l.number, l.text),
        })
        .collect()
}

#[test]
fn splits_physical_lines() {
    let source = indoc! {r#"
        SET DOCUMENT Name = "Spec"

        p(HGNC:AKT1)
    "#};

    insta::assert_snapshot!(dump(source), @r#"
    1: "SET DOCUMENT Name = \"Spec\""
    3: "p(HGNC:AKT1)"
    "#);
}

#[test]
fn trailing_comment_is_split_off() {
    let source = "path(MESHD:Atherosclerosis) //Comment1\n";

    let lines = lines(source);

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "path(MESHD:Atherosclerosis)");
    assert_eq!(lines[0].comment.as_deref(), Some("Comment1"));
}

#[test]
fn comment_markers_inside_strings_are_kept() {
    let source = r#"DEFINE NAMESPACE HGNC AS URL "http://example.org/hgnc.belns" // ns"#;

    let lines = lines(source);

    assert_eq!(
        lines[0].text,
        r#"DEFINE NAMESPACE HGNC AS URL "http://example.org/hgnc.belns""#
    );
    assert_eq!(lines[0].comment.as_deref(), Some("ns"));
}

#[test]
fn hash_and_comment_only_lines_are_skipped() {
    let source = indoc! {r#"
        # header
          # indented header
        // nothing but a comment
        p(A)
    "#};

    insta::assert_snapshot!(dump(source), @r#"
    4: "p(A)"
    "#);
}

#[test]
fn continuation_joins_lines() {
    let source = indoc! {r#"
        p(HGNC:AKT1) -> \
          bp(GOBP:"apoptotic process")
        p(B)
    "#};

    insta::assert_snapshot!(dump(source), @r#"
    1: "p(HGNC:AKT1) ->   bp(GOBP:\"apoptotic process\")"
    3: "p(B)"
    "#);
}

#[test]
fn continuation_inside_string() {
    let source = "bp(GOBP:\"lipid \\\noxidation\")\n";

    let lines = lines(source);

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "bp(GOBP:\"lipid oxidation\")");
}

#[test]
fn escaped_quote_does_not_end_string() {
    let source = r#"p(HGNC:"a \" // b") // c"#;

    let lines = lines(source);

    assert_eq!(lines[0].text, r#"p(HGNC:"a \" // b")"#);
    assert_eq!(lines[0].comment.as_deref(), Some("c"));
}

#[test]
fn crlf_endings() {
    let source = "p(A)\r\np(B)\r\n";

    insta::assert_snapshot!(dump(source), @r#"
    1: "p(A)"
    2: "p(B)"
    "#);
}

#[test]
fn source_offsets_follow_continuations() {
    let source = "p(A) -> \\\n  p(B)";

    let lines = lines(source);
    let line = &lines[0];
    let logical = line.text.find("p(B)").expect("second term present");

    assert_eq!(line.source_offset(logical), source.find("p(B)").unwrap());
    assert_eq!(line.source_offset(0), 0);
}

#[test]
fn unterminated_string() {
    let source = "p(A)\nbp(GOBP:\"lipid oxidation)\n";

    let errors: Vec<_> = Lines::new(source).filter_map(Result::err).collect();

    assert_eq!(errors.len(), 1);
    let Error::MalformedLine { location, message } = &errors[0] else {
        panic!("expected malformed line, got {:?}", errors[0]);
    };
    assert_eq!(message, "unterminated string");
    assert_eq!((location.line, location.column), (2, 9));
}

#[test]
fn unterminated_string_points_at_quote_on_earlier_line() {
    let source = "bp(GOBP:\"a \\\nb) ~\n";

    let err = Lines::new(source)
        .find_map(Result::err)
        .expect("string never closes");

    assert_eq!(err.message(), "malformed line: unterminated string");
    assert_eq!(err.to_string(), "1:9: malformed line: unterminated string");
}

#[test]
fn string_open_at_end_of_input_points_at_quote() {
    let source = "p(A)\nbp(GOBP:\"lipid \\";

    let err = Lines::new(source)
        .find_map(Result::err)
        .expect("string never closes");

    assert_eq!((err.line(), err.location().column), (2, 9));
}

#[test]
fn dangling_continuation() {
    let source = "p(A) -> \\";

    let result: Result<Vec<_>, _> = Lines::new(source).collect();

    let err = result.expect_err("continuation needs a following line");
    assert_eq!(
        err.message(),
        "malformed line: line continuation at end of input"
    );
}

#[test]
fn string_open_at_end_of_input() {
    let source = "bp(GOBP:\"lipid \\";

    let err = Lines::new(source)
        .find_map(Result::err)
        .expect("string never closes");

    assert_eq!(
        err.message(),
        "malformed line: unterminated string at end of input"
    );
}

#[test]
fn stops_after_error() {
    let mut lines = Lines::new("p(\"\np(A)\n");

    assert!(matches!(lines.next(), Some(Err(_))));
    assert!(lines.next().is_none());
}
