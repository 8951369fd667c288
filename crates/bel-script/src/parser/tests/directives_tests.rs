use bel_core::{
    Annotation, AnnotationDefinition, DefinitionKind, DocumentProperty, NamespaceDefinition,
    Object, Reference, Unset, Value,
};
use indexmap::IndexSet;
use indoc::indoc;

use super::{dump, parse_error, single};
use crate::Error;

fn set(items: &[&str]) -> IndexSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn document_properties() {
    assert_eq!(
        single(r#"SET DOCUMENT Name = "Spec""#),
        Object::DocumentProperty(DocumentProperty {
            name: "Name".into(),
            value: Value::Quoted("Spec".into()),
        })
    );
    assert_eq!(
        single("SET DOCUMENT Authors = User"),
        Object::DocumentProperty(DocumentProperty {
            name: "Authors".into(),
            value: Value::Identifier("User".into()),
        })
    );
}

#[test]
fn namespace_url() {
    let source = r#"DEFINE NAMESPACE HGNC AS URL "http://resource.belframework.org/belframework/20131211/namespace/hgnc-human-genes.belns""#;

    let Object::NamespaceDefinition(ns) = single(source) else {
        panic!("expected a namespace definition");
    };
    assert_eq!(ns.prefix, "HGNC");
    assert_eq!(ns.kind(), DefinitionKind::Url);
    assert!(!ns.default);
    assert_eq!(
        ns.reference,
        Reference::Url(
            "http://resource.belframework.org/belframework/20131211/namespace/hgnc-human-genes.belns"
                .into()
        )
    );
}

#[test]
fn default_namespace() {
    assert_eq!(
        single(r#"DEFINE DEFAULT NAMESPACE PFH AS LIST {"Hedgehog","Notch"}"#),
        Object::NamespaceDefinition(NamespaceDefinition {
            prefix: "PFH".into(),
            reference: Reference::List(set(&["Hedgehog", "Notch"])),
            default: true,
        })
    );
}

#[test]
fn annotation_pattern_kept_verbatim() {
    assert_eq!(
        single(r#"DEFINE ANNOTATION Dosage AS PATTERN "[0-9]\.[0-9]+""#),
        Object::AnnotationDefinition(AnnotationDefinition {
            name: "Dosage".into(),
            reference: Reference::Pattern(r"[0-9]\.[0-9]+".into()),
        })
    );
}

#[test]
fn annotation_list() {
    let Object::AnnotationDefinition(anno) =
        single(r#"DEFINE ANNOTATION TextLocation AS  LIST {"Abstract","Results","Legend","Review"}"#)
    else {
        panic!("expected an annotation definition");
    };
    assert_eq!(anno.kind(), DefinitionKind::List);
    assert_eq!(
        anno.reference,
        Reference::List(set(&["Abstract", "Results", "Legend", "Review"]))
    );
}

#[test]
fn list_values_are_deduplicated_in_order() {
    let Object::Annotation(anno) = single(r#"SET Species = {"9606", "10090", "9606"}"#) else {
        panic!("expected an annotation");
    };
    assert_eq!(anno.value, Value::List(set(&["9606", "10090"])));
}

#[test]
fn empty_list() {
    assert_eq!(
        single("SET CellLine = {}"),
        Object::Annotation(Annotation {
            name: "CellLine".into(),
            value: Value::List(IndexSet::new()),
        })
    );
}

#[test]
fn annotation_assignment() {
    assert_eq!(
        single(r#"SET Disease = "Atherosclerosis""#),
        Object::Annotation(Annotation {
            name: "Disease".into(),
            value: Value::Quoted("Atherosclerosis".into()),
        })
    );
}

#[test]
fn unset_forms() {
    assert_eq!(
        single("UNSET Disease"),
        Object::Unset(Unset {
            names: vec!["Disease".into()],
        })
    );
    assert_eq!(
        single("UNSET {Disease, Species}"),
        Object::Unset(Unset {
            names: vec!["Disease".into(), "Species".into()],
        })
    );

    let Object::Unset(all) = single("UNSET ALL") else {
        panic!("expected an unset");
    };
    assert!(all.is_all());
}

#[test]
fn directive_display_round_trips() {
    insta::assert_snapshot!(dump(indoc! {r#"
        SET DOCUMENT Name = "Spec"
        DEFINE NAMESPACE MGI AS URL "http://example.org/mgi.belns"
        DEFINE ANNOTATION Dosage AS PATTERN "[0-9]\.[0-9]+"
        DEFINE ANNOTATION TextLocation AS LIST {"Abstract","Results"}
        SET TextLocation = {"Abstract", "Results"}
        UNSET TextLocation
    "#}), @r#"
    DocumentProperty SET DOCUMENT Name = "Spec"
    NamespaceDefinition DEFINE NAMESPACE MGI AS URL "http://example.org/mgi.belns"
    AnnotationDefinition DEFINE ANNOTATION Dosage AS PATTERN "[0-9]\.[0-9]+"
    AnnotationDefinition DEFINE ANNOTATION TextLocation AS LIST {"Abstract","Results"}
    Annotation SET TextLocation = {"Abstract","Results"}
    Unset UNSET TextLocation
    "#);
}

#[test]
fn function_named_like_a_keyword_is_a_statement() {
    let Object::Statement(statement) = crate::parse("SET(A)")
        .expect("parses")
        .pop()
        .expect("statement emitted")
    else {
        panic!("expected a statement");
    };
    assert_eq!(statement.subject.function, "SET");
}

#[test]
fn lowercase_keywords_are_not_directives() {
    let err = parse_error(r#"set Disease = "x""#);

    assert!(matches!(err, Error::UnexpectedToken { .. }), "{err:?}");
}

#[test]
fn missing_equals() {
    let err = parse_error(r#"SET Disease "Atherosclerosis""#);

    let Error::InvalidDirective {
        location,
        keyword,
        message,
    } = err
    else {
        panic!("expected an invalid directive");
    };
    assert_eq!(keyword, "SET");
    assert_eq!(message, "expected `=`, found string");
    assert_eq!((location.line, location.column), (1, 13));
}

#[test]
fn document_keyword_requires_a_name() {
    let err = parse_error("SET DOCUMENT = x");

    let Error::InvalidDirective {
        location,
        keyword,
        message,
    } = err
    else {
        panic!("expected an invalid directive");
    };
    assert_eq!(keyword, "SET DOCUMENT");
    assert_eq!(message, "expected a name, found `=`");
    assert_eq!((location.line, location.column), (1, 14));
}

#[test]
fn unknown_reference_kind() {
    let err = parse_error(r#"DEFINE NAMESPACE HGNC AS FILE "hgnc.belns""#);

    insta::assert_snapshot!(err.to_string(), @"1:26: invalid DEFINE NAMESPACE directive: expected `URL`, `PATTERN` or `LIST`, found `FILE`");
}

#[test]
fn missing_as() {
    let err = parse_error(r#"DEFINE ANNOTATION Disease URL "x""#);

    insta::assert_snapshot!(err.message(), @"invalid DEFINE ANNOTATION directive: expected `AS`, found `URL`");
}

#[test]
fn default_annotation_is_rejected() {
    let err = parse_error(r#"DEFINE DEFAULT ANNOTATION A AS URL "x""#);

    insta::assert_snapshot!(err.message(), @"invalid DEFINE directive: expected `NAMESPACE`, found `ANNOTATION`");
}

#[test]
fn unterminated_list() {
    let err = parse_error(r#"SET Species = {"9606", "10090""#);

    insta::assert_snapshot!(err.message(), @"invalid SET directive: unterminated list");
}

#[test]
fn trailing_tokens_after_directive() {
    let err = parse_error(r#"SET Disease = "x" "y""#);

    insta::assert_snapshot!(err.message(), @"invalid SET directive: unexpected string after directive");
}
