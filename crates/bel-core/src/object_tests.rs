use crate::directive::{DocumentProperty, Value};
use crate::object::{Object, ObjectKind};
use crate::relationship::RelationshipType;
use crate::statement::Statement;
use crate::term::{Parameter, Term};

fn statement() -> Statement {
    Statement::simple(
        Term::new("p").with_argument(Parameter::namespaced("MGI", "Mapkap1")),
        RelationshipType::Increases,
        Term::new("p").with_argument(Parameter::namespaced("MGI", "Akt1")),
    )
    .with_comment("Comment2")
}

#[test]
fn kinds() {
    let objects: Vec<Object> = vec![
        DocumentProperty {
            name: "Name".into(),
            value: Value::Quoted("Spec".into()),
        }
        .into(),
        Parameter::bare("P").into(),
        Term::new("p").into(),
        statement().into(),
    ];
    let kinds: Vec<_> = objects.iter().map(Object::kind).collect();
    assert_eq!(
        kinds,
        [
            ObjectKind::DocumentProperty,
            ObjectKind::Parameter,
            ObjectKind::Term,
            ObjectKind::Statement
        ]
    );
    assert!(kinds[0].is_directive());
    assert!(!kinds[3].is_directive());
}

#[test]
fn accessors() {
    let object = Object::from(statement());
    assert!(object.as_statement().is_some_and(Statement::is_simple));
    assert!(object.as_term().is_none());
    assert!(Object::from(Parameter::bare("S")).as_parameter().is_some());
}

#[test]
fn json_shape() {
    let json = serde_json::to_string_pretty(&Object::from(statement())).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "object": "statement",
      "subject": {
        "function": "p",
        "arguments": [
          {
            "type": "parameter",
            "namespace": "MGI",
            "value": "Mapkap1",
            "quoted": false
          }
        ]
      },
      "predicate": {
        "relationship": "increases",
        "object": {
          "type": "term",
          "function": "p",
          "arguments": [
            {
              "type": "parameter",
              "namespace": "MGI",
              "value": "Akt1",
              "quoted": false
            }
          ]
        }
      },
      "comment": "Comment2"
    }
    "#);
}

#[test]
fn json_round_trip() {
    let object = Object::from(statement());
    let json = serde_json::to_string(&object).unwrap();
    let back: Object = serde_json::from_str(&json).unwrap();
    assert_eq!(back, object);
}
