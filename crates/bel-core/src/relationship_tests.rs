use crate::relationship::{ParseRelationshipError, RelationshipType};

#[test]
fn symbols_resolve() {
    assert_eq!(
        RelationshipType::from_symbol("->"),
        Some(RelationshipType::Increases)
    );
    assert_eq!(
        RelationshipType::from_symbol("=|"),
        Some(RelationshipType::DirectlyDecreases)
    );
    assert_eq!(
        RelationshipType::from_symbol(":>"),
        Some(RelationshipType::TranscribedTo)
    );
    assert_eq!(RelationshipType::from_symbol("=="), None);
}

#[test]
fn keywords_and_abbreviations_resolve() {
    assert_eq!(
        RelationshipType::from_keyword("directlyIncreases"),
        Some(RelationshipType::DirectlyIncreases)
    );
    assert_eq!(
        RelationshipType::from_keyword("pos"),
        Some(RelationshipType::PositiveCorrelation)
    );
    assert_eq!(
        RelationshipType::from_keyword("cnc"),
        Some(RelationshipType::CausesNoChange)
    );
    assert_eq!(RelationshipType::from_keyword("Increases"), None);
}

#[test]
fn every_form_is_unique() {
    let mut seen = std::collections::HashSet::new();
    for r in RelationshipType::ALL {
        assert!(seen.insert(r.keyword()), "{}", r.keyword());
        if let Some(s) = r.symbol() {
            assert!(seen.insert(s), "{s}");
        }
        if let Some(a) = r.abbreviation() {
            assert!(seen.insert(a), "{a}");
        }
    }
}

#[test]
fn display_prefers_symbol() {
    assert_eq!(RelationshipType::Increases.to_string(), "->");
    assert_eq!(RelationshipType::Association.to_string(), "--");
    assert_eq!(RelationshipType::IsA.to_string(), "isA");
    assert_eq!(RelationshipType::PositiveCorrelation.to_string(), "positiveCorrelation");
}

#[test]
fn display_round_trips_through_from_str() {
    for r in RelationshipType::ALL {
        assert_eq!(r.to_string().parse::<RelationshipType>(), Ok(r));
    }
}

#[test]
fn from_str_rejects_unknown() {
    assert_eq!(
        "increase".parse::<RelationshipType>(),
        Err(ParseRelationshipError("increase".to_owned()))
    );
}

#[test]
fn families() {
    assert!(RelationshipType::DirectlyIncreases.is_causal());
    assert!(!RelationshipType::DirectlyIncreases.is_correlative());
    assert!(RelationshipType::NegativeCorrelation.is_correlative());
    assert!(!RelationshipType::HasMember.is_causal());
}
