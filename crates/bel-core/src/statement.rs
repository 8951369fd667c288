//! Statements relate a subject term to an object.
//!
//! The three shapes are derived from structure, never stored:
//! - subject-only: `p(HGNC:AKT1)`
//! - simple: `p(HGNC:AKT1) -> bp(GOBP:apoptosis)`
//! - nested: `p(A) =| (p(B) -> bp(C))`

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::relationship::RelationshipType;
use crate::term::Term;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementShape {
    SubjectOnly,
    Simple,
    Nested,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StatementObject {
    Term(Term),
    Statement(Box<Statement>),
}

impl fmt::Display for StatementObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementObject::Term(t) => t.fmt(f),
            StatementObject::Statement(s) => write!(f, "({s})"),
        }
    }
}

/// Relationship and object travel together; neither exists alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    pub relationship: RelationshipType,
    pub object: StatementObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    pub subject: Term,
    pub predicate: Option<Predicate>,
    /// Trailing `//` comment text, trimmed. Not interpreted.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<String>,
}

impl Statement {
    pub fn subject_only(subject: Term) -> Self {
        Self {
            subject,
            predicate: None,
            comment: None,
        }
    }

    pub fn simple(subject: Term, relationship: RelationshipType, object: Term) -> Self {
        Self {
            subject,
            predicate: Some(Predicate {
                relationship,
                object: StatementObject::Term(object),
            }),
            comment: None,
        }
    }

    pub fn nested(subject: Term, relationship: RelationshipType, object: Statement) -> Self {
        Self {
            subject,
            predicate: Some(Predicate {
                relationship,
                object: StatementObject::Statement(Box::new(object)),
            }),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn relationship(&self) -> Option<RelationshipType> {
        self.predicate.as_ref().map(|p| p.relationship)
    }

    pub fn object(&self) -> Option<&StatementObject> {
        self.predicate.as_ref().map(|p| &p.object)
    }

    pub fn shape(&self) -> StatementShape {
        match self.object() {
            None => StatementShape::SubjectOnly,
            Some(StatementObject::Term(_)) => StatementShape::Simple,
            Some(StatementObject::Statement(_)) => StatementShape::Nested,
        }
    }

    pub fn is_subject_only(&self) -> bool {
        self.shape() == StatementShape::SubjectOnly
    }

    pub fn is_simple(&self) -> bool {
        self.shape() == StatementShape::Simple
    }

    pub fn is_nested(&self) -> bool {
        self.shape() == StatementShape::Nested
    }

    /// Nesting depth of statement objects; subject-only and simple are 1.
    pub fn depth(&self) -> usize {
        match self.object() {
            Some(StatementObject::Statement(inner)) => 1 + inner.depth(),
            _ => 1,
        }
    }
}

/// Renders without the comment.
impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.subject.fmt(f)?;
        if let Some(p) = &self.predicate {
            write!(f, " {} {}", p.relationship, p.object)?;
        }
        Ok(())
    }
}

impl fmt::Display for StatementShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatementShape::SubjectOnly => "subject_only",
            StatementShape::Simple => "simple",
            StatementShape::Nested => "nested",
        })
    }
}
