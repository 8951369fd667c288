//! The closed set of objects a parse pass emits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::directive::{
    Annotation, AnnotationDefinition, DocumentProperty, NamespaceDefinition, Unset,
};
use crate::statement::Statement;
use crate::term::{Parameter, Term};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    DocumentProperty,
    NamespaceDefinition,
    AnnotationDefinition,
    Annotation,
    Unset,
    Parameter,
    Term,
    Statement,
}

impl ObjectKind {
    pub fn is_directive(self) -> bool {
        matches!(
            self,
            ObjectKind::DocumentProperty
                | ObjectKind::NamespaceDefinition
                | ObjectKind::AnnotationDefinition
                | ObjectKind::Annotation
                | ObjectKind::Unset
        )
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::DocumentProperty => "DocumentProperty",
            ObjectKind::NamespaceDefinition => "NamespaceDefinition",
            ObjectKind::AnnotationDefinition => "AnnotationDefinition",
            ObjectKind::Annotation => "Annotation",
            ObjectKind::Unset => "Unset",
            ObjectKind::Parameter => "Parameter",
            ObjectKind::Term => "Term",
            ObjectKind::Statement => "Statement",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum Object {
    DocumentProperty(DocumentProperty),
    NamespaceDefinition(NamespaceDefinition),
    AnnotationDefinition(AnnotationDefinition),
    Annotation(Annotation),
    Unset(Unset),
    Parameter(Parameter),
    Term(Term),
    Statement(Statement),
}

impl Object {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::DocumentProperty(_) => ObjectKind::DocumentProperty,
            Object::NamespaceDefinition(_) => ObjectKind::NamespaceDefinition,
            Object::AnnotationDefinition(_) => ObjectKind::AnnotationDefinition,
            Object::Annotation(_) => ObjectKind::Annotation,
            Object::Unset(_) => ObjectKind::Unset,
            Object::Parameter(_) => ObjectKind::Parameter,
            Object::Term(_) => ObjectKind::Term,
            Object::Statement(_) => ObjectKind::Statement,
        }
    }

    pub fn as_statement(&self) -> Option<&Statement> {
        match self {
            Object::Statement(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Object::Term(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_parameter(&self) -> Option<&Parameter> {
        match self {
            Object::Parameter(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::DocumentProperty(o) => o.fmt(f),
            Object::NamespaceDefinition(o) => o.fmt(f),
            Object::AnnotationDefinition(o) => o.fmt(f),
            Object::Annotation(o) => o.fmt(f),
            Object::Unset(o) => o.fmt(f),
            Object::Parameter(o) => o.fmt(f),
            Object::Term(o) => o.fmt(f),
            Object::Statement(o) => o.fmt(f),
        }
    }
}

macro_rules! impl_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Object {
                fn from(value: $variant) -> Self {
                    Object::$variant(value)
                }
            }
        )*
    };
}

impl_from!(
    DocumentProperty,
    NamespaceDefinition,
    AnnotationDefinition,
    Annotation,
    Unset,
    Parameter,
    Term,
    Statement
);
