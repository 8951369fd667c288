#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Object model for BEL script documents.
//!
//! Everything a parse pass can emit lives here as plain owned data:
//! - **Directives**: document properties, namespace/annotation definitions,
//!   annotation assignments and unsets
//! - **Expressions**: parameters, terms and statements
//!
//! The model carries no parsing logic. `Display` renders each type back to
//! BEL surface syntax, and serde derives let downstream serializers consume
//! the model without depending on the parser.

pub mod directive;
pub mod function;
pub mod object;
pub mod relationship;
pub mod statement;
pub mod term;
pub mod utils;

#[cfg(test)]
mod object_tests;
#[cfg(test)]
mod relationship_tests;

pub use directive::{
    Annotation, AnnotationDefinition, DefinitionKind, DocumentProperty, NamespaceDefinition,
    Reference, Unset, Value,
};
pub use function::{Function, ReturnType};
pub use object::{Object, ObjectKind};
pub use relationship::{ParseRelationshipError, RelationshipType};
pub use statement::{Predicate, Statement, StatementObject, StatementShape};
pub use term::{Argument, Parameter, Term};
