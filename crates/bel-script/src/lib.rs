//! BEL script parser.
//!
//! Reads BEL (Biological Expression Language) script text and emits a flat
//! stream of model objects: directives, parameters, terms and statements.
//!
//! # Example
//!
//! ```
//! use bel_script::{Object, Script};
//!
//! let source = r#"
//! SET DOCUMENT Name = "Example"
//! p(HGNC:AKT1) -> bp(GOBP:"apoptotic process") //observed
//! "#;
//!
//! let script = Script::new(source);
//! let objects = script.to_vec().expect("valid script");
//! assert_eq!(objects.len(), 6);
//! assert!(matches!(objects.last(), Some(Object::Statement(_))));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod lexer;
pub mod lines;
pub mod location;
mod parser;
pub mod printer;
pub mod script;

#[cfg(test)]
mod lines_tests;

pub use bel_core::{
    Annotation, AnnotationDefinition, Argument, DefinitionKind, DocumentProperty, Function,
    NamespaceDefinition, Object, ObjectKind, Parameter, Predicate, Reference, RelationshipType,
    ReturnType, Statement, StatementObject, StatementShape, Term, Unset, Value,
};
pub use error::{Error, Result};
pub use lines::{Lines, LogicalLine};
pub use location::{LineIndex, Location};
pub use parser::{parse_statement, parse_term};
pub use printer::{ErrorPrinter, ObjectPrinter};
pub use script::{DEFAULT_RECURSION_LIMIT, Objects, Script, ScriptBuilder, ScriptConfig};

/// Parses a whole script into a vector of objects.
pub fn parse(source: &str) -> Result<Vec<Object>> {
    Script::new(source).to_vec()
}

/// Parses a whole script, handing each object to `f` as it is produced.
///
/// Returns the number of objects delivered.
pub fn parse_with(source: &str, f: impl FnMut(Object)) -> Result<usize> {
    Script::new(source).for_each(f)
}
