//! Document-level directives: `SET`, `UNSET` and `DEFINE` lines.

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::utils::quote;

/// Right-hand side of a `SET` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// Unquoted word: `SET DOCUMENT Authors = User`.
    Identifier(String),
    /// Quoted string, escapes removed.
    Quoted(String),
    /// `{"a", "b"}`, de-duplicated in source order.
    List(IndexSet<String>),
}

impl Value {
    /// Text of a scalar value; `None` for lists.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Identifier(s) | Value::Quoted(s) => Some(s),
            Value::List(_) => None,
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &IndexSet<String>) -> fmt::Result {
    f.write_str("{")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        f.write_str(&quote(item))?;
    }
    f.write_str("}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Identifier(s) => f.write_str(s),
            Value::Quoted(s) => f.write_str(&quote(s)),
            Value::List(items) => write_list(f, items),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    Url,
    Pattern,
    List,
}

impl DefinitionKind {
    pub fn keyword(self) -> &'static str {
        match self {
            DefinitionKind::Url => "URL",
            DefinitionKind::Pattern => "PATTERN",
            DefinitionKind::List => "LIST",
        }
    }
}

/// What a namespace or annotation definition points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Reference {
    Url(String),
    /// Stored verbatim, not compiled.
    Pattern(String),
    List(IndexSet<String>),
}

impl Reference {
    pub fn kind(&self) -> DefinitionKind {
        match self {
            Reference::Url(_) => DefinitionKind::Url,
            Reference::Pattern(_) => DefinitionKind::Pattern,
            Reference::List(_) => DefinitionKind::List,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.kind().keyword())?;
        match self {
            Reference::Url(s) | Reference::Pattern(s) => f.write_str(&quote(s)),
            Reference::List(items) => write_list(f, items),
        }
    }
}

/// `SET DOCUMENT <name> = <value>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentProperty {
    pub name: String,
    pub value: Value,
}

impl fmt::Display for DocumentProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SET DOCUMENT {} = {}", self.name, self.value)
    }
}

/// `DEFINE [DEFAULT] NAMESPACE <prefix> AS <reference>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceDefinition {
    pub prefix: String,
    pub reference: Reference,
    #[serde(default)]
    pub default: bool,
}

impl NamespaceDefinition {
    pub fn kind(&self) -> DefinitionKind {
        self.reference.kind()
    }
}

impl fmt::Display for NamespaceDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let default = if self.default { "DEFAULT " } else { "" };
        write!(
            f,
            "DEFINE {default}NAMESPACE {} AS {}",
            self.prefix, self.reference
        )
    }
}

/// `DEFINE ANNOTATION <name> AS <reference>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationDefinition {
    pub name: String,
    pub reference: Reference,
}

impl AnnotationDefinition {
    pub fn kind(&self) -> DefinitionKind {
        self.reference.kind()
    }
}

impl fmt::Display for AnnotationDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DEFINE ANNOTATION {} AS {}", self.name, self.reference)
    }
}

/// `SET <name> = <value>`. Scopes the statements that follow it until unset
/// or redefined; the parser only records the assignment in sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    pub value: Value,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SET {} = {}", self.name, self.value)
    }
}

/// `UNSET <name>` or `UNSET {<name>, ...}`. `ALL` and `STATEMENT_GROUP`
/// are kept as ordinary names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unset {
    pub names: Vec<String>,
}

impl Unset {
    pub fn is_all(&self) -> bool {
        self.names.iter().any(|n| n == "ALL")
    }
}

impl fmt::Display for Unset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.names.as_slice() {
            [single] => write!(f, "UNSET {single}"),
            names => write!(f, "UNSET {{{}}}", names.join(",")),
        }
    }
}
