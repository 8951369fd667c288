//! Terms and their arguments.
//!
//! A term is a function call: `p(HGNC:AKT1, pmod(P, S, 473))`. Arguments are
//! either nested terms or parameters. Terms own their arguments outright, so
//! a term tree has no sharing and no cycles.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::function::Function;
use crate::utils::quote;

/// A namespaced or bare value: `HGNC:AKT1`, `GOBP:"lipid oxidation"`, `473`.
///
/// A quoted string argument without a prefix is a parameter too, with
/// `namespace: None` and `quoted: true`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    pub namespace: Option<String>,
    pub value: String,
    pub quoted: bool,
}

impl Parameter {
    pub fn bare(value: impl Into<String>) -> Self {
        Self {
            namespace: None,
            value: value.into(),
            quoted: false,
        }
    }

    pub fn namespaced(namespace: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            value: value.into(),
            quoted: false,
        }
    }

    pub fn quoted(mut self) -> Self {
        self.quoted = true;
        self
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ns) = &self.namespace {
            write!(f, "{ns}:")?;
        }
        if self.quoted {
            f.write_str(&quote(&self.value))
        } else {
            f.write_str(&self.value)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Argument {
    Term(Term),
    Parameter(Parameter),
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Term(t) => t.fmt(f),
            Argument::Parameter(p) => p.fmt(f),
        }
    }
}

impl From<Term> for Argument {
    fn from(term: Term) -> Self {
        Argument::Term(term)
    }
}

impl From<Parameter> for Argument {
    fn from(parameter: Parameter) -> Self {
        Argument::Parameter(parameter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    /// Function name exactly as written (`p`, `proteinAbundance`, ...).
    pub function: String,
    pub arguments: Vec<Argument>,
}

impl Term {
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(mut self, argument: impl Into<Argument>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// `None` for names outside the BEL function table.
    pub fn function_kind(&self) -> Option<Function> {
        Function::from_name(&self.function)
    }

    /// Direct child terms.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.arguments.iter().filter_map(|a| match a {
            Argument::Term(t) => Some(t),
            Argument::Parameter(_) => None,
        })
    }

    /// Every parameter in the tree, depth-first in source order.
    pub fn parameters(&self) -> Vec<&Parameter> {
        let mut out = Vec::new();
        self.collect_parameters(&mut out);
        out
    }

    fn collect_parameters<'a>(&'a self, out: &mut Vec<&'a Parameter>) {
        for arg in &self.arguments {
            match arg {
                Argument::Term(t) => t.collect_parameters(out),
                Argument::Parameter(p) => out.push(p),
            }
        }
    }

    /// Nesting depth; a term with no term arguments has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.terms().map(Term::depth).max().unwrap_or(0)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            arg.fmt(f)?;
        }
        f.write_str(")")
    }
}
