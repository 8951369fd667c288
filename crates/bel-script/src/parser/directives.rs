//! Directive lines: `SET`, `UNSET` and `DEFINE`.
//!
//! ```text
//! SET DOCUMENT <Id> = <value>
//! SET <Id> = <value>
//! UNSET <Id> | UNSET { <Id> (, <Id>)* }
//! DEFINE [DEFAULT] NAMESPACE <Id> AS (URL|PATTERN|LIST) <reference>
//! DEFINE ANNOTATION <Id> AS (URL|PATTERN|LIST) <reference>
//! value := Id | String | { String (, String)* }
//! ```

use bel_core::{
    Annotation, AnnotationDefinition, DocumentProperty, NamespaceDefinition, Object, Reference,
    Unset, Value,
};
use indexmap::IndexSet;

use crate::error::{Error, Result};
use crate::lexer::SyntaxKind;

use super::core::Parser;
use super::grammar::string_value;

impl Parser<'_> {
    /// `Ok(None)` when the line does not start with a directive keyword.
    pub(crate) fn parse_directive(&mut self) -> Result<Option<Object>> {
        if !self.currently_is(SyntaxKind::Id) || self.next_is(SyntaxKind::ParenOpen) {
            return Ok(None);
        }

        let object = match self.current_text() {
            "SET" => self.parse_set()?,
            "UNSET" => self.parse_unset()?,
            "DEFINE" => self.parse_define()?,
            _ => return Ok(None),
        };
        log::debug!("line {}: directive {}", self.line.number, object.kind());
        Ok(Some(object))
    }

    fn invalid(&mut self, keyword: &str, message: impl Into<String>) -> Error {
        let span = self.current_span();
        Error::InvalidDirective {
            location: self.locate(span),
            keyword: keyword.to_owned(),
            message: message.into(),
        }
    }

    fn directive_id(&mut self, keyword: &str, what: &str) -> Result<String> {
        if self.currently_is(SyntaxKind::Id) {
            return Ok(self.bump().to_owned());
        }
        let found = self.found();
        Err(self.invalid(keyword, format!("expected {what}, found {found}")))
    }

    fn directive_keyword(&mut self, keyword: &str, expected: &str) -> Result<()> {
        if self.currently_is(SyntaxKind::Id) && self.current_text() == expected {
            self.bump();
            return Ok(());
        }
        let found = self.found();
        Err(self.invalid(keyword, format!("expected `{expected}`, found {found}")))
    }

    fn directive_token(&mut self, keyword: &str, kind: SyntaxKind) -> Result<()> {
        if self.eat(kind) {
            return Ok(());
        }
        let found = self.found();
        Err(self.invalid(
            keyword,
            format!("expected {}, found {found}", kind.describe()),
        ))
    }

    fn directive_end(&mut self, keyword: &str) -> Result<()> {
        if self.at_end() {
            return Ok(());
        }
        let found = self.found();
        Err(self.invalid(keyword, format!("unexpected {found} after directive")))
    }

    fn parse_set(&mut self) -> Result<Object> {
        self.bump();
        let document = self.currently_is(SyntaxKind::Id) && self.current_text() == "DOCUMENT";
        let keyword = if document {
            self.bump();
            "SET DOCUMENT"
        } else {
            "SET"
        };

        let name = self.directive_id(keyword, "a name")?;
        self.directive_token(keyword, SyntaxKind::Equals)?;
        let value = self.parse_value(keyword)?;
        self.directive_end(keyword)?;

        Ok(if document {
            DocumentProperty { name, value }.into()
        } else {
            Annotation { name, value }.into()
        })
    }

    fn parse_value(&mut self, keyword: &str) -> Result<Value> {
        match self.current() {
            SyntaxKind::Id => Ok(Value::Identifier(self.bump().to_owned())),
            SyntaxKind::StringLiteral => Ok(Value::Quoted(string_value(self.bump()))),
            SyntaxKind::BraceOpen => Ok(Value::List(self.parse_list(keyword)?)),
            _ => {
                let found = self.found();
                Err(self.invalid(
                    keyword,
                    format!("expected a value, string or list, found {found}"),
                ))
            }
        }
    }

    /// `{"a", "b"}`. Bare identifiers are accepted as items too.
    fn parse_list(&mut self, keyword: &str) -> Result<IndexSet<String>> {
        self.directive_token(keyword, SyntaxKind::BraceOpen)?;
        let mut items = IndexSet::new();
        if self.eat(SyntaxKind::BraceClose) {
            return Ok(items);
        }

        loop {
            match self.current() {
                SyntaxKind::StringLiteral => {
                    items.insert(string_value(self.bump()));
                }
                SyntaxKind::Id => {
                    items.insert(self.bump().to_owned());
                }
                SyntaxKind::Eol => return Err(self.invalid(keyword, "unterminated list")),
                _ => {
                    let found = self.found();
                    return Err(self.invalid(keyword, format!("expected list item, found {found}")));
                }
            }

            match self.current() {
                SyntaxKind::Comma => {
                    self.bump();
                }
                SyntaxKind::BraceClose => {
                    self.bump();
                    return Ok(items);
                }
                SyntaxKind::Eol => return Err(self.invalid(keyword, "unterminated list")),
                _ => {
                    let found = self.found();
                    return Err(self.invalid(keyword, format!("expected `,` or `}}`, found {found}")));
                }
            }
        }
    }

    fn parse_unset(&mut self) -> Result<Object> {
        self.bump();
        let names = if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_list("UNSET")?.into_iter().collect()
        } else {
            vec![self.directive_id("UNSET", "an annotation name")?]
        };
        self.directive_end("UNSET")?;
        Ok(Unset { names }.into())
    }

    fn parse_define(&mut self) -> Result<Object> {
        self.bump();
        let default = self.currently_is(SyntaxKind::Id) && self.current_text() == "DEFAULT";
        if default {
            self.bump();
        }

        let target = match self.current_text() {
            "NAMESPACE" => "NAMESPACE",
            "ANNOTATION" if !default => "ANNOTATION",
            _ => {
                let expected = if default {
                    "`NAMESPACE`"
                } else {
                    "`NAMESPACE` or `ANNOTATION`"
                };
                let found = self.found();
                return Err(self.invalid("DEFINE", format!("expected {expected}, found {found}")));
            }
        };
        self.bump();

        let keyword = format!("DEFINE {target}");
        let name = self.directive_id(&keyword, "a name")?;
        self.directive_keyword(&keyword, "AS")?;
        let reference = self.parse_reference(&keyword)?;
        self.directive_end(&keyword)?;

        Ok(if target == "NAMESPACE" {
            NamespaceDefinition {
                prefix: name,
                reference,
                default,
            }
            .into()
        } else {
            AnnotationDefinition { name, reference }.into()
        })
    }

    fn parse_reference(&mut self, keyword: &str) -> Result<Reference> {
        let kind = if self.currently_is(SyntaxKind::Id) {
            self.current_text()
        } else {
            ""
        };
        match kind {
            "URL" => {
                self.bump();
                Ok(Reference::Url(self.quoted(keyword, "a quoted URL")?))
            }
            "PATTERN" => {
                self.bump();
                Ok(Reference::Pattern(self.quoted(keyword, "a quoted pattern")?))
            }
            "LIST" => {
                self.bump();
                Ok(Reference::List(self.parse_list(keyword)?))
            }
            _ => {
                let found = self.found();
                Err(self.invalid(
                    keyword,
                    format!("expected `URL`, `PATTERN` or `LIST`, found {found}"),
                ))
            }
        }
    }

    fn quoted(&mut self, keyword: &str, what: &str) -> Result<String> {
        if self.currently_is(SyntaxKind::StringLiteral) {
            return Ok(string_value(self.bump()));
        }
        let found = self.found();
        Err(self.invalid(keyword, format!("expected {what}, found {found}")))
    }
}
