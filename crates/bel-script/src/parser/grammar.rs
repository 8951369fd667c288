//! Term and statement grammar.
//!
//! ```text
//! statement       := term (relationship statementObject)?
//! statementObject := term | "(" statement ")"
//! term            := Id "(" (arg ("," arg)*)? ")"
//! arg             := term | parameter
//! parameter       := (Id ":")? (Id | String)
//! ```
//!
//! At most one relationship may appear outside parentheses. A parenthesized
//! object without a relationship is unwrapped to its term.

use bel_core::utils::unescape;
use bel_core::{Argument, Parameter, Predicate, RelationshipType, Statement, StatementObject, Term};

use crate::error::{Error, Result};
use crate::lexer::SyntaxKind;

use super::core::Parser;

impl Parser<'_> {
    /// Parses a whole line as one statement.
    pub(crate) fn parse_statement_line(&mut self) -> Result<Statement> {
        self.check_balanced()?;
        let statement = self.parse_statement()?;
        self.expect_end_of_statement()?;
        Ok(statement)
    }

    /// Parses a whole line as one term.
    pub(crate) fn parse_term_line(&mut self) -> Result<Term> {
        self.check_balanced()?;
        let term = self.parse_term()?;
        if !self.at_end() {
            return Err(self.unexpected("end of term"));
        }
        Ok(term)
    }

    fn expect_end_of_statement(&mut self) -> Result<()> {
        if self.at_end() {
            return Ok(());
        }
        if self.current_relationship().is_some() {
            return Err(self.unexpected("end of statement (relationships do not chain)"));
        }
        Err(self.unexpected("relationship or end of statement"))
    }

    /// Rejects a `)` without partner and a `(` left open at end of line.
    fn check_balanced(&self) -> Result<()> {
        let mut open = Vec::new();
        for token in &self.tokens {
            match token.kind {
                SyntaxKind::ParenOpen => open.push(token.span),
                SyntaxKind::ParenClose => {
                    if open.pop().is_none() {
                        return Err(Error::UnbalancedParentheses {
                            location: self.locate(token.span),
                            message: "`)` has no matching `(`".to_owned(),
                        });
                    }
                }
                _ => {}
            }
        }
        match open.pop() {
            Some(span) => Err(Error::UnbalancedParentheses {
                location: self.locate(span),
                message: "`(` is never closed".to_owned(),
            }),
            None => Ok(()),
        }
    }

    /// Symbolic operators, or keywords (`increases`, `pos`) in operator position.
    fn current_relationship(&mut self) -> Option<RelationshipType> {
        match self.current() {
            SyntaxKind::Id => RelationshipType::from_keyword(self.current_text()),
            kind => kind.relationship(),
        }
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        self.enter_recursion()?;
        let subject = self.parse_term()?;
        let predicate = match self.current_relationship() {
            Some(relationship) => {
                self.bump();
                let object = self.parse_statement_object()?;
                Some(Predicate {
                    relationship,
                    object,
                })
            }
            None => None,
        };
        self.exit_recursion();

        Ok(Statement {
            subject,
            predicate,
            comment: None,
        })
    }

    fn parse_statement_object(&mut self) -> Result<StatementObject> {
        if !self.eat(SyntaxKind::ParenOpen) {
            return Ok(StatementObject::Term(self.parse_term()?));
        }

        let inner = self.parse_statement()?;
        if !self.currently_is(SyntaxKind::ParenClose) {
            if self.current_relationship().is_some() {
                return Err(self.unexpected("`)` (relationships do not chain)"));
            }
            return Err(self.unexpected("`)`"));
        }
        self.bump();

        Ok(match inner.predicate {
            None => StatementObject::Term(inner.subject),
            Some(_) => StatementObject::Statement(Box::new(inner)),
        })
    }

    /// `fn(args...)`. Emits the term once its closing paren is consumed.
    pub(super) fn parse_term(&mut self) -> Result<Term> {
        self.enter_recursion()?;
        let function = self.expect(SyntaxKind::Id, "function name")?.to_owned();
        self.expect(SyntaxKind::ParenOpen, "`(`")?;

        let mut arguments = Vec::new();
        if !self.currently_is(SyntaxKind::ParenClose) {
            loop {
                arguments.push(self.parse_argument()?);
                match self.current() {
                    SyntaxKind::Comma => {
                        self.bump();
                    }
                    SyntaxKind::ParenClose => break,
                    _ => return Err(self.unexpected("`,` or `)`")),
                }
            }
        }
        self.expect(SyntaxKind::ParenClose, "`)`")?;
        self.exit_recursion();

        let term = Term {
            function,
            arguments,
        };
        self.emit(term.clone());
        Ok(term)
    }

    fn parse_argument(&mut self) -> Result<Argument> {
        match self.current() {
            SyntaxKind::Id if self.next_is(SyntaxKind::ParenOpen) => {
                Ok(Argument::Term(self.parse_term()?))
            }
            SyntaxKind::Id | SyntaxKind::StringLiteral => {
                Ok(Argument::Parameter(self.parse_parameter()?))
            }
            _ => Err(self.unexpected("term or parameter")),
        }
    }

    fn parse_parameter(&mut self) -> Result<Parameter> {
        let namespace = if self.currently_is(SyntaxKind::Id) && self.next_is(SyntaxKind::Colon) {
            let prefix = self.bump().to_owned();
            self.bump();
            Some(prefix)
        } else {
            None
        };

        let parameter = match self.current() {
            SyntaxKind::Id => Parameter {
                namespace,
                value: self.bump().to_owned(),
                quoted: false,
            },
            SyntaxKind::StringLiteral => Parameter {
                namespace,
                value: string_value(self.bump()),
                quoted: true,
            },
            _ => return Err(self.unexpected("value after namespace prefix")),
        };

        self.emit(parameter.clone());
        Ok(parameter)
    }
}

/// Strips the quotes from a string literal token and removes escapes.
pub(super) fn string_value(literal: &str) -> String {
    let inner = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal);
    unescape(inner)
}
