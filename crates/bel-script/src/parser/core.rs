//! Parser state machine and low-level operations.

use bel_core::Object;
use rowan::TextRange;

use crate::error::{Error, Result};
use crate::lexer::{SyntaxKind, Token, token_text};
use crate::lines::LogicalLine;
use crate::location::{LineIndex, Location};

/// Parses one logical line. Whitespace tokens are skipped on lookahead.
pub struct Parser<'a> {
    pub(super) line: &'a LogicalLine,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    source: &'a str,
    index: &'a LineIndex,
    depth: u32,
    recursion_limit: u32,
    /// Parameters and terms completed so far, in post-order.
    emitted: Vec<Object>,
}

impl<'a> Parser<'a> {
    pub fn new(
        source: &'a str,
        index: &'a LineIndex,
        line: &'a LogicalLine,
        tokens: Vec<Token>,
        recursion_limit: u32,
    ) -> Self {
        Self {
            line,
            tokens,
            pos: 0,
            source,
            index,
            depth: 0,
            recursion_limit,
            emitted: Vec::new(),
        }
    }

    /// Consumes the parser, returning everything emitted.
    pub fn finish(self) -> Vec<Object> {
        self.emitted
    }

    pub(super) fn emit(&mut self, object: impl Into<Object>) {
        self.emitted.push(object.into());
    }

    /// Fails on the first `Garbage` token.
    pub(super) fn reject_garbage(&self) -> Result<()> {
        match self.tokens.iter().find(|t| t.kind == SyntaxKind::Garbage) {
            Some(token) => Err(Error::UnrecognizedToken {
                location: self.locate(token.span),
                text: token_text(&self.line.text, token).to_owned(),
            }),
            None => Ok(()),
        }
    }

    fn skip_trivia(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.pos += 1;
        }
    }

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia();
        self.tokens.get(self.pos).map_or(SyntaxKind::Eol, |t| t.kind)
    }

    /// LL(k) lookahead past trivia.
    fn peek_nth(&mut self, n: usize) -> SyntaxKind {
        self.skip_trivia();
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map_or(SyntaxKind::Eol, |t| t.kind)
    }

    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.peek_nth(1) == kind
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn at_end(&mut self) -> bool {
        self.current() == SyntaxKind::Eol
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia();
        self.tokens.get(self.pos).map_or_else(
            || TextRange::empty((self.line.text.len() as u32).into()),
            |t| t.span,
        )
    }

    /// Text of the current token; empty at end of line.
    pub(super) fn current_text(&mut self) -> &'a str {
        self.skip_trivia();
        let line: &'a LogicalLine = self.line;
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(&line.text, t))
    }

    /// Consumes the current token and returns its text.
    pub(super) fn bump(&mut self) -> &'a str {
        assert!(!self.at_end(), "bump called at end of line");
        let text = self.current_text();
        self.pos += 1;
        text
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: `UnexpectedToken` naming `what`.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> Result<&'a str> {
        if self.currently_is(kind) {
            return Ok(self.bump());
        }
        Err(self.unexpected(what))
    }

    /// How the current token reads in an error message.
    pub(super) fn found(&mut self) -> String {
        match self.current() {
            SyntaxKind::Id => format!("`{}`", self.current_text()),
            kind => kind.describe().to_owned(),
        }
    }

    pub(super) fn unexpected(&mut self, expected: &str) -> Error {
        let found = self.found();
        let span = self.current_span();
        Error::UnexpectedToken {
            location: self.locate(span),
            expected: expected.to_owned(),
            found,
        }
    }

    /// Maps a span in the logical line to a source location.
    pub(super) fn locate(&self, span: TextRange) -> Location {
        let range = self.line.source_range(span.into());
        self.index.locate(self.source, range)
    }

    pub(super) fn enter_recursion(&mut self) -> Result<()> {
        if self.depth >= self.recursion_limit {
            let span = self.current_span();
            return Err(Error::RecursionLimitExceeded {
                location: self.locate(span),
                limit: self.recursion_limit,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
