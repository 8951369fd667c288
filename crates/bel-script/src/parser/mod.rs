//! Directive, term and statement parsing over one logical line.
//!
//! # Architecture
//!
//! Each logical line is lexed on its own and handed to a fresh [`Parser`].
//! Directives are tried first; anything that does not start with `SET`,
//! `UNSET` or `DEFINE` is parsed as a statement by recursive descent.
//!
//! Parsing is fail-fast: the first error ends the line, and nothing the line
//! produced is emitted.

mod core;
mod directives;
mod grammar;

#[cfg(test)]
mod tests;

use self::core::Parser;

use bel_core::{Object, Statement, Term};

use crate::error::{Error, Result};
use crate::lexer::lex;
use crate::lines::{Lines, LogicalLine};
use crate::location::LineIndex;
use crate::script::DEFAULT_RECURSION_LIMIT;

/// Parses one logical line into the objects it emits, in emission order.
pub(crate) fn parse_line(
    source: &str,
    index: &LineIndex,
    line: &LogicalLine,
    recursion_limit: u32,
) -> Result<Vec<Object>> {
    let tokens = lex(&line.text);
    log::trace!("line {}: {} token(s)", line.number, tokens.len());

    let mut parser = Parser::new(source, index, line, tokens, recursion_limit);
    parser.reject_garbage()?;

    if let Some(directive) = parser.parse_directive()? {
        return Ok(vec![directive]);
    }

    let mut statement = parser.parse_statement_line()?;
    statement.comment = line.comment.clone();
    log::debug!("line {}: {} statement", line.number, statement.shape());

    let mut objects = parser.finish();
    objects.push(statement.into());
    Ok(objects)
}

/// Parses a single statement. A trailing `//` comment is attached.
pub fn parse_statement(text: &str) -> Result<Statement> {
    let index = LineIndex::new(text);
    let line = single_line(text, &index, "statement")?;
    let mut parser = Parser::new(text, &index, &line, lex(&line.text), DEFAULT_RECURSION_LIMIT);
    parser.reject_garbage()?;
    let mut statement = parser.parse_statement_line()?;
    statement.comment = line.comment.clone();
    Ok(statement)
}

/// Parses a single term, e.g. `p(HGNC:AKT1)`.
pub fn parse_term(text: &str) -> Result<Term> {
    let index = LineIndex::new(text);
    let line = single_line(text, &index, "term")?;
    let mut parser = Parser::new(text, &index, &line, lex(&line.text), DEFAULT_RECURSION_LIMIT);
    parser.reject_garbage()?;
    parser.parse_term_line()
}

/// The one logical line in `text`.
fn single_line(text: &str, index: &LineIndex, what: &str) -> Result<LogicalLine> {
    let mut lines = Lines::new(text);
    let Some(line) = lines.next().transpose()? else {
        return Err(Error::UnexpectedToken {
            location: index.locate(text, text.len()..text.len()),
            expected: what.to_owned(),
            found: "end of input".to_owned(),
        });
    };
    if let Some(extra) = lines.next().transpose()? {
        let start = extra.source_offset(0);
        return Err(Error::UnexpectedToken {
            location: index.locate(text, start..start),
            expected: "end of input".to_owned(),
            found: "another line".to_owned(),
        });
    }
    Ok(line)
}
