//! Lexical line splitter.
//!
//! Turns raw text into logical lines:
//! - a trailing `\` joins the next physical line (inside a string too)
//! - `//` outside a string starts a trailing comment, split off and trimmed
//! - lines starting with `#` are whole-line comments
//! - blank and comment-only lines produce nothing
//!
//! Each logical line keeps a map back to source offsets so later stages can
//! report errors at the right physical line and column.

use crate::error::{Error, Result};
use crate::location::Location;

/// Start of one physical piece of a logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Piece {
    logical: usize,
    source: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based physical line the logical line starts on.
    pub number: u32,
    /// Code with comment and continuation markers removed.
    pub text: String,
    pub comment: Option<String>,
    pieces: Vec<Piece>,
}

impl LogicalLine {
    /// Maps an offset in `text` to an offset in the original source.
    pub fn source_offset(&self, logical: usize) -> usize {
        let idx = self.pieces.partition_point(|p| p.logical <= logical);
        let piece = self.pieces[idx.saturating_sub(1)];
        piece.source + (logical - piece.logical)
    }

    pub fn source_range(&self, range: std::ops::Range<usize>) -> std::ops::Range<usize> {
        let start = self.source_offset(range.start);
        let end = self.source_offset(range.end).max(start);
        start..end
    }
}

/// Result of scanning one physical line.
struct Scan<'a> {
    code: &'a str,
    comment: Option<&'a str>,
    continues: bool,
    in_string: bool,
    /// Offset in the physical line of the quote left open by a continuation.
    open_quote: Option<usize>,
}

/// Scans one physical line. `in_string` is true when a previous line ended
/// inside a string with a continuation.
///
/// An unterminated string fails with the offset of its opening quote, or
/// `None` when the quote is on an earlier physical line.
fn scan(raw: &str, mut in_string: bool) -> std::result::Result<Scan<'_>, Option<usize>> {
    let bytes = raw.as_bytes();
    let mut quote_start = None;
    let mut i = 0;

    while i < bytes.len() {
        match (in_string, bytes[i]) {
            (true, b'\\') => {
                if i + 1 == bytes.len() {
                    return Ok(Scan {
                        code: &raw[..i],
                        comment: None,
                        continues: true,
                        in_string: true,
                        open_quote: quote_start,
                    });
                }
                i += 1;
            }
            (true, b'"') => in_string = false,
            (false, b'"') => {
                in_string = true;
                quote_start = Some(i);
            }
            (false, b'/') if bytes.get(i + 1) == Some(&b'/') => {
                return Ok(finish(&raw[..i], Some(raw[i + 2..].trim())));
            }
            _ => {}
        }
        i += 1;
    }

    if in_string {
        return Err(quote_start);
    }
    Ok(finish(raw, None))
}

fn finish<'a>(code: &'a str, comment: Option<&'a str>) -> Scan<'a> {
    let code = code.trim_end();
    match code.strip_suffix('\\') {
        Some(code) => Scan {
            code,
            comment,
            continues: true,
            in_string: false,
            open_quote: None,
        },
        None => Scan {
            code,
            comment,
            continues: false,
            in_string: false,
            open_quote: None,
        },
    }
}

/// Iterator over the logical lines of a source text.
pub struct Lines<'src> {
    source: &'src str,
    pos: usize,
    line: u32,
    done: bool,
}

impl<'src> Lines<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 0,
            done: false,
        }
    }

    /// Next physical line with its start offset; `\r\n` endings are trimmed.
    fn next_physical(&mut self) -> Option<(usize, &'src str)> {
        if self.pos >= self.source.len() {
            return None;
        }
        let start = self.pos;
        let rest = &self.source[start..];
        let raw = match rest.find('\n') {
            Some(nl) => {
                self.pos = start + nl + 1;
                &rest[..nl]
            }
            None => {
                self.pos = self.source.len();
                rest
            }
        };
        self.line += 1;
        Some((start, raw.strip_suffix('\r').unwrap_or(raw)))
    }

    /// Location of a source offset, which may lie on an earlier physical line
    /// than the one being read.
    fn location(&self, offset: usize, len: usize) -> Location {
        let before = &self.source[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Location::new(line as u32, column as u32, offset..offset + len)
    }

    fn fail(&mut self, location: Location, message: &str) -> Option<Result<LogicalLine>> {
        self.done = true;
        Some(Err(Error::MalformedLine {
            location,
            message: message.to_owned(),
        }))
    }
}

impl Iterator for Lines<'_> {
    type Item = Result<LogicalLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut pending: Option<LogicalLine> = None;
        let mut in_string = false;
        let mut open_quote: Option<usize> = None;

        loop {
            let Some((start, raw)) = self.next_physical() else {
                self.done = true;
                if pending.is_some() {
                    let (location, message) = match open_quote {
                        Some(quote) if in_string => (
                            self.location(quote, 1),
                            "unterminated string at end of input",
                        ),
                        _ => (
                            self.location(self.source.len(), 0),
                            "line continuation at end of input",
                        ),
                    };
                    return self.fail(location, message);
                }
                return None;
            };

            if pending.is_none() && raw.trim_start().starts_with('#') {
                continue;
            }

            let scanned = match scan(raw, in_string) {
                Ok(scanned) => scanned,
                Err(quote) => {
                    let quote = quote.map(|q| start + q).or(open_quote).unwrap_or(start);
                    let location = self.location(quote, 1);
                    return self.fail(location, "unterminated string");
                }
            };

            let line = pending.get_or_insert_with(|| LogicalLine {
                number: self.line,
                text: String::new(),
                comment: None,
                pieces: Vec::new(),
            });
            line.pieces.push(Piece {
                logical: line.text.len(),
                source: start,
            });
            line.text.push_str(scanned.code);
            if let Some(comment) = scanned.comment {
                line.comment = Some(comment.to_owned());
            }

            if scanned.continues {
                in_string = scanned.in_string;
                if !in_string {
                    open_quote = None;
                } else if let Some(quote) = scanned.open_quote {
                    open_quote = Some(start + quote);
                }
                continue;
            }

            let line = pending.take().expect("pending line was just inserted");
            if line.text.trim().is_empty() {
                in_string = false;
                open_quote = None;
                continue;
            }
            return Some(Ok(line));
        }
    }
}

impl std::iter::FusedIterator for Lines<'_> {}
