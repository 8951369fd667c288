//! Mapping byte offsets to 1-based line/column positions.

use std::fmt;
use std::ops::Range;

use rowan::TextRange;

/// Where an error points: 1-based line and column, plus the byte range in
/// the original source for snippet rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: u32,
    pub column: u32,
    pub range: TextRange,
}

impl Location {
    pub fn new(line: u32, column: u32, range: Range<usize>) -> Self {
        Self {
            line,
            column,
            range: to_text_range(range),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

pub(crate) fn to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Start offsets of every physical line.
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(source.match_indices('\n').map(|(i, _)| i + 1));
        Self { starts }
    }

    /// 0-based line containing `offset`.
    fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset) - 1
    }

    /// Columns count characters, not bytes.
    pub fn locate(&self, source: &str, range: Range<usize>) -> Location {
        let offset = range.start.min(source.len());
        let line = self.line_of(offset);
        let line_start = self.starts[line];
        let column = source[line_start..offset].chars().count() + 1;
        Location::new(line as u32 + 1, column as u32, range)
    }
}
