//! Document emitter.
//!
//! A [`Script`] drives one parse pass per consumption. Objects come out in
//! source order, either pulled through [`Objects`] or pushed to a callback
//! with [`Script::for_each`]. Both modes run the same pass and yield the
//! same sequence.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use bel_core::Object;

use crate::error::{Error, Result};
use crate::lines::Lines;
use crate::location::LineIndex;
use crate::parser::parse_line;

/// Maximum nesting of terms and statements within one line.
pub const DEFAULT_RECURSION_LIMIT: u32 = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptConfig {
    pub recursion_limit: u32,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

pub struct ScriptBuilder<'src> {
    source: &'src str,
    config: ScriptConfig,
}

impl<'src> ScriptBuilder<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            config: ScriptConfig::default(),
        }
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.config.recursion_limit = limit;
        self
    }

    pub fn build(self) -> Script<'src> {
        Script {
            source: self.source,
            index: LineIndex::new(self.source),
            config: self.config,
        }
    }
}

/// A BEL script ready to be parsed.
///
/// Parsing is deterministic: every call to [`Script::objects`] starts a new
/// pass from the first line and yields an equal sequence.
#[derive(Debug, Clone)]
pub struct Script<'src> {
    source: &'src str,
    index: LineIndex,
    config: ScriptConfig,
}

impl<'src> Script<'src> {
    pub fn new(source: &'src str) -> Self {
        ScriptBuilder::new(source).build()
    }

    pub fn builder(source: &'src str) -> ScriptBuilder<'src> {
        ScriptBuilder::new(source)
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn config(&self) -> ScriptConfig {
        self.config
    }

    /// Starts a fresh pull-style pass.
    pub fn objects(&self) -> Objects<'_> {
        Objects {
            source: self.source,
            index: &self.index,
            lines: Lines::new(self.source),
            recursion_limit: self.config.recursion_limit,
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Push-style pass: calls `f` for each object as it is produced.
    ///
    /// Returns the number of objects delivered. On error, objects from the
    /// lines before the failing one have already been delivered.
    pub fn for_each(&self, mut f: impl FnMut(Object)) -> Result<usize> {
        let mut count = 0;
        for object in self.objects() {
            f(object?);
            count += 1;
        }
        Ok(count)
    }

    /// Drains a whole pass into a vector.
    pub fn to_vec(&self) -> Result<Vec<Object>> {
        self.objects().collect()
    }
}

impl<'a> IntoIterator for &'a Script<'_> {
    type Item = Result<Object>;
    type IntoIter = Objects<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects()
    }
}

/// Lazy pass over a script.
///
/// Parses one logical line at a time and yields its objects before reading
/// the next. After an error it yields that error once and then ends.
pub struct Objects<'a> {
    source: &'a str,
    index: &'a LineIndex,
    lines: Lines<'a>,
    recursion_limit: u32,
    pending: VecDeque<Object>,
    done: bool,
}

impl Objects<'_> {
    fn stop(&mut self, error: Error) -> Option<Result<Object>> {
        log::debug!("parse stopped at line {}: {}", error.line(), error.message());
        self.done = true;
        self.pending.clear();
        Some(Err(error))
    }
}

impl Iterator for Objects<'_> {
    type Item = Result<Object>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(object) = self.pending.pop_front() {
                return Some(Ok(object));
            }
            if self.done {
                return None;
            }

            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(error)) => return self.stop(error),
                None => {
                    self.done = true;
                    return None;
                }
            };

            match parse_line(self.source, self.index, &line, self.recursion_limit) {
                Ok(objects) => {
                    log::trace!("line {}: {} object(s)", line.number, objects.len());
                    self.pending.extend(objects);
                }
                Err(error) => return self.stop(error),
            }
        }
    }
}

impl FusedIterator for Objects<'_> {}
