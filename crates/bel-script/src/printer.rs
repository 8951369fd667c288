//! Builder-pattern printers: errors with source snippets, and object dumps.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use bel_core::Object;

use crate::error::Error;

/// Renders an [`Error`] against the source it came from.
pub struct ErrorPrinter<'e, 's> {
    error: &'e Error,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e Error) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return write!(w, "{}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.error.message();
        let range = adjust_range(self.error.location().range, source.len());
        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(&message));
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

fn adjust_range(range: rowan::TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start.min(limit)..(start + 1).min(limit);
    }

    start..end
}

impl Error {
    pub fn printer(&self) -> ErrorPrinter<'_, '_> {
        ErrorPrinter::new(self)
    }
}

/// One line per object: `Kind text`.
pub struct ObjectPrinter<'o> {
    objects: &'o [Object],
    shapes: bool,
    comments: bool,
}

impl<'o> ObjectPrinter<'o> {
    pub fn new(objects: &'o [Object]) -> Self {
        Self {
            objects,
            shapes: false,
            comments: true,
        }
    }

    /// Tag statements with their shape: `Statement[nested]`.
    pub fn with_shapes(mut self, value: bool) -> Self {
        self.shapes = value;
        self
    }

    pub fn with_comments(mut self, value: bool) -> Self {
        self.comments = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        for object in self.objects {
            write!(w, "{}", object.kind())?;
            if let Object::Statement(statement) = object {
                if self.shapes {
                    write!(w, "[{}]", statement.shape())?;
                }
                write!(w, " {statement}")?;
                if self.comments
                    && let Some(comment) = &statement.comment
                {
                    write!(w, " //{comment}")?;
                }
            } else {
                write!(w, " {object}")?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}
