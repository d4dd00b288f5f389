//! Builder-pattern printer for rendering a parse error.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use rowan::TextRange;

use crate::Error;

/// Builder for rendering an [`Error`] with various options.
///
/// Without a source the error renders on one line as
/// `{message} at {start}..{end}`.
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

    /// The input that was parsed.
    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    /// Name shown in the snippet header, e.g. `--data[0]`.
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
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.error.to_string();
        let label = annotation_label(self.error);
        let range = adjust_range(self.error.span(), source.len());

        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(&label));
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report = [Level::ERROR.primary_title(&message).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        let span = self.error.span();
        write!(
            w,
            "{} at {}..{}",
            self.error,
            usize::from(span.start()),
            usize::from(span.end())
        )
    }
}

fn annotation_label(error: &Error) -> String {
    match error {
        Error::Syntax { expected, .. } => format!("expected {expected}"),
        Error::Validation { error, .. } => match &error.value {
            Some(value) => format!("'{value}' rejected here"),
            None => format!("key '{}' rejected here", error.key),
        },
    }
}

/// Zero-width spans are widened to one column so the caret is visible.
fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
