//! Terminal rendering of diagnostics.
//!
//! ```text
//! error[E0001]: Unexpected character: $
//!   --> 4..5
//!    |
//!    | A + $
//!    |     ^ not part of the expression language
//! ```

use std::io::{self, Write};

use msym_ir::Span;

use crate::Diagnostic;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// For `Auto`, colors follow `is_tty`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn flush(&mut self);
}

/// Writes diagnostics as text, with the expression shown under labels.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Show `source` (the expression) under each label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_snippet(&mut self, span: Span, message: &str) {
        let Some(source) = self.source.clone() else {
            return;
        };
        let range = span.to_range();
        let Some(prefix) = source.get(..range.start) else {
            return;
        };
        let column = prefix.chars().count();
        // Inserted tokens have empty spans; they still get one caret.
        let width = if span.is_empty() {
            1
        } else {
            source.get(range).map_or(1, |s| s.chars().count())
        };
        let _ = writeln!(self.writer, "   |");
        let _ = writeln!(self.writer, "   | {source}");
        let _ = write!(self.writer, "   | {}", " ".repeat(column));
        let underline = format!("{} {message}", "^".repeat(width));
        self.write_colored(&underline, colors::ERROR);
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_colored("error", colors::ERROR);
        if self.colors {
            let _ = write!(
                self.writer,
                "{}[{}]{}",
                colors::BOLD,
                diagnostic.code,
                colors::RESET
            );
        } else {
            let _ = write!(self.writer, "[{}]", diagnostic.code);
        }
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            let _ = writeln!(self.writer, "  --> {:?}", label.span);
            self.write_snippet(label.span, &label.message);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
