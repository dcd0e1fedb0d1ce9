//! Plain-text emitter for terminals, with optional ANSI color.

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

use super::{BatchSummary, DiagnosticEmitter};

/// Whether to color the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// ANSI escape for each part of a rendered diagnostic, empty when colors
/// are off.
#[derive(Clone, Copy, Debug)]
struct Palette {
    error: &'static str,
    warning: &'static str,
    note: &'static str,
    help: &'static str,
    code: &'static str,
    secondary: &'static str,
    reset: &'static str,
}

impl Palette {
    const ANSI: Palette = Palette {
        error: "\x1b[1;31m",
        warning: "\x1b[1;33m",
        note: "\x1b[1;36m",
        help: "\x1b[1;32m",
        code: "\x1b[1m",
        secondary: "\x1b[1;34m",
        reset: "\x1b[0m",
    };

    const PLAIN: Palette = Palette {
        error: "",
        warning: "",
        note: "",
        help: "",
        code: "",
        secondary: "",
        reset: "",
    };

    fn severity(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Note => self.note,
        }
    }
}

/// Writes diagnostics as
///
/// ```text
/// error[E3004]: The patterns for Option[int] are not exhaustive; ...
///   --> 0..30: patterns for Option[int] are not exhaustive
///    ·  0..7: guarded, not counted
///   = note: a guard may reject any value, ...
/// ```
pub struct TerminalEmitter<W: Write> {
    writer: W,
    palette: Palette,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn new(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        let palette = if mode.enabled(is_tty) {
            Palette::ANSI
        } else {
            Palette::PLAIN
        };
        TerminalEmitter { writer, palette }
    }

    pub fn stderr(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stderr> {
        TerminalEmitter::new(io::stderr(), mode, is_tty)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_diagnostic(&mut self, diag: &Diagnostic) -> io::Result<()> {
        let p = self.palette;
        let w = &mut self.writer;
        write!(
            w,
            "{}{}{}{}[{}]{}",
            p.severity(diag.severity),
            diag.severity,
            p.reset,
            p.code,
            diag.code,
            p.reset
        )?;

        // Membership messages carry one line per unmatched type.
        let mut lines = diag.message.lines();
        writeln!(w, ": {}", lines.next().unwrap_or_default())?;
        for line in lines {
            writeln!(w, "       {line}")?;
        }

        for label in &diag.labels {
            let (marker, color) = if label.is_primary {
                ("-->", p.severity(diag.severity))
            } else {
                (" · ", p.secondary)
            };
            writeln!(
                w,
                "  {marker} {:?}: {color}{}{}",
                label.span, label.message, p.reset
            )?;
        }
        for note in &diag.notes {
            writeln!(w, "  = {}note{}: {note}", p.code, p.reset)?;
        }
        for suggestion in &diag.suggestions {
            writeln!(w, "  = {}help{}: {suggestion}", p.help, p.reset)?;
        }
        writeln!(w)
    }

    fn write_summary(&mut self, summary: BatchSummary) -> io::Result<()> {
        if summary.is_empty() {
            return Ok(());
        }
        let parts: Vec<String> = [
            (summary.errors, "error"),
            (summary.warnings, "warning"),
            (summary.notes, "note"),
        ]
        .into_iter()
        .filter(|&(count, _)| count > 0)
        .map(|(count, noun)| format!("{count} {noun}{}", if count == 1 { "" } else { "s" }))
        .collect();

        let p = self.palette;
        let (head, color) = if summary.errors > 0 {
            ("analysis failed", p.error)
        } else {
            ("analysis passed", p.note)
        };
        writeln!(self.writer, "{color}{head}{}: {}", p.reset, parts.join(", "))
    }
}

// Output errors are not analysis errors; a closed pipe just loses the text.
impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let _ = self.write_diagnostic(diagnostic);
    }

    fn emit_summary(&mut self, summary: BatchSummary) {
        let _ = self.write_summary(summary);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
