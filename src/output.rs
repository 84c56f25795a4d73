//! Status and diagnostic output for the pmap CLI.
//!
//! Everything here goes to stderr so `pmap parse` can keep stdout for JSON.
//! Status lines put a right-aligned verb in front of the message:
//!
//! ```text
//!    Rendering docs/intro.pmap (4 sections)
//!     Finished 1 document into dist
//! ```
//!
//! Lint diagnostics print as a header plus a location arrow:
//!
//! ```text
//! warning[pmap::check::malformed-image]: image declaration is not closed
//!   --> docs/intro.pmap:3
//!   help: close it with `]`
//! ```

use std::env;
use std::fmt::Write as _;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::validation::{Diagnostic, Severity};

/// Width of the verb column in status lines.
const VERB_WIDTH: usize = 12;

/// ANSI styles used by the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Progress,
    Note,
    Caution,
    Failure,
    Strong,
    Faint,
    Location,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Progress => "\x1b[1;32m",
            Style::Note => "\x1b[1;36m",
            Style::Caution => "\x1b[1;33m",
            Style::Failure => "\x1b[1;31m",
            Style::Strong => "\x1b[1m",
            Style::Faint => "\x1b[2m",
            Style::Location => "\x1b[36m",
        }
    }

    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Style::Failure,
            Severity::Warning => Style::Caution,
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Stderr printer for build progress and lint diagnostics.
///
/// Colour is on when stderr is a terminal and `NO_COLOR` is unset.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self::with_color(io::stderr().is_terminal() && env::var_os("NO_COLOR").is_none())
    }

    /// A printer with colour forced on or off.
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Progress or completion: `Rendering`, `Finished`, `Checked`.
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(&self.status_line(Style::Progress, verb, message));
    }

    /// Informational line with a cyan verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.emit(&self.status_line(Style::Note, verb, message));
    }

    /// Non-fatal problem with a yellow verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(&self.status_line(Style::Caution, verb, message));
    }

    /// Print one lint diagnostic. `file` is shown with the line number
    /// when the diagnostic has one.
    pub fn diagnostic(&self, file: &str, diagnostic: &Diagnostic) {
        self.emit(&self.format_diagnostic(file, diagnostic));
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(Style::Faint, text)
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(Style::Location, text)
    }

    fn status_line(&self, style: Style, verb: &str, message: &str) -> String {
        let verb = format!("{verb:>VERB_WIDTH$}");
        format!("{} {message}", self.paint(style, &verb))
    }

    fn format_diagnostic(&self, file: &str, d: &Diagnostic) -> String {
        let location = match d.line {
            Some(line) => format!("{file}:{line}"),
            None => file.to_string(),
        };
        let label = self.paint(Style::for_severity(d.severity), &d.severity.to_string());

        let mut out = format!("{label}[{}]: {}\n", d.code, self.paint(Style::Strong, &d.message));
        let _ = writeln!(out, "  {} {}", self.dim("-->"), self.cyan(&location));
        if let Some(help) = &d.help {
            let _ = writeln!(out, "  {} {help}", self.dim("help:"));
        }
        out.pop();
        out
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            format!("{}{text}{RESET}", style.code())
        } else {
            text.to_string()
        }
    }

    fn emit(&self, text: &str) {
        let _ = writeln!(io::stderr().lock(), "{text}");
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Count with the right noun: `plural(1, "file", "files")` is "1 file".
pub fn plural(n: usize, singular: &str, many: &str) -> String {
    format!("{n} {}", if n == 1 { singular } else { many })
}

/// Path relative to the working directory when it sits below it.
pub fn display_path(path: &Path) -> String {
    let relative = env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
