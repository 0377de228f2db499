//! Colored terminal output utilities.

use console::{Style, Term};
use sitenav_taxonomy::{Issue, Severity};

/// Terminal output formatter.
///
/// Messages go to stderr; command results go to stdout via [`Output::data`]
/// so they can be piped.
pub(crate) struct Output {
    term: Term,
    data: Term,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            data: Term::stdout(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print a command result line to stdout.
    pub(crate) fn data(&self, line: &str) {
        let _ = self.data.write_line(line);
    }

    /// Print a highlighted command result line to stdout (cyan bold).
    pub(crate) fn data_highlight(&self, line: &str) {
        let _ = self
            .data
            .write_line(&self.cyan_bold.apply_to(line).to_string());
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a taxonomy issue, colored by its severity.
    pub(crate) fn issue(&self, issue: &Issue) {
        let line = format!("{}: {issue}", issue.severity());
        match issue.severity() {
            Severity::Error => self.error(&line),
            Severity::Warning => self.warning(&line),
        }
    }
}
