use colored::*;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use crate::frontend::location::LocationRange;
use crate::frontend::source::SourceFile;

/// A message pointing at a region of a build file, rendered with the surrounding lines.
pub struct Diagnostic {
    pub message: String,
    pub source_file: Arc<SourceFile>,
    pub range: LocationRange,
    pub level: DiagnosticLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Error,
    Warning,
}

impl DiagnosticLevel {
    fn paint(self, text: &str) -> ColoredString {
        match self {
            DiagnosticLevel::Error => text.red().bold(),
            DiagnosticLevel::Warning => text.yellow().bold(),
        }
    }
}

impl Display for DiagnosticLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticLevel::Error => write!(f, "{}", self.paint("error")),
            DiagnosticLevel::Warning => write!(f, "{}", self.paint("warning")),
        }
    }
}

impl Diagnostic {
    pub fn new(
        message: String,
        source_file: Arc<SourceFile>,
        range: LocationRange,
        level: DiagnosticLevel,
    ) -> Self {
        Self {
            message,
            source_file,
            range,
            level,
        }
    }

    pub fn error(message: String, source_file: Arc<SourceFile>, range: LocationRange) -> Self {
        Self::new(message, source_file, range, DiagnosticLevel::Error)
    }

    pub fn warning(message: String, source_file: Arc<SourceFile>, range: LocationRange) -> Self {
        Self::new(message, source_file, range, DiagnosticLevel::Warning)
    }

    /// Renders the message, a pointer to its location, and the lines around it with the range
    /// underlined.
    pub fn format(&self) -> String {
        let begin = self.range.begin();
        let line_number = begin.line();
        let mut result = String::new();

        result.push_str(&format!("{}: {}\n", self.level, self.message.bold()));
        result.push_str(&format!(
            " {} {}\n",
            "-->".cyan().bold(),
            begin.to_string().cyan()
        ));

        if line_number > 1 {
            self.push_line(&mut result, line_number - 1);
        }
        self.push_line(&mut result, line_number);

        let padding = begin.column().saturating_sub(1) as usize;
        let carets = "^".repeat(self.range.width().max(1) as usize);
        result.push_str(&format!(
            "     {} {}{}\n",
            "|".cyan().bold(),
            " ".repeat(padding),
            self.level.paint(&carets)
        ));

        if !self.source_file.line(line_number + 1).is_empty() {
            self.push_line(&mut result, line_number + 1);
        }

        result
    }

    fn push_line(&self, result: &mut String, line_number: u32) {
        result.push_str(&format!(
            "{:>4} {} {}\n",
            line_number.to_string().cyan(),
            "|".cyan().bold(),
            self.source_file.line(line_number)
        ));
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
