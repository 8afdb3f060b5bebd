use indexmap::IndexMap;

use crate::error::{CheckerError, Result};
use crate::instance::Report;

/// Number of leading characters that decide whether two messages share a type.
pub const DEFAULT_SIGNIFICANT_CHARS: usize = 30;

const SEPARATOR_WIDTH: usize = 20;

/// Aggregated view over a collection of reports.
///
/// Messages are bucketed by their first `significant_chars` characters, so the
/// same check firing with different values is counted as one type. Buckets keep
/// the order in which they were first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_files: usize,
    pub files_with_errors: usize,
    pub files_with_warnings: usize,
    pub error_types: IndexMap<String, usize>,
    pub warning_types: IndexMap<String, usize>,
}

impl Summary {
    /// Builds the summary of `reports`.
    ///
    /// # Errors
    /// Returns [`CheckerError::NothingToReport`] for an empty collection.
    pub fn from_reports(reports: &[Report], significant_chars: usize) -> Result<Self> {
        if reports.is_empty() {
            return Err(CheckerError::NothingToReport);
        }

        let mut summary = Self {
            total_files: reports.len(),
            files_with_errors: 0,
            files_with_warnings: 0,
            error_types: IndexMap::new(),
            warning_types: IndexMap::new(),
        };

        for report in reports {
            if report.has_errors() {
                summary.files_with_errors += 1;
            }
            if report.has_warnings() {
                summary.files_with_warnings += 1;
            }
            count_types(&mut summary.error_types, report.errors(), significant_chars);
            count_types(
                &mut summary.warning_types,
                report.warnings(),
                significant_chars,
            );
        }

        Ok(summary)
    }

    /// Renders the summary as text lines, logging each line as it is produced.
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        let separator = "-".repeat(SEPARATOR_WIDTH);
        let mut lines = Vec::new();
        let mut emit = |line: String| {
            tracing::info!("{line}");
            lines.push(line);
        };

        emit(format!("Processed {} files.", self.total_files));
        emit(format!(
            "There are {} files with errors.",
            self.files_with_errors
        ));
        emit(format!(
            "There are {} files with warnings.",
            self.files_with_warnings
        ));
        emit(separator.clone());

        emit("Summary of the errors:".to_string());
        emit(separator.clone());
        for (message_type, count) in &self.error_types {
            emit(format!(
                "Error type: '{message_type}...' Times found: {count}"
            ));
        }
        emit(separator.clone());

        emit("Summary of the warnings:".to_string());
        emit(separator.clone());
        for (message_type, count) in &self.warning_types {
            emit(format!(
                "Warning type: '{message_type}...' Times found: {count}"
            ));
        }
        emit(separator);

        lines
    }

    /// Renders the summary as newline-terminated text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut text = String::new();
        for line in self.render_lines() {
            text.push_str(&line);
            text.push('\n');
        }
        text
    }
}

/// Truncates a message to its first `significant_chars` characters.
#[must_use]
pub fn message_type(message: &str, significant_chars: usize) -> &str {
    message
        .char_indices()
        .nth(significant_chars)
        .map_or(message, |(end, _)| &message[..end])
}

fn count_types(types: &mut IndexMap<String, usize>, messages: &[String], significant_chars: usize) {
    for message in messages {
        *types
            .entry(message_type(message, significant_chars).to_string())
            .or_insert(0) += 1;
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
