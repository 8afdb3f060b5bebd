use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::instance::Report;

use super::dump::dump;
use super::summary::{DEFAULT_SIGNIFICANT_CHARS, Summary};

const SUMMARY_SUFFIX: &str = "_report.txt";
const DUMP_SUFFIX: &str = "_dump.json";

/// Paths of the two artifacts produced for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFiles {
    pub summary: PathBuf,
    pub dump: PathBuf,
}

impl ReportFiles {
    #[must_use]
    pub fn for_prefix(prefix: &str) -> Self {
        Self {
            summary: PathBuf::from(format!("{prefix}{SUMMARY_SUFFIX}")),
            dump: PathBuf::from(format!("{prefix}{DUMP_SUFFIX}")),
        }
    }
}

/// Writes the summary and the dump of a report collection.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    prefix: String,
    significant_chars: usize,
}

impl ReportWriter {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            significant_chars: DEFAULT_SIGNIFICANT_CHARS,
        }
    }

    #[must_use]
    pub const fn with_significant_chars(mut self, significant_chars: usize) -> Self {
        self.significant_chars = significant_chars;
        self
    }

    /// Writes `<prefix>_report.txt`, then `<prefix>_dump.json`.
    ///
    /// # Errors
    /// Returns [`crate::CheckerError::NothingToReport`] without touching the
    /// filesystem when `reports` is empty. The dump fails if a report has no
    /// found variable; the summary file is already written by then.
    pub fn write(&self, reports: &[Report]) -> Result<ReportFiles> {
        let summary = Summary::from_reports(reports, self.significant_chars)?;
        let files = ReportFiles::for_prefix(&self.prefix);

        fs::write(&files.summary, summary.render())?;
        tracing::debug!("Wrote summary to {}", files.summary.display());

        fs::write(&files.dump, dump(reports)?)?;
        tracing::debug!("Wrote dump to {}", files.dump.display());

        Ok(files)
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
