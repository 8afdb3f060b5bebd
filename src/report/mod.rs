mod dump;
mod summary;
mod writer;

pub use dump::{dump, dump_record};
pub use summary::{DEFAULT_SIGNIFICANT_CHARS, Summary, message_type};
pub use writer::{ReportFiles, ReportWriter};

use crate::error::Result;
use crate::instance::Report;

/// Builds both artifacts in memory: the summary text and the dump.
///
/// # Errors
/// Returns [`crate::CheckerError::NothingToReport`] for an empty collection and
/// [`crate::CheckerError::NoVariables`] if a report cannot be dumped.
pub fn aggregate(reports: &[Report], significant_chars: usize) -> Result<(String, String)> {
    let summary = Summary::from_reports(reports, significant_chars)?;
    Ok((summary.render(), dump(reports)?))
}
