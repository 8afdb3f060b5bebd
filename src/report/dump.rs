use serde::Serialize;

use crate::error::{CheckerError, Result};
use crate::instance::Report;

/// A report as written to the dump: every field, with the variable set
/// replaced by its maximum.
#[derive(Serialize)]
struct DumpRecord<'a> {
    #[serde(flatten)]
    report: &'a Report,
    max_found_variables: u64,
}

/// Serializes one report as a standalone pretty-printed JSON record.
///
/// # Errors
/// Returns [`CheckerError::NoVariables`] if the report has no found variable,
/// or a serialization error.
pub fn dump_record(report: &Report) -> Result<String> {
    let max_found_variables =
        report
            .max_found_variable()
            .ok_or_else(|| CheckerError::NoVariables {
                path: report.instance_path.clone(),
            })?;

    let record = DumpRecord {
        report,
        max_found_variables,
    };
    Ok(serde_json::to_string_pretty(&record)?)
}

/// Serializes all reports back to back, each record followed by a blank line.
///
/// The result is not a single JSON document; every record stands alone.
///
/// # Errors
/// Fails on the first report that cannot be dumped.
pub fn dump(reports: &[Report]) -> Result<String> {
    let mut out = String::new();
    for report in reports {
        out.push_str(&dump_record(report)?);
        out.push_str("\n\n");
    }
    Ok(out)
}

#[cfg(test)]
#[path = "dump_tests.rs"]
mod tests;
