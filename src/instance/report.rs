use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Diagnostics, FileType};

/// A single `literal -> weight` entry of a weighted instance.
///
/// Entries are kept as a list so repeated literals stay visible to the
/// duplicate-weight check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub literal: i64,
    pub weight: f64,
}

/// Structural facts and diagnostics gathered while validating one instance file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub instance_path: PathBuf,
    pub declared_vars: usize,
    pub declared_clauses: usize,
    pub has_problem_line: bool,
    pub found_clauses: usize,
    /// Absolute values of every literal seen in a clause.
    #[serde(skip)]
    pub found_variables: BTreeSet<u64>,
    pub projection: Option<BTreeSet<i64>>,
    pub declared_file_name: Option<String>,
    pub declared_file_type: Option<String>,
    pub inferred_file_type: FileType,
    /// Never populated by the scan: weight lines are recognised but their
    /// value encoding is not parsed yet.
    pub weights: Option<Vec<WeightEntry>>,
    pub has_duplicate_weight: bool,
    #[serde(flatten)]
    pub diagnostics: Diagnostics,
}

impl Report {
    #[must_use]
    pub fn new(instance_path: impl Into<PathBuf>) -> Self {
        Self {
            instance_path: instance_path.into(),
            declared_vars: 0,
            declared_clauses: 0,
            has_problem_line: false,
            found_clauses: 0,
            found_variables: BTreeSet::new(),
            projection: None,
            declared_file_name: None,
            declared_file_type: None,
            inferred_file_type: FileType::Mc,
            weights: None,
            has_duplicate_weight: false,
            diagnostics: Diagnostics::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.instance_path
    }

    /// Highest variable id seen in a clause, if any clause had a literal.
    #[must_use]
    pub fn max_found_variable(&self) -> Option<u64> {
        self.found_variables.last().copied()
    }

    /// Base name of the instance file, compared against the `c file` tag.
    #[must_use]
    pub fn expected_file_name(&self) -> String {
        self.instance_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.has_warnings()
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.diagnostics.errors
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.diagnostics.warnings
    }

    #[must_use]
    pub fn info(&self) -> &[String] {
        &self.diagnostics.info
    }
}
