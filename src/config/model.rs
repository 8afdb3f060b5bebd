use serde::{Deserialize, Serialize};

use crate::error::{CheckerError, Result};
use crate::report::DEFAULT_SIGNIFICANT_CHARS;

/// Instance discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Extension of instance files (default: "cnf").
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Search directories recursively (default: false).
    #[serde(default)]
    pub recursive: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            recursive: false,
        }
    }
}

/// Summary and dump settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Prefix of the `_report.txt` and `_dump.json` artifacts.
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,

    /// Leading characters that identify a message type in the summary.
    #[serde(default = "default_significant_chars")]
    pub significant_chars: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_prefix: default_output_prefix(),
            significant_chars: default_significant_chars(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Checks values that parse but cannot be used.
    ///
    /// # Errors
    /// Returns a configuration error describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.scanner.extension.trim_start_matches('.').is_empty() {
            return Err(CheckerError::Config(
                "scanner.extension must not be empty".to_string(),
            ));
        }
        if self.report.output_prefix.is_empty() {
            return Err(CheckerError::Config(
                "report.output_prefix must not be empty".to_string(),
            ));
        }
        if self.report.significant_chars == 0 {
            return Err(CheckerError::Config(
                "report.significant_chars must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_extension() -> String {
    "cnf".to_string()
}

fn default_output_prefix() -> String {
    "instance_checker".to_string()
}

const fn default_significant_chars() -> usize {
    DEFAULT_SIGNIFICANT_CHARS
}
