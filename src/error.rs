use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// The dump needs the highest variable id, which an instance without clauses lacks.
    #[error("Cannot dump report for {path}: no variables were found")]
    NoVariables { path: PathBuf },

    #[error("There is nothing to report: no instance was checked")]
    NothingToReport,
}

impl CheckerError {
    /// Returns the variant name, used as a stable error category in logs.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
            Self::NoVariables { .. } => "NoVariables",
            Self::NothingToReport => "NothingToReport",
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
