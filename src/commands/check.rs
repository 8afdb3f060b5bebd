use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{CheckerError, Result};
use crate::instance::{Report, validate_file};
use crate::report::{ReportFiles, ReportWriter};
use crate::scanner::{DirectoryScanner, ExtensionFilter, FileScanner};
use crate::{EXIT_INSTANCE_ERRORS, EXIT_NOTHING_TO_REPORT, EXIT_RUNTIME_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli.no_config) {
        Ok(exit_code) => exit_code,
        Err(CheckerError::NothingToReport) => {
            tracing::error!("There is nothing to report: no instance file was found.");
            EXIT_NOTHING_TO_REPORT
        }
        Err(e) => {
            tracing::error!(error_type = e.error_type(), "{e}");
            EXIT_RUNTIME_ERROR
        }
    }
}

/// Runs a full check: load config, find instances, validate, write artifacts.
///
/// # Errors
/// Returns an error if the configuration is invalid, a path or instance cannot
/// be read, nothing was found, or the artifacts cannot be written.
pub fn run_check_impl(args: &CheckArgs, no_config: bool) -> Result<i32> {
    let mut config = load_config(args.config.as_deref(), no_config)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    let reports = check_paths(&args.paths, &config)?;

    let files = ReportWriter::new(config.report.output_prefix.as_str())
        .with_significant_chars(config.report.significant_chars)
        .write(&reports)?;
    log_written(&files);

    Ok(determine_exit_code(&reports, args.strict))
}

/// Validates every instance found under `paths`, in parallel.
///
/// Reports come back in scan order.
///
/// # Errors
/// Returns the first scan or read error.
pub fn check_paths(paths: &[PathBuf], config: &Config) -> Result<Vec<Report>> {
    let scanner = DirectoryScanner::new(ExtensionFilter::new(&config.scanner.extension))
        .recursive(config.scanner.recursive);

    let mut instances = Vec::new();
    for path in paths {
        instances.extend(scanner.scan(path)?);
    }
    tracing::debug!("Validating {} instance files", instances.len());

    instances
        .par_iter()
        .map(|path| validate_file(path))
        .collect()
}

/// Exit code for a finished run.
#[must_use]
pub fn determine_exit_code(reports: &[Report], strict: bool) -> i32 {
    let has_errors = reports.iter().any(Report::has_errors);
    let has_warnings = reports.iter().any(Report::has_warnings);
    if has_errors || (strict && has_warnings) {
        EXIT_INSTANCE_ERRORS
    } else {
        EXIT_SUCCESS
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(ext) = &args.ext {
        config.scanner.extension.clone_from(ext);
    }
    if args.recursive {
        config.scanner.recursive = true;
    }
    if let Some(prefix) = &args.output_prefix {
        config.report.output_prefix.clone_from(prefix);
    }
    if let Some(significant_chars) = args.significant_chars {
        config.report.significant_chars = significant_chars;
    }
}

fn log_written(files: &ReportFiles) {
    tracing::info!("Summary written to {}", files.summary.display());
    tracing::info!("Dump written to {}", files.dump.display());
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
