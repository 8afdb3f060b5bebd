use std::fs;

use crate::cli::InitArgs;
use crate::{CheckerError, EXIT_RUNTIME_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            EXIT_RUNTIME_ERROR
        }
    }
}

/// Writes the default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(CheckerError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    tracing::info!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r#"# mc-instance-checker configuration file

[scanner]
# Extension of instance files (default: "cnf")
extension = "cnf"

# Search directories recursively (default: false)
recursive = false

[report]
# Outputs are written to <output_prefix>_report.txt and <output_prefix>_dump.json
output_prefix = "instance_checker"

# Leading characters that identify a message type in the summary (default: 30).
# Lower values merge more messages into one type.
significant_chars = 30
"#
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
