pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod instance;
pub mod report;
pub mod scanner;

pub use error::{CheckerError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INSTANCE_ERRORS: i32 = 1;
pub const EXIT_RUNTIME_ERROR: i32 = 2;
pub const EXIT_NOTHING_TO_REPORT: i32 = 3;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
