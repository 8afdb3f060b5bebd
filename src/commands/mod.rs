pub mod check;
pub mod init;

pub use check::{check_paths, determine_exit_code, run_check, run_check_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
