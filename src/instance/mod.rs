mod checks;
mod diagnostics;
mod file_type;
mod line;
mod report;
mod validator;

pub use checks::run as run_checks;
pub use diagnostics::Diagnostics;
pub use file_type::FileType;
pub use line::{Line, MalformedLine, classify};
pub use report::{Report, WeightEntry};
pub use validator::{validate, validate_file};
