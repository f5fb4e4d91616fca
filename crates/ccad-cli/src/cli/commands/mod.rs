//! CLI command handlers, one file per command.

mod catalog;
mod run;
mod status;

pub use catalog::run_catalog;
pub use run::run_download;
pub use status::run_status;
