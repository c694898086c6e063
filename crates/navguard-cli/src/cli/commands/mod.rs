//! CLI command handlers.

mod check;
mod show_config;

pub use check::run_check;
pub use show_config::run_show_config;
