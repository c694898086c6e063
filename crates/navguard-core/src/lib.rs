pub mod config;
pub mod logging;

pub mod classifier;
pub mod guard;
pub mod protocol;
pub mod warning_page;
