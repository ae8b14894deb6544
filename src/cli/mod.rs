//! CLI command handling module
//!
//! Handles all CLI subcommands. Command handlers return their output as a
//! string so the binary decides where it goes.

mod commands;
mod config;
mod logging;
pub mod render;
mod session;

pub use commands::{DataSourceCommand, execute, read_record};
pub use config::{ConfigSubcommand, handle_config_command};
pub use logging::init_logging;
pub use session::Session;
