//! User interface
//!
//! Command-line parsing for the report binary.

pub mod cli;

pub use cli::{Cli, cli_to_config};
