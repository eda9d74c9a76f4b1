//! Shared helpers for the CLI

pub mod cli_args;
pub mod logging;
