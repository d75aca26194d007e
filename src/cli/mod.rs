//! # CLI Module
//!
//! The CLI module provides the command-line surface of the `overloadgen` binary.
//!
//! ## Commands
//!
//! Each subcommand performs one full generation pass, writes the generated C#
//! source to stdout, and terminates:
//!
//! ```bash
//! overloadgen empty-action-tests
//! overloadgen empty-func-tests
//! overloadgen clamp-overloads
//! ```
//!
//! The subcommands take no arguments; the parameter domains are compile-time
//! fixed, and generation reads no configuration and no environment variables
//! (only logging honors `RUST_LOG`, on stderr).
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use overloadgen::cli::{run_cli, Cli};
//! use clap::Parser;
//!
//! run_cli(Cli::parse())?;
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
