use clap::{Parser, Subcommand};
use std::io;

use crate::generator::{write_action_tests, write_clamp_overloads, write_func_tests};
use crate::literals::RandomLiterals;

/// Command-line interface for overloadgen
///
/// Each subcommand runs one full generation pass and writes the generated
/// source text to stdout.
#[derive(Parser)]
#[command(name = "overloadgen")]
#[command(about = "Overload-family source generators for Maxisoft.Utils", long_about = None)]
pub struct Cli {
    /// The generator to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available generator passes
///
/// All subcommands are argument-free: the parameter domains are fixed and
/// generation reads no configuration.
#[derive(Subcommand)]
pub enum Commands {
    /// Emit the EmptyAction delegate-stub test cases for arities 1 through 15
    EmptyActionTests,
    /// Emit the EmptyFunc delegate-stub test cases for arities 1 through 15
    EmptyFuncTests,
    /// Emit the Clamp overload set for the numeric types
    ClampOverloads,
}

/// Dispatches one generation pass to stdout.
///
/// stdout carries nothing but the generated artifact; diagnostics go to stderr
/// through `tracing`.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let out = stdout.lock();
    match cli.command {
        Commands::EmptyActionTests => write_action_tests(out, &mut RandomLiterals),
        Commands::EmptyFuncTests => write_func_tests(out, &mut RandomLiterals),
        Commands::ClampOverloads => write_clamp_overloads(out),
    }
}
