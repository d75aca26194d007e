//! Unit tests for CLI commands

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::cli::{Cli, Commands};
use clap::Parser;

#[test]
fn test_empty_action_tests_parses() {
    let cli = Cli::try_parse_from(["overloadgen", "empty-action-tests"]).unwrap();
    assert!(matches!(cli.command, Commands::EmptyActionTests));
}

#[test]
fn test_empty_func_tests_parses() {
    let cli = Cli::try_parse_from(["overloadgen", "empty-func-tests"]).unwrap();
    assert!(matches!(cli.command, Commands::EmptyFuncTests));
}

#[test]
fn test_clamp_overloads_parses() {
    let cli = Cli::try_parse_from(["overloadgen", "clamp-overloads"]).unwrap();
    assert!(matches!(cli.command, Commands::ClampOverloads));
}

#[test]
fn test_missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["overloadgen"]).is_err());
}

#[test]
fn test_unknown_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["overloadgen", "clamp"]).is_err());
}

#[test]
fn test_subcommands_take_no_arguments() {
    assert!(Cli::try_parse_from(["overloadgen", "clamp-overloads", "--force"]).is_err());
    assert!(Cli::try_parse_from(["overloadgen", "empty-action-tests", "extra"]).is_err());
}
