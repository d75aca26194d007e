use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use overloadgen::cli::{run_cli, Cli};

fn main() -> anyhow::Result<()> {
    // Diagnostics stay on stderr; stdout is the generated artifact stream.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    run_cli(Cli::parse())
}
