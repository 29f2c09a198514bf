//! pubgate CLI binary.
//!
//! Entry point for the `pubgate` command-line tool. It parses arguments with
//! `clap`, initializes logging via `tracing`, and dispatches to the matching
//! command handler. Errors are rendered by `miette` and exit non-zero.

mod cli;
mod commands;

use miette::Result;

fn main() -> Result<()> {
    let args = cli::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    commands::dispatch(args)
}
