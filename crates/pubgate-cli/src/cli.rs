//! CLI argument definitions for pubgate.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pubgate",
    version,
    about = "Publication target resolution for multi-module JVM builds",
    long_about = "pubgate decides where a build publishes its artifacts: a credentialed remote \
                  Maven repository, or the local repository as a fallback. CI runs without a \
                  remote target fail fast."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Invocation-time property, overrides the environment (repeatable)
    #[arg(short = 'P', long = "property", value_name = "KEY=VALUE", global = true)]
    pub properties: Vec<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the resolved publication target
    Resolve {
        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,
    },

    /// Publish every module that applies maven-publish
    Publish {
        /// Print the publication plan without publishing
        #[arg(long)]
        dry_run: bool,
    },

    /// List dependency-read repositories
    Repos {
        /// Only list repositories allowed to serve this version
        #[arg(long)]
        version: Option<String>,
    },

    /// Print publication options and where each value comes from
    Env {
        /// Show secret values unmasked
        #[arg(long)]
        reveal: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
