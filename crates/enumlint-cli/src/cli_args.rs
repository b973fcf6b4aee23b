use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "enumlint", version, about = "Flag Rails enum values named 'not_*'")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Directory holding enumlint.json (default: ./.enumlint)
    #[arg(long, global = true, env = "ENUMLINT_CONFIG", value_name = "DIR")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Inspect Ruby files for negative enum values
    Check {
        /// Files or directories to inspect
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,
        /// Rewrite correctable offenses in place
        #[arg(long, short = 'a')]
        fix: bool,
    },

    /// List available rules and their configuration
    Rules,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate for (bash, zsh, fish, elvish, powershell)
        shell: String,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
