//! enumlint CLI: flags Rails enum values whose names start with `not_`.
//!
//! This binary provides the `enumlint` command with subcommands for checking
//! and fixing Ruby sources, listing rules, and generating shell completions.
//! See `enumlint --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    enumlint_core::logging::init_tracing(cli.verbose);

    let formatter: Box<dyn enumlint_output::OutputFormatter> = if cli.json {
        Box::new(enumlint_output::json::JsonFormatter)
    } else {
        Box::new(enumlint_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check { paths, fix } => commands::check::run(&*formatter, cli.config, paths, fix),
        Commands::Rules => commands::rules::run(&*formatter, cli.config),
        Commands::Completion { shell } => commands::completion::run(&shell),
    };

    tracing::debug!(exit_code, "done");
    std::process::exit(exit_code);
}
