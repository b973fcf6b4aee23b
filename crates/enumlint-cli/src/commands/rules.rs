use std::path::PathBuf;

use enumlint_enforce::engine::LintEngine;
use enumlint_output::OutputFormatter;

use super::{emit, load_config};

/// Run `enumlint rules`: list rules with their effective configuration.
pub fn run(formatter: &dyn OutputFormatter, config_dir: Option<PathBuf>) -> i32 {
    match load_config(config_dir) {
        Ok(config) => {
            emit(&formatter.format_rules(&LintEngine::rules(&config)));
            0
        }
        Err(e) => {
            eprintln!("enumlint rules: {}", e);
            2
        }
    }
}
