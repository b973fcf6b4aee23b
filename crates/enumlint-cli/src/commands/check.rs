use std::path::PathBuf;

use enumlint_enforce::engine::LintEngine;
use enumlint_output::OutputFormatter;

use super::{emit, load_config};

/// Run `enumlint check [paths] [--fix]`.
///
/// Exit codes: 0 clean, 1 offenses remain, 2 usage or I/O error.
pub fn run(
    formatter: &dyn OutputFormatter,
    config_dir: Option<PathBuf>,
    paths: Vec<PathBuf>,
    fix: bool,
) -> i32 {
    let config = match load_config(config_dir) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("enumlint check: {}", e);
            return 2;
        }
    };

    let engine = match LintEngine::with_config(&config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("enumlint check: {}", e);
            return 2;
        }
    };

    if let Some(missing) = paths.iter().find(|p| !p.exists()) {
        eprintln!("enumlint check: no such file or directory: {}", missing.display());
        return 2;
    }

    let report = engine.run(&paths, fix);
    tracing::debug!(
        files = report.files_inspected,
        offenses = report.offense_count,
        corrected = report.corrected_count,
        "check finished"
    );
    emit(&formatter.format_lint(&report));

    if !report.errors.is_empty() {
        2
    } else if report.has_offenses() {
        1
    } else {
        0
    }
}
