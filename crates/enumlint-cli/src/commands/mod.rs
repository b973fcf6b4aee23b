pub mod check;
pub mod completion;
pub mod rules;

use std::path::PathBuf;

use enumlint_core::config::{EnumlintConfig, CONFIG_DIR};

/// Load configuration from `--config`, or `./.enumlint` when not given.
pub(crate) fn load_config(config_dir: Option<PathBuf>) -> Result<EnumlintConfig, String> {
    let dir = match config_dir {
        Some(dir) => dir,
        None => std::env::current_dir()
            .map_err(|e| format!("failed to get current directory: {}", e))?
            .join(CONFIG_DIR),
    };
    Ok(EnumlintConfig::load(&dir))
}

/// Print formatter output, skipping empty output.
pub(crate) fn emit(out: &str) {
    if !out.is_empty() {
        println!("{}", out.trim_end());
    }
}
