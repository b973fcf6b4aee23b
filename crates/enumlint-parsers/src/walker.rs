use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::treesitter::is_ruby_file;

/// Name of the per-project ignore file, in `.gitignore` syntax.
pub const IGNORE_FILE: &str = ".enumlintignore";

pub struct FileWalker {
    root: PathBuf,
}

impl FileWalker {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Collect Ruby files under the root, sorted for stable output.
    ///
    /// A root that is itself a file is returned as-is, even without a Ruby
    /// extension, so explicitly named files are always inspected.
    pub fn walk(&self) -> Vec<PathBuf> {
        if self.root.is_file() {
            return vec![self.root.clone()];
        }

        let mut entries = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .add_custom_ignore_filename(IGNORE_FILE)
            .build();

        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().map_or(false, |ft| ft.is_file()) {
                continue;
            }

            let path = entry.into_path();
            if is_ruby_file(&path) {
                entries.push(path);
            }
        }

        entries.sort();
        tracing::debug!(root = %self.root.display(), files = entries.len(), "discovered ruby files");
        entries
    }
}
