use crate::config::Config;
use crate::error::AppError;
use crate::gather::{FileEntry, gather_files};
use crate::prompt::render_prompt;
use std::path::Path;

/// Result of one collection run: the files that made it in and the ones that could not be read.
#[derive(Debug)]
pub struct Collection {
    pub files: Vec<FileEntry>,
    pub failures: Vec<AppError>,
}

impl Collection {
    pub fn render(&self) -> String {
        render_prompt(&self.files)
    }

    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.content.len()).sum()
    }
}

/// Collects every selected file under `root`. Never fails as a whole; unreadable files end up
/// in [`Collection::failures`].
pub fn collect(root: &Path, config: &Config) -> Collection {
    let (files, failures) = gather_files(root, config);
    Collection { files, failures }
}

/// Collects `root` with the built-in rules and returns the rendered prompt, logging each
/// unreadable file as a warning.
pub fn collect_code(root: &Path) -> String {
    let collection = collect(root, &Config::default());
    for failure in &collection.failures {
        log::warn!("{}", failure);
    }
    collection.render()
}
