use crate::error::{AppError, Result};
use crate::gather::FileEntry;
use std::fs;
use std::path::Path;

/// One file's contribution: a `Here is` header followed by a fenced code block.
pub fn format_block(entry: &FileEntry) -> String {
    format!(
        "Here is {}:\n```{}\n{}\n```\n",
        entry.relative_path.display(),
        entry.lang,
        entry.content
    )
}

/// Joins the blocks in the given order with a single newline between them.
pub fn render_prompt(entries: &[FileEntry]) -> String {
    entries
        .iter()
        .map(format_block)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the prompt in one pass, replacing any existing file.
pub fn write_prompt(path: &Path, prompt: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| AppError::FileWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, prompt).map_err(|source| AppError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote {} bytes to {}", prompt.len(), path.display());
    Ok(())
}
