use crate::config::{Config, TraversalOrder};
use crate::decode::decode_lossy;
use crate::error::{AppError, Result};
use crate::rules::{self, ExclusionRules};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub relative_path: PathBuf,
    pub lang: String,
    pub content: String,
}

/// Walks `project_root` and reads every file the configured rules select.
///
/// Excluded directories are pruned before the walk descends into them. Each directory's
/// files are visited before its subdirectories. Files that fail to read are returned as
/// errors alongside the successfully read entries, in discovery order.
pub fn gather_files(project_root: &Path, config: &Config) -> (Vec<FileEntry>, Vec<AppError>) {
    log::info!("Walking project directory: {}", project_root.display());
    let rules = &config.rules;

    let walker = match config.order {
        TraversalOrder::Discovery => WalkDir::new(project_root).sort_by(files_first),
        TraversalOrder::Sorted => WalkDir::new(project_root)
            .sort_by(|a, b| files_first(a, b).then_with(|| a.file_name().cmp(b.file_name()))),
    };
    let walker = walker
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_pruned(entry, &rules.exclude));

    let mut files = Vec::new();
    let mut read_errors = Vec::new();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Error walking directory: {}", e);
                continue;
            }
        };
        if entry.depth() == 0 || is_dir_like(&entry) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !rules.include.matches(&file_name) {
            log::trace!("Not selected: {}", entry.path().display());
            continue;
        }

        match read_file_entry(project_root, entry.path(), &file_name) {
            Ok(file) => {
                log::debug!(
                    "Read {} ({} bytes)",
                    file.relative_path.display(),
                    file.content.len()
                );
                files.push(file);
            }
            Err(e) => {
                log::debug!("{}", e);
                read_errors.push(e);
            }
        }
    }

    log::info!(
        "Directory walk complete. Read {} files, {} failed.",
        files.len(),
        read_errors.len()
    );
    (files, read_errors)
}

fn read_file_entry(project_root: &Path, path: &Path, file_name: &str) -> Result<FileEntry> {
    let bytes = fs::read(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let relative_path = pathdiff::diff_paths(path, project_root).unwrap_or_else(|| path.to_path_buf());
    Ok(FileEntry {
        path: path.to_path_buf(),
        relative_path,
        lang: rules::language_tag(file_name),
        content: decode_lossy(&bytes),
    })
}

fn is_pruned(entry: &DirEntry, exclude: &ExclusionRules) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let pruned = exclude.excludes(&entry.file_name().to_string_lossy());
    if pruned {
        log::trace!("Pruning excluded directory: {}", entry.path().display());
    }
    pruned
}

// Symlinked directories are listed with the directories but never descended.
fn is_dir_like(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    is_dir_like(a).cmp(&is_dir_like(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn relative_paths_have_no_leading_dot() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "kernel/sched.c", b"void schedule(void);");

        let (files, errors) = gather_files(dir.path(), &Config::default());
        assert!(errors.is_empty());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, Path::new("kernel").join("sched.c"));
        assert_eq!(files[0].path, dir.path().join("kernel").join("sched.c"));
        assert_eq!(files[0].lang, "c");
    }

    #[test]
    fn files_precede_subdirectories() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a/inner.c", b"");
        write(dir.path(), "z.c", b"");

        for order in [TraversalOrder::Discovery, TraversalOrder::Sorted] {
            let (files, _) = gather_files(dir.path(), &Config::default().with_order(order));
            let names: Vec<_> = files.iter().map(|f| f.relative_path.clone()).collect();
            assert_eq!(names, vec![PathBuf::from("z.c"), Path::new("a").join("inner.c")]);
        }
    }

    #[test]
    fn sorted_order_sorts_within_each_directory() {
        let dir = TempDir::new().unwrap();
        for name in ["c.h", "a.c", "b.s"] {
            write(dir.path(), name, b"");
        }
        write(dir.path(), "mm/b.c", b"");
        write(dir.path(), "fs/a.c", b"");

        let config = Config::default().with_order(TraversalOrder::Sorted);
        let (files, _) = gather_files(dir.path(), &config);
        let names: Vec<_> = files.iter().map(|f| f.relative_path.clone()).collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.c"),
                PathBuf::from("b.s"),
                PathBuf::from("c.h"),
                Path::new("fs").join("a.c"),
                Path::new("mm").join("b.c"),
            ]
        );
    }

    #[test]
    fn excluded_root_name_is_still_walked() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("build");
        write(&root, "main.c", b"int main;");

        let (files, _) = gather_files(&root, &Config::default());
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn invalid_utf8_still_produces_content() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "bad.c", b"int \xffx;");

        let (files, errors) = gather_files(dir.path(), &Config::default());
        assert!(errors.is_empty());
        assert_eq!(files[0].content, "int x;");
    }
}
