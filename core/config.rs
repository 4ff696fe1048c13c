use crate::error::{AppError, Result};
use crate::rules::CollectRules;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_FILENAME: &str = "code_prompt.txt";

/// Order in which directory listings are consumed during the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// Whatever order the filesystem returns entries in.
    #[default]
    Discovery,
    /// Entries sorted by file name, for output that is stable across filesystems.
    Sorted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub rules: CollectRules,
    pub order: TraversalOrder,
}

impl Config {
    pub fn new(rules: CollectRules) -> Self {
        Self {
            rules,
            order: TraversalOrder::default(),
        }
    }

    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    pub fn determine_project_root(cli_project_root: Option<&PathBuf>) -> Result<PathBuf> {
        let path_to_resolve = match cli_project_root {
            Some(p) => PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).as_ref()),
            None => env::current_dir().map_err(AppError::Io)?,
        };

        let resolved = path_to_resolve.canonicalize().map_err(|e| {
            AppError::Config(format!(
                "Failed to resolve project root '{}': {}",
                path_to_resolve.display(),
                e
            ))
        })?;

        if !resolved.is_dir() {
            return Err(AppError::Config(format!(
                "Project root is not a directory: {}",
                resolved.display()
            )));
        }
        log::debug!("Resolved project root: {}", resolved.display());
        Ok(resolved)
    }

    /// Destination for the prompt; relative paths stay relative to the current directory.
    pub fn resolve_output_path(cli_output: Option<&PathBuf>) -> PathBuf {
        match cli_output {
            Some(p) => PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).as_ref()),
            None => PathBuf::from(DEFAULT_OUTPUT_FILENAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_uses_builtin_rules_and_discovery_order() {
        let config = Config::default();
        assert_eq!(&config.rules, CollectRules::builtin());
        assert_eq!(config.order, TraversalOrder::Discovery);
        assert_eq!(
            config.with_order(TraversalOrder::Sorted).order,
            TraversalOrder::Sorted
        );
    }

    #[test]
    fn project_root_is_canonicalized() {
        let dir = TempDir::new().unwrap();
        let root = Config::determine_project_root(Some(&dir.path().to_path_buf())).unwrap();
        assert_eq!(root, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn missing_project_root_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = Config::determine_project_root(Some(&missing)).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn file_as_project_root_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("kmain.c");
        fs::write(&file, "int main;").unwrap();
        let err = Config::determine_project_root(Some(&file)).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn output_defaults_to_code_prompt_in_cwd() {
        assert_eq!(
            Config::resolve_output_path(None),
            PathBuf::from("code_prompt.txt")
        );
        let custom = PathBuf::from("out/prompt.md");
        assert_eq!(Config::resolve_output_path(Some(&custom)), custom);
    }
}
