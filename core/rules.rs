//! Inclusion and exclusion rules deciding which files end up in the prompt.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

pub const INCLUDE_EXTENSIONS: &[&str] = &[".c", ".S", ".h", ".ld", ".s", ".mk"];

/// Files picked up by exact name, mostly extensionless build and tooling files.
pub const INCLUDE_FILENAMES: &[&str] = &["Makefile", ".clang-format", "limine.conf", "Sbuild"];

pub const EXCLUDE_DIRS: &[&str] = &[
    ".git",
    "limine",
    "build-test",
    "__pycache__",
    "node_modules",
    "target",
    "build",
];

static DEFAULT_RULES: Lazy<CollectRules> = Lazy::new(|| CollectRules {
    include: InclusionRules::new(
        INCLUDE_EXTENSIONS.iter().copied(),
        INCLUDE_FILENAMES.iter().copied(),
    ),
    exclude: ExclusionRules::new(EXCLUDE_DIRS.iter().copied()),
});

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InclusionRules {
    extensions: HashSet<String>,
    filenames: HashSet<String>,
}

impl InclusionRules {
    /// Extensions are given with their leading dot, e.g. `".c"`.
    pub fn new<E, F, S, T>(extensions: E, filenames: F) -> Self
    where
        E: IntoIterator<Item = S>,
        F: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            filenames: filenames.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.extensions.contains(extension_of(file_name).as_str())
            || self.filenames.contains(file_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExclusionRules {
    dirs: HashSet<String>,
}

impl ExclusionRules {
    pub fn new<I, S>(dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Matches on the directory's base name only, so an excluded name is pruned at any depth.
    pub fn excludes(&self, dir_name: &str) -> bool {
        self.dirs.contains(dir_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectRules {
    pub include: InclusionRules,
    pub exclude: ExclusionRules,
}

impl CollectRules {
    pub fn new(include: InclusionRules, exclude: ExclusionRules) -> Self {
        Self { include, exclude }
    }

    pub fn builtin() -> &'static CollectRules {
        &DEFAULT_RULES
    }
}

impl Default for CollectRules {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}

/// Extension including its leading dot, or an empty string when the name has none.
/// Hidden files such as `.clang-format` have no extension.
pub fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Fence tag for a file: its extension without the dot.
pub fn language_tag(file_name: &str) -> String {
    let ext = extension_of(file_name);
    ext.strip_prefix('.').unwrap_or_default().to_string()
}
