//! The read-only configuration object the indexer runs under.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Indexer configuration, read-only once the executor starts.
///
/// Every field here is a
/// recognized option of the embedding tool, not something the core itself
/// parses from the command line.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path to the `compile_commands.json` the compile-database loader reads.
    pub compile_commands_json: PathBuf,
    /// Anchor for relative file names and `ignore_paths` matching.
    pub root_dir: PathBuf,
    /// Extra system include directories handed to the front-end.
    #[serde(default)]
    pub include_paths: Vec<PathBuf>,
    /// Literal, case-sensitive substrings of `declFile` (relative to
    /// `root_dir`) that cause a declaration to be ignored.
    #[serde(default)]
    pub ignore_paths: Vec<String>,
    /// Literal, case-sensitive substrings of an enclosing namespace name
    /// that cause a declaration to be ignored.
    #[serde(default)]
    pub ignore_namespaces: Vec<String>,
    /// Drop private members (and anything nested under private access).
    #[serde(default)]
    pub ignore_private_members: bool,
    /// When set, the executor only indexes the first `n` translation
    /// units of the compile database's listing, in listed order.
    #[serde(default)]
    pub debug_limit_num_indexed_files: Option<usize>,
}

impl Config {
    /// Render `path` relative to `root_dir` for ignore-path matching and
    /// for a symbol's stored `declFile`. Falls back to `path` unchanged if
    /// it does not live under `root_dir`.
    #[must_use]
    pub fn relative_to_root(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root_dir)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }

    /// Returns `true` if `rel_path` should be ignored because it contains
    /// any `ignore_paths` substring.
    #[must_use]
    pub fn is_path_ignored(&self, rel_path: &str) -> bool {
        self.ignore_paths.iter().any(|pat| rel_path.contains(pat.as_str()))
    }

    /// Returns `true` if `namespace_name` should cause its contents to be
    /// ignored.
    #[must_use]
    pub fn is_namespace_ignored(&self, namespace_name: &str) -> bool {
        self.ignore_namespaces
            .iter()
            .any(|pat| namespace_name.contains(pat.as_str()))
    }

    /// Include directories that actually exist on disk. Non-existent
    /// entries are warned about and skipped, never fatal.
    pub fn existing_include_paths(&self) -> Vec<&Path> {
        self.include_paths
            .iter()
            .filter_map(|p| {
                if p.is_dir() {
                    Some(p.as_path())
                } else {
                    warn!(path = %p.display(), "configured include path does not exist, skipping");
                    None
                }
            })
            .collect()
    }
}
