//! Loads a `docidx_common::Config` from a JSON file and layers the CLI's
//! override flags on top of it.

use std::path::Path;

use docidx_common::{Config, IndexerError};

use crate::args::CliArgs;

pub fn load_config(path: &Path) -> Result<Config, IndexerError> {
    if !path.is_file() {
        return Err(IndexerError::ConfigMissing { path: path.to_path_buf() });
    }
    let text = std::fs::read_to_string(path)
        .map_err(|source| IndexerError::ConfigIo { path: path.to_path_buf(), source })?;
    serde_json::from_str(&text)
        .map_err(|source| IndexerError::ConfigUnparsable { path: path.to_path_buf(), source })
}

/// Applies the CLI's override flags onto a config file already loaded.
pub fn apply_overrides(mut config: Config, args: &CliArgs) -> Config {
    if let Some(compile_commands) = &args.compile_commands {
        config.compile_commands_json = compile_commands.clone();
    }
    if let Some(root_dir) = &args.root_dir {
        config.root_dir = root_dir.clone();
    }
    if let Some(include_paths) = &args.include_paths {
        config.include_paths = include_paths.clone();
    }
    if let Some(ignore_paths) = &args.ignore_paths {
        config.ignore_paths = ignore_paths.clone();
    }
    if let Some(ignore_namespaces) = &args.ignore_namespaces {
        config.ignore_namespaces = ignore_namespaces.clone();
    }
    if args.ignore_private_members {
        config.ignore_private_members = true;
    }
    if let Some(limit) = args.debug_limit_num_indexed_files {
        config.debug_limit_num_indexed_files = Some(limit);
    }
    config
}
