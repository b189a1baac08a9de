use std::path::PathBuf;

use clap::Parser;

/// CLI arguments for the docidx binary.
///
/// The bulk of the run's configuration lives in a JSON config file (see
/// `docidx_common::Config`); the flags here are overrides layered on top of
/// it, so a project can keep one config checked in and still tweak a run
/// from the command line.
#[derive(Parser, Debug)]
#[command(name = "docidx", version, about = "Indexing core for a C++ source documentation generator")]
pub struct CliArgs {
    /// Path to the JSON config file.
    pub config: PathBuf,

    /// Override `compileCommandsJson` from the config file.
    #[arg(long = "compile-commands")]
    pub compile_commands: Option<PathBuf>,

    /// Override `rootDir` from the config file.
    #[arg(long = "root-dir")]
    pub root_dir: Option<PathBuf>,

    /// Override `includePaths` from the config file.
    #[arg(long = "include-path", value_delimiter = ',')]
    pub include_paths: Option<Vec<PathBuf>>,

    /// Override `ignorePaths` from the config file.
    #[arg(long = "ignore-path", value_delimiter = ',')]
    pub ignore_paths: Option<Vec<String>>,

    /// Override `ignoreNamespaces` from the config file.
    #[arg(long = "ignore-namespace", value_delimiter = ',')]
    pub ignore_namespaces: Option<Vec<String>>,

    /// Force `ignorePrivateMembers` on, regardless of the config file.
    #[arg(long = "ignore-private-members")]
    pub ignore_private_members: bool,

    /// Override `debugLimitNumIndexedFiles` from the config file.
    #[arg(long = "debug-limit-num-indexed-files")]
    pub debug_limit_num_indexed_files: Option<usize>,

    /// Print the resolved stats lines and exit 0 even if the index is empty.
    #[arg(long)]
    pub print_stats: bool,
}
