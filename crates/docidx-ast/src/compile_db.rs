//! The compilation-database collaborator.

use std::path::PathBuf;

/// One entry of a compile_commands.json-shaped compilation database.
#[derive(Clone, Debug)]
pub struct CompileCommand {
    pub directory: PathBuf,
    pub file: PathBuf,
    pub arguments: Vec<String>,
}

/// A prepared compilation database, exposing the compiler-agnostic
/// surface the executor needs: the ordered list of translation units to
/// visit. Real loading of `compile_commands.json` from disk is thin
/// enough to live in the CLI layer rather than the core (this module names "the
/// compilation-database loader" as an external collaborator).
pub trait CompileDatabase: Send + Sync {
    fn all_compile_commands(&self) -> &[CompileCommand];
}
