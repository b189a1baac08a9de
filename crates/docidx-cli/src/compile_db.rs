//! Loads a `compile_commands.json` compilation database from disk into an
//! in-memory `CompileDatabase`.

use std::path::{Path, PathBuf};

use docidx_ast::{CompileCommand, CompileDatabase};
use docidx_common::IndexerError;
use serde::Deserialize;

/// One entry as it appears on disk. Clang-style databases give either a
/// single shell `command` string or an already-split `arguments` array;
/// `command` is split on whitespace here rather than full shell-word
/// splitting (quoted arguments containing spaces are not supported).
#[derive(Deserialize)]
struct RawCompileCommand {
    directory: PathBuf,
    file: PathBuf,
    #[serde(default)]
    command: Option<String>,
    #[serde(default)]
    arguments: Option<Vec<String>>,
}

impl From<RawCompileCommand> for CompileCommand {
    fn from(raw: RawCompileCommand) -> Self {
        let arguments = raw
            .arguments
            .unwrap_or_else(|| raw.command.unwrap_or_default().split_whitespace().map(str::to_string).collect());
        CompileCommand { directory: raw.directory, file: raw.file, arguments }
    }
}

pub struct JsonCompileDatabase {
    commands: Vec<CompileCommand>,
}

impl CompileDatabase for JsonCompileDatabase {
    fn all_compile_commands(&self) -> &[CompileCommand] {
        &self.commands
    }
}

pub fn load_compile_database(path: &Path) -> Result<JsonCompileDatabase, IndexerError> {
    if !path.is_file() {
        return Err(IndexerError::CompileDatabaseMissing { path: path.to_path_buf() });
    }
    let text = std::fs::read_to_string(path)
        .map_err(|source| IndexerError::CompileDatabaseIo { path: path.to_path_buf(), source })?;
    let raw: Vec<RawCompileCommand> = serde_json::from_str(&text)
        .map_err(|source| IndexerError::CompileDatabaseUnparsable { path: path.to_path_buf(), source })?;
    Ok(JsonCompileDatabase { commands: raw.into_iter().map(CompileCommand::from).collect() })
}
