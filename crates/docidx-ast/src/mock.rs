//! An in-memory stand-in for the real compiler front end, used by
//! integration tests (and available to any embedder that wants to feed
//! the indexer pre-built ASTs directly, e.g. from a language server's own
//! parser).

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::compile_db::{CompileCommand, CompileDatabase};
use crate::decl::TranslationUnit;
use crate::frontend::{FrontEnd, ParseError};

/// A compile database whose commands are supplied directly rather than
/// loaded from `compile_commands.json`.
#[derive(Default)]
pub struct InMemoryCompileDatabase {
    commands: Vec<CompileCommand>,
}

impl InMemoryCompileDatabase {
    #[must_use]
    pub fn new(commands: Vec<CompileCommand>) -> Self {
        Self { commands }
    }
}

impl CompileDatabase for InMemoryCompileDatabase {
    fn all_compile_commands(&self) -> &[CompileCommand] {
        &self.commands
    }
}

/// A front end that returns pre-built `TranslationUnit`s keyed by the
/// compile command's `file`, instead of parsing source text.
#[derive(Default)]
pub struct MockFrontEnd {
    units: FxHashMap<PathBuf, TranslationUnit>,
}

impl MockFrontEnd {
    #[must_use]
    pub fn new() -> Self {
        Self { units: FxHashMap::default() }
    }

    #[must_use]
    pub fn with_unit(mut self, file: impl Into<PathBuf>, unit: TranslationUnit) -> Self {
        self.units.insert(file.into(), unit);
        self
    }
}

impl FrontEnd for MockFrontEnd {
    fn parse(
        &self,
        command: &CompileCommand,
        _include_paths: &[&Path],
    ) -> Result<TranslationUnit, ParseError> {
        self.units.get(&command.file).cloned().ok_or_else(|| ParseError {
            message: format!("no mock translation unit registered for {}", command.file.display()),
        })
    }
}
