//! The embedded-compiler-front-end collaborator.

use std::fmt;
use std::path::Path;

use crate::compile_db::CompileCommand;
use crate::decl::TranslationUnit;

/// A front-end parse failure. It is recorded and logged; it
/// never aborts indexing of other translation units.
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Turns one compile command into a parsed `TranslationUnit`.
///
/// A real embedding implements this over an actual compiler front-end
/// (e.g. libclang); `docidx_ast::mock::MockFrontEnd` implements it by
/// looking up a pre-built `TranslationUnit`, which is enough to drive the
/// indexing core end-to-end in tests without linking a real compiler.
pub trait FrontEnd: Send + Sync {
    fn parse(
        &self,
        command: &CompileCommand,
        include_paths: &[&Path],
    ) -> Result<TranslationUnit, ParseError>;
}
