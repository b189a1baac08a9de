//! The compiler front end this binary links against.
//!
//! AST parsing itself is named as an external collaborator: the indexing
//! core only depends on `docidx_ast::FrontEnd`, never on a specific
//! compiler. A production build of this binary links a real implementation
//! (e.g. libclang bindings) in place of `UnintegratedFrontEnd`; this crate
//! ships without one, so every translation unit fails to parse with a
//! clear error rather than silently producing an empty index.

use std::path::Path;

use docidx_ast::{CompileCommand, FrontEnd, ParseError, TranslationUnit};

pub struct UnintegratedFrontEnd;

impl FrontEnd for UnintegratedFrontEnd {
    fn parse(&self, command: &CompileCommand, _include_paths: &[&Path]) -> Result<TranslationUnit, ParseError> {
        Err(ParseError {
            message: format!(
                "no compiler front end is linked into this binary; cannot parse {}",
                command.file.display()
            ),
        })
    }
}
