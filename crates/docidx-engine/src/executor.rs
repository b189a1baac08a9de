//! Fans the per-translation-unit walk out across a thread pool into one
//! shared, concurrently-written `Index`.

use std::path::Path;

use docidx_ast::{CompileCommand, CompileDatabase, FrontEnd};
use docidx_common::Config;
use docidx_extract::{walk_translation_unit, ExtractContext};
use docidx_model::Index;

pub struct ParallelExecutor<'a> {
    config: &'a Config,
    front_end: &'a dyn FrontEnd,
}

impl<'a> ParallelExecutor<'a> {
    #[must_use]
    pub fn new(config: &'a Config, front_end: &'a dyn FrontEnd) -> Self {
        Self { config, front_end }
    }

    /// Walk every translation unit named by `compile_db`, gated by
    /// `debug_limit_num_indexed_files`, and merge their extraction results
    /// into a freshly built `Index`. A translation unit that fails to parse
    /// is logged and skipped; it never aborts the other units.
    #[must_use]
    pub fn run(&self, compile_db: &dyn CompileDatabase) -> Index {
        let commands = compile_db.all_compile_commands();
        let commands = match self.config.debug_limit_num_indexed_files {
            Some(limit) => &commands[..commands.len().min(limit)],
            None => commands,
        };
        let include_paths = self.config.existing_include_paths();

        let index = Index::new();

        #[cfg(not(target_arch = "wasm32"))]
        {
            use rayon::prelude::*;
            commands.par_iter().for_each(|cmd| self.process_one(cmd, &include_paths, &index));
        }
        #[cfg(target_arch = "wasm32")]
        {
            for cmd in commands {
                self.process_one(cmd, &include_paths, &index);
            }
        }

        index
    }

    fn process_one(&self, cmd: &CompileCommand, include_paths: &[&Path], index: &Index) {
        let span = tracing::info_span!("translation_unit", file = %cmd.file.display());
        let _enter = span.enter();

        match self.front_end.parse(cmd, include_paths) {
            Ok(tu) => {
                let ctx = ExtractContext::root(self.config);
                walk_translation_unit(&tu, &ctx, index);
            }
            Err(err) => {
                tracing::warn!(error = %err, "translation unit failed to parse, skipping");
            }
        }
    }
}
