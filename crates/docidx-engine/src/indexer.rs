//! The `Indexer` façade: the one entry point an embedder calls to turn a
//! compile database into a finished `Index`.

use docidx_ast::{CompileDatabase, FrontEnd};
use docidx_common::{Config, IndexerError};
use docidx_model::Index;

use crate::executor::ParallelExecutor;
use crate::passes;

pub struct Indexer<'a> {
    config: &'a Config,
    front_end: &'a dyn FrontEnd,
    index: Option<Index>,
}

impl<'a> Indexer<'a> {
    #[must_use]
    pub fn new(config: &'a Config, front_end: &'a dyn FrontEnd) -> Self {
        Self { config, front_end, index: None }
    }

    /// Runs the full pipeline: parallel extraction across every
    /// translation unit named by `compile_db`, then the fixed sequence of
    /// post-passes. Setup failures (a missing/unparsable compile database)
    /// are the caller's concern — by the time a `CompileDatabase` reaches
    /// here it is already a validated, in-memory object, so `run` itself
    /// cannot fail; it exists as a `Result` to leave room for a future
    /// fallible collaborator without an interface-breaking change.
    pub fn run(&mut self, compile_db: &dyn CompileDatabase) -> Result<&Index, IndexerError> {
        let span = tracing::info_span!("index_run");
        let _enter = span.enter();

        tracing::info!(
            translation_units = compile_db.all_compile_commands().len(),
            "starting indexing run"
        );

        let executor = ParallelExecutor::new(self.config, self.front_end);
        let index = executor.run(compile_db);
        passes::run_all(&index);

        for line in index.stats_lines() {
            tracing::info!("{line}");
        }

        self.index = Some(index);
        Ok(self.index.as_ref().expect("index was just set"))
    }

    #[must_use]
    pub fn index(&self) -> Option<&Index> {
        self.index.as_ref()
    }

    /// Renders the same diagnostic lines logged at the end of `run`, for an
    /// embedder that wants them without re-parsing logs.
    #[must_use]
    pub fn print_stats(&self) -> Vec<String> {
        self.index.as_ref().map(Index::stats_lines).unwrap_or_default()
    }
}
