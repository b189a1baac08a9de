//! Ties the extraction layer together into a runnable pipeline:
//! `ParallelExecutor` fans translation units out across a thread pool into
//! one shared `Index`, then the fixed sequence of post-passes rewrites it
//! into its final, cross-referenced shape. `Indexer` is the single façade
//! an embedder calls.

pub mod executor;
pub use executor::ParallelExecutor;

pub mod passes;

pub mod indexer;
pub use indexer::Indexer;
