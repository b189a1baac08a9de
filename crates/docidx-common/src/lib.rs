//! Common types shared across the leafdoc indexer crates.
//!
//! This crate provides foundational types used by every other `docidx-*`
//! crate:
//! - Access specifiers (`Access`)
//! - The read-only indexer configuration (`Config`)
//! - Error types for the setup-failure paths (`IndexerError`)
//! - Centralized size/iteration limits

pub mod access;
pub use access::Access;

pub mod config;
pub use config::Config;

pub mod error;
pub use error::IndexerError;

pub mod limits;
