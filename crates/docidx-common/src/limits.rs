//! Centralized limits and thresholds.
//!
//! Kept as a single module so tuning a bound doesn't require hunting
//! through the crate graph.

/// Nested angle-bracket groups inside a template-specialization name deeper
/// than this are elided as `<...>` regardless of depth.
pub const MAX_TEMPLATE_ARG_RENDER_DEPTH: usize = 1;

/// Safety cap on namespace-walk recursion when computing `parentNamespaceID`
/// or checking for an enclosing anonymous namespace. Source
/// inputs are trusted, but a cap keeps a malformed AST from looping forever.
pub const MAX_NAMESPACE_WALK_DEPTH: usize = 256;
