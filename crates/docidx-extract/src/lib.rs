//! `IgnoreFilter`, the five per-declaration `SymbolExtractor`s, the
//! `TypeRef` resolver, and the translation-unit walk that ties them
//! together.

pub mod canonical;
pub use canonical::canonical_symbol_id;

pub mod ignore;
pub use ignore::is_site_ignored;

pub mod type_resolve;
pub use type_resolve::resolve_type_ref;

pub mod context;
pub use context::ExtractContext;

pub mod functions;
pub mod records;
pub mod enums;
pub mod namespaces;
pub mod aliases;

pub mod walk;
pub use walk::walk_translation_unit;
