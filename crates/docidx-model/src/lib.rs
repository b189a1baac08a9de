//! The in-memory catalog the indexer fills in: `SymbolId`, the per-kind
//! `Database<T>` tables, and the `Index` that owns all five of them.

pub mod database;
pub use database::Database;

pub mod symbol_id;
pub use symbol_id::SymbolId;

pub mod symbol;
pub use symbol::{
    AliasSymbol, EnumMember, EnumSymbol, FunctionParam, FunctionSymbol, MemberVariable,
    NamespaceSymbol, RecordBase, RecordKind, RecordSymbol, RefQualifier, Symbol, TemplateParam,
    TemplateParamKind, TypeRef,
};

pub mod index;
pub use index::Index;
