//! The AST facade the indexing core walks.
//!
//! This system names "AST parsing itself (provided by an embedded compiler
//! front-end)" as an external collaborator with a specified interface.
//! This crate *is* that interface: a small, compiler-agnostic declaration
//! tree (`DeclNode` and friends) plus the `FrontEnd`/`CompileDatabase`
//! traits a real embedding (e.g. libclang bindings) would implement.
//!
//! For tests and examples, `docidx_ast::mock` ships an in-memory front end
//! that returns pre-built translation units instead of parsing source text,
//! which is enough to exercise the full indexing pipeline deterministically.

pub mod compile_db;
pub use compile_db::{CompileCommand, CompileDatabase};

pub mod decl;
pub use decl::{
    AliasDecl, AliasKind, BaseSpecifier, DeclNode, EnumDecl, FunctionDecl, FunctionKind,
    NamespaceDecl, ParamDecl, RecordDecl, ShadowTarget, TemplateParamDecl, TranslationUnit,
    VarDecl,
};

pub mod type_node;
pub use type_node::{TagRef, TypeNode};

pub mod frontend;
pub use frontend::{FrontEnd, ParseError};

pub mod mock;
