//! The recursive declaration-tree walk tying the five extractors together.
//!
//! Records and namespaces carry their own members as children in the tree,
//! so descending into a record also threads a record-scoped `ExtractContext`
//! (`owner_id` becomes the record's id) through everything nested under it,
//! and likewise for namespaces. A record's method/alias ids are appended to
//! its already-reserved `RecordSymbol` as its children are discovered, since
//! the record itself has to be reserved before its members can name it as
//! their parent.

use docidx_ast::decl::DeclNode;
use docidx_ast::TranslationUnit;
use docidx_model::Index;
use tracing::warn;

use crate::context::ExtractContext;
use crate::{aliases, enums, functions, namespaces, records};

pub fn walk_translation_unit(tu: &TranslationUnit, ctx: &ExtractContext<'_>, index: &Index) {
    for decl in &tu.top_level {
        walk_decl(decl, ctx, index);
    }
}

fn walk_decl(decl: &DeclNode, ctx: &ExtractContext<'_>, index: &Index) {
    match decl {
        DeclNode::Function(f) => functions::extract_function(f, ctx, &index.functions),
        DeclNode::Enum(e) => enums::extract_enum(e, ctx, &index.enums),
        DeclNode::Alias(a) => aliases::extract_alias(a, ctx, &index.aliases),
        DeclNode::Var(_) => {}
        DeclNode::Record(r) => walk_record(r, ctx, index),
        DeclNode::Namespace(n) => walk_namespace(n, ctx, index),
    }
}

fn walk_record(decl: &docidx_ast::decl::RecordDecl, ctx: &ExtractContext<'_>, index: &Index) {
    let Some((name, id)) = records::extract_record(decl, ctx, &index.records) else {
        return;
    };
    let record_ctx = ctx.enter_record(id, &name);
    if record_ctx.depth_exceeded() {
        warn!(record = %name, depth = record_ctx.depth, "namespace/record walk depth cap reached, not descending into members");
        return;
    }

    for child in &decl.children {
        match child {
            DeclNode::Function(f) => {
                functions::extract_function(f, &record_ctx, &index.functions);
                let fn_id = docidx_extract_symbol_id(f);
                if let Some(mut sym) = index.records.get_mut(id) {
                    if index.functions.contains(fn_id) && !sym.method_ids.contains(&fn_id) {
                        sym.method_ids.push(fn_id);
                    }
                }
            }
            DeclNode::Alias(a) => {
                aliases::extract_alias(a, &record_ctx, &index.aliases);
                let alias_id = crate::canonical_symbol_id(&a.site.usr, None);
                if let Some(mut sym) = index.records.get_mut(id) {
                    if index.aliases.contains(alias_id) && !sym.alias_ids.contains(&alias_id) {
                        sym.alias_ids.push(alias_id);
                    }
                }
            }
            // Nested records/enums/namespaces are independent symbols in
            // their own right, qualified by this record's name.
            DeclNode::Record(_) | DeclNode::Enum(_) | DeclNode::Namespace(_) => {
                walk_decl(child, &record_ctx, index);
            }
            DeclNode::Var(_) => {}
        }
    }
}

fn walk_namespace(decl: &docidx_ast::decl::NamespaceDecl, ctx: &ExtractContext<'_>, index: &Index) {
    let ns_id = namespaces::extract_namespace(decl, ctx, &index.namespaces);
    let child_ctx = ctx.enter_namespace(ns_id.unwrap_or(ctx.owner_id), &decl.name);
    if child_ctx.depth_exceeded() {
        warn!(namespace = %decl.name, depth = child_ctx.depth, "namespace/record walk depth cap reached, not descending into members");
        return;
    }
    for child in &decl.children {
        walk_decl(child, &child_ctx, index);
    }
}

fn docidx_extract_symbol_id(f: &docidx_ast::decl::FunctionDecl) -> docidx_model::SymbolId {
    crate::canonical_symbol_id(&f.site.usr, f.primary_template_usr.as_deref())
}
