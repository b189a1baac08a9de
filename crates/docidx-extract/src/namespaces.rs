//! `NamespaceExtractor`. Child-id lists (`records`/`enums`/`namespaces`/
//! `usings`) are left empty here; a post-pass over the fully-merged index
//! fills them in once every translation unit has drained, since a
//! namespace's children may be declared in other translation units.

use docidx_ast::decl::NamespaceDecl;
use docidx_model::{Database, NamespaceSymbol, Symbol, SymbolId};

use crate::canonical::canonical_symbol_id;
use crate::context::ExtractContext;
use crate::ignore::is_site_ignored;

/// Returns the namespace's id so the caller can build the child context,
/// even for an anonymous namespace that isn't indexed as its own symbol
/// (its members still need `ctx.owner_id` to walk correctly, which is
/// `ctx.owner_id` unchanged since an anonymous namespace contributes no
/// parent of its own).
pub fn extract_namespace(
    decl: &NamespaceDecl,
    ctx: &ExtractContext<'_>,
    db: &Database<NamespaceSymbol>,
) -> Option<SymbolId> {
    db.record_match();

    if decl.name.is_empty() {
        return None;
    }
    if is_site_ignored(&decl.site, ctx) {
        return None;
    }

    let id = canonical_symbol_id(&decl.site.usr, None);
    if db.contains(id) {
        return Some(id);
    }

    let symbol = NamespaceSymbol {
        base: Symbol {
            id,
            name: decl.name.clone(),
            fully_qualified_name: ctx.qualify(&decl.name),
            decl_file: ctx.config.relative_to_root(&decl.site.source_file).to_string_lossy().into_owned(),
            decl_line: decl.site.source_line,
            parent_namespace_id: ctx.owner_id,
            doc_comment_brief: decl.site.doc_brief.clone(),
            doc_comment_long: decl.site.doc_long.clone(),
            access: decl.site.access,
        },
        records: Vec::new(),
        enums: Vec::new(),
        namespaces: Vec::new(),
        usings: Vec::new(),
    };
    db.reserve(id, symbol);
    Some(id)
}
