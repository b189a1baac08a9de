//! `AliasExtractor`.

use docidx_ast::decl::{AliasDecl, AliasKind, ShadowTarget};
use docidx_model::{AliasSymbol, Database, Symbol, TypeRef};

use crate::canonical::canonical_symbol_id;
use crate::context::ExtractContext;
use crate::ignore::is_site_ignored;
use crate::type_resolve::resolve_type_ref;

pub fn extract_alias(decl: &AliasDecl, ctx: &ExtractContext<'_>, db: &Database<AliasSymbol>) {
    db.record_match();

    if decl.is_function_local || is_site_ignored(&decl.site, ctx) {
        return;
    }

    let Some(target) = resolve_target(decl) else {
        return;
    };

    let id = canonical_symbol_id(&decl.site.usr, None);
    if db.contains(id) {
        return;
    }

    let symbol = AliasSymbol {
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
        target,
        is_record_member: decl.is_record_member,
    };
    db.reserve(id, symbol);
}

/// `UsingShadowDecl` links its one shadowed declaration. `UsingDecl` names
/// an overload set; the *last* shadow introduced wins, which loses
/// information when the overload set spans more than one declaration but
/// matches what a single `TypeRef` field can represent. `TypeAliasDecl`
/// links its rendered underlying type.
fn resolve_target(decl: &AliasDecl) -> Option<TypeRef> {
    match decl.kind {
        AliasKind::UsingShadowDecl => decl.shadow_target.as_ref().map(shadow_to_type_ref),
        AliasKind::UsingDecl => decl.shadows.last().map(shadow_to_type_ref),
        AliasKind::TypeAliasDecl => decl.underlying_type.as_ref().map(resolve_type_ref),
    }
}

fn shadow_to_type_ref(shadow: &ShadowTarget) -> TypeRef {
    TypeRef {
        name: shadow.fully_qualified_name.clone(),
        id: canonical_symbol_id(&shadow.usr, None),
    }
}
