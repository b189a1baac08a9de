//! `EnumExtractor`, including the anonymous-enum edge case.

use docidx_ast::decl::{EnumDecl, EnumKindDecl};
use docidx_model::{Database, EnumKind, EnumMember, EnumSymbol, Symbol};

use crate::canonical::canonical_symbol_id;
use crate::context::ExtractContext;
use crate::ignore::is_site_ignored;

pub fn extract_enum(decl: &EnumDecl, ctx: &ExtractContext<'_>, db: &Database<EnumSymbol>) {
    db.record_match();

    if is_enum_ignored(decl, ctx) {
        return;
    }

    let id = canonical_symbol_id(&decl.site.usr, None);
    if db.contains(id) {
        return;
    }

    let symbol = EnumSymbol {
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
        kind: convert_kind(decl.kind),
        members: decl
            .members
            .iter()
            .map(|(name, value, doc)| EnumMember {
                name: name.clone(),
                value: *value,
                doc_comment: doc.clone(),
            })
            .collect(),
    };
    db.reserve(id, symbol);
}

fn is_enum_ignored(decl: &EnumDecl, ctx: &ExtractContext<'_>) -> bool {
    is_site_ignored(&decl.site, ctx) || decl.name.is_empty()
}

fn convert_kind(k: EnumKindDecl) -> EnumKind {
    match k {
        EnumKindDecl::Enum => EnumKind::Enum,
        EnumKindDecl::EnumClass => EnumKind::EnumClass,
        EnumKindDecl::EnumStruct => EnumKind::EnumStruct,
    }
}
