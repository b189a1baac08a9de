//! `RecordExtractor` and `updateRecordNames`.

use docidx_ast::decl::{BaseSpecifier, RecordDecl, RecordKindDecl, VarDecl};
use docidx_model::{
    Database, MemberVariable, RecordBase, RecordKind, RecordSymbol, Symbol, TypeRef,
};

use crate::canonical::canonical_symbol_id;
use crate::context::ExtractContext;
use crate::ignore::is_site_ignored;
use crate::type_resolve::resolve_type_ref;

/// Extract `decl`'s own `RecordSymbol` (without methods/aliases, which the
/// caller collects from `decl.children` separately since they need their
/// own `IgnoreFilter` pass and their own database).
///
/// Returns the record's resolved name and `SymbolId` so the caller can
/// build the context methods/nested declarations are extracted under,
/// even when this particular call didn't win the reservation race.
pub fn extract_record(
    decl: &RecordDecl,
    ctx: &ExtractContext<'_>,
    db: &Database<RecordSymbol>,
) -> Option<(String, docidx_model::SymbolId)> {
    db.record_match();

    if is_record_ignored(decl, ctx) {
        return None;
    }

    let Some(resolved_name) = resolve_record_name(decl) else {
        // edge case 2: still unnamed after typedef-for-anonymous recovery.
        return None;
    };
    let qualified_name = format!("{resolved_name}{}", specialization_suffix(decl));

    let id = canonical_symbol_id(&decl.site.usr, decl.primary_template_usr.as_deref());
    if db.contains(id) {
        return Some((resolved_name, id));
    }

    let symbol = build_record_symbol(decl, ctx, id, &qualified_name);
    db.reserve(id, symbol);
    Some((resolved_name, id))
}

fn is_record_ignored(decl: &RecordDecl, ctx: &ExtractContext<'_>) -> bool {
    if is_site_ignored(&decl.site, ctx) {
        return true;
    }
    if decl.is_template_instantiation {
        return true;
    }
    // extractor-specific: non-defining declarations, and
    // specializations with no written type at all.
    !decl.is_definition || decl.is_specialization_without_written_type
}

/// Name-recovery edge cases, in order:
/// 1. no written name but a typedef-for-anonymous exists -> use it.
/// 2. still unnamed -> drop (returns `None`).
/// 3. nested in another record -> `build_record_symbol` prefixes the
///    resolved name with `ctx.qualify` before it becomes `name`/`proto`.
fn resolve_record_name(decl: &RecordDecl) -> Option<String> {
    if !decl.name.is_empty() {
        return Some(decl.name.clone());
    }
    decl.typedef_for_anonymous.clone().filter(|n| !n.is_empty())
}

fn specialization_suffix(decl: &RecordDecl) -> String {
    if decl.specialization_args.is_empty() {
        return String::new();
    }
    let args = decl
        .specialization_args
        .iter()
        .map(|a| elide_nested_angle_brackets(a))
        .collect::<Vec<_>>()
        .join(", ");
    format!("<{args}>")
}

/// Angle-bracket groups nested deeper than `MAX_TEMPLATE_ARG_RENDER_DEPTH`
/// inside a template argument are elided as `<...>` for readability.
fn elide_nested_angle_brackets(arg: &str) -> String {
    let max_depth = docidx_common::limits::MAX_TEMPLATE_ARG_RENDER_DEPTH;
    let mut out = String::new();
    let mut depth: usize = 0;
    let mut eliding = false;
    for ch in arg.chars() {
        match ch {
            '<' => {
                depth += 1;
                if depth > max_depth {
                    if !eliding {
                        out.push_str("<...>");
                        eliding = true;
                    }
                } else {
                    out.push(ch);
                }
            }
            '>' => {
                if depth > max_depth {
                    depth -= 1;
                    if depth <= max_depth {
                        eliding = false;
                    }
                } else {
                    depth = depth.saturating_sub(1);
                    out.push(ch);
                }
            }
            _ if eliding => {}
            _ => out.push(ch),
        }
    }
    out
}

fn build_record_symbol(
    decl: &RecordDecl,
    ctx: &ExtractContext<'_>,
    id: docidx_model::SymbolId,
    qualified_name: &str,
) -> RecordSymbol {
    let kind = convert_kind(decl.kind);
    let template_params: Vec<docidx_model::TemplateParam> = decl
        .template_params
        .iter()
        .map(crate::functions::convert_template_param)
        .collect();

    let template_prelude = crate::functions::render_template_prelude(&template_params);
    // edge case 3: a record nested in another record is prefixed with
    // `ParentName::`, same as `fullyQualifiedName`.
    let qualified = ctx.qualify(qualified_name);
    let proto = format!("{template_prelude}{} {qualified}", kind.as_str());

    let base_records: Vec<RecordBase> = decl.bases.iter().map(convert_base).collect();

    RecordSymbol {
        base: Symbol {
            id,
            name: qualified.clone(),
            fully_qualified_name: qualified,
            decl_file: ctx.config.relative_to_root(&decl.site.source_file).to_string_lossy().into_owned(),
            decl_line: decl.site.source_line,
            parent_namespace_id: ctx.owner_id,
            doc_comment_brief: decl.site.doc_brief.clone(),
            doc_comment_long: decl.site.doc_long.clone(),
            access: decl.site.access,
        },
        kind,
        proto,
        template_params,
        base_records,
        method_ids: Vec::new(),
        alias_ids: Vec::new(),
        vars: decl
            .children
            .iter()
            .filter_map(|c| match c {
                docidx_ast::decl::DeclNode::Var(v) => Some(convert_member_variable(v)),
                _ => None,
            })
            .collect(),
    }
}

fn convert_kind(k: RecordKindDecl) -> RecordKind {
    match k {
        RecordKindDecl::Class => RecordKind::Class,
        RecordKindDecl::Struct => RecordKind::Struct,
        RecordKindDecl::Union => RecordKind::Union,
    }
}

fn convert_base(b: &BaseSpecifier) -> RecordBase {
    let mut name = resolve_type_ref(&b.r#type).name;
    if b.is_std_namespace && !name.starts_with("std::") {
        name = format!("std::{name}");
    }
    RecordBase {
        id: resolve_type_ref(&b.r#type).id,
        access: if b.access_written { b.access } else { docidx_common::Access::None },
        name,
    }
}

fn convert_member_variable(v: &VarDecl) -> MemberVariable {
    let is_anonymous_aggregate = v.r#type.rendered.contains("anonymous ");
    let r#type = if is_anonymous_aggregate {
        TypeRef::unresolved("anonymous struct/union")
    } else {
        resolve_type_ref(&v.r#type)
    };
    MemberVariable {
        name: v.name.clone(),
        r#type,
        default_value: v.default_value.clone(),
        access: v.site.access,
        is_static: v.is_static,
        doc_comment: v.site.doc_brief.clone(),
    }
}

/// `updateRecordNames`: append the inheritance list to `proto` once
/// every base is guaranteed resolvable (after all TUs have indexed).
pub fn render_inheritance_suffix(bases: &[RecordBase]) -> String {
    if bases.is_empty() {
        return String::new();
    }
    let rendered = bases
        .iter()
        .map(|b| {
            let keyword = b.access.keyword();
            if keyword.is_empty() {
                b.name.clone()
            } else {
                format!("{keyword} {}", b.name)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!(" : {rendered}")
}
