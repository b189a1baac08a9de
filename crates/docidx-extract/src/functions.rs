//! `FunctionExtractor`.

use docidx_ast::decl::{FunctionDecl, FunctionKind, RefQualifierDecl};
use docidx_model::{
    Database, FunctionParam, FunctionSymbol, RefQualifier, Symbol, TemplateParam,
    TemplateParamKind,
};

use crate::canonical::canonical_symbol_id;
use crate::context::ExtractContext;
use crate::ignore::is_site_ignored;
use crate::type_resolve::resolve_type_ref;

/// Extract `decl` into `db`, gated by `IgnoreFilter` and cross-TU dedup.
///
/// Increments `db.num_matches` for every candidate seen, including ones
/// later rejected.
pub fn extract_function(decl: &FunctionDecl, ctx: &ExtractContext<'_>, db: &Database<FunctionSymbol>) {
    db.record_match();

    if is_function_ignored(decl, ctx) {
        return;
    }

    let id = canonical_symbol_id(&decl.site.usr, decl.primary_template_usr.as_deref());
    if db.contains(id) {
        return;
    }

    let symbol = build_function_symbol(decl, ctx, id);
    db.reserve(id, symbol);
}

fn is_function_ignored(decl: &FunctionDecl, ctx: &ExtractContext<'_>) -> bool {
    if is_site_ignored(&decl.site, ctx) {
        return true;
    }
    if decl.is_template_instantiation || decl.is_instantiated_member {
        return true;
    }
    // extractor-specific edge cases
    decl.is_deleted || decl.is_deduction_guide || decl.is_non_member_static
}

fn build_function_symbol(decl: &FunctionDecl, ctx: &ExtractContext<'_>, id: docidx_model::SymbolId) -> FunctionSymbol {
    let is_ctor_or_dtor = matches!(decl.kind, FunctionKind::Constructor | FunctionKind::Destructor);
    let is_conversion_op = matches!(decl.kind, FunctionKind::ConversionOperator);
    let return_type = resolve_type_ref(&decl.return_type);

    let bare_name = strip_template_suffix_for_ctor_dtor(&decl.name, is_ctor_or_dtor);
    let rendered_name = match decl.kind {
        FunctionKind::Destructor => format!("~{bare_name}"),
        FunctionKind::ConversionOperator => format!("operator {}", return_type.name),
        _ => bare_name,
    };

    let params: Vec<FunctionParam> = decl
        .params
        .iter()
        .map(|p| FunctionParam {
            name: p.name.clone(),
            r#type: resolve_type_ref(&p.r#type),
            default_value: p.default_value(),
        })
        .collect();

    let template_params: Vec<TemplateParam> =
        decl.template_params.iter().map(convert_template_param).collect();

    let template_prelude = render_template_prelude(&template_params);
    let head = render_head(decl, &return_type, is_ctor_or_dtor || is_conversion_op);
    let post_template = template_prelude.len();
    let name_start = post_template + head.len();

    let params_str = params
        .iter()
        .map(|p| {
            if p.default_value.is_empty() {
                format!("{} {}", p.r#type.name, p.name)
            } else {
                format!("{} {} = {}", p.r#type.name, p.name, p.default_value)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    let trailing = render_trailing(decl);

    let proto = format!(
        "{template_prelude}{head}{rendered_name}({params_str}){trailing}"
    );

    FunctionSymbol {
        base: Symbol {
            id,
            name: rendered_name,
            fully_qualified_name: ctx.qualify(&decl.name),
            decl_file: ctx.config.relative_to_root(&decl.site.source_file).to_string_lossy().into_owned(),
            decl_line: decl.site.source_line,
            parent_namespace_id: ctx.owner_id,
            doc_comment_brief: decl.site.doc_brief.clone(),
            doc_comment_long: decl.site.doc_long.clone(),
            access: decl.site.access,
        },
        proto,
        post_template,
        name_start,
        return_type,
        params,
        template_params,
        is_variadic: decl.is_variadic,
        is_virtual: decl.is_virtual,
        is_constexpr: decl.is_constexpr,
        is_consteval: decl.is_consteval,
        is_inline: decl.is_inline,
        is_no_discard: decl.is_no_discard,
        is_no_except: decl.is_no_except,
        is_no_return: decl.is_no_return,
        is_const: decl.is_const,
        is_volatile: decl.is_volatile,
        is_restrict: decl.is_restrict,
        is_explicit: decl.is_explicit,
        is_ctor_or_dtor,
        is_conversion_op,
        is_record_member: decl.is_record_member,
        ref_qualifier: convert_ref_qualifier(decl.ref_qualifier),
        storage_class: decl.storage_class.clone(),
        has_trailing_return: decl.has_trailing_return,
    }
}

fn convert_ref_qualifier(q: RefQualifierDecl) -> RefQualifier {
    match q {
        RefQualifierDecl::None => RefQualifier::None,
        RefQualifierDecl::Lvalue => RefQualifier::Lvalue,
        RefQualifierDecl::Rvalue => RefQualifier::Rvalue,
    }
}

pub(crate) fn convert_template_param(p: &docidx_ast::decl::TemplateParamDecl) -> TemplateParam {
    use docidx_ast::decl::TemplateParamDeclKind as K;
    TemplateParam {
        template_type: match p.kind {
            K::TypeParam => TemplateParamKind::TypeParam,
            K::NonType => TemplateParamKind::NonType,
            K::TemplateTemplate => TemplateParamKind::TemplateTemplate,
        },
        name: p.name.clone(),
        r#type: p.type_or_source_text.clone(),
        default_value: p.default_value.clone(),
        is_typename: p.is_typename,
        is_parameter_pack: p.is_parameter_pack,
    }
}

/// Drop any `<...>` specialization suffix from a constructor/destructor
/// name — the front-end sometimes spells an out-of-line ctor name
/// with the class's own template arguments attached.
fn strip_template_suffix_for_ctor_dtor(name: &str, applies: bool) -> String {
    if !applies {
        return name.to_string();
    }
    match name.find('<') {
        Some(idx) => name[..idx].to_string(),
        None => name.to_string(),
    }
}

pub(crate) fn render_template_prelude(params: &[TemplateParam]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let rendered = params
        .iter()
        .map(render_one_template_param)
        .collect::<Vec<_>>()
        .join(", ");
    format!("template <{rendered}> ")
}

fn render_one_template_param(p: &TemplateParam) -> String {
    let pack = if p.is_parameter_pack { "..." } else { "" };
    match p.template_type {
        TemplateParamKind::TypeParam => {
            let kw = if p.is_typename { "typename" } else { "class" };
            if p.default_value.is_empty() {
                format!("{kw} {pack}{}", p.name)
            } else {
                format!("{kw} {pack}{} = {}", p.name, p.default_value)
            }
        }
        TemplateParamKind::NonType => {
            if p.default_value.is_empty() {
                format!("{} {pack}{}", p.r#type, p.name)
            } else {
                format!("{} {pack}{} = {}", p.r#type, p.name, p.default_value)
            }
        }
        TemplateParamKind::TemplateTemplate => {
            if p.default_value.is_empty() {
                format!("{} {pack}{}", p.r#type, p.name)
            } else {
                format!("{} {pack}{} = {}", p.r#type, p.name, p.default_value)
            }
        }
    }
}

fn render_head(decl: &FunctionDecl, return_type: &docidx_model::TypeRef, skip_return: bool) -> String {
    let mut head = String::new();
    if !decl.storage_class.is_empty() {
        head.push_str(&decl.storage_class);
        head.push(' ');
    }
    if decl.is_consteval {
        head.push_str("consteval ");
    } else if decl.is_constexpr {
        head.push_str("constexpr ");
    }
    if decl.is_inline {
        head.push_str("inline ");
    }
    if decl.is_virtual {
        head.push_str("virtual ");
    }
    if decl.is_explicit {
        head.push_str("explicit ");
    }
    if !skip_return {
        head.push_str(&return_type.name);
        head.push(' ');
    }
    head
}

fn render_trailing(decl: &FunctionDecl) -> String {
    let mut trailing = String::new();
    if decl.is_const {
        trailing.push_str(" const");
    }
    if decl.is_volatile {
        trailing.push_str(" volatile");
    }
    if decl.is_restrict {
        trailing.push_str(" restrict");
    }
    match decl.ref_qualifier {
        RefQualifierDecl::Lvalue => trailing.push('&'),
        RefQualifierDecl::Rvalue => trailing.push_str("&&"),
        RefQualifierDecl::None => {}
    }
    if decl.is_no_except {
        trailing.push_str(" noexcept");
    }
    trailing
}
