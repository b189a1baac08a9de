//! Restores human-readable template-parameter names on out-of-line member
//! functions.
//!
//! A method defined outside its class body loses its enclosing record's
//! template-parameter names at the front-end level, leaving canonical
//! placeholders like `type-parameter-0-0` in `proto`. Once a record's own
//! parameter names are known, substitute them back in, then recompute the
//! `postTemplate`/`nameStart` offsets against the rewritten `proto`.

use docidx_model::Index;

pub fn run(index: &Index) {
    for record_id in index.records.ids() {
        let Some(record) = index.records.get(record_id) else { continue };
        let param_names: Vec<String> = record.template_params.iter().map(|p| p.name.clone()).collect();
        let method_ids = record.method_ids.clone();
        drop(record);

        if param_names.is_empty() {
            continue;
        }

        for method_id in method_ids {
            let Some(mut f) = index.functions.get_mut(method_id) else { continue };

            let template_part = f.proto[..f.post_template].to_string();
            let pre_name_part = f.proto[f.post_template..f.name_start].to_string();
            let rest_part = f.proto[f.name_start..].to_string();

            let new_template = substitute(&template_part, &param_names);
            let new_pre_name = substitute(&pre_name_part, &param_names);
            let new_rest = substitute(&rest_part, &param_names);
            let new_name = substitute(&f.base.name, &param_names);

            f.base.name = new_name;
            f.return_type.name = substitute(&f.return_type.name, &param_names);
            for param in &mut f.params {
                param.r#type.name = substitute(&param.r#type.name, &param_names);
                param.default_value = substitute(&param.default_value, &param_names);
            }

            f.post_template = new_template.len();
            f.name_start = new_template.len() + new_pre_name.len();
            f.proto = format!("{new_template}{new_pre_name}{new_rest}");
        }
    }
}

/// Replace every `type-parameter-0-i` placeholder with `params[i]`'s name.
fn substitute(s: &str, params: &[String]) -> String {
    let mut out = s.to_string();
    for (i, name) in params.iter().enumerate() {
        out = out.replace(&format!("type-parameter-0-{i}"), name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use docidx_common::Access;
    use docidx_model::{
        FunctionParam, FunctionSymbol, RecordKind, RecordSymbol, RefQualifier, Symbol, SymbolId,
        TemplateParam, TemplateParamKind, TypeRef,
    };

    fn symbol(name: &str, parent: SymbolId) -> Symbol {
        Symbol {
            id: SymbolId::from_usr(name),
            name: name.to_string(),
            fully_qualified_name: name.to_string(),
            decl_file: "src/foo.h".to_string(),
            decl_line: 1,
            parent_namespace_id: parent,
            doc_comment_brief: String::new(),
            doc_comment_long: String::new(),
            access: Access::None,
        }
    }

    #[test]
    fn placeholder_is_replaced_with_class_parameter_name() {
        let index = Index::new();

        let record = RecordSymbol {
            base: symbol("S", SymbolId::NULL),
            kind: RecordKind::Struct,
            proto: "template <typename T> struct S".to_string(),
            template_params: vec![TemplateParam {
                template_type: TemplateParamKind::TypeParam,
                name: "T".to_string(),
                r#type: String::new(),
                default_value: String::new(),
                is_typename: true,
                is_parameter_pack: false,
            }],
            base_records: vec![],
            method_ids: vec![],
            alias_ids: vec![],
            vars: vec![],
        };
        let record_id = record.base.id;

        let proto = "void f(type-parameter-0-0 x)".to_string();
        let name_start = "void ".len();
        let f = FunctionSymbol {
            base: symbol("f", record_id),
            proto: proto.clone(),
            post_template: 0,
            name_start,
            return_type: TypeRef::unresolved("void"),
            params: vec![FunctionParam {
                name: "x".to_string(),
                r#type: TypeRef::unresolved("type-parameter-0-0"),
                default_value: String::new(),
            }],
            template_params: vec![],
            is_variadic: false,
            is_virtual: false,
            is_constexpr: false,
            is_consteval: false,
            is_inline: false,
            is_no_discard: false,
            is_no_except: false,
            is_no_return: false,
            is_const: false,
            is_volatile: false,
            is_restrict: false,
            is_explicit: false,
            is_ctor_or_dtor: false,
            is_conversion_op: false,
            is_record_member: true,
            ref_qualifier: RefQualifier::None,
            storage_class: String::new(),
            has_trailing_return: false,
        };
        let f_id = f.base.id;

        let mut record = record;
        record.method_ids.push(f_id);
        index.records.reserve(record_id, record);
        index.functions.reserve(f_id, f);

        run(&index);

        let f = index.functions.get(f_id).unwrap();
        assert!(f.proto.contains("T x"));
        assert!(!f.proto.contains("type-parameter"));
        assert_eq!(f.params[0].r#type.name, "T");
        assert!(f.post_template <= f.name_start);
        assert!(f.name_start <= f.proto.len());
    }
}
