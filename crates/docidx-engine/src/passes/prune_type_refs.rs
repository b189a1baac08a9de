//! Nulls every `TypeRef.id` that does not resolve to a record, enum, or
//! alias still present in the index. Names are kept; only the cross-link
//! is severed. Runs last, since every other pass may resolve ids that
//! earlier passes hadn't settled yet.

use docidx_model::{Index, SymbolId, TypeRef};

pub fn run(index: &Index) {
    let resolves = |id: SymbolId| index.records.contains(id) || index.enums.contains(id) || index.aliases.contains(id);

    let sever = |r: &mut TypeRef| {
        if !r.id.is_null() && !resolves(r.id) {
            r.id = SymbolId::NULL;
        }
    };

    for id in index.functions.ids() {
        if let Some(mut f) = index.functions.get_mut(id) {
            sever(&mut f.return_type);
            for p in &mut f.params {
                sever(&mut p.r#type);
            }
        }
    }

    for id in index.records.ids() {
        if let Some(mut r) = index.records.get_mut(id) {
            for v in &mut r.vars {
                sever(&mut v.r#type);
            }
        }
    }

    for id in index.aliases.ids() {
        if let Some(mut a) = index.aliases.get_mut(id) {
            sever(&mut a.target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docidx_common::Access;
    use docidx_model::{FunctionParam, FunctionSymbol, RefQualifier, Symbol, TemplateParam};

    fn symbol(name: &str) -> Symbol {
        Symbol {
            id: SymbolId::from_usr(name),
            name: name.to_string(),
            fully_qualified_name: name.to_string(),
            decl_file: "src/foo.h".to_string(),
            decl_line: 1,
            parent_namespace_id: SymbolId::NULL,
            doc_comment_brief: String::new(),
            doc_comment_long: String::new(),
            access: Access::None,
        }
    }

    #[test]
    fn dangling_return_type_id_is_nulled() {
        let index = Index::new();
        let f = FunctionSymbol {
            base: symbol("f"),
            proto: "Gone f()".to_string(),
            post_template: 0,
            name_start: 5,
            return_type: TypeRef { name: "Gone".to_string(), id: SymbolId::from_usr("c:@S@Gone") },
            params: Vec::<FunctionParam>::new(),
            template_params: Vec::<TemplateParam>::new(),
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
            is_record_member: false,
            ref_qualifier: RefQualifier::None,
            storage_class: String::new(),
            has_trailing_return: false,
        };
        let id = f.base.id;
        index.functions.reserve(id, f);

        run(&index);

        let f = index.functions.get(id).unwrap();
        assert!(f.return_type.id.is_null());
        assert_eq!(f.return_type.name, "Gone");
    }
}
