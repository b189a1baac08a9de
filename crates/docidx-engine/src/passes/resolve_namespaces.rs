//! Builds each namespace's child-id lists from the parent pointers every
//! other symbol already carries. Runs once, after all translation units
//! have drained, since a namespace's children may live in TUs other than
//! the one that declared the namespace itself.

use docidx_model::Index;

pub fn run(index: &Index) {
    for ns_id in index.namespaces.ids() {
        let records = index
            .records
            .iter()
            .filter(|e| e.value().base.parent_namespace_id == ns_id)
            .map(|e| e.value().base.id)
            .collect::<Vec<_>>();
        let enums = index
            .enums
            .iter()
            .filter(|e| e.value().base.parent_namespace_id == ns_id)
            .map(|e| e.value().base.id)
            .collect::<Vec<_>>();
        let namespaces = index
            .namespaces
            .iter()
            .filter(|e| *e.key() != ns_id && e.value().base.parent_namespace_id == ns_id)
            .map(|e| e.value().base.id)
            .collect::<Vec<_>>();
        let usings = index
            .aliases
            .iter()
            .filter(|e| e.value().base.parent_namespace_id == ns_id)
            .map(|e| e.value().base.id)
            .collect::<Vec<_>>();

        if let Some(mut ns) = index.namespaces.get_mut(ns_id) {
            ns.records = records;
            ns.enums = enums;
            ns.namespaces = namespaces;
            ns.usings = usings;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docidx_common::Access;
    use docidx_model::{NamespaceSymbol, RecordKind, RecordSymbol, Symbol, SymbolId};

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
    fn record_is_attributed_to_its_parent_namespace() {
        let index = Index::new();
        let ns = NamespaceSymbol {
            base: symbol("ns", SymbolId::NULL),
            records: vec![],
            enums: vec![],
            namespaces: vec![],
            usings: vec![],
        };
        let ns_id = ns.base.id;
        index.namespaces.reserve(ns_id, ns);

        let record = RecordSymbol {
            base: symbol("Foo", ns_id),
            kind: RecordKind::Struct,
            proto: "struct Foo".to_string(),
            template_params: vec![],
            base_records: vec![],
            method_ids: vec![],
            alias_ids: vec![],
            vars: vec![],
        };
        let record_id = record.base.id;
        index.records.reserve(record_id, record);

        run(&index);

        let ns = index.namespaces.get(ns_id).unwrap();
        assert_eq!(ns.records, vec![record_id]);
    }
}
