//! `getTypeSymbolID` — the `TypeRef` resolver.

use docidx_ast::type_node::TypeNode;
use docidx_model::TypeRef;

use crate::canonical::canonical_symbol_id;

/// Walk a qualified type to the canonical declaration it should link to:
///
/// 1. a directly-attached tag declaration,
/// 2. else the tag of a pointer's pointee,
/// 3. else the tag of a reference's referent,
/// 4. else unresolved.
///
/// The tag found, if any, is reduced to its primary template before
/// becoming the `TypeRef`'s id, so `T*`, `T&`, and `T<int>` all link to
/// whatever `T` resolves to.
#[must_use]
pub fn resolve_type_ref(type_node: &TypeNode) -> TypeRef {
    let tag = type_node
        .tag
        .as_ref()
        .or_else(|| type_node.pointee.as_ref().and_then(|p| p.tag.as_ref()))
        .or_else(|| type_node.referent.as_ref().and_then(|r| r.tag.as_ref()));

    let id = tag
        .map(|t| canonical_symbol_id(&t.usr, t.primary_template_usr.as_deref()))
        .unwrap_or_default();

    TypeRef { name: type_node.rendered.clone(), id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docidx_ast::type_node::TagRef;

    #[test]
    fn unresolved_type_gets_null_id() {
        let tr = resolve_type_ref(&TypeNode::plain("int"));
        assert!(!tr.is_resolved());
        assert_eq!(tr.name, "int");
    }

    #[test]
    fn direct_tag_resolves() {
        let tag = TagRef { usr: "c:@S@Foo".to_string(), primary_template_usr: None };
        let tr = resolve_type_ref(&TypeNode::tagged("Foo", tag));
        assert!(tr.is_resolved());
    }

    #[test]
    fn pointer_and_reference_resolve_to_same_id_as_plain_tag() {
        let tag = TagRef { usr: "c:@S@Foo".to_string(), primary_template_usr: None };
        let plain = resolve_type_ref(&TypeNode::tagged("Foo", tag.clone()));

        let pointee = TypeNode::tagged("Foo", tag.clone());
        let pointer = resolve_type_ref(&TypeNode::pointer_to("Foo *", pointee));

        let referent = TypeNode::tagged("Foo", tag);
        let reference = resolve_type_ref(&TypeNode::reference_to("Foo &", referent));

        assert_eq!(plain.id, pointer.id);
        assert_eq!(plain.id, reference.id);
    }

    #[test]
    fn specialization_tag_collapses_to_primary() {
        let primary_tag = TagRef { usr: "c:@ST>1#T@Vec".to_string(), primary_template_usr: None };
        let plain = resolve_type_ref(&TypeNode::tagged("Vec", primary_tag));

        let spec_tag = TagRef {
            usr: "c:@ST>1#T@Vec>#I".to_string(),
            primary_template_usr: Some("c:@ST>1#T@Vec".to_string()),
        };
        let specialized = resolve_type_ref(&TypeNode::tagged("Vec<int>", spec_tag));

        assert_eq!(plain.id, specialized.id);
    }
}
