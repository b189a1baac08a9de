//! The facade's rendering of a qualified type, rich enough for the
//! `TypeRef` resolver to walk it to a canonical declaration.

/// A tag (struct/class/union/enum) declaration identity as seen through a
/// type, carrying enough to apply the primary-template reduction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagRef {
    pub usr: String,
    /// Set when `usr` names a template specialization; holds the USR of
    /// the primary template it should collapse onto.
    pub primary_template_usr: Option<String>,
}

/// A type as written in source, e.g. a parameter or return type.
///
/// `pointee`/`referent` let the resolver see through `T*`/`T&` to `T`
/// without needing a separate "strip indirection" pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeNode {
    /// The type's rendered spelling, exactly as it should appear in a
    /// `TypeRef::name` (qualifiers like `const` included).
    pub rendered: String,
    pub tag: Option<TagRef>,
    pub pointee: Option<Box<TypeNode>>,
    pub referent: Option<Box<TypeNode>>,
}

impl TypeNode {
    #[must_use]
    pub fn plain(rendered: impl Into<String>) -> Self {
        Self { rendered: rendered.into(), tag: None, pointee: None, referent: None }
    }

    #[must_use]
    pub fn tagged(rendered: impl Into<String>, tag: TagRef) -> Self {
        Self { rendered: rendered.into(), tag: Some(tag), pointee: None, referent: None }
    }

    #[must_use]
    pub fn pointer_to(rendered: impl Into<String>, pointee: TypeNode) -> Self {
        Self {
            rendered: rendered.into(),
            tag: None,
            pointee: Some(Box::new(pointee)),
            referent: None,
        }
    }

    #[must_use]
    pub fn reference_to(rendered: impl Into<String>, referent: TypeNode) -> Self {
        Self {
            rendered: rendered.into(),
            tag: None,
            pointee: None,
            referent: Some(Box::new(referent)),
        }
    }
}
