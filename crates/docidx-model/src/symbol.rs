//! The documentable symbol kinds and their shared base fields.

use serde::{Deserialize, Serialize};

use docidx_common::Access;

use crate::symbol_id::SymbolId;

/// Fields shared by every documentable symbol kind.
///
/// Modeled as a field the four symbol kinds embed (`base: Symbol`) rather
/// than as a base class, since Rust has no struct inheritance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Symbol {
    pub id: SymbolId,
    pub name: String,
    pub fully_qualified_name: String,
    /// Repo-relative path, already rendered via `Config::relative_to_root`.
    pub decl_file: String,
    pub decl_line: u32,
    pub parent_namespace_id: SymbolId,
    pub doc_comment_brief: String,
    pub doc_comment_long: String,
    pub access: Access,
}

/// `{ name, type: TypeRef }` pair resolved by the TypeRef resolver.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    pub id: SymbolId,
}

impl TypeRef {
    #[must_use]
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self { name: name.into(), id: SymbolId::NULL }
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !self.id.is_null()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefQualifier {
    None,
    Lvalue,
    Rvalue,
}

impl Default for RefQualifier {
    fn default() -> Self {
        Self::None
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionParam {
    pub name: String,
    pub r#type: TypeRef,
    pub default_value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateParamKind {
    TypeParam,
    NonType,
    TemplateTemplate,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateParam {
    pub template_type: TemplateParamKind,
    pub name: String,
    /// The parameter's own type, populated for `NonType`/`TemplateTemplate`.
    pub r#type: String,
    pub default_value: String,
    pub is_typename: bool,
    pub is_parameter_pack: bool,
}

/// A function, method, constructor/destructor, or conversion operator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionSymbol {
    pub base: Symbol,
    /// Complete rendered signature: `"<template prelude> <qualifiers/return> <name>(<params>) <trailing>"`.
    pub proto: String,
    /// Byte length of `proto` up to and including the template prelude.
    pub post_template: usize,
    /// Byte offset of the function name within `proto`.
    pub name_start: usize,
    pub return_type: TypeRef,
    pub params: Vec<FunctionParam>,
    pub template_params: Vec<TemplateParam>,
    pub is_variadic: bool,
    pub is_virtual: bool,
    pub is_constexpr: bool,
    pub is_consteval: bool,
    pub is_inline: bool,
    pub is_no_discard: bool,
    pub is_no_except: bool,
    pub is_no_return: bool,
    pub is_const: bool,
    pub is_volatile: bool,
    pub is_restrict: bool,
    pub is_explicit: bool,
    pub is_ctor_or_dtor: bool,
    pub is_conversion_op: bool,
    pub is_record_member: bool,
    pub ref_qualifier: RefQualifier,
    pub storage_class: String,
    pub has_trailing_return: bool,
}

impl FunctionSymbol {
    /// Slice of `proto` holding the function name, using `name_start` and
    /// `base.name`'s length.
    #[must_use]
    pub fn rendered_name(&self) -> &str {
        let end = self.name_start + self.base.name.len();
        &self.proto[self.name_start..end.min(self.proto.len())]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Class,
    Struct,
    Union,
}

impl RecordKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Union => "union",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordBase {
    pub id: SymbolId,
    pub access: Access,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MemberVariable {
    pub name: String,
    pub r#type: TypeRef,
    pub default_value: String,
    pub access: Access,
    pub is_static: bool,
    pub doc_comment: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordSymbol {
    pub base: Symbol,
    pub kind: RecordKind,
    /// Forward-declaration-shaped signature; `updateRecordNames` appends
    /// the inheritance list in place.
    pub proto: String,
    pub template_params: Vec<TemplateParam>,
    pub base_records: Vec<RecordBase>,
    pub method_ids: Vec<SymbolId>,
    pub alias_ids: Vec<SymbolId>,
    pub vars: Vec<MemberVariable>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    pub value: i64,
    pub doc_comment: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnumKind {
    Enum,
    EnumClass,
    EnumStruct,
}

impl EnumKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::EnumClass => "enum class",
            Self::EnumStruct => "enum struct",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnumSymbol {
    pub base: Symbol,
    pub kind: EnumKind,
    pub members: Vec<EnumMember>,
}

/// The four child-id lists `resolveNamespaces` fills in.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NamespaceSymbol {
    pub base: Symbol,
    pub records: Vec<SymbolId>,
    pub enums: Vec<SymbolId>,
    pub namespaces: Vec<SymbolId>,
    pub usings: Vec<SymbolId>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AliasSymbol {
    pub base: Symbol,
    pub target: TypeRef,
    pub is_record_member: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(name: &str) -> Symbol {
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
    fn rendered_name_matches_name_start() {
        let f = FunctionSymbol {
            base: base("bar"),
            proto: "void bar(int x)".to_string(),
            post_template: 0,
            name_start: 5,
            return_type: TypeRef::unresolved("void"),
            params: vec![],
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
            is_record_member: false,
            ref_qualifier: RefQualifier::None,
            storage_class: String::new(),
            has_trailing_return: false,
        };
        assert_eq!(f.rendered_name(), "bar");
    }

    #[test]
    fn record_kind_as_str() {
        assert_eq!(RecordKind::Struct.as_str(), "struct");
        assert_eq!(EnumKind::EnumClass.as_str(), "enum class");
    }
}
