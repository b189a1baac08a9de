//! The declaration tree a translation unit walk produces.
//!
//! A real front-end would build this from a compiler AST; `docidx::mock`
//! builds it directly for tests. Namespaces and records carry their
//! members as `children`, so the "enclosing namespace"/"enclosing record"
//! context `IgnoreFilter` and the extractors need falls naturally out of
//! the traversal rather than requiring a separate parent-walk step per
//! node.

use std::path::PathBuf;

use docidx_common::Access;

use crate::type_node::TypeNode;

/// One translation unit: a source file plus everything its includes
/// brought in, already parsed into a declaration tree.
#[derive(Clone, Debug, Default)]
pub struct TranslationUnit {
    pub primary_file: PathBuf,
    pub top_level: Vec<DeclNode>,
}

#[derive(Clone, Debug)]
pub enum DeclNode {
    Function(FunctionDecl),
    Record(RecordDecl),
    Enum(EnumDecl),
    Namespace(NamespaceDecl),
    Alias(AliasDecl),
    Var(VarDecl),
}

/// A member variable: a field, or a static `VarDecl` found among a
/// record's other decls.
#[derive(Clone, Debug)]
pub struct VarDecl {
    pub site: DeclSite,
    pub name: String,
    pub r#type: TypeNode,
    pub default_value: String,
    pub is_static: bool,
}

/// Fields every declaration carries, regardless of kind. Mirrors the
/// union of IgnoreFilter inputs that aren't kind-specific.
#[derive(Clone, Debug)]
pub struct DeclSite {
    pub usr: String,
    pub source_file: PathBuf,
    pub source_line: u32,
    pub is_invalid_range: bool,
    pub is_system_header: bool,
    pub is_implicit: bool,
    pub access: Access,
    pub doc_brief: String,
    pub doc_long: String,
}

impl Default for DeclSite {
    fn default() -> Self {
        Self {
            usr: String::new(),
            source_file: PathBuf::new(),
            source_line: 0,
            is_invalid_range: false,
            is_system_header: false,
            is_implicit: false,
            access: Access::None,
            doc_brief: String::new(),
            doc_long: String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionKind {
    Plain,
    Constructor,
    Destructor,
    ConversionOperator,
}

#[derive(Clone, Debug)]
pub struct ParamDecl {
    pub name: String,
    pub r#type: TypeNode,
    /// Default-argument source text as written at the (possibly
    /// uninstantiated) primary declaration, when the front-end retained it.
    pub default_value_uninstantiated: Option<String>,
    /// Default-argument text as it appears after template instantiation,
    /// used when the uninstantiated form isn't available.
    pub default_value_instantiated: Option<String>,
}

impl ParamDecl {
    #[must_use]
    pub fn default_value(&self) -> String {
        self.default_value_uninstantiated
            .clone()
            .or_else(|| self.default_value_instantiated.clone())
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateParamDeclKind {
    TypeParam,
    NonType,
    TemplateTemplate,
}

#[derive(Clone, Debug)]
pub struct TemplateParamDecl {
    pub kind: TemplateParamDeclKind,
    pub name: String,
    /// Rendered type for `NonType`, captured template-parameter-list source
    /// text for `TemplateTemplate`, empty for `TypeParam`.
    pub type_or_source_text: String,
    pub default_value: String,
    pub is_typename: bool,
    pub is_parameter_pack: bool,
}

#[derive(Clone, Debug)]
pub struct FunctionDecl {
    pub site: DeclSite,
    pub name: String,
    pub kind: FunctionKind,
    pub is_template_instantiation: bool,
    pub is_instantiated_member: bool,
    /// Set when this is a specialization of a function template; holds the
    /// primary template's USR for the specialization-collapse step.
    pub primary_template_usr: Option<String>,
    pub is_deleted: bool,
    pub is_deduction_guide: bool,
    /// Non-member function with `static` storage class (filtered out).
    pub is_non_member_static: bool,
    pub is_record_member: bool,
    pub return_type: TypeNode,
    pub params: Vec<ParamDecl>,
    pub template_params: Vec<TemplateParamDecl>,
    pub is_variadic: bool,
    pub is_virtual: bool,
    pub is_constexpr: bool,
    pub is_consteval: bool,
    pub is_inline: bool,
    pub is_no_discard: bool,
    /// Only unconditional `noexcept`/`noexcept(true)`; computed
    /// `noexcept(expr)` is treated as `false` (a known imprecision).
    pub is_no_except: bool,
    pub is_no_return: bool,
    pub is_const: bool,
    pub is_volatile: bool,
    pub is_restrict: bool,
    pub is_explicit: bool,
    pub ref_qualifier: RefQualifierDecl,
    pub storage_class: String,
    pub has_trailing_return: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefQualifierDecl {
    None,
    Lvalue,
    Rvalue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKindDecl {
    Class,
    Struct,
    Union,
}

#[derive(Clone, Debug)]
pub struct BaseSpecifier {
    pub r#type: TypeNode,
    pub access: Access,
    /// `true` when the access specifier was explicitly written; when
    /// `false`, `access` still reflects the language default but
    /// `updateRecordNames` contributes no keyword prefix for it.
    pub access_written: bool,
    pub is_std_namespace: bool,
}

#[derive(Clone, Debug)]
pub struct RecordDecl {
    pub site: DeclSite,
    /// Empty when the record has no written name (possibly recoverable
    /// via `typedef_for_anonymous`).
    pub name: String,
    pub typedef_for_anonymous: Option<String>,
    pub kind: RecordKindDecl,
    pub is_definition: bool,
    pub is_template_instantiation: bool,
    pub primary_template_usr: Option<String>,
    /// Rendered template arguments for a specialization, e.g. `["int"]`;
    /// empty for a primary template or non-template record.
    pub specialization_args: Vec<String>,
    /// A class-template specialization with no written type at all
    /// (filtered out).
    pub is_specialization_without_written_type: bool,
    pub template_params: Vec<TemplateParamDecl>,
    pub bases: Vec<BaseSpecifier>,
    pub children: Vec<DeclNode>,
}

#[derive(Clone, Debug)]
pub struct EnumDecl {
    pub site: DeclSite,
    pub name: String,
    pub kind: EnumKindDecl,
    pub members: Vec<(String, i64, String)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumKindDecl {
    Enum,
    EnumClass,
    EnumStruct,
}

#[derive(Clone, Debug, Default)]
pub struct NamespaceDecl {
    pub site: DeclSite,
    /// Empty for an anonymous namespace.
    pub name: String,
    pub children: Vec<DeclNode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AliasKind {
    UsingDecl,
    UsingShadowDecl,
    TypeAliasDecl,
}

/// The resolved target of a `UsingShadowDecl`, or one shadow of a
/// `UsingDecl`'s overload set.
#[derive(Clone, Debug)]
pub struct ShadowTarget {
    pub usr: String,
    pub fully_qualified_name: String,
}

#[derive(Clone, Debug)]
pub struct AliasDecl {
    pub site: DeclSite,
    pub name: String,
    pub kind: AliasKind,
    /// Declared inside a function or method body (filtered out).
    pub is_function_local: bool,
    pub is_record_member: bool,
    /// For `UsingShadowDecl`: the single shadowed declaration.
    pub shadow_target: Option<ShadowTarget>,
    /// For `UsingDecl`: every shadow it introduces, in declaration order;
    /// the *last* one is the target.
    pub shadows: Vec<ShadowTarget>,
    /// For `TypeAliasDecl`: the rendered underlying type.
    pub underlying_type: Option<TypeNode>,
}
