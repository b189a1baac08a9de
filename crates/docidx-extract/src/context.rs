//! Traversal context threaded through the recursive TU walk: everything
//! `IgnoreFilter` and the extractors need to know about a declaration's
//! surroundings that the declaration itself doesn't carry.

use docidx_common::Config;
use docidx_model::SymbolId;

/// Where a function/record/enum/alias currently being visited sits in the
/// declaration tree.
#[derive(Clone)]
pub struct ExtractContext<'a> {
    pub config: &'a Config,
    /// `SymbolId` this declaration's `parentNamespaceID` field should hold:
    /// the enclosing namespace's id at namespace scope, or the enclosing
    /// record's id for a direct member.
    pub owner_id: SymbolId,
    /// Names of every enclosing *named* namespace, outermost first, used
    /// for `ignore_namespaces` matching.
    pub enclosing_namespace_names: Vec<String>,
    /// `true` if any enclosing namespace (however deep) is anonymous.
    pub in_anonymous_namespace: bool,
    /// Fully-qualified name prefix to prepend when rendering a nested
    /// record's name (`ParentName::`) or a symbol's
    /// `fullyQualifiedName`.
    pub qualified_prefix: String,
    /// Number of `enter_namespace`/`enter_record` steps taken to reach this
    /// context from the root, capped by `MAX_NAMESPACE_WALK_DEPTH`.
    pub depth: usize,
}

impl<'a> ExtractContext<'a> {
    #[must_use]
    pub fn root(config: &'a Config) -> Self {
        Self {
            config,
            owner_id: SymbolId::NULL,
            enclosing_namespace_names: Vec::new(),
            in_anonymous_namespace: false,
            qualified_prefix: String::new(),
            depth: 0,
        }
    }

    #[must_use]
    pub fn enter_namespace(&self, id: SymbolId, name: &str) -> Self {
        let mut names = self.enclosing_namespace_names.clone();
        let anonymous = name.is_empty();
        if !anonymous {
            names.push(name.to_string());
        }
        let prefix = if self.qualified_prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}::{}", self.qualified_prefix, name)
        };
        Self {
            config: self.config,
            owner_id: id,
            enclosing_namespace_names: names,
            in_anonymous_namespace: self.in_anonymous_namespace || anonymous,
            qualified_prefix: prefix,
            depth: self.depth + 1,
        }
    }

    #[must_use]
    pub fn enter_record(&self, id: SymbolId, name: &str) -> Self {
        let prefix = if self.qualified_prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}::{}", self.qualified_prefix, name)
        };
        Self {
            config: self.config,
            owner_id: id,
            enclosing_namespace_names: self.enclosing_namespace_names.clone(),
            in_anonymous_namespace: self.in_anonymous_namespace,
            qualified_prefix: prefix,
            depth: self.depth + 1,
        }
    }

    /// `true` once `depth` has reached `MAX_NAMESPACE_WALK_DEPTH`; the walk
    /// should stop descending into this context's children.
    #[must_use]
    pub fn depth_exceeded(&self) -> bool {
        self.depth >= docidx_common::limits::MAX_NAMESPACE_WALK_DEPTH
    }

    #[must_use]
    pub fn is_any_enclosing_namespace_ignored(&self) -> bool {
        self.enclosing_namespace_names
            .iter()
            .any(|n| self.config.is_namespace_ignored(n))
    }

    #[must_use]
    pub fn qualify(&self, name: &str) -> String {
        if self.qualified_prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}::{}", self.qualified_prefix, name)
        }
    }
}
