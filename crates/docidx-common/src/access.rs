//! Visibility/access specifiers for documented symbols.

use serde::{Deserialize, Serialize};

/// Access specifier of a declaration, as written at its declaration site.
///
/// `None` covers languages or contexts with no access keyword (free
/// functions, namespace members, enumerators): it is distinct from
/// `Public` so that `ignorePrivateMembers` filtering and member-list
/// rendering can tell "no access concept applies here" from "explicitly
/// public".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Access {
    Public,
    Protected,
    Private,
    None,
}

impl Access {
    #[must_use]
    pub const fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }

    /// The prefix `updateRecordNames` writes before a base-class name,
    /// empty when no access keyword was written at all.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::None => "",
        }
    }
}

impl Default for Access {
    fn default() -> Self {
        Self::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_is_private() {
        assert!(Access::Private.is_private());
        assert!(!Access::Public.is_private());
        assert!(!Access::None.is_private());
    }

    #[test]
    fn keyword_none_is_empty() {
        assert_eq!(Access::None.keyword(), "");
        assert_eq!(Access::Public.keyword(), "public");
    }
}
