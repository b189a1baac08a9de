//! `SymbolId` — stable, content-addressed identity for any declaration.
//!
//! `SymbolId = hash(canonical_usr(decl))`, where `canonical_usr` is
//! the front-end's stable cross-TU identifier for the declaration *after*
//! specialized template declarations have been reduced to their primary
//! template. That reduction happens in `docidx-extract`, upstream of this
//! type; `SymbolId` itself only knows how to hash a USR string.

use std::fmt;

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Opaque 128-bit identity for a documented declaration.
///
/// Two distinct 64-bit hash passes over the same USR (with different
/// salts) are combined into one `u128` so that a single cheap hash
/// function gives us the collision resistance a 128-bit identifier is
/// meant to provide, without fabricating a dependency on a particular
/// crypto-hash crate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(u128);

impl SymbolId {
    /// The null identity: "unresolved". Never produced by `from_usr`.
    pub const NULL: Self = Self(0);

    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Hash a canonical USR string into a `SymbolId`.
    ///
    /// Deterministic across runs and across translation units: the same
    /// USR always yields the same id, which is exactly the cross-TU
    /// stability every other module relies on.
    #[must_use]
    pub fn from_usr(usr: &str) -> Self {
        let low = hash_with_salt(usr, 0x9E37_79B9_7F4A_7C15);
        let high = hash_with_salt(usr, 0xC2B2_AE3D_27D4_EB4F);
        let id = (u128::from(high) << 64) | u128::from(low);
        if id == 0 {
            // Vanishingly unlikely, but NULL must stay reserved for "unresolved".
            Self(1)
        } else {
            Self(id)
        }
    }
}

fn hash_with_salt(s: &str, salt: u64) -> u64 {
    let mut hasher = FxHasher::default();
    salt.hash(&mut hasher);
    s.hash(&mut hasher);
    hasher.finish()
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({:#034x})", self.0)
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#034x}", self.0)
    }
}

impl Default for SymbolId {
    fn default() -> Self {
        Self::NULL
    }
}
