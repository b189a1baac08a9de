//! SymbolId canonicalization.
//!
//! `getNonSpecializedVersionOfDecl`: a specialized template declaration
//! reduces to its primary template *before* hashing, so
//! `Vec<int>`/`Vec<float>` and `Vec` collapse onto one id. The front-end
//! facade already resolves "what is my primary template" into
//! `primary_template_usr`; this function just picks which USR to hash.

use docidx_model::SymbolId;

#[must_use]
pub fn canonical_symbol_id(usr: &str, primary_template_usr: Option<&str>) -> SymbolId {
    SymbolId::from_usr(primary_template_usr.unwrap_or(usr))
}
