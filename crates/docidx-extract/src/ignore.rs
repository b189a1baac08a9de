//! `IgnoreFilter`: the checks common to every declaration kind.
//! Kind-specific edge cases (deleted functions, deduction guides, …) live
//! alongside each extractor, since they depend on fields only that kind
//! has.

use docidx_ast::decl::DeclSite;
use docidx_common::Access;

use crate::context::ExtractContext;

/// The checks common to all five extractors: invalid/system-header
/// source range, implicit declarations, anonymous-namespace containment,
/// ignored path, ignored namespace, and private-member filtering.
#[must_use]
pub fn is_site_ignored(site: &DeclSite, ctx: &ExtractContext<'_>) -> bool {
    if site.is_invalid_range || site.is_system_header || site.is_implicit {
        return true;
    }
    if ctx.in_anonymous_namespace {
        return true;
    }
    let rel_file = ctx.config.relative_to_root(&site.source_file);
    let rel_str = rel_file.to_string_lossy();
    if ctx.config.is_path_ignored(&rel_str) {
        return true;
    }
    if ctx.is_any_enclosing_namespace_ignored() {
        return true;
    }
    if ctx.config.ignore_private_members && site.access == Access::Private {
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use docidx_common::Config;
    use std::path::PathBuf;

    fn config() -> Config {
        Config {
            compile_commands_json: PathBuf::from("compile_commands.json"),
            root_dir: PathBuf::from("/proj"),
            include_paths: vec![],
            ignore_paths: vec!["third_party/".to_string()],
            ignore_namespaces: vec!["detail".to_string()],
            ignore_private_members: true,
            debug_limit_num_indexed_files: None,
        }
    }

    fn site(file: &str) -> DeclSite {
        DeclSite {
            source_file: PathBuf::from(file),
            ..DeclSite::default()
        }
    }

    #[test]
    fn invalid_range_is_ignored() {
        let cfg = config();
        let ctx = ExtractContext::root(&cfg);
        let mut s = site("/proj/src/bar.h");
        s.is_invalid_range = true;
        assert!(is_site_ignored(&s, &ctx));
    }

    #[test]
    fn system_header_is_ignored() {
        let cfg = config();
        let ctx = ExtractContext::root(&cfg);
        let mut s = site("/proj/src/bar.h");
        s.is_system_header = true;
        assert!(is_site_ignored(&s, &ctx));
    }

    #[test]
    fn ignored_path_substring_matches() {
        let cfg = config();
        let ctx = ExtractContext::root(&cfg);
        assert!(is_site_ignored(&site("/proj/third_party/foo.h"), &ctx));
        assert!(!is_site_ignored(&site("/proj/src/bar.h"), &ctx));
    }

    #[test]
    fn ignored_namespace_propagates_to_children() {
        let cfg = config();
        let root = ExtractContext::root(&cfg);
        let ns = root.enter_namespace(docidx_model::SymbolId::from_usr("c:@N@detail"), "detail");
        assert!(is_site_ignored(&site("/proj/src/bar.h"), &ns));
    }

    #[test]
    fn private_member_ignored_when_configured() {
        let cfg = config();
        let ctx = ExtractContext::root(&cfg);
        let mut s = site("/proj/src/bar.h");
        s.access = Access::Private;
        assert!(is_site_ignored(&s, &ctx));
    }

    #[test]
    fn anonymous_namespace_ignored_recursively() {
        let cfg = config();
        let root = ExtractContext::root(&cfg);
        let anon = root.enter_namespace(docidx_model::SymbolId::NULL, "");
        let nested = anon.enter_namespace(docidx_model::SymbolId::from_usr("c:@N@inner"), "inner");
        assert!(is_site_ignored(&site("/proj/src/bar.h"), &nested));
    }
}
