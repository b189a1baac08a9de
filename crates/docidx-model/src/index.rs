//! `Index` — the five `Database`s that together make up the finished catalog.

use crate::database::Database;
use crate::symbol::{AliasSymbol, EnumSymbol, FunctionSymbol, NamespaceSymbol, RecordSymbol};

/// The self-consistent, cross-referenced catalog of documentable symbols.
///
/// Built by fanning extraction out across translation units into these
/// five shared `Database`s, then rewritten in place by the post-passes.
#[derive(Default)]
pub struct Index {
    pub functions: Database<FunctionSymbol>,
    pub records: Database<RecordSymbol>,
    pub enums: Database<EnumSymbol>,
    pub namespaces: Database<NamespaceSymbol>,
    pub aliases: Database<AliasSymbol>,
}

impl Index {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One line per database: `"<Name>: <numMatches> matches, <len> indexed, <kib> KiB total size"`.
    ///
    /// The size estimate is a rough `size_of::<T>() * len` approximation —
    /// good enough for a diagnostic, not a precise allocator accounting.
    #[must_use]
    pub fn stats_lines(&self) -> Vec<String> {
        vec![
            stats_line("Function", &self.functions),
            stats_line("Record", &self.records),
            stats_line("Enum", &self.enums),
            stats_line("Namespace", &self.namespaces),
            stats_line("Alias", &self.aliases),
        ]
    }
}

fn stats_line<T>(name: &str, db: &Database<T>) -> String {
    let kib = (std::mem::size_of::<T>() * db.len()) as f64 / 1024.0;
    format!(
        "{name}: {} matches, {} indexed, {:.1} KiB total size",
        db.num_matches(),
        db.len(),
        kib
    )
}
