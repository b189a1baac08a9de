//! Deletes methods whose owning record was itself filtered out of the
//! index, so a method never outlives the record it belongs to.

use docidx_model::Index;

pub fn run(index: &Index) {
    let mut pruned = 0u64;
    for id in index.functions.ids() {
        let Some(f) = index.functions.get(id) else { continue };
        if !f.is_record_member {
            continue;
        }
        let owner_present = index.records.contains(f.base.parent_namespace_id);
        drop(f);
        if !owner_present {
            index.functions.remove(id);
            pruned += 1;
        }
    }
    if pruned > 0 {
        tracing::debug!(pruned, "pruneMethods dropped orphaned methods");
    }
}
