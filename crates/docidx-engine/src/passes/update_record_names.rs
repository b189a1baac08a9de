//! Appends each record's inheritance list to `proto` once every base is
//! certainly resolvable (i.e. after all translation units have indexed).

use docidx_model::Index;

pub fn run(index: &Index) {
    for id in index.records.ids() {
        let Some(mut record) = index.records.get_mut(id) else { continue };
        if record.base_records.is_empty() {
            continue;
        }
        let suffix = docidx_extract::records::render_inheritance_suffix(&record.base_records);
        record.proto.push_str(&suffix);
    }
}
