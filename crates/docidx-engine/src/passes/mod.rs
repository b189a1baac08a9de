//! Sequential, single-threaded passes over the merged index, run strictly
//! after every translation unit has drained. The order is fixed: namespace
//! child-lists must exist before prototypes consume them, and type-ref
//! pruning must come last because upstream passes may resolve new ids.

pub mod prune_methods;
pub mod resolve_namespaces;
pub mod update_member_functions;
pub mod update_record_names;

pub mod prune_type_refs;

use docidx_model::Index;

pub fn run_all(index: &Index) {
    prune_methods::run(index);
    resolve_namespaces::run(index);
    update_record_names::run(index);
    update_member_functions::run(index);
    prune_type_refs::run(index);
}
