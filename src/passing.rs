// Pattern: Passing Arguments by Value vs by Reference
//
// take_by_value(obj)       the callee owns obj and drops it on return
// take_by_reference(&obj)  the callee only borrows; no copy, no drop
//
// Passing by value moves. To keep using the original, the caller hands over
// an explicit clone, which is where the copy shows up in the trace.

use crate::journal::{Journal, LifecycleCounts};
use crate::tracked::TrackedObject;

pub const EXPECTED_COUNTS: LifecycleCounts = LifecycleCounts::new(1, 1, 2);

pub fn take_by_value(obj: TrackedObject) {
    obj.print_something();
} // obj dropped here

pub fn take_by_reference(obj: &TrackedObject) {
    obj.print_something();
}

pub fn run(journal: &Journal) {
    tracing::info!("parameter passing demo started");

    let my_object = TrackedObject::new(journal);
    take_by_value(my_object.clone());
    take_by_reference(&my_object);

    tracing::info!("parameter passing demo finished");
}
