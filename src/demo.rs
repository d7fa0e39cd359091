// Pattern: Closure Capture Modes
//
// basic_lambda         captures nothing
// closure_example      captures an i32; i32 is Copy, so `move` copies it
// by_value_example     owns a clone of my_object  -> "Objekt kopiert"
// by_reference_example borrows my_object          -> no copy
//
// Locals drop in reverse declaration order when `run` returns, so the copy
// inside by_value_example is destroyed before my_object.

use crate::config::Settings;
use crate::error::{LifecycleError, Result};
use crate::journal::{Journal, LifecycleCounts};
use crate::tracked::TrackedObject;

/// One construction, one copy, two drops.
pub const EXPECTED_COUNTS: LifecycleCounts = LifecycleCounts::new(1, 1, 2);

pub fn run(journal: &Journal, settings: &Settings) {
    tracing::info!("lifecycle demo started");

    let greeting = settings.greeting.as_str();
    let basic_lambda = || journal.message(greeting);

    let my_number = settings.captured_number;
    let closure_example = move || journal.message(my_number.to_string());

    let my_object = TrackedObject::new(journal);
    let by_value_example = {
        let my_object = my_object.clone();
        move || my_object.print_something()
    };
    let by_reference_example = || my_object.print_something();

    basic_lambda();
    closure_example();
    by_value_example();
    by_reference_example();

    tracing::info!("closures invoked, leaving scope");
}

/// Checks the counters once `run` has returned.
pub fn verify(journal: &Journal) -> Result<()> {
    let actual = journal.counts();
    if actual != EXPECTED_COUNTS {
        return Err(LifecycleError::Unbalanced {
            expected: EXPECTED_COUNTS,
            actual,
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
