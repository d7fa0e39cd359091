// Pattern: Observable Construction, Copy and Drop
//
// Rust never copies a non-Copy value behind your back. The "copy constructor"
// is `Clone::clone`, and it only runs where `.clone()` is written. `Drop` runs
// exactly once per value when its owner goes out of scope.

use crate::journal::{Event, Journal};

#[derive(Debug)]
pub struct TrackedObject {
    id: u64,
    journal: Journal,
}

impl TrackedObject {
    pub fn new(journal: &Journal) -> Self {
        let id = journal.next_id();
        journal.record(Event::Created { id });
        TrackedObject {
            id,
            journal: journal.clone(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Takes `&self`: printing never changes the object.
    pub fn print_something(&self) {
        self.journal.record(Event::Printed { id: self.id });
    }
}

impl Clone for TrackedObject {
    fn clone(&self) -> Self {
        let id = self.journal.next_id();
        self.journal.record(Event::Copied {
            source: self.id,
            id,
        });
        TrackedObject {
            id,
            journal: self.journal.clone(),
        }
    }
}

impl Drop for TrackedObject {
    fn drop(&mut self) {
        self.journal.record(Event::Destroyed { id: self.id });
    }
}

// ============================================================================
// Tests
// ============================================================================
