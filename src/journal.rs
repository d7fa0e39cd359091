// Pattern: Shared Output Sink with Rc + RefCell
//
// Every tracked object holds a cheap handle to the same journal. The journal
// renders each lifecycle event as one line, optionally echoes it to stdout,
// and keeps counters so the lifecycle invariant can be checked afterwards.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

pub const CREATED_LINE: &str = "Object erstellt";
pub const COPIED_LINE: &str = "Objekt kopiert";
pub const PRINTED_LINE: &str = "Hello object";
pub const DESTROYED_LINE: &str = "Objekt zerstoert";

// ============================================================================
// Events
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Created { id: u64 },
    Copied { source: u64, id: u64 },
    Printed { id: u64 },
    Destroyed { id: u64 },
    /// Closure output that does not belong to a tracked object.
    Message(String),
}

impl Event {
    pub fn line(&self) -> &str {
        match self {
            Event::Created { .. } => CREATED_LINE,
            Event::Copied { .. } => COPIED_LINE,
            Event::Printed { .. } => PRINTED_LINE,
            Event::Destroyed { .. } => DESTROYED_LINE,
            Event::Message(text) => text,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.line())
    }
}

// ============================================================================
// Counters
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleCounts {
    pub created: usize,
    pub copied: usize,
    pub destroyed: usize,
}

impl LifecycleCounts {
    pub const fn new(created: usize, copied: usize, destroyed: usize) -> Self {
        LifecycleCounts { created, copied, destroyed }
    }

    /// Instances still alive: every construction and copy minus every drop.
    pub fn live(&self) -> usize {
        (self.created + self.copied).saturating_sub(self.destroyed)
    }
}

impl fmt::Display for LifecycleCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "created={}, copied={}, destroyed={}",
            self.created, self.copied, self.destroyed
        )
    }
}

// ============================================================================
// Journal
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Echo {
    Stdout,
    Silent,
}

#[derive(Debug)]
struct Inner {
    echo: Echo,
    events: RefCell<Vec<Event>>,
    counts: Cell<LifecycleCounts>,
    last_id: Cell<u64>,
}

/// Cloning a `Journal` clones the handle, not the recorded events.
#[derive(Debug, Clone)]
pub struct Journal {
    inner: Rc<Inner>,
}

impl Journal {
    fn with_echo(echo: Echo) -> Self {
        Journal {
            inner: Rc::new(Inner {
                echo,
                events: RefCell::new(Vec::new()),
                counts: Cell::new(LifecycleCounts::default()),
                last_id: Cell::new(0),
            }),
        }
    }

    /// Writes every line to stdout as soon as it is recorded.
    pub fn stdout() -> Self {
        Self::with_echo(Echo::Stdout)
    }

    /// Keeps everything in memory.
    pub fn recording() -> Self {
        Self::with_echo(Echo::Silent)
    }

    /// Hands out instance ids starting at 1.
    pub fn next_id(&self) -> u64 {
        let id = self.inner.last_id.get() + 1;
        self.inner.last_id.set(id);
        id
    }

    pub fn record(&self, event: Event) {
        let mut counts = self.inner.counts.get();
        match &event {
            Event::Created { id } => {
                counts.created += 1;
                tracing::debug!(id, "tracked object constructed");
            }
            Event::Copied { source, id } => {
                counts.copied += 1;
                tracing::debug!(source, id, "tracked object copied");
            }
            Event::Printed { id } => tracing::debug!(id, "print_something called"),
            Event::Destroyed { id } => {
                counts.destroyed += 1;
                tracing::debug!(id, "tracked object dropped");
            }
            Event::Message(text) => tracing::trace!(%text, "closure output"),
        }
        self.inner.counts.set(counts);

        if self.inner.echo == Echo::Stdout {
            // Panics if stdout is gone; Drop has nowhere to return an error to.
            println!("{}", event.line());
        }

        self.inner.events.borrow_mut().push(event);
    }

    pub fn message(&self, text: impl Into<String>) {
        self.record(Event::Message(text.into()));
    }

    pub fn events(&self) -> Vec<Event> {
        self.inner.events.borrow().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner
            .events
            .borrow()
            .iter()
            .map(|event| event.line().to_string())
            .collect()
    }

    /// All lines, each terminated by `\n`, exactly as they appear on stdout.
    pub fn transcript(&self) -> String {
        self.inner
            .events
            .borrow()
            .iter()
            .map(|event| format!("{}\n", event.line()))
            .collect()
    }

    pub fn counts(&self) -> LifecycleCounts {
        self.inner.counts.get()
    }
}

// ============================================================================
// Tests
// ============================================================================
