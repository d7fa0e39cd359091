//! # Lambda Lifecycle
//!
//! Runnable examples showing when a value is constructed, copied and dropped,
//! and how closures capture their environment by value or by reference.
//!
//! ## Patterns Covered
//!
//! 1. **Closure Capture Modes** - no capture, copied integer, cloned object, borrowed object
//! 2. **Parameter Passing** - owning vs borrowing function arguments
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin lambda_lifecycle
//! cargo run --bin p2_parameter_passing
//!
//! # lifecycle events with instance ids on stderr
//! RUST_LOG=lambda_lifecycle=debug cargo run --bin lambda_lifecycle
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod journal;
pub mod logging;
pub mod passing;
pub mod tracked;

pub use config::Settings;
pub use error::{LifecycleError, Result};
pub use journal::{Event, Journal, LifecycleCounts};
pub use tracked::TrackedObject;
