//! folio application runtime: terminal lifecycle, input thread, tick worker
//! and the event loop.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::run;
