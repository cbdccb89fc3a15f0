//! Event handling module.
//!
//! Terminal key presses are polled on a helper thread and applied to the
//! session state on the main thread.

pub mod terminal;
