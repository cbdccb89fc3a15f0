//! Routing-specific error types.

use crate::state::Page;

/// Errors that can occur while dispatching a page render.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// No handler registered for the page
    #[error("No handler registered for page: {0}")]
    MissingPageHandler(Page),
}
