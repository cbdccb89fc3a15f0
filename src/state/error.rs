//! State management-specific error types.

use super::SessionId;

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// A value that does not name one of the four pages
    #[error("Invalid page: {0}")]
    InvalidPage(String),

    /// Session id not present in the arena
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_error_display() {
        let error = StateError::InvalidPage("index 9".to_string());
        assert!(error.to_string().contains("Invalid page"));
        assert!(error.to_string().contains("index 9"));

        let error = StateError::SessionNotFound(SessionId::from_raw(3));
        assert!(error.to_string().contains("Session not found"));
        assert!(error.to_string().contains('3'));
    }
}
