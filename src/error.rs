//! Top-level error type.
//!
//! Every subsystem keeps its own error enum next to its code; `AppError`
//! wraps them so `?` works across module boundaries.

pub use crate::config::ConfigError;
pub use crate::router::RouterError;
pub use crate::state::StateError;
pub use crate::tables::TableLoadError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A result table could not be loaded; fatal at startup
    #[error("Table load error: {0}")]
    TableLoad(#[from] TableLoadError),

    #[error("State error: {0}")]
    State(#[from] StateError),

    #[error("Router error: {0}")]
    Router(#[from] RouterError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raw mode or screen switching failed
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A global logger was already installed
    #[error("Logger error: {0}")]
    Logger(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Page, SessionId};
    use std::path::PathBuf;

    #[test]
    fn subsystem_errors_convert_with_prefix() {
        let cases: Vec<(AppError, &str)> = vec![
            (
                ConfigError::HomeDirectoryNotFound.into(),
                "Configuration error",
            ),
            (
                StateError::SessionNotFound(SessionId::from_raw(3)).into(),
                "State error: Session not found: #3",
            ),
            (
                RouterError::MissingPageHandler(Page::Overview).into(),
                "Router error: No handler registered for page: overview",
            ),
            (
                std::io::Error::new(std::io::ErrorKind::Other, "broken pipe").into(),
                "I/O error: broken pipe",
            ),
        ];
        for (error, expected) in cases {
            assert!(
                error.to_string().starts_with(expected),
                "{} does not start with {}",
                error,
                expected
            );
        }
    }

    #[test]
    fn table_errors_keep_the_path() {
        let error: AppError = TableLoadError::NotFound {
            path: PathBuf::from("tables/first_time_login.csv"),
        }
        .into();
        assert!(matches!(error, AppError::TableLoad(_)));
        assert!(error.to_string().contains("first_time_login.csv"));
    }

    #[test]
    fn invalid_page_is_a_state_error() {
        let error: AppError = Page::try_from(9usize).unwrap_err().into();
        assert!(matches!(error, AppError::State(StateError::InvalidPage(_))));
    }
}
