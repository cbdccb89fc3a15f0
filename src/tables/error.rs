//! Table loading-specific error types.

use std::path::PathBuf;

/// Errors that can occur while loading the result tables. All of them are
/// fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum TableLoadError {
    /// The table file does not exist
    #[error("Table file not found: {path}")]
    NotFound { path: PathBuf },

    /// The table file exists but could not be read
    #[error("Failed to read table {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The table file is not valid delimited text of the expected shape
    #[error("Malformed table {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}

impl TableLoadError {
    /// Return the path of the offending file.
    ///
    pub fn path(&self) -> &PathBuf {
        match self {
            TableLoadError::NotFound { path }
            | TableLoadError::Read { path, .. }
            | TableLoadError::Malformed { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_load_error_display() {
        let error = TableLoadError::NotFound {
            path: PathBuf::from("tables/login_agg_date.csv"),
        };
        assert!(error.to_string().contains("not found"));
        assert!(error.to_string().contains("login_agg_date.csv"));

        let error = TableLoadError::Malformed {
            path: PathBuf::from("x.csv"),
            message: "expected 7 columns, found 3".to_string(),
        };
        assert!(error.to_string().contains("Malformed"));
        assert!(error.to_string().contains("found 3"));
    }

    #[test]
    fn table_load_error_path() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = TableLoadError::Read {
            path: PathBuf::from("/data/t.csv"),
            source: io_error,
        };
        assert_eq!(error.path(), &PathBuf::from("/data/t.csv"));
        assert!(error.to_string().contains("denied"));
    }
}
