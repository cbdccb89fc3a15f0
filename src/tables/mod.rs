//! Result table loading module.
//!
//! This module reads the two tables produced by the ETL pipeline:
//! - `login_agg_date.csv`: logins aggregated per user and day, typed by
//!   column inference
//! - `first_time_login.csv`: first login per user, every value kept as text
//!
//! Both are loaded once at startup and shared read-only afterwards.

mod cell;
mod error;
mod loader;
mod rows;

pub use cell::{infer_dtype, Cell, Dtype};
pub use error::TableLoadError;
pub use loader::{load_first_time_login, load_login_aggregate};
pub use rows::{FirstLoginRow, LoginAggregateRow, Row, Table, VALUE_COLUMNS};

use log::*;
use std::path::Path;

pub const LOGIN_AGGREGATE_FILE: &str = "login_agg_date.csv";
pub const FIRST_TIME_LOGIN_FILE: &str = "first_time_login.csv";

/// Specifying which of the loaded tables a page refers to.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TableKind {
    LoginAggregate,
    FirstTimeLogin,
}

/// Both result tables.
///
#[derive(Debug, PartialEq, Clone)]
pub struct Tables {
    pub login_aggregate: Table<LoginAggregateRow>,
    pub first_time_login: Table<FirstLoginRow>,
}

impl Tables {
    /// Load both tables from the given directory. Any failure is returned
    /// as is; there is no partially loaded state.
    ///
    pub fn load(dir: &Path) -> Result<Tables, TableLoadError> {
        let login_aggregate = load_login_aggregate(&dir.join(LOGIN_AGGREGATE_FILE))?;
        info!(
            "Loaded {} rows from {}",
            login_aggregate.len(),
            LOGIN_AGGREGATE_FILE
        );
        let first_time_login = load_first_time_login(&dir.join(FIRST_TIME_LOGIN_FILE))?;
        info!(
            "Loaded {} rows from {}",
            first_time_login.len(),
            FIRST_TIME_LOGIN_FILE
        );
        Ok(Tables {
            login_aggregate,
            first_time_login,
        })
    }

    /// Return the header line and display rows of the requested table.
    ///
    pub fn grid(&self, kind: TableKind) -> (Vec<&str>, Vec<Vec<std::borrow::Cow<'_, str>>>) {
        match kind {
            TableKind::LoginAggregate => (
                self.login_aggregate.header_line(),
                self.login_aggregate.display_rows(),
            ),
            TableKind::FirstTimeLogin => (
                self.first_time_login.header_line(),
                self.first_time_login.display_rows(),
            ),
        }
    }

    pub fn row_count(&self, kind: TableKind) -> usize {
        match kind {
            TableKind::LoginAggregate => self.login_aggregate.len(),
            TableKind::FirstTimeLogin => self.first_time_login.len(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Small in-memory tables for tests that do not touch the disk.
    ///
    pub fn tables() -> Tables {
        Tables {
            login_aggregate: Table {
                key_header: String::new(),
                headers: ["date", "user_id", "login_count", "continent", "country", "os"]
                    .map(String::from),
                rows: vec![LoginAggregateRow {
                    key: "0".to_string(),
                    date: Cell::Text("2024-01-01".to_string()),
                    user_id: Cell::Int(7),
                    login_count: Cell::Int(3),
                    continent: Cell::Text("South America".to_string()),
                    country: Cell::Text("BR".to_string()),
                    os: Cell::Text("Android".to_string()),
                }],
            },
            first_time_login: Table {
                key_header: String::new(),
                headers: [
                    "user_id",
                    "total_logins",
                    "first_login",
                    "continent",
                    "country",
                    "os",
                ]
                .map(String::from),
                rows: vec![FirstLoginRow {
                    key: "0".to_string(),
                    user_id: "007".to_string(),
                    total_logins: "3".to_string(),
                    first_login: "2024-01-01T00:00:00".to_string(),
                    continent: String::new(),
                    country: "BR".to_string(),
                    os: "Android".to_string(),
                }],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn bundled_tables_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tables")
    }

    #[test]
    fn load_bundled_tables() {
        let tables = Tables::load(&bundled_tables_dir()).unwrap();
        assert!(!tables.login_aggregate.is_empty());
        assert!(!tables.first_time_login.is_empty());
        assert_eq!(tables.login_aggregate.headers[0], "date");
        assert_eq!(tables.first_time_login.headers[0], "user_id");
    }

    #[test]
    fn load_bundled_tables_twice_is_identical() {
        let first = Tables::load(&bundled_tables_dir()).unwrap();
        let second = Tables::load(&bundled_tables_dir()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn load_fails_when_directory_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Tables::load(dir.path()).unwrap_err();
        assert!(err.path().ends_with(LOGIN_AGGREGATE_FILE));
    }

    #[test]
    fn grid_and_row_count() {
        let tables = fixtures::tables();
        let (header, rows) = tables.grid(TableKind::FirstTimeLogin);
        assert_eq!(header.len(), VALUE_COLUMNS + 1);
        assert_eq!(rows[0][1], "007");
        assert_eq!(tables.row_count(TableKind::LoginAggregate), 1);
    }
}
