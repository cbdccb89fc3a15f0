use super::cell::Cell;
use std::borrow::Cow;

/// Number of value columns in both tables, row key excluded.
///
pub const VALUE_COLUMNS: usize = 6;

/// Common access to a row for display.
///
pub trait Row {
    fn key(&self) -> &str;
    fn values(&self) -> [Cow<'_, str>; VALUE_COLUMNS];
}

/// A row of the date-aggregated login table.
///
#[derive(Debug, PartialEq, Clone)]
pub struct LoginAggregateRow {
    pub key: String,
    pub date: Cell,
    pub user_id: Cell,
    pub login_count: Cell,
    pub continent: Cell,
    pub country: Cell,
    pub os: Cell,
}

impl LoginAggregateRow {
    pub(crate) fn from_cells(key: String, cells: [Cell; VALUE_COLUMNS]) -> Self {
        let [date, user_id, login_count, continent, country, os] = cells;
        LoginAggregateRow {
            key,
            date,
            user_id,
            login_count,
            continent,
            country,
            os,
        }
    }
}

impl Row for LoginAggregateRow {
    fn key(&self) -> &str {
        &self.key
    }

    fn values(&self) -> [Cow<'_, str>; VALUE_COLUMNS] {
        [
            &self.date,
            &self.user_id,
            &self.login_count,
            &self.continent,
            &self.country,
            &self.os,
        ]
        .map(|cell| match cell {
            Cell::Text(text) => Cow::Borrowed(text.as_str()),
            other => Cow::Owned(other.to_string()),
        })
    }
}

/// A row of the per-user first-login table. Every field is kept as the exact
/// text found in the file, including empty strings.
///
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct FirstLoginRow {
    pub key: String,
    pub user_id: String,
    pub total_logins: String,
    pub first_login: String,
    pub continent: String,
    pub country: String,
    pub os: String,
}

impl FirstLoginRow {
    pub(crate) fn from_fields(key: String, fields: [String; VALUE_COLUMNS]) -> Self {
        let [user_id, total_logins, first_login, continent, country, os] = fields;
        FirstLoginRow {
            key,
            user_id,
            total_logins,
            first_login,
            continent,
            country,
            os,
        }
    }
}

impl Row for FirstLoginRow {
    fn key(&self) -> &str {
        &self.key
    }

    fn values(&self) -> [Cow<'_, str>; VALUE_COLUMNS] {
        [
            &self.user_id,
            &self.total_logins,
            &self.first_login,
            &self.continent,
            &self.country,
            &self.os,
        ]
        .map(|field| Cow::Borrowed(field.as_str()))
    }
}

/// A loaded table: the row key header, the value column headers as they
/// appear in the file, and the rows.
///
#[derive(Debug, PartialEq, Clone)]
pub struct Table<R> {
    pub key_header: String,
    pub headers: [String; VALUE_COLUMNS],
    pub rows: Vec<R>,
}

impl<R: Row> Table<R> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Return the full header line, row key first.
    ///
    pub fn header_line(&self) -> Vec<&str> {
        std::iter::once(self.key_header.as_str())
            .chain(self.headers.iter().map(String::as_str))
            .collect()
    }

    /// Return every row as display strings, row key first.
    ///
    pub fn display_rows(&self) -> Vec<Vec<Cow<'_, str>>> {
        self.rows
            .iter()
            .map(|row| {
                std::iter::once(Cow::Borrowed(row.key()))
                    .chain(row.values())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_login_table() -> Table<FirstLoginRow> {
        Table {
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
            rows: vec![FirstLoginRow::from_fields(
                "0".to_string(),
                ["007", "3", "2024-01-01T00:00:00", "", "BR", "Android"].map(String::from),
            )],
        }
    }

    #[test]
    fn header_line_starts_with_key() {
        let table = first_login_table();
        assert_eq!(
            table.header_line(),
            vec!["", "user_id", "total_logins", "first_login", "continent", "country", "os"]
        );
    }

    #[test]
    fn display_rows_keep_empty_text() {
        let table = first_login_table();
        let rows = table.display_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "0");
        assert_eq!(rows[0][1], "007");
        assert_eq!(rows[0][4], "");
    }

    #[test]
    fn login_aggregate_values_format_cells() {
        let row = LoginAggregateRow::from_cells(
            "1".to_string(),
            [
                Cell::Text("2024-01-01".to_string()),
                Cell::Int(42),
                Cell::Float(3.0),
                Cell::Missing,
                Cell::Text("BR".to_string()),
                Cell::Text("iOS".to_string()),
            ],
        );
        let values = row.values();
        assert_eq!(values[1], "42");
        assert_eq!(values[2], "3.0");
        assert_eq!(values[3], "None");
        assert_eq!(row.key(), "1");
    }
}
