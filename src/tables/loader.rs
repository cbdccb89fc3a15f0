use super::cell::{infer_dtype, Cell};
use super::error::TableLoadError;
use super::rows::{FirstLoginRow, LoginAggregateRow, Table, VALUE_COLUMNS};
use log::*;
use std::fs::File;
use std::io;
use std::path::Path;

/// Raw table contents before any typing is applied.
///
struct RawTable {
    key_header: String,
    headers: [String; VALUE_COLUMNS],
    keys: Vec<String>,
    columns: [Vec<String>; VALUE_COLUMNS],
}

fn malformed(path: &Path, message: impl Into<String>) -> TableLoadError {
    TableLoadError::Malformed {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

fn map_csv_error(path: &Path, err: csv::Error) -> TableLoadError {
    let line = err.position().map(|position| position.line());
    match err.into_kind() {
        csv::ErrorKind::Io(source) => TableLoadError::Read {
            path: path.to_path_buf(),
            source,
        },
        kind => {
            let message = match line {
                Some(line) => format!("line {}: {:?}", line, kind),
                None => format!("{:?}", kind),
            };
            malformed(path, message)
        }
    }
}

fn open(path: &Path) -> Result<File, TableLoadError> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TableLoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => TableLoadError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// Read a comma-delimited file with a header row into columns. The first
/// column is split off as the row key. Values are kept verbatim.
///
fn read_raw(path: &Path) -> Result<RawTable, TableLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(open(path)?);

    let header_record = reader
        .headers()
        .map_err(|e| map_csv_error(path, e))?
        .clone();
    if header_record.is_empty() {
        return Err(malformed(path, "missing header row"));
    }
    if header_record.len() != VALUE_COLUMNS + 1 {
        return Err(malformed(
            path,
            format!(
                "expected {} columns, found {}",
                VALUE_COLUMNS + 1,
                header_record.len()
            ),
        ));
    }

    let key_header = header_record[0].to_string();
    let headers: [String; VALUE_COLUMNS] =
        std::array::from_fn(|i| header_record[i + 1].to_string());

    let mut keys = vec![];
    let mut columns: [Vec<String>; VALUE_COLUMNS] = Default::default();
    for record in reader.records() {
        let record = record.map_err(|e| map_csv_error(path, e))?;
        keys.push(record[0].to_string());
        for (column, value) in columns.iter_mut().zip(record.iter().skip(1)) {
            column.push(value.to_string());
        }
    }

    Ok(RawTable {
        key_header,
        headers,
        keys,
        columns,
    })
}

/// Load the date-aggregated login table. Each value column is typed by
/// inference over all of its values and NA-like values become missing.
///
pub fn load_login_aggregate(path: &Path) -> Result<Table<LoginAggregateRow>, TableLoadError> {
    debug!("Loading login aggregate table from {}...", path.display());
    let RawTable {
        key_header,
        headers,
        keys,
        columns,
    } = read_raw(path)?;

    let dtypes: [_; VALUE_COLUMNS] =
        std::array::from_fn(|c| infer_dtype(columns[c].iter().map(String::as_str)));
    debug!("Inferred column types {:?} for {}", dtypes, path.display());

    let rows = keys
        .into_iter()
        .enumerate()
        .map(|(i, key)| {
            let cells: [Cell; VALUE_COLUMNS] =
                std::array::from_fn(|c| Cell::parse(&columns[c][i], dtypes[c]));
            LoginAggregateRow::from_cells(key, cells)
        })
        .collect();

    Ok(Table {
        key_header,
        headers,
        rows,
    })
}

/// Load the per-user first-login table. Every value is kept as text and
/// empty fields stay empty strings.
///
pub fn load_first_time_login(path: &Path) -> Result<Table<FirstLoginRow>, TableLoadError> {
    debug!("Loading first time login table from {}...", path.display());
    let RawTable {
        key_header,
        headers,
        keys,
        mut columns,
    } = read_raw(path)?;

    let rows = keys
        .into_iter()
        .enumerate()
        .map(|(i, key)| {
            let fields: [String; VALUE_COLUMNS] =
                std::array::from_fn(|c| std::mem::take(&mut columns[c][i]));
            FirstLoginRow::from_fields(key, fields)
        })
        .collect();

    Ok(Table {
        key_header,
        headers,
        rows,
    })
}
