//! Typed cells and column type inference for the aggregated login table.

use std::fmt;

/// Raw values that count as missing when NA interpretation is enabled.
///
const NA_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const TRUE_VALUES: [&str; 3] = ["True", "TRUE", "true"];
const FALSE_VALUES: [&str; 3] = ["False", "FALSE", "false"];

/// Inferred type of a whole column.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Dtype {
    Int,
    Float,
    Bool,
    Text,
}

/// A single value of an inferred column.
///
#[derive(Debug, PartialEq, Clone)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Missing,
}

pub fn is_missing(raw: &str) -> bool {
    NA_VALUES.contains(&raw)
}

fn parse_bool(raw: &str) -> Option<bool> {
    if TRUE_VALUES.contains(&raw) {
        Some(true)
    } else if FALSE_VALUES.contains(&raw) {
        Some(false)
    } else {
        None
    }
}

/// Infer the type of a column from all of its raw values.
///
/// Integers only survive when nothing is missing; a missing value promotes
/// an integer column to float. A column with no present values is float.
///
pub fn infer_dtype<'a, I>(values: I) -> Dtype
where
    I: IntoIterator<Item = &'a str>,
{
    let mut any_missing = false;
    let mut any_present = false;
    let mut all_int = true;
    let mut all_float = true;
    let mut all_bool = true;

    for raw in values {
        if is_missing(raw) {
            any_missing = true;
            continue;
        }
        any_present = true;
        all_int &= raw.parse::<i64>().is_ok();
        all_float &= raw.parse::<f64>().is_ok();
        all_bool &= parse_bool(raw).is_some();
    }

    if !any_present {
        return Dtype::Float;
    }
    if all_int && !any_missing {
        Dtype::Int
    } else if all_float {
        Dtype::Float
    } else if all_bool && !any_missing {
        Dtype::Bool
    } else {
        Dtype::Text
    }
}

impl Cell {
    /// Build a cell from a raw value of a column already inferred as `dtype`.
    ///
    pub fn parse(raw: &str, dtype: Dtype) -> Cell {
        if is_missing(raw) {
            return Cell::Missing;
        }
        match dtype {
            Dtype::Int => raw.parse().map(Cell::Int).unwrap_or(Cell::Missing),
            Dtype::Float => raw.parse().map(Cell::Float).unwrap_or(Cell::Missing),
            Dtype::Bool => parse_bool(raw).map(Cell::Bool).unwrap_or(Cell::Missing),
            Dtype::Text => Cell::Text(raw.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(value) => write!(f, "{}", value),
            Cell::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{:.1}", value)
            }
            Cell::Float(value) => write!(f, "{}", value),
            Cell::Bool(true) => f.write_str("True"),
            Cell::Bool(false) => f.write_str("False"),
            Cell::Text(value) => f.write_str(value),
            Cell::Missing => f.write_str("None"),
        }
    }
}
