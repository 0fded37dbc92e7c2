use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, ArrayRef, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Column mapping and errors
// ---------------------------------------------------------------------------

/// Names of the four columns the dashboard reads. Anything else in the file
/// is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub site: String,
    pub payload: String,
    pub outcome: String,
    pub booster: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            site: "Launch Site".to_string(),
            payload: "Payload Mass (kg)".to_string(),
            outcome: "class".to_string(),
            booster: "Booster Version".to_string(),
        }
    }
}

impl ColumnNames {
    fn all(&self) -> [&str; 4] {
        [&self.site, &self.payload, &self.outcome, &self.booster]
    }
}

/// Reasons a dataset file is rejected at startup.
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("missing required column '{column}' (found: {available})")]
    MissingColumn { column: String, available: String },

    #[error("row {row}: column '{column}' value '{value}' is not a non-negative number")]
    InvalidPayload {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: column '{column}' value '{value}' is not one of 0, 1, true, false")]
    InvalidOutcome {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: column '{column}' is empty")]
    MissingValue { row: usize, column: String },

    #[error("dataset contains no launch records")]
    Empty,

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with named columns (the original export)
/// * `.json`    – `[{ "Launch Site": "...", "Payload Mass (kg)": 500.0, ... }, ...]`
/// * `.parquet` – one column per field, string / numeric / boolean types
pub fn load_file(path: &Path, columns: &ColumnNames) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path, columns),
        "json" => load_json(path, columns),
        "parquet" | "pq" => load_parquet(path, columns),
        other => Err(DatasetError::UnsupportedExtension(other.to_string()).into()),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    if records.is_empty() {
        return Err(DatasetError::Empty).with_context(|| format!("loading {}", path.display()));
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Cell parsing shared by all formats
// ---------------------------------------------------------------------------

fn invalid_payload(row: usize, column: &str, value: impl ToString) -> DatasetError {
    DatasetError::InvalidPayload {
        row,
        column: column.to_string(),
        value: value.to_string(),
    }
}

fn invalid_outcome(row: usize, column: &str, value: impl ToString) -> DatasetError {
    DatasetError::InvalidOutcome {
        row,
        column: column.to_string(),
        value: value.to_string(),
    }
}

fn parse_payload(s: &str, row: usize, column: &str) -> Result<f64, DatasetError> {
    let invalid = || invalid_payload(row, column, s);
    let v: f64 = s.trim().parse().map_err(|_| invalid())?;
    check_payload(v, row, column).map_err(|_| invalid())
}

fn check_payload(v: f64, row: usize, column: &str) -> Result<f64, DatasetError> {
    if v.is_finite() && v >= 0.0 {
        Ok(v)
    } else {
        Err(invalid_payload(row, column, v))
    }
}

fn parse_outcome(s: &str, row: usize, column: &str) -> Result<Outcome, DatasetError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" => return Ok(Outcome::Success),
        "false" => return Ok(Outcome::Failure),
        _ => {}
    }
    let invalid = || invalid_outcome(row, column, s);
    let v: f64 = s.trim().parse().map_err(|_| invalid())?;
    numeric_outcome(v).ok_or_else(invalid)
}

fn numeric_outcome(v: f64) -> Option<Outcome> {
    if v == 1.0 {
        Some(Outcome::Success)
    } else if v == 0.0 {
        Some(Outcome::Failure)
    } else {
        None
    }
}

fn require_text(s: &str, row: usize, column: &str) -> Result<String, DatasetError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DatasetError::MissingValue {
            row,
            column: column.to_string(),
        });
    }
    Ok(s.to_string())
}

fn column_index<S: AsRef<str>>(headers: &[S], column: &str) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|h| h.as_ref() == column)
        .ok_or_else(|| DatasetError::MissingColumn {
            column: column.to_string(),
            available: headers
                .iter()
                .map(|h| h.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one launch per line. The
/// pandas export carries an unnamed index column first; it is ignored like
/// any other unused column.
fn load_csv(path: &Path, columns: &ColumnNames) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let site_idx = column_index(&headers, &columns.site)?;
    let payload_idx = column_index(&headers, &columns.payload)?;
    let outcome_idx = column_index(&headers, &columns.outcome)?;
    let booster_idx = column_index(&headers, &columns.booster)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        records.push(LaunchRecord {
            site: require_text(cell(site_idx), row_no, &columns.site)?,
            payload_kg: parse_payload(cell(payload_idx), row_no, &columns.payload)?,
            outcome: parse_outcome(cell(outcome_idx), row_no, &columns.outcome)?,
            booster_version: require_text(cell(booster_idx), row_no, &columns.booster)?,
        });
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "class": 1,
///     "Booster Version": "F9 v1.0  B0005"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path, columns: &ColumnNames) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, rec) in rows.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        for column in columns.all() {
            if !obj.contains_key(column) {
                let available: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
                return Err(DatasetError::MissingColumn {
                    column: column.to_string(),
                    available: available.join(", "),
                }
                .into());
            }
        }

        records.push(LaunchRecord {
            site: json_text(&obj[&columns.site], i, &columns.site)?,
            payload_kg: json_payload(&obj[&columns.payload], i, &columns.payload)?,
            outcome: json_outcome(&obj[&columns.outcome], i, &columns.outcome)?,
            booster_version: json_text(&obj[&columns.booster], i, &columns.booster)?,
        });
    }

    Ok(records)
}

fn json_text(val: &JsonValue, row: usize, column: &str) -> Result<String, DatasetError> {
    match val {
        JsonValue::String(s) => require_text(s, row, column),
        JsonValue::Null => require_text("", row, column),
        other => require_text(&other.to_string(), row, column),
    }
}

fn json_payload(val: &JsonValue, row: usize, column: &str) -> Result<f64, DatasetError> {
    match val {
        JsonValue::Number(n) => match n.as_f64() {
            Some(v) => check_payload(v, row, column),
            None => parse_payload(&n.to_string(), row, column),
        },
        JsonValue::String(s) => parse_payload(s, row, column),
        other => parse_payload(&other.to_string(), row, column),
    }
}

fn json_outcome(val: &JsonValue, row: usize, column: &str) -> Result<Outcome, DatasetError> {
    match val {
        JsonValue::Bool(b) => Ok(Outcome::from(*b)),
        JsonValue::String(s) => parse_outcome(s, row, column),
        other => parse_outcome(&other.to_string(), row, column),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of launch records.
///
/// Site and booster columns must be Utf8 / LargeUtf8. The payload column may
/// be any integer or float type; the outcome column may be boolean, integer,
/// float or string. Dictionary-encoded columns (pandas `category`) are decoded
/// to their value type first.
fn load_parquet(path: &Path, columns: &ColumnNames) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    let mut row_offset = 0usize;

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();

        let column = |name: &str| -> Result<ArrayRef> {
            decode_dictionary(batch.column(column_index(&names, name)?), name)
        };
        let site_col = column(columns.site.as_str())?;
        let payload_col = column(columns.payload.as_str())?;
        let outcome_col = column(columns.outcome.as_str())?;
        let booster_col = column(columns.booster.as_str())?;

        for i in 0..batch.num_rows() {
            let row = row_offset + i;
            records.push(LaunchRecord {
                site: extract_text(&site_col, i, row, &columns.site)?,
                payload_kg: extract_payload(&payload_col, i, row, &columns.payload)?,
                outcome: extract_outcome(&outcome_col, i, row, &columns.outcome)?,
                booster_version: extract_text(&booster_col, i, row, &columns.booster)?,
            });
        }
        row_offset += batch.num_rows();
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

/// Unpack a dictionary-encoded column into a plain array of its value type.
fn decode_dictionary(col: &ArrayRef, column: &str) -> Result<ArrayRef> {
    match col.data_type() {
        DataType::Dictionary(_, value_type) => cast(col.as_ref(), value_type.as_ref())
            .with_context(|| format!("decoding dictionary column '{column}'")),
        _ => Ok(Arc::clone(col)),
    }
}

/// Read a Utf8 / LargeUtf8 cell; `None` for a null or non-string column.
fn string_cell(col: &ArrayRef, i: usize) -> Option<&str> {
    if col.is_null(i) {
        return None;
    }
    match col.data_type() {
        DataType::Utf8 => Some(col.as_string::<i32>().value(i)),
        DataType::LargeUtf8 => Some(col.as_string::<i64>().value(i)),
        _ => None,
    }
}

fn extract_text(col: &ArrayRef, i: usize, row: usize, column: &str) -> Result<String> {
    if col.is_null(i) {
        return Err(DatasetError::MissingValue {
            row,
            column: column.to_string(),
        }
        .into());
    }
    match string_cell(col, i) {
        Some(value) => Ok(require_text(value, row, column)?),
        None => bail!(
            "Row {row}: column '{column}' has type {:?}, expected string",
            col.data_type()
        ),
    }
}

/// Read a numeric cell as `f64`; `None` for a null or non-numeric column.
fn extract_number(col: &ArrayRef, i: usize) -> Option<f64> {
    if col.is_null(i) {
        return None;
    }
    let any = col.as_any();
    if let Some(arr) = any.downcast_ref::<Float64Array>() {
        Some(arr.value(i))
    } else if let Some(arr) = any.downcast_ref::<Float32Array>() {
        Some(arr.value(i) as f64)
    } else if let Some(arr) = any.downcast_ref::<Int64Array>() {
        Some(arr.value(i) as f64)
    } else if let Some(arr) = any.downcast_ref::<Int32Array>() {
        Some(arr.value(i) as f64)
    } else {
        None
    }
}

fn extract_payload(col: &ArrayRef, i: usize, row: usize, column: &str) -> Result<f64> {
    if let Some(v) = extract_number(col, i) {
        return Ok(check_payload(v, row, column)?);
    }
    if let Some(s) = string_cell(col, i) {
        return Ok(parse_payload(s, row, column)?);
    }
    let value = if col.is_null(i) {
        "<null>".to_string()
    } else {
        format!("<{:?}>", col.data_type())
    };
    Err(invalid_payload(row, column, value).into())
}

fn extract_outcome(col: &ArrayRef, i: usize, row: usize, column: &str) -> Result<Outcome> {
    if col.is_null(i) {
        return Err(invalid_outcome(row, column, "<null>").into());
    }
    if let Some(arr) = col.as_any().downcast_ref::<BooleanArray>() {
        return Ok(Outcome::from(arr.value(i)));
    }
    if let Some(s) = string_cell(col, i) {
        return Ok(parse_outcome(s, row, column)?);
    }
    match extract_number(col, i) {
        Some(v) => Ok(numeric_outcome(v).ok_or_else(|| invalid_outcome(row, column, v))?),
        None => Err(invalid_outcome(row, column, format!("<{:?}>", col.data_type())).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_encodings() {
        assert_eq!(parse_outcome("1", 0, "class"), Ok(Outcome::Success));
        assert_eq!(parse_outcome("0.0", 0, "class"), Ok(Outcome::Failure));
        assert_eq!(parse_outcome(" True ", 0, "class"), Ok(Outcome::Success));
        assert_eq!(parse_outcome("false", 0, "class"), Ok(Outcome::Failure));
        assert!(matches!(
            parse_outcome("2", 7, "class"),
            Err(DatasetError::InvalidOutcome { row: 7, .. })
        ));
    }

    #[test]
    fn test_payload_must_be_non_negative() {
        assert_eq!(parse_payload("525", 0, "mass"), Ok(525.0));
        assert!(parse_payload("-1", 3, "mass").is_err());
        assert!(parse_payload("heavy", 3, "mass").is_err());
        assert!(parse_payload("NaN", 3, "mass").is_err());
    }

    #[test]
    fn test_invalid_cells_name_their_column() {
        let err = parse_payload("-1", 4, "mass").unwrap_err();
        assert_eq!(
            err.to_string(),
            "row 4: column 'mass' value '-1' is not a non-negative number"
        );
        let err = parse_outcome("maybe", 2, "ok").unwrap_err();
        assert_eq!(
            err.to_string(),
            "row 2: column 'ok' value 'maybe' is not one of 0, 1, true, false"
        );
    }

    #[test]
    fn test_missing_column_lists_available() {
        let headers = vec!["Launch Site".to_string(), "class".to_string()];
        let err = column_index(&headers, "Payload Mass (kg)").unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required column 'Payload Mass (kg)' (found: Launch Site, class)"
        );
    }
}
