//! Count time-series loading.
//!
//! CSV input is always available (header `time,<id>,<id>,…`). With the
//! `parquet` feature (default), pandas-style Parquet output from the
//! upstream pipeline is accepted as well: a timestamp index column plus
//! integer-named count columns.

use std::path::Path;

use crate::data::series::EdgeSeries;

/// Load a series, dispatching on the file extension (`.parquet` when the
/// feature is enabled, CSV otherwise).
pub fn load_series_from_path<P: AsRef<Path>>(path: P) -> Result<EdgeSeries, String> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "parquet" | "pq" => {
            #[cfg(feature = "parquet")]
            {
                load_series_parquet(path)
            }
            #[cfg(not(feature = "parquet"))]
            {
                Err(format!(
                    "{}: parquet support not compiled in (enable the `parquet` feature)",
                    path.display()
                ))
            }
        }
        _ => load_series_csv(path),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CSV
// ─────────────────────────────────────────────────────────────────────────────

/// Load a series from a CSV file.
pub fn load_series_csv<P: AsRef<Path>>(path: P) -> Result<EdgeSeries, String> {
    let text = std::fs::read_to_string(path.as_ref())
        .map_err(|e| format!("failed to read {}: {e}", path.as_ref().display()))?;
    parse_series_csv(&text)
}

/// Parse CSV text: first column is the timestamp (RFC3339,
/// `YYYY-MM-DD HH:MM:SS` UTC, or numeric epoch seconds), remaining column
/// headers are integer edge ids. Empty cells read as 0.0.
pub fn parse_series_csv(text: &str) -> Result<EdgeSeries, String> {
    let mut lines = text.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    let (_, header) = lines.next().ok_or("empty series file")?;
    let mut cols = header.split(',');
    let _time_col = cols.next().ok_or("empty header line")?;
    let mut edge_ids = Vec::new();
    for name in cols {
        let id = name
            .trim()
            .parse::<u64>()
            .map_err(|_| format!("column header `{}` is not an integer edge id", name.trim()))?;
        edge_ids.push(id);
    }

    let mut timestamps = Vec::new();
    let mut rows = Vec::new();
    for (lineno, line) in lines {
        let mut cells = line.split(',');
        let ts_text = cells.next().unwrap_or_default().trim();
        timestamps.push(
            parse_timestamp(ts_text)
                .ok_or_else(|| format!("line {}: bad timestamp `{ts_text}`", lineno + 1))?,
        );
        let mut row = Vec::with_capacity(edge_ids.len());
        for cell in cells {
            let cell = cell.trim();
            if cell.is_empty() {
                row.push(0.0);
            } else {
                row.push(cell.parse::<f64>().map_err(|_| {
                    format!("line {}: bad count `{cell}`", lineno + 1)
                })?);
            }
        }
        rows.push(row);
    }

    if timestamps.is_empty() {
        return Err("series has no rows; nothing can be displayed".to_string());
    }
    EdgeSeries::new(timestamps, edge_ids, rows)
}

/// Parse one timestamp cell into seconds since the UNIX epoch.
fn parse_timestamp(text: &str) -> Option<f64> {
    if let Ok(v) = text.parse::<f64>() {
        return v.is_finite().then_some(v);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 * 1e-9);
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc().timestamp() as f64);
    }
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Parquet (pandas-style)
// ─────────────────────────────────────────────────────────────────────────────

/// Load a series from a pandas-style Parquet file.
///
/// The timestamp column is found by name (`time`, `timestamp`, or pandas'
/// `__index_level_0__`) or, failing that, as the first timestamp-typed
/// column. Remaining columns whose names parse as integers become edge
/// columns; others are skipped with a warning. Null count cells read as
/// 0.0 (same default as a missing column in the slice join).
#[cfg(feature = "parquet")]
pub fn load_series_parquet<P: AsRef<Path>>(path: P) -> Result<EdgeSeries, String> {
    use arrow_schema::DataType;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    let path = path.as_ref();
    let file =
        std::fs::File::open(path).map_err(|e| format!("failed to open {}: {e}", path.display()))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|e| format!("{}: not a parquet file: {e}", path.display()))?;
    let schema = builder.schema().clone();

    let fields = schema.fields();
    let time_idx = fields
        .iter()
        .position(|f| matches!(f.name().as_str(), "time" | "timestamp" | "__index_level_0__"))
        .or_else(|| {
            fields
                .iter()
                .position(|f| matches!(f.data_type(), DataType::Timestamp(_, _)))
        })
        .ok_or_else(|| format!("{}: no timestamp column", path.display()))?;

    let mut edge_cols: Vec<(usize, u64)> = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        if i == time_idx {
            continue;
        }
        match field.name().parse::<u64>() {
            Ok(id) => {
                if !count_type_supported(field.data_type()) {
                    return Err(format!(
                        "{}: column `{}` has unsupported count type {:?}",
                        path.display(),
                        field.name(),
                        field.data_type()
                    ));
                }
                edge_cols.push((i, id));
            }
            Err(_) => {
                eprintln!(
                    "edgemap: skipping non-edge column `{}` in {}",
                    field.name(),
                    path.display()
                );
            }
        }
    }

    let reader = builder
        .build()
        .map_err(|e| format!("{}: {e}", path.display()))?;

    let mut timestamps = Vec::new();
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for batch in reader {
        let batch = batch.map_err(|e| format!("{}: {e}", path.display()))?;
        for row in 0..batch.num_rows() {
            timestamps.push(time_value_seconds(batch.column(time_idx), row)?);
            let mut r = Vec::with_capacity(edge_cols.len());
            for (col, _) in &edge_cols {
                r.push(count_value(batch.column(*col), row));
            }
            rows.push(r);
        }
    }

    if timestamps.is_empty() {
        return Err(format!(
            "{}: series has no rows; nothing can be displayed",
            path.display()
        ));
    }
    EdgeSeries::new(timestamps, edge_cols.iter().map(|(_, id)| *id).collect(), rows)
}

#[cfg(feature = "parquet")]
fn count_type_supported(dt: &arrow_schema::DataType) -> bool {
    use arrow_schema::DataType;
    matches!(
        dt,
        DataType::Float64
            | DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::UInt64
            | DataType::UInt32
    )
}

#[cfg(feature = "parquet")]
fn time_value_seconds(col: &arrow_array::ArrayRef, row: usize) -> Result<f64, String> {
    use arrow_array::cast::AsArray;
    use arrow_array::types::{
        Float64Type, Int64Type, TimestampMicrosecondType, TimestampMillisecondType,
        TimestampNanosecondType, TimestampSecondType,
    };
    use arrow_schema::{DataType, TimeUnit};

    match col.data_type() {
        DataType::Timestamp(TimeUnit::Second, _) => {
            Ok(col.as_primitive::<TimestampSecondType>().value(row) as f64)
        }
        DataType::Timestamp(TimeUnit::Millisecond, _) => {
            Ok(col.as_primitive::<TimestampMillisecondType>().value(row) as f64 * 1e-3)
        }
        DataType::Timestamp(TimeUnit::Microsecond, _) => {
            Ok(col.as_primitive::<TimestampMicrosecondType>().value(row) as f64 * 1e-6)
        }
        DataType::Timestamp(TimeUnit::Nanosecond, _) => {
            Ok(col.as_primitive::<TimestampNanosecondType>().value(row) as f64 * 1e-9)
        }
        DataType::Int64 => Ok(col.as_primitive::<Int64Type>().value(row) as f64),
        DataType::Float64 => Ok(col.as_primitive::<Float64Type>().value(row)),
        other => Err(format!("unsupported timestamp column type {other:?}")),
    }
}

#[cfg(feature = "parquet")]
fn count_value(col: &arrow_array::ArrayRef, row: usize) -> f64 {
    use arrow_array::cast::AsArray;
    use arrow_array::types::{Float32Type, Float64Type, Int32Type, Int64Type, UInt32Type, UInt64Type};
    use arrow_array::Array;
    use arrow_schema::DataType;

    if col.is_null(row) {
        return 0.0;
    }
    let v = match col.data_type() {
        DataType::Float64 => col.as_primitive::<Float64Type>().value(row),
        DataType::Float32 => col.as_primitive::<Float32Type>().value(row) as f64,
        DataType::Int64 => col.as_primitive::<Int64Type>().value(row) as f64,
        DataType::Int32 => col.as_primitive::<Int32Type>().value(row) as f64,
        DataType::UInt64 => col.as_primitive::<UInt64Type>().value(row) as f64,
        DataType::UInt32 => col.as_primitive::<UInt32Type>().value(row) as f64,
        // unreachable: column types are checked against the schema up front
        _ => 0.0,
    };
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
