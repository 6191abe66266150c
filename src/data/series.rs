//! The edge count table: one row per timestamp, one column per edge.
//!
//! The table is loaded once at startup (see [`crate::io::series`]) and is
//! immutable afterwards; everything derived from it (time slices, color
//! ranges) is recomputed per interaction. `EdgeSeries::new` validates the
//! table shape once so the rest of the crate can index without re-checking.

use std::collections::HashMap;

/// Numeric identifier for a walkway edge (the `OBJECTID` of the source data).
pub type EdgeId = u64;

/// Immutable count time series, stored row-major.
#[derive(Debug)]
pub struct EdgeSeries {
    timestamps: Vec<f64>,
    edge_ids: Vec<EdgeId>,
    /// `timestamps.len() * edge_ids.len()` values, row-major.
    values: Vec<f64>,
    col_index: HashMap<EdgeId, usize>,
}

impl EdgeSeries {
    /// Build a series from per-row count vectors.
    ///
    /// `timestamps` are seconds since the UNIX epoch; `rows[i][j]` is the
    /// count for `edge_ids[j]` at `timestamps[i]`.
    ///
    /// Fails when the table is malformed: row count != timestamp count,
    /// ragged rows, duplicate timestamps, duplicate edge ids, or any
    /// non-finite or negative value.
    pub fn new(
        timestamps: Vec<f64>,
        edge_ids: Vec<EdgeId>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, String> {
        if rows.len() != timestamps.len() {
            return Err(format!(
                "row count {} does not match timestamp count {}",
                rows.len(),
                timestamps.len()
            ));
        }
        for (i, t) in timestamps.iter().enumerate() {
            if !t.is_finite() {
                return Err(format!("timestamp at row {i} is not finite"));
            }
        }
        let mut sorted_ts = timestamps.clone();
        sorted_ts.sort_by(f64::total_cmp);
        if sorted_ts.windows(2).any(|w| w[0] == w[1]) {
            return Err("duplicate timestamps in series".to_string());
        }

        let mut col_index = HashMap::with_capacity(edge_ids.len());
        for (j, id) in edge_ids.iter().enumerate() {
            if col_index.insert(*id, j).is_some() {
                return Err(format!("duplicate edge column {id}"));
            }
        }

        let mut values = Vec::with_capacity(timestamps.len() * edge_ids.len());
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != edge_ids.len() {
                return Err(format!(
                    "row {i} has {} values, expected {}",
                    row.len(),
                    edge_ids.len()
                ));
            }
            for (j, v) in row.iter().enumerate() {
                if !v.is_finite() || *v < 0.0 {
                    return Err(format!(
                        "count for edge {} at row {i} is not a non-negative finite number",
                        edge_ids[j]
                    ));
                }
            }
            values.extend(row);
        }

        Ok(Self {
            timestamps,
            edge_ids,
            values,
            col_index,
        })
    }

    /// Number of rows (timestamps).
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Number of edge columns.
    pub fn n_edges(&self) -> usize {
        self.edge_ids.len()
    }

    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edge_ids
    }

    /// Timestamp of the given row. Panics when `row` is out of range.
    pub fn timestamp(&self, row: usize) -> f64 {
        self.timestamps[row]
    }

    /// Count for `id` at `row`, or `None` when the table has no such column.
    pub fn value(&self, row: usize, id: EdgeId) -> Option<f64> {
        let col = *self.col_index.get(&id)?;
        Some(self.values[row * self.edge_ids.len() + col])
    }

    pub fn has_edge(&self, id: EdgeId) -> bool {
        self.col_index.contains_key(&id)
    }

    /// The full `(timestamp, count)` sequence for one edge, ready for
    /// plotting. `None` when the table has no column for `id`.
    pub fn points_for_edge(&self, id: EdgeId) -> Option<Vec<[f64; 2]>> {
        let col = *self.col_index.get(&id)?;
        let n = self.edge_ids.len();
        Some(
            self.timestamps
                .iter()
                .enumerate()
                .map(|(row, t)| [*t, self.values[row * n + col]])
                .collect(),
        )
    }

    /// Human-readable UTC label for the timestamp of `row`, e.g.
    /// `2024-01-15 13:45:30`.
    pub fn timestamp_label(&self, row: usize) -> String {
        format_timestamp(self.timestamps[row])
    }
}

/// Format seconds-since-epoch as a UTC `YYYY-MM-DD HH:MM:SS` label.
/// Out-of-range values fall back to the UNIX epoch.
pub fn format_timestamp(secs: f64) -> String {
    let dt = if secs.is_finite() {
        let s = secs.floor() as i64;
        let ns = (((secs - s as f64) * 1e9).round() as u32).min(999_999_999);
        chrono::DateTime::from_timestamp(s, ns).unwrap_or_default()
    } else {
        chrono::DateTime::default()
    };
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}
