//! Temporal slice extraction: the per-edge counts at one selected timestamp.

use std::collections::HashMap;

use crate::data::network::EdgeNetwork;
use crate::data::series::{EdgeId, EdgeSeries};

/// Per-edge counts at one timestamp. Derived and ephemeral: recomputed on
/// every timestep-selection event, never persisted.
///
/// Holds exactly one entry per network edge, regardless of which columns
/// exist in the series.
pub struct TimeSlice {
    /// Timestamp (seconds since the UNIX epoch) this slice was taken at.
    pub timestamp: f64,
    counts: HashMap<EdgeId, f64>,
}

impl TimeSlice {
    pub fn count(&self, id: EdgeId) -> Option<f64> {
        self.counts.get(&id).copied()
    }

    /// Number of entries (== number of network edges at slice time).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// How many edges carry a nonzero count in this slice.
    pub fn nonzero_count(&self) -> usize {
        self.counts.values().filter(|v| **v > 0.0).count()
    }

    /// Counts in the iteration order of `network`, for range computation
    /// and rendering.
    pub fn values_for(&self, network: &EdgeNetwork) -> Vec<f64> {
        network
            .edges()
            .iter()
            .map(|e| self.count(e.id).unwrap_or(0.0))
            .collect()
    }
}

/// Left-join the count row at `row_idx` onto the network's edge set.
///
/// Every network edge gets an entry: the table value when the column
/// exists, else 0.0. Pure function of its inputs.
///
/// Callers restrict `row_idx` to `0..series.len()`; the UI slider is
/// clamped to valid indices and an empty series never reaches this point
/// (startup refuses it).
pub fn compute_slice(series: &EdgeSeries, network: &EdgeNetwork, row_idx: usize) -> TimeSlice {
    debug_assert!(row_idx < series.len(), "slice row out of range");
    let counts = network
        .edges()
        .iter()
        .map(|e| (e.id, series.value(row_idx, e.id).unwrap_or(0.0)))
        .collect();
    TimeSlice {
        timestamp: series.timestamp(row_idx),
        counts,
    }
}
