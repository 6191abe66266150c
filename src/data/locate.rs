//! Nearest-edge lookup for map clicks.
//!
//! The click arrives in geographic lon/lat; the lookup projects it and the
//! edge geometries into one shared planar CRS (see
//! [`crate::data::projection`]) and takes Euclidean point-to-line
//! distances there. Measuring in raw degrees is not an option: it biases
//! the result east–west at non-equatorial latitudes.

use geo::{Distance, Euclidean, MultiLineString, Point};

use crate::data::network::EdgeNetwork;
use crate::data::projection::{LocalProjection, PlanarCrs};
use crate::data::series::EdgeId;

/// A map click in geographic coordinates (lon/lat degrees). Ephemeral:
/// consumed by [`locate_nearest`], after which only the resulting edge id
/// is retained.
#[derive(Debug, Clone, Copy)]
pub struct ClickPoint {
    pub lon: f64,
    pub lat: f64,
}

/// Edge geometries reprojected once into a planar CRS and cached for the
/// process lifetime, so per-click work is one point projection plus a
/// distance scan.
pub struct ProjectedNetwork {
    crs: PlanarCrs,
    edges: Vec<(EdgeId, MultiLineString<f64>)>,
}

impl ProjectedNetwork {
    /// Project every edge geometry of `network` with `proj`.
    pub fn build(network: &EdgeNetwork, proj: &LocalProjection) -> Self {
        Self {
            crs: proj.crs(),
            edges: network
                .edges()
                .iter()
                .map(|e| (e.id, proj.project_lines(&e.geometry)))
                .collect(),
        }
    }

    pub fn crs(&self) -> PlanarCrs {
        self.crs
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Failure modes of [`locate_nearest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateError {
    /// The network has no edges; there is no meaningful nearest id.
    EmptyNetwork,
}

impl std::fmt::Display for LocateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocateError::EmptyNetwork => write!(f, "edge network is empty"),
        }
    }
}

impl std::error::Error for LocateError {}

/// Return the id of the edge nearest to `click`.
///
/// The click is projected with `proj` and compared against the
/// pre-projected geometries by Euclidean point-to-line distance (nearest
/// point anywhere on the line, interior included). Exact distance ties go
/// to the lowest edge id, so repeated calls are deterministic.
///
/// # Panics
/// When `projected` was built with a different planar CRS than `proj` —
/// mixing CRSs here is a correctness bug, not a recoverable condition.
pub fn locate_nearest(
    click: ClickPoint,
    projected: &ProjectedNetwork,
    proj: &LocalProjection,
) -> Result<EdgeId, LocateError> {
    nearest_edge(click, projected, proj).map(|(id, _)| id)
}

/// Like [`locate_nearest`], but also returns the distance in meters. The
/// hover tooltip uses the distance to decide whether the pointer is close
/// enough to an edge to count as "on" it.
pub fn nearest_edge(
    click: ClickPoint,
    projected: &ProjectedNetwork,
    proj: &LocalProjection,
) -> Result<(EdgeId, f64), LocateError> {
    assert_eq!(
        projected.crs(),
        proj.crs(),
        "click and edge geometries must be projected into the same planar CRS"
    );

    let p: Point<f64> = proj.project_point(click.lon, click.lat);
    let mut best: Option<(f64, EdgeId)> = None;
    for (id, lines) in &projected.edges {
        let d = lines
            .iter()
            .map(|ls| Euclidean.distance(&p, ls))
            .fold(f64::INFINITY, f64::min);
        let better = match best {
            None => true,
            Some((best_d, best_id)) => d < best_d || (d == best_d && *id < best_id),
        };
        if better {
            best = Some((d, *id));
        }
    }
    best.map(|(d, id)| (id, d)).ok_or(LocateError::EmptyNetwork)
}
