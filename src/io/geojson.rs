//! GeoJSON edge-layer loading.
//!
//! The layer is a FeatureCollection whose features carry the edge id in an
//! integer property (`OBJECTID` in the upstream export) and LineString or
//! MultiLineString geometry in lon/lat. Anything else is rejected: a
//! feature without a usable id would silently drop map geometry, and
//! non-line geometry has no meaning for a walkway layer.

use geo::{Coord, LineString, MultiLineString};
use serde::Deserialize;
use std::path::Path;

use crate::data::network::{EdgeNetwork, EdgeRecord};

/// Property holding the edge id in the upstream export.
pub const DEFAULT_ID_PROPERTY: &str = "OBJECTID";

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    // GeoJSON allows `"properties": null`
    #[serde(default)]
    properties: Option<serde_json::Map<String, serde_json::Value>>,
    geometry: Geometry,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    LineString { coordinates: Vec<Vec<f64>> },
    MultiLineString { coordinates: Vec<Vec<Vec<f64>>> },
}

/// Load an edge network from a GeoJSON file.
pub fn load_edges_from_path<P: AsRef<Path>>(
    path: P,
    id_property: &str,
) -> Result<EdgeNetwork, String> {
    let text = std::fs::read_to_string(path.as_ref())
        .map_err(|e| format!("failed to read {}: {e}", path.as_ref().display()))?;
    load_edges_from_str(&text, id_property)
}

/// Parse an edge network from GeoJSON text.
pub fn load_edges_from_str(json: &str, id_property: &str) -> Result<EdgeNetwork, String> {
    let fc: FeatureCollection =
        serde_json::from_str(json).map_err(|e| format!("invalid GeoJSON: {e}"))?;

    let mut edges = Vec::with_capacity(fc.features.len());
    for (i, feat) in fc.features.iter().enumerate() {
        let id = feat
            .properties
            .as_ref()
            .and_then(|props| props.get(id_property))
            .and_then(|v| v.as_u64())
            .ok_or_else(|| format!("feature {i}: missing integer property `{id_property}`"))?;
        let geometry = match &feat.geometry {
            Geometry::LineString { coordinates } => {
                MultiLineString::new(vec![line_string(coordinates)
                    .map_err(|e| format!("feature {i} (edge {id}): {e}"))?])
            }
            Geometry::MultiLineString { coordinates } => {
                let mut parts = Vec::with_capacity(coordinates.len());
                for part in coordinates {
                    parts.push(
                        line_string(part).map_err(|e| format!("feature {i} (edge {id}): {e}"))?,
                    );
                }
                MultiLineString::new(parts)
            }
        };
        edges.push(EdgeRecord { id, geometry });
    }
    EdgeNetwork::new(edges)
}

/// One GeoJSON position array → planar coordinate. Extra ordinates
/// (altitude) are ignored.
fn line_string(coords: &[Vec<f64>]) -> Result<LineString<f64>, String> {
    let mut out = Vec::with_capacity(coords.len());
    for pos in coords {
        if pos.len() < 2 {
            return Err("position with fewer than 2 ordinates".to_string());
        }
        out.push(Coord {
            x: pos[0],
            y: pos[1],
        });
    }
    Ok(LineString::new(out))
}
