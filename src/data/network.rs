//! The edge geometry layer: walkway edges with line geometry in lon/lat.

use geo::{MultiLineString, Point};

use crate::data::series::EdgeId;

/// One walkway edge: unique id plus line geometry in geographic lon/lat
/// (WGS84 assumed when the source does not say otherwise).
#[derive(Debug, Clone)]
pub struct EdgeRecord {
    pub id: EdgeId,
    pub geometry: MultiLineString<f64>,
}

/// The set of edge geometries, loaded once at startup and read-only
/// afterwards. Ids are unique within the set.
#[derive(Debug)]
pub struct EdgeNetwork {
    edges: Vec<EdgeRecord>,
}

impl EdgeNetwork {
    /// Build a network, rejecting duplicate edge ids.
    pub fn new(edges: Vec<EdgeRecord>) -> Result<Self, String> {
        let mut seen = std::collections::HashSet::with_capacity(edges.len());
        for e in &edges {
            if !seen.insert(e.id) {
                return Err(format!("duplicate edge id {} in geometry layer", e.id));
            }
        }
        Ok(Self { edges })
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    pub fn contains(&self, id: EdgeId) -> bool {
        self.edges.iter().any(|e| e.id == id)
    }

    /// Center of the network's lon/lat bounding box, used to anchor the
    /// planar projection. `None` when the network has no coordinates.
    pub fn geographic_center(&self) -> Option<Point<f64>> {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for edge in &self.edges {
            for line in edge.geometry.iter() {
                for c in line.coords() {
                    if c.x < min_x {
                        min_x = c.x;
                    }
                    if c.x > max_x {
                        max_x = c.x;
                    }
                    if c.y < min_y {
                        min_y = c.y;
                    }
                    if c.y > max_y {
                        max_y = c.y;
                    }
                }
            }
        }
        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some(Point::new((min_x + max_x) * 0.5, (min_y + max_y) * 0.5))
    }
}
