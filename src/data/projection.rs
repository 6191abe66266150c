//! Locally-accurate planar projection for distance measurements.
//!
//! Euclidean distance in raw lon/lat degrees under-counts east–west ground
//! distance away from the equator, so all distance work goes through a
//! spherical transverse Mercator centered on the area of interest. Near the
//! center the projection's Euclidean distances track true ground distances
//! to well under a part per thousand, which is what the nearest-edge lookup
//! needs. Projected units are meters with the center at the origin.

use geo::{Coord, MapCoords, MultiLineString, Point};

/// Mean Earth radius in meters (IUGG).
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Identifies the planar coordinate system a projected geometry is
/// expressed in. Distances may only be taken between geometries whose tags
/// compare equal; the nearest-edge lookup asserts this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarCrs {
    /// Central meridian, degrees.
    pub center_lon: f64,
    /// Latitude of the projection origin, degrees.
    pub center_lat: f64,
}

/// Spherical transverse Mercator centered on a point of interest.
#[derive(Debug, Clone, Copy)]
pub struct LocalProjection {
    lon0_rad: f64,
    lat0_rad: f64,
    crs: PlanarCrs,
}

impl LocalProjection {
    /// Projection centered on `center` (lon/lat degrees), typically the
    /// center of the edge network's bounding box.
    pub fn centered_on(center: Point<f64>) -> Self {
        Self {
            lon0_rad: center.x().to_radians(),
            lat0_rad: center.y().to_radians(),
            crs: PlanarCrs {
                center_lon: center.x(),
                center_lat: center.y(),
            },
        }
    }

    pub fn crs(&self) -> PlanarCrs {
        self.crs
    }

    /// Project a lon/lat coordinate into planar meters.
    pub fn project_coord(&self, c: Coord<f64>) -> Coord<f64> {
        let lam = c.x.to_radians() - self.lon0_rad;
        let phi = c.y.to_radians();
        // b == ±1 only 90° away from the central meridian; clamp keeps the
        // output finite for degenerate inputs.
        let b = (phi.cos() * lam.sin()).clamp(-1.0 + 1e-12, 1.0 - 1e-12);
        let x = EARTH_RADIUS_M * b.atanh();
        let y = EARTH_RADIUS_M * (phi.sin().atan2(phi.cos() * lam.cos()) - self.lat0_rad);
        Coord { x, y }
    }

    /// Project a lon/lat point into planar meters.
    pub fn project_point(&self, lon: f64, lat: f64) -> Point<f64> {
        self.project_coord(Coord { x: lon, y: lat }).into()
    }

    /// Project a whole line geometry into planar meters.
    pub fn project_lines(&self, lines: &MultiLineString<f64>) -> MultiLineString<f64> {
        lines.map_coords(|c| self.project_coord(c))
    }
}
