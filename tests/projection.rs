use edgemap::LocalProjection;
use geo::Point;

const EARTH_RADIUS_M: f64 = 6_371_008.8;

fn dist(a: Point<f64>, b: Point<f64>) -> f64 {
    (a.x() - b.x()).hypot(a.y() - b.y())
}

#[test]
fn center_maps_to_the_origin() {
    let proj = LocalProjection::centered_on(Point::new(-83.0, 42.3));
    let p = proj.project_point(-83.0, 42.3);
    assert!(p.x().abs() < 1e-6);
    assert!(p.y().abs() < 1e-6);
}

#[test]
fn meridian_arcs_keep_their_ground_length() {
    let proj = LocalProjection::centered_on(Point::new(-83.0, 42.3));
    let a = proj.project_point(-83.0, 42.30);
    let b = proj.project_point(-83.0, 42.31);
    let expected = EARTH_RADIUS_M * 0.01f64.to_radians();
    assert!(
        (dist(a, b) - expected).abs() < 0.01,
        "0.01° of latitude should project to ~{expected} m, got {}",
        dist(a, b)
    );
}

#[test]
fn east_west_ground_distance_shrinks_with_latitude() {
    let proj = LocalProjection::centered_on(Point::new(25.0, 60.0));
    let a = proj.project_point(25.00, 60.0);
    let b = proj.project_point(25.01, 60.0);
    let expected = EARTH_RADIUS_M * 0.01f64.to_radians() * 60.0f64.to_radians().cos();
    assert!(
        (dist(a, b) - expected).abs() < 0.1,
        "0.01° of longitude at 60°N should project to ~{expected} m, got {}",
        dist(a, b)
    );
}

#[test]
fn crs_tags_identify_the_projection() {
    let a = LocalProjection::centered_on(Point::new(-83.0, 42.3));
    let b = LocalProjection::centered_on(Point::new(-83.0, 42.3));
    let c = LocalProjection::centered_on(Point::new(-84.0, 42.3));
    assert_eq!(a.crs(), b.crs());
    assert_ne!(a.crs(), c.crs());
}
