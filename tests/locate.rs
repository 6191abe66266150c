use edgemap::{
    locate_nearest, nearest_edge, ClickPoint, EdgeNetwork, EdgeRecord, LocalProjection,
    LocateError, ProjectedNetwork,
};
use geo::{LineString, MultiLineString, Point};

fn seg(id: u64, x0: f64, y0: f64, x1: f64, y1: f64) -> EdgeRecord {
    EdgeRecord {
        id,
        geometry: MultiLineString::new(vec![LineString::from(vec![(x0, y0), (x1, y1)])]),
    }
}

fn setup(edges: Vec<EdgeRecord>) -> (LocalProjection, ProjectedNetwork) {
    let network = EdgeNetwork::new(edges).expect("unique ids");
    let center = network.geographic_center().expect("coordinates");
    let proj = LocalProjection::centered_on(center);
    let projected = ProjectedNetwork::build(&network, &proj);
    (proj, projected)
}

#[test]
fn click_selects_the_nearest_segment() {
    // Three parallel horizontal segments; the click sits just above B.
    let (proj, projected) = setup(vec![
        seg(10, -83.001, 42.300, -83.000, 42.300), // A
        seg(20, -83.001, 42.302, -83.000, 42.302), // B
        seg(30, -83.001, 42.304, -83.000, 42.304), // C
    ]);
    let click = ClickPoint {
        lon: -83.0005,
        lat: 42.3021,
    };
    assert_eq!(
        locate_nearest(click, &projected, &proj),
        Ok(20),
        "the click is closest to segment B"
    );
}

#[test]
fn exact_ties_break_to_the_lowest_id() {
    // Two edges with identical geometry give bit-identical distances.
    // Insertion order is high id first, so the tie-break must actually run.
    let (proj, projected) = setup(vec![
        seg(7, -83.001, 42.300, -83.000, 42.300),
        seg(3, -83.001, 42.300, -83.000, 42.300),
    ]);
    let click = ClickPoint {
        lon: -83.0005,
        lat: 42.3005,
    };
    for _ in 0..10 {
        assert_eq!(
            locate_nearest(click, &projected, &proj),
            Ok(3),
            "equidistant edges must resolve to the lowest id, repeatably"
        );
    }
}

#[test]
fn empty_network_is_an_explicit_error() {
    let network = EdgeNetwork::new(vec![]).expect("empty set is constructible");
    let proj = LocalProjection::centered_on(Point::new(0.0, 0.0));
    let projected = ProjectedNetwork::build(&network, &proj);
    let click = ClickPoint { lon: 0.0, lat: 0.0 };
    assert_eq!(
        locate_nearest(click, &projected, &proj),
        Err(LocateError::EmptyNetwork)
    );
}

#[test]
fn distance_is_measured_on_the_ground_not_in_degrees() {
    // At 60°N a degree of longitude covers half the ground of a degree of
    // latitude. The eastern edge is farther in raw degrees (0.018° vs
    // 0.010°) but nearer on the ground (~1001 m vs ~1112 m); measuring in
    // degrees would pick the northern edge.
    let (proj, projected) = setup(vec![
        seg(1, 24.990, 60.010, 25.010, 60.010), // north of the click
        seg(2, 25.018, 59.990, 25.018, 60.010), // east of the click
    ]);
    let click = ClickPoint {
        lon: 25.0,
        lat: 60.0,
    };
    assert_eq!(
        locate_nearest(click, &projected, &proj),
        Ok(2),
        "the ground-nearer eastern edge must win at high latitude"
    );
}

#[test]
fn nearest_edge_reports_a_plausible_distance() {
    let (proj, projected) = setup(vec![seg(5, -83.001, 42.300, -83.000, 42.300)]);
    // ~0.001° of latitude above the segment: about 111 m.
    let click = ClickPoint {
        lon: -83.0005,
        lat: 42.301,
    };
    let (id, dist_m) = nearest_edge(click, &projected, &proj).expect("non-empty network");
    assert_eq!(id, 5);
    assert!(
        (dist_m - 111.2).abs() < 1.0,
        "expected ~111 m, got {dist_m}"
    );
}

#[test]
#[should_panic(expected = "same planar CRS")]
fn mismatched_projection_is_rejected() {
    let network = EdgeNetwork::new(vec![seg(1, 0.0, 0.0, 0.001, 0.0)]).expect("unique ids");
    let proj_a = LocalProjection::centered_on(Point::new(0.0, 0.0));
    let proj_b = LocalProjection::centered_on(Point::new(10.0, 10.0));
    let projected = ProjectedNetwork::build(&network, &proj_a);
    let click = ClickPoint { lon: 0.0, lat: 0.0 };
    let _ = locate_nearest(click, &projected, &proj_b);
}
