use edgemap::{compute_slice, EdgeNetwork, EdgeRecord, EdgeSeries};
use geo::{LineString, MultiLineString};

fn seg(id: u64, x0: f64, y0: f64, x1: f64, y1: f64) -> EdgeRecord {
    EdgeRecord {
        id,
        geometry: MultiLineString::new(vec![LineString::from(vec![(x0, y0), (x1, y1)])]),
    }
}

fn three_edge_network() -> EdgeNetwork {
    EdgeNetwork::new(vec![
        seg(1, 0.0, 0.0, 0.001, 0.0),
        seg(2, 0.0, 0.001, 0.001, 0.001),
        seg(3, 0.0, 0.002, 0.001, 0.002),
    ])
    .expect("unique ids")
}

#[test]
fn slice_covers_every_network_edge() {
    // Table only has columns for edges 1 and 3; the network also has edge 2.
    let series = EdgeSeries::new(
        vec![0.0, 60.0],
        vec![1, 3],
        vec![vec![4.0, 7.0], vec![5.0, 8.0]],
    )
    .expect("valid table");
    let network = three_edge_network();

    for row in 0..series.len() {
        let slice = compute_slice(&series, &network, row);
        assert_eq!(
            slice.len(),
            network.len(),
            "exactly one entry per network edge"
        );
        for id in [1u64, 2, 3] {
            assert!(
                slice.count(id).is_some(),
                "edge {id} missing from slice at row {row}"
            );
        }
    }
}

#[test]
fn slice_joins_table_values_and_defaults_missing_to_zero() {
    let series = EdgeSeries::new(
        vec![0.0, 60.0],
        vec![1, 3],
        vec![vec![4.0, 7.0], vec![5.0, 8.0]],
    )
    .expect("valid table");
    let network = three_edge_network();

    let s0 = compute_slice(&series, &network, 0);
    assert_eq!(s0.count(1), Some(4.0));
    assert_eq!(s0.count(3), Some(7.0));
    assert_eq!(
        s0.count(2),
        Some(0.0),
        "edge without a table column must default to 0.0"
    );

    let s1 = compute_slice(&series, &network, 1);
    assert_eq!(s1.count(1), Some(5.0));
    assert_eq!(s1.count(3), Some(8.0));
    assert_eq!(s1.timestamp, 60.0);
}

#[test]
fn nonzero_count_ignores_defaulted_edges() {
    let series = EdgeSeries::new(vec![0.0], vec![1, 3], vec![vec![4.0, 0.0]]).expect("valid table");
    let network = three_edge_network();
    let slice = compute_slice(&series, &network, 0);
    assert_eq!(slice.nonzero_count(), 1, "only edge 1 carries a count");
}

#[test]
fn series_rejects_malformed_tables() {
    assert!(
        EdgeSeries::new(vec![0.0, 0.0], vec![1], vec![vec![1.0], vec![2.0]]).is_err(),
        "duplicate timestamps must be rejected"
    );
    assert!(
        EdgeSeries::new(vec![0.0], vec![1, 1], vec![vec![1.0, 2.0]]).is_err(),
        "duplicate edge columns must be rejected"
    );
    assert!(
        EdgeSeries::new(vec![0.0], vec![1], vec![vec![-1.0]]).is_err(),
        "negative counts must be rejected"
    );
    assert!(
        EdgeSeries::new(vec![0.0], vec![1, 2], vec![vec![1.0]]).is_err(),
        "ragged rows must be rejected"
    );
}

#[test]
fn points_for_edge_returns_full_series() {
    let series = EdgeSeries::new(
        vec![0.0, 60.0, 120.0],
        vec![7],
        vec![vec![1.0], vec![2.0], vec![3.0]],
    )
    .expect("valid table");
    let pts = series.points_for_edge(7).expect("column exists");
    assert_eq!(pts, vec![[0.0, 1.0], [60.0, 2.0], [120.0, 3.0]]);
    assert!(series.points_for_edge(8).is_none());
}
