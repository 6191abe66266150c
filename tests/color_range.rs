use edgemap::compute_range;
use edgemap::data::color_range::quantile;

#[test]
fn range_is_monotonic() {
    let values = [5.0, 1.0, 9.0, 3.0, 7.0, 2.0, 8.0];
    for clip in [false, true] {
        for log1p in [false, true] {
            let r = compute_range(&values, clip, log1p);
            assert!(
                r.vmin <= r.vmax,
                "vmin > vmax for clip={clip} log1p={log1p}"
            );
        }
    }
}

#[test]
fn clipped_range_stays_within_data() {
    let values = [5.0, 1.0, 9.0, 3.0, 7.0, 2.0, 8.0];
    let r = compute_range(&values, true, false);
    assert!(r.vmin >= 1.0, "clipped vmin must not undershoot the data min");
    assert!(r.vmax <= 9.0, "clipped vmax must not overshoot the data max");
}

#[test]
fn unclipped_range_is_min_max() {
    let r = compute_range(&[5.0, 1.0, 9.0], false, false);
    assert_eq!(r.vmin, 1.0);
    assert_eq!(r.vmax, 9.0);
}

#[test]
fn degenerate_range_collapses_to_zero_floor() {
    for clip in [false, true] {
        let r = compute_range(&[4.2, 4.2, 4.2, 4.2], clip, false);
        assert_eq!(r.vmin, 0.0, "all-equal values must force vmin to 0.0");
        assert_eq!(r.vmax, 4.2);
    }
    // All-zero counts: degenerate too, range stays zero-width at zero.
    let r = compute_range(&[0.0, 0.0], true, false);
    assert_eq!(r.vmin, 0.0);
    assert_eq!(r.vmax, 0.0);
}

#[test]
fn log1p_range_matches_percentiles_of_transformed_values() {
    // log1p of [0, 1, 3] is [0, ln 2, ln 4].
    let ln2 = 2.0f64.ln();
    let ln4 = 4.0f64.ln();

    let r = compute_range(&[0.0, 1.0, 3.0], false, true);
    assert!((r.vmin - 0.0).abs() < 1e-12);
    assert!((r.vmax - ln4).abs() < 1e-12);

    // With clipping: 1st/99th percentile of [0, ln 2, ln 4] under linear
    // interpolation, h = (n - 1) q.
    let r = compute_range(&[0.0, 1.0, 3.0], true, true);
    let expect_vmin = 0.02 * ln2;
    let expect_vmax = ln2 + 0.98 * (ln4 - ln2);
    assert!(
        (r.vmin - expect_vmin).abs() < 1e-12,
        "vmin {} != {expect_vmin}",
        r.vmin
    );
    assert!(
        (r.vmax - expect_vmax).abs() < 1e-12,
        "vmax {} != {expect_vmax}",
        r.vmax
    );
}

#[test]
fn quantile_uses_linear_interpolation() {
    let sorted = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(quantile(&sorted, 0.5), 2.5);
    assert_eq!(quantile(&sorted, 0.0), 1.0);
    assert_eq!(quantile(&sorted, 1.0), 4.0);
    assert_eq!(quantile(&sorted, 0.25), 1.75);
    assert_eq!(quantile(&[7.0], 0.3), 7.0);
}
