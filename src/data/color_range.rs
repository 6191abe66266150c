//! Color-scale range computation for the choropleth.
//!
//! The displayed range is either the full min/max of the current slice or,
//! with clipping enabled, the 1st–99th percentile band so a handful of
//! outlier edges cannot wash out the rest of the map.

/// Inclusive value range driving the colormap normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRange {
    pub vmin: f64,
    pub vmax: f64,
}

impl ColorRange {
    pub fn span(&self) -> f64 {
        self.vmax - self.vmin
    }
}

/// Compute the color-scale range over `values`.
///
/// With `log1p`, every value is first mapped through `ln(1 + x)` (counts
/// are ≥ 0, so the transform is always valid). With `clip`, the range is
/// the 1st–99th percentile of the (possibly transformed) values; otherwise
/// min/max. A degenerate result (`vmin == vmax`, e.g. all values equal) is
/// corrected to `vmin = 0.0` so the scale never collapses to zero width at
/// a nonzero level.
///
/// An empty input yields `(0.0, 0.0)`; callers rule that out earlier by
/// refusing to start with an empty network.
pub fn compute_range(values: &[f64], clip: bool, log1p: bool) -> ColorRange {
    if values.is_empty() {
        return ColorRange { vmin: 0.0, vmax: 0.0 };
    }
    let vals: Vec<f64> = if log1p {
        values.iter().map(|v| v.ln_1p()).collect()
    } else {
        values.to_vec()
    };

    let (mut vmin, vmax) = if clip {
        let mut sorted = vals;
        sorted.sort_by(f64::total_cmp);
        (quantile(&sorted, 0.01), quantile(&sorted, 0.99))
    } else {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in &vals {
            if *v < lo {
                lo = *v;
            }
            if *v > hi {
                hi = *v;
            }
        }
        (lo, hi)
    };

    if vmin == vmax {
        vmin = 0.0;
    }
    ColorRange { vmin, vmax }
}

/// Quantile of an ascending-sorted slice, with linear interpolation between
/// order statistics (`h = (n - 1) q`, the NumPy default estimator).
///
/// ```
/// # use edgemap::data::color_range::quantile;
/// assert_eq!(quantile(&[1.0, 2.0, 3.0, 4.0], 0.5), 2.5);
/// ```
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty(), "quantile of empty slice");
    debug_assert!((0.0..=1.0).contains(&q));
    if sorted.len() == 1 {
        return sorted[0];
    }
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
    }
}
