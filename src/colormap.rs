//! Sequential colormaps for the choropleth.
//!
//! This module contains the Colormap enum, its ramp definitions, and the
//! value-to-color normalization used by the map renderer.

use egui::Color32;
use once_cell::sync::Lazy;

use crate::data::color_range::ColorRange;

/// Resolution of the interpolated lookup tables.
const LUT_SIZE: usize = 256;

// Ramp control points. Blues/Reds are the ColorBrewer ramps matplotlib
// ships under the same names; Viridis/Magma use the standard 8-stop
// approximations.
const BLUES: [[u8; 3]; 9] = [
    [247, 251, 255],
    [222, 235, 247],
    [198, 219, 239],
    [158, 202, 225],
    [107, 174, 214],
    [66, 146, 198],
    [33, 113, 181],
    [8, 81, 156],
    [8, 48, 107],
];
const REDS: [[u8; 3]; 9] = [
    [255, 245, 240],
    [254, 224, 210],
    [252, 187, 161],
    [252, 146, 114],
    [251, 106, 74],
    [239, 59, 44],
    [203, 24, 29],
    [165, 15, 21],
    [103, 0, 13],
];
const VIRIDIS: [[u8; 3]; 8] = [
    [68, 1, 84],
    [70, 50, 127],
    [54, 92, 141],
    [39, 127, 142],
    [31, 161, 135],
    [74, 194, 109],
    [159, 218, 58],
    [253, 231, 37],
];
const MAGMA: [[u8; 3]; 8] = [
    [0, 0, 4],
    [40, 11, 84],
    [101, 21, 110],
    [159, 42, 99],
    [212, 72, 66],
    [245, 125, 21],
    [250, 193, 39],
    [252, 253, 191],
];

// Interpolated LUTs, built once on first use.
static BLUES_LUT: Lazy<Vec<Color32>> = Lazy::new(|| build_lut(&BLUES));
static REDS_LUT: Lazy<Vec<Color32>> = Lazy::new(|| build_lut(&REDS));
static VIRIDIS_LUT: Lazy<Vec<Color32>> = Lazy::new(|| build_lut(&VIRIDIS));
static MAGMA_LUT: Lazy<Vec<Color32>> = Lazy::new(|| build_lut(&MAGMA));

/// The enumerated colormap choices offered in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    Blues,
    Reds,
    Viridis,
    Magma,
}

impl Default for Colormap {
    fn default() -> Self {
        Colormap::Blues
    }
}

impl Colormap {
    /// All built-in colormaps (useful for combo-box UIs).
    pub fn all() -> &'static [Colormap] {
        &[
            Colormap::Blues,
            Colormap::Reds,
            Colormap::Viridis,
            Colormap::Magma,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Colormap::Blues => "Blues",
            Colormap::Reds => "Reds",
            Colormap::Viridis => "Viridis",
            Colormap::Magma => "Magma",
        }
    }

    /// Inverse of [`label`](Self::label), for view-state restore.
    pub fn from_label(label: &str) -> Option<Colormap> {
        Colormap::all().iter().copied().find(|c| c.label() == label)
    }

    fn lut(&self) -> &'static [Color32] {
        match self {
            Colormap::Blues => &BLUES_LUT,
            Colormap::Reds => &REDS_LUT,
            Colormap::Viridis => &VIRIDIS_LUT,
            Colormap::Magma => &MAGMA_LUT,
        }
    }

    /// Sample the ramp at `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> Color32 {
        let lut = self.lut();
        let t = t.clamp(0.0, 1.0);
        let i = (t * (lut.len() - 1) as f64).round() as usize;
        lut[i]
    }

    /// Color for a value under `range`.
    ///
    /// The value is normalized to `[0, 1]` over the range and clamped. A
    /// zero-width range (possible when every count is zero) pins `t` to 0
    /// so an all-equal slice renders uniformly in the ramp's low color.
    pub fn color_for(&self, value: f64, range: ColorRange) -> Color32 {
        let t = if range.span() > 0.0 {
            (value - range.vmin) / range.span()
        } else {
            0.0
        };
        self.sample(t)
    }
}

/// Linearly interpolate `stops` into a LUT_SIZE-entry table.
fn build_lut(stops: &[[u8; 3]]) -> Vec<Color32> {
    let segs = stops.len() - 1;
    (0..LUT_SIZE)
        .map(|i| {
            let t = i as f64 / (LUT_SIZE - 1) as f64;
            let pos = t * segs as f64;
            let seg = (pos.floor() as usize).min(segs - 1);
            let frac = pos - seg as f64;
            let a = stops[seg];
            let b = stops[seg + 1];
            let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
            Color32::from_rgb(mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2]))
        })
        .collect()
}
