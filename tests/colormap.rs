use edgemap::data::color_range::ColorRange;
use edgemap::Colormap;

#[test]
fn every_ramp_has_a_label_and_round_trips() {
    for cmap in Colormap::all() {
        assert_eq!(
            Colormap::from_label(cmap.label()),
            Some(*cmap),
            "label round-trip failed for {:?}",
            cmap
        );
    }
    assert_eq!(Colormap::from_label("NotARamp"), None);
}

#[test]
fn sample_endpoints_hit_the_ramp_ends() {
    let blues = Colormap::Blues;
    // ColorBrewer Blues runs light → dark.
    let low = blues.sample(0.0);
    let high = blues.sample(1.0);
    assert!(low.r() > high.r() && low.g() > high.g());
    // Out-of-range t clamps.
    assert_eq!(blues.sample(-0.5), low);
    assert_eq!(blues.sample(1.5), high);
}

#[test]
fn color_for_normalizes_over_the_range() {
    let cmap = Colormap::Blues;
    let range = ColorRange {
        vmin: 0.0,
        vmax: 10.0,
    };
    assert_eq!(cmap.color_for(0.0, range), cmap.sample(0.0));
    assert_eq!(cmap.color_for(10.0, range), cmap.sample(1.0));
    assert_eq!(cmap.color_for(5.0, range), cmap.sample(0.5));
    assert_eq!(cmap.color_for(-3.0, range), cmap.sample(0.0), "clamps below");
}

#[test]
fn zero_width_range_pins_to_the_low_color() {
    let cmap = Colormap::Reds;
    let range = ColorRange {
        vmin: 0.0,
        vmax: 0.0,
    };
    assert_eq!(
        cmap.color_for(0.0, range),
        cmap.sample(0.0),
        "an all-zero slice must render uniformly in the low color"
    );
}
