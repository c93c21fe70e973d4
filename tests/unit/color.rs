use super::*;

#[test]
fn primaries_convert_exactly() {
    assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb8::new(255, 0, 0));
    assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), Rgb8::new(0, 255, 0));
    assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), Rgb8::new(0, 0, 255));
    assert_eq!(hsv_to_rgb(0.25, 0.0, 1.0), Rgb8::WHITE);
    assert_eq!(hsv_to_rgb(0.9, 1.0, 0.0), Rgb8::BLACK);
}

#[test]
fn hue_stays_in_unit_interval_under_large_steps() {
    let mut hue = 0.0;
    for speed in [0.002, 0.3, 1.0, 2.75, 13.999, 0.05] {
        for _ in 0..500 {
            hue = advance_hue(hue, speed);
            assert!((0.0..1.0).contains(&hue), "hue {hue} escaped");
        }
    }
}

#[test]
fn hue_wraps_multiple_times_in_one_step() {
    let hue = advance_hue(0.9, 3.2);
    assert!((hue - 0.1).abs() < 1e-9);
}

#[test]
fn solid_ignores_depth() {
    for i in 0..10 {
        assert_eq!(layer_hsv(0.3, ColorMode::Solid, i, 10), Hsv::new(0.3, 1.0, 1.0));
    }
}

#[test]
fn dual_shifts_odd_layers_by_half() {
    assert_eq!(layer_hsv(0.2, ColorMode::Dual, 0, 10).h, 0.2);
    assert!((layer_hsv(0.2, ColorMode::Dual, 1, 10).h - 0.7).abs() < 1e-12);
    assert!((layer_hsv(0.8, ColorMode::Dual, 3, 10).h - 0.3).abs() < 1e-12);
}

#[test]
fn rainbow_offsets_and_wraps() {
    assert!((layer_hsv(0.0, ColorMode::Rainbow, 4, 10).h - 0.2).abs() < 1e-12);
    let h = layer_hsv(0.9, ColorMode::Rainbow, 5, 10).h;
    assert!((h - 0.15).abs() < 1e-9);
}

#[test]
fn fog_fades_with_depth() {
    let hsv = layer_hsv(0.42, ColorMode::Fog, 5, 10);
    assert_eq!(hsv.h, 0.42);
    assert!((hsv.s - 0.5).abs() < 1e-12);
    assert!((hsv.v - 0.5).abs() < 1e-12);

    assert_eq!(layer_hsv(0.42, ColorMode::Fog, 0, 10).v, 1.0);
    assert!(layer_hsv(0.42, ColorMode::Fog, 9, 10).v < 0.11);
}

#[test]
fn color_mode_cycles_through_all() {
    let mut m = ColorMode::Solid;
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(m);
        m = m.cycle();
    }
    assert_eq!(m, ColorMode::Solid);
    assert_eq!(seen, ColorMode::ALL.to_vec());
}
