use super::*;

use crate::clock::FixedStepClock;
use crate::input::{Key, StaticInput};
use crate::render::RecordingSink;
use crate::state::features::FeatureId;

fn engine() -> Engine {
    Engine::new(ProjectorConfig::default()).unwrap()
}

fn press(keys: &[Key]) -> InputFrame {
    InputFrame {
        pressed: keys.to_vec(),
        ..InputFrame::default()
    }
}

fn hold(keys: &[Key]) -> InputFrame {
    InputFrame {
        held: keys.to_vec(),
        ..InputFrame::default()
    }
}

#[test]
fn pointer_radius_spans_floor_to_near_half_height() {
    let canvas = Canvas::default();
    assert!((pointer_radius(canvas, 0.0) - 7.6).abs() < 1e-9);
    assert!((pointer_radius(canvas, 1000.0) - 380.0).abs() < 1e-9);
    assert!((pointer_radius(canvas, 5000.0) - 380.0).abs() < 1e-9);
    assert!((pointer_radius(canvas, -50.0) - 7.6).abs() < 1e-9);
}

#[test]
fn pointer_rotation_is_zero_at_vertical_center() {
    let canvas = Canvas::default();
    assert_eq!(pointer_rotation_delta(canvas, 400.0, 0.04), 0.0);
    assert!((pointer_rotation_delta(canvas, 800.0, 0.04) - 0.02).abs() < 1e-12);
    assert!((pointer_rotation_delta(canvas, 0.0, 0.04) + 0.02).abs() < 1e-12);
}

#[test]
fn invalid_config_is_rejected() {
    let config = ProjectorConfig {
        spacing_ratio: 1.0,
        ..ProjectorConfig::default()
    };
    assert!(Engine::new(config).is_err());
}

#[test]
fn escape_and_window_close_quit() {
    let mut e = engine();
    assert_eq!(e.update(&press(&[Key::Escape]), 0.0), Control::Quit);
    let close = InputFrame {
        quit: true,
        ..InputFrame::default()
    };
    assert_eq!(e.update(&close, 0.0), Control::Quit);
}

#[test]
fn feature_keys_toggle_and_select() {
    let mut e = engine();
    e.update(&press(&[Key::Z, Key::B]), 0.0);
    assert!(e.state().features().parallax.mode);
    assert!(e.state().features().trails.mode);
    assert_eq!(e.state().selected(), FeatureId::Trails);
}

#[test]
fn held_twist_is_throttled_by_cooldown() {
    let mut e = engine();
    let start = e.state().settings().twist;

    e.update(&hold(&[Key::Right]), 1.0);
    e.update(&hold(&[Key::Right]), 1.01);
    assert!((e.state().settings().twist - (start + 0.002)).abs() < 1e-12);

    e.update(&hold(&[Key::Right]), 1.06);
    assert!((e.state().settings().twist - (start + 0.004)).abs() < 1e-12);
}

#[test]
fn held_up_nudges_selected_knob() {
    let mut e = engine();
    e.update(&press(&[Key::X]), 0.0);
    e.update(&hold(&[Key::Up]), 0.1);
    assert!((e.state().features().breathing.knob.value() - 2.1).abs() < 1e-12);
}

#[test]
fn hue_advances_each_update() {
    let mut e = engine();
    for _ in 0..10 {
        e.update(&InputFrame::default(), 0.0);
    }
    assert!((e.state().settings().hue - 0.02).abs() < 1e-12);
}

#[test]
fn pointer_sets_radius_and_keeps_rotating() {
    let mut e = engine();
    let input = InputFrame {
        pointer: Some(Point::new(1000.0, 800.0)),
        ..InputFrame::default()
    };
    e.update(&input, 0.0);
    assert!((e.state().radius - 380.0).abs() < 1e-9);
    assert!((e.state().base_rotation - 0.02).abs() < 1e-12);

    e.update(&InputFrame::default(), 0.0);
    assert!((e.state().base_rotation - 0.04).abs() < 1e-12);

    e.update(&press(&[Key::Space]), 0.0);
    assert!((e.state().base_rotation - 0.02).abs() < 1e-12);
}

#[test]
fn hud_toggle_fills_overlay() {
    let mut e = engine();
    assert!(e.compose(0.0).overlay.is_empty());
    e.update(&press(&[Key::I]), 0.0);
    assert!(!e.compose(0.0).overlay.is_empty());
}

#[test]
fn waypoint_keys_round_trip() {
    let mut e = engine();
    e.update(&press(&[Key::J]), 0.0);
    e.update(&press(&[Key::W, Key::W, Key::Equals]), 0.0);
    e.update(&press(&[Key::J]), 0.0);
    assert_eq!(e.deck().len(), 2);

    e.update(&press(&[Key::K]), 0.0);
    assert_eq!(e.deck().cursor(), Some(0));
    assert_eq!(e.state().settings().layer_count, 16);

    e.update(&press(&[Key::L]), 0.0);
    assert_eq!(e.state().settings().layer_count, 18);
}

#[test]
fn run_stops_at_max_frames() {
    let mut e = engine();
    let mut sink = RecordingSink::new();
    let mut clock = FixedStepClock::new(e.config().fps);
    let n = e
        .run(&mut StaticInput::default(), &mut clock, &mut sink, Some(5))
        .unwrap();
    assert_eq!(n, 5);
    assert_eq!(sink.frames.len(), 5);
    assert_eq!(e.frame_index(), 5);
    assert_eq!(clock.frame(), 5);
}

#[test]
fn chaos_is_reproducible_per_seed() {
    let frames = |seed: u64| {
        let config = ProjectorConfig {
            seed,
            ..ProjectorConfig::default()
        };
        let mut e = Engine::new(config).unwrap();
        e.update(&press(&[Key::M]), 0.0);
        let mut sink = RecordingSink::new();
        let mut clock = FixedStepClock::new(e.config().fps);
        e.run(&mut StaticInput::default(), &mut clock, &mut sink, Some(3))
            .unwrap();
        sink.frames
    };
    assert_eq!(frames(5), frames(5));
    assert_ne!(frames(5), frames(6));
}
