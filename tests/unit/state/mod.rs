use super::*;
use crate::state::features::MotionMode;

fn state() -> AnimationState {
    AnimationState::new(
        Settings::default(),
        Limits::default(),
        300.0,
        &mut Rng64::new(3),
    )
}

#[test]
fn layer_count_saturates() {
    let mut s = state();
    s.adjust_layers(-100);
    assert_eq!(s.settings().layer_count, 1);
    s.adjust_layers(1000);
    assert_eq!(s.settings().layer_count, 60);
}

#[test]
fn thickness_saturates() {
    let mut s = state();
    s.adjust_thickness(-10);
    assert_eq!(s.settings().thickness, 1);
    s.adjust_thickness(500);
    assert_eq!(s.settings().thickness, 40);
}

#[test]
fn toggling_selects_knob_for_adjustment() {
    let mut s = state();
    assert_eq!(s.selected(), FeatureId::Color);
    s.toggle_feature(FeatureId::Parallax);
    assert_eq!(s.selected(), FeatureId::Parallax);
    assert!(s.features().parallax.mode);
    s.nudge_selected(3);
    assert_eq!(s.features().parallax.knob.value(), 23.0);
    s.nudge_selected(-1000);
    assert_eq!(s.features().parallax.knob.value(), 0.0);
}

#[test]
fn hue_wraps_after_many_frames() {
    let mut s = state();
    s.select(FeatureId::Color);
    for _ in 0..1000 {
        s.nudge_selected(1);
    }
    assert_eq!(s.features().color.knob.value(), 0.05);
    for _ in 0..10_000 {
        s.advance_hue();
        assert!((0.0..1.0).contains(&s.settings().hue));
    }
}

#[test]
fn replace_settings_clamps_into_limits() {
    let mut s = state();
    let wild = Settings {
        layer_count: 999,
        thickness: 0,
        hue: 7.25,
        ..Settings::default()
    };
    s.replace_settings(wild);
    assert_eq!(s.settings().layer_count, 60);
    assert_eq!(s.settings().thickness, 1);
    assert_eq!(s.settings().hue, 0.25);
}

#[test]
fn noise_seeds_are_fixed_and_in_range() {
    let s = state();
    for i in 0..60 {
        let seed = s.noise_seed(i);
        assert!((0.0..100.0).contains(&seed));
    }
    assert_eq!(s.noise_seed(61), s.noise_seed(1));
    let again = state();
    assert_eq!(again.noise_seed(5), s.noise_seed(5));
}

#[test]
fn swarm_walk_is_damped() {
    let mut s = state();
    s.toggle_feature(FeatureId::Motion);
    s.toggle_feature(FeatureId::Motion);
    assert_eq!(s.features().motion.mode, MotionMode::Swarm);
    let mut rng = Rng64::new(11);
    for _ in 0..2000 {
        s.advance_motion(&mut rng);
    }
    // Each step adds at most 1 per axis and damps by 5%, so offsets stay under 19.
    for i in 0..60 {
        let o = s.swarm_offset(i);
        assert!(o.x.abs() < 19.0 && o.y.abs() < 19.0);
    }
    assert_eq!(s.swarm_offset(500), Vec2::ZERO);
}

#[test]
fn orbit_advances_with_motion_speed() {
    let mut s = state();
    s.toggle_feature(FeatureId::Motion);
    s.nudge_selected(10);
    let mut rng = Rng64::new(0);
    s.advance_motion(&mut rng);
    assert!((s.orbit_angle - 0.02).abs() < 1e-12);
}
