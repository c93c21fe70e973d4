use super::*;
use crate::foundation::math::Rng64;
use crate::state::Limits;
use crate::state::features::FeatureId;

fn state() -> AnimationState {
    AnimationState::new(
        Settings::default(),
        Limits::default(),
        300.0,
        &mut Rng64::new(1),
    )
}

#[test]
fn default_preset_clears_every_toggle() {
    let mut s = state();
    for id in FeatureId::ALL {
        s.toggle_feature(id);
    }
    s.toggle_hud();
    s.cycle_shape(true);
    assert!(load_preset(&mut s, "Default"));

    let f = s.features();
    for id in FeatureId::ALL {
        assert!(!f.is_active(id), "{} still active", id.name());
    }
    assert!(!f.hud);
    assert_eq!(f.color.mode.index(), 0);
    assert_eq!(f.motion.mode.index(), 0);
    assert_eq!(f.physics.mode.index(), 0);
    assert_eq!(s.settings().shape, ShapeKind::Triangle);
    assert_eq!(s.settings().layer_count, 16);
    assert_eq!(s.settings().twist, 0.02);
}

#[test]
fn cathedral_pins_hue_and_fog() {
    let mut s = state();
    Preset::Cathedral.load(&mut s);
    assert_eq!(s.settings().shape, ShapeKind::Brackets);
    assert_eq!(s.features().color.mode, ColorMode::Fog);
    assert_eq!(s.settings().hue, 0.1);
    assert_eq!(s.settings().layer_count, 20);
    assert_eq!(s.settings().twist, 0.0);
}

#[test]
fn presets_replace_modes_wholesale() {
    let mut s = state();
    Preset::Crystal.load(&mut s);
    assert!(s.features().parallax.mode);
    Preset::Galactic.load(&mut s);
    // Crystal's parallax does not leak into Galactic.
    assert!(!s.features().parallax.mode);
    assert_eq!(s.features().motion.mode, MotionMode::Orbit);
    assert_eq!(s.features().physics.mode, PhysicsMode::Vortex);
    assert!(s.features().trails.mode);
}

#[test]
fn presets_keep_knobs_thickness_and_hue() {
    let mut s = state();
    s.adjust_thickness(5);
    s.select(FeatureId::Breathing);
    s.nudge_selected(10);
    s.advance_hue();
    let hue = s.settings().hue;
    Preset::Jelly.load(&mut s);
    assert_eq!(s.settings().thickness, 8);
    assert_eq!(s.features().breathing.knob.value(), 3.0);
    assert_eq!(s.settings().hue, hue);
    assert!(s.features().breathing.mode);
}

#[test]
fn only_default_changes_hud_visibility() {
    let mut s = state();
    s.toggle_hud();
    for preset in [Preset::Cathedral, Preset::Galactic, Preset::Jelly, Preset::Crystal] {
        preset.load(&mut s);
        assert!(s.features().hud, "{} hid the HUD", preset.name());
    }
    Preset::Default.load(&mut s);
    assert!(!s.features().hud);

    // A hidden HUD stays hidden too.
    Preset::Galactic.load(&mut s);
    assert!(!s.features().hud);
}

#[test]
fn unknown_name_is_noop() {
    let mut s = state();
    s.cycle_shape(true);
    let before = *s.settings();
    assert!(!load_preset(&mut s, "Nebula"));
    assert_eq!(*s.settings(), before);
}

#[test]
fn names_match_case_insensitively() {
    assert_eq!(Preset::from_name("jelly"), Some(Preset::Jelly));
    assert_eq!(Preset::from_name(" CRYSTAL "), Some(Preset::Crystal));
    for p in Preset::ALL {
        assert_eq!(Preset::from_name(p.name()), Some(p));
    }
}
