use super::*;

use crate::foundation::math::Rng64;
use crate::state::{Limits, Settings};

fn state() -> AnimationState {
    AnimationState::new(
        Settings::default(),
        Limits::default(),
        300.0,
        &mut Rng64::new(1),
    )
}

#[test]
fn lists_core_parameters_and_every_feature() {
    let lines = status_lines(&state(), &WaypointDeck::new());
    assert_eq!(lines[0], "Shape: Triangle [-/=]");
    assert_eq!(lines[1], "Layers: 16 [Q/W]");
    assert!(lines[4].starts_with("Adjusting: color_mode Spd 0.0020"));
    assert_eq!(lines.len(), 5 + 7 + 2);
    assert!(lines.iter().any(|l| l == " [Z] parallax: Off (Amp 20.0000)"));
    assert!(lines.iter().any(|l| l.starts_with(">[C] color_mode: Solid")));
}

#[test]
fn waypoint_line_is_one_based() {
    let s = state();
    let mut deck = WaypointDeck::new();
    assert_eq!(
        status_lines(&s, &deck).last().unwrap(),
        "Waypoint: none [J add]"
    );
    deck.append(&s);
    deck.append(&s);
    assert!(
        status_lines(&s, &deck)
            .last()
            .unwrap()
            .starts_with("Waypoint: 2/2")
    );
}

#[test]
fn preset_legend_names_all_keys() {
    let lines = status_lines(&state(), &WaypointDeck::new());
    let legend = &lines[lines.len() - 2];
    assert_eq!(
        legend,
        "Presets: 1 Cathedral  2 Galactic  3 Jelly  4 Crystal  5 Default"
    );
}
