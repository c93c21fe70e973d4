use super::*;
use crate::foundation::math::Rng64;
use crate::shape::ShapeKind;
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

fn deck_of_three(s: &mut AnimationState) -> WaypointDeck {
    let mut deck = WaypointDeck::new();
    for layers in [5, 10, 15] {
        s.adjust_layers(layers as i64 - s.settings().layer_count as i64);
        deck.append(s);
    }
    deck
}

#[test]
fn empty_deck_operations_are_noops() {
    let mut s = state();
    let before = *s.settings();
    let mut deck = WaypointDeck::new();
    assert!(!deck.update_current(&s));
    assert!(!deck.prev(&mut s));
    assert!(!deck.next(&mut s));
    assert!(!deck.delete_last(&mut s));
    assert_eq!(*s.settings(), before);
    assert_eq!(deck.cursor(), None);
}

#[test]
fn append_moves_cursor_to_new_waypoint() {
    let mut s = state();
    let deck = deck_of_three(&mut s);
    assert_eq!(deck.len(), 3);
    assert_eq!(deck.cursor(), Some(2));
    assert_eq!(deck.current().unwrap().settings().layer_count, 15);
}

#[test]
fn next_n_times_returns_to_start() {
    let mut s = state();
    let mut deck = deck_of_three(&mut s);
    deck.next(&mut s);
    let start = deck.cursor();
    let start_settings = *s.settings();
    s.adjust_layers(7);
    for _ in 0..deck.len() {
        assert!(deck.next(&mut s));
    }
    assert_eq!(deck.cursor(), start);
    assert_eq!(*s.settings(), start_settings);
}

#[test]
fn prev_wraps_to_the_end() {
    let mut s = state();
    let mut deck = deck_of_three(&mut s);
    deck.next(&mut s);
    assert_eq!(deck.cursor(), Some(0));
    deck.prev(&mut s);
    assert_eq!(deck.cursor(), Some(2));
    assert_eq!(s.settings().layer_count, 15);
}

#[test]
fn snapshots_do_not_alias_live_knobs() {
    let mut s = state();
    let mut deck = WaypointDeck::new();
    s.select(FeatureId::Chaos);
    deck.append(&s);
    s.nudge_selected(5);
    assert_eq!(deck.current().unwrap().settings().features.chaos.knob.value(), 0.1);
    deck.next(&mut s);
    assert_eq!(s.features().chaos.knob.value(), 0.1);
}

#[test]
fn update_current_overwrites_only_cursor_slot() {
    let mut s = state();
    let mut deck = deck_of_three(&mut s);
    deck.next(&mut s); // cursor 0
    s.cycle_shape(true);
    assert!(deck.update_current(&s));
    assert_eq!(deck.get(0).unwrap().settings().shape, ShapeKind::Square);
    assert_eq!(deck.get(1).unwrap().settings().shape, ShapeKind::Triangle);
}

#[test]
fn delete_last_clamps_cursor_and_restores() {
    let mut s = state();
    let mut deck = deck_of_three(&mut s);
    assert_eq!(deck.cursor(), Some(2));
    s.adjust_layers(30);
    assert!(deck.delete_last(&mut s));
    assert_eq!(deck.cursor(), Some(1));
    assert_eq!(s.settings().layer_count, 10);
}

#[test]
fn delete_last_keeps_state_when_cursor_still_valid() {
    let mut s = state();
    let mut deck = deck_of_three(&mut s);
    deck.next(&mut s); // cursor 0, layers 5
    s.adjust_layers(20);
    assert!(deck.delete_last(&mut s));
    assert_eq!(deck.cursor(), Some(0));
    assert_eq!(s.settings().layer_count, 25);
}

#[test]
fn deleting_everything_leaves_state_untouched() {
    let mut s = state();
    let mut deck = WaypointDeck::new();
    deck.append(&s);
    s.adjust_layers(3);
    assert!(deck.delete_last(&mut s));
    assert!(deck.is_empty());
    assert_eq!(deck.cursor(), None);
    assert_eq!(s.settings().layer_count, 19);
}
