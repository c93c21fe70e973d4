//! Status overlay text. Layout and drawing belong to the render sink.

use crate::state::AnimationState;
use crate::state::features::{FeatureId, FeatureSet};
use crate::state::preset::Preset;
use crate::state::waypoint::WaypointDeck;

pub fn status_lines(state: &AnimationState, deck: &WaypointDeck) -> Vec<String> {
    let settings = state.settings();
    let features = &settings.features;
    let selected = state.selected();
    let knob = features.knob(selected);

    let mut lines = vec![
        format!("Shape: {} [-/=]", settings.shape.name()),
        format!("Layers: {} [Q/W]", settings.layer_count),
        format!("Thickness: {} [A/S]", settings.thickness),
        format!("Twist: {:.3} [Left/Right]", settings.twist),
        format!(
            "Adjusting: {} {} {:.4} [Up/Down]",
            selected.name(),
            knob.label(),
            knob.value()
        ),
    ];

    for (id, key) in FeatureId::ALL.into_iter().zip(['Z', 'X', 'C', 'V', 'B', 'N', 'M']) {
        let marker = if id == selected { '>' } else { ' ' };
        let knob = features.knob(id);
        lines.push(format!(
            "{marker}[{key}] {}: {} ({} {:.4})",
            id.name(),
            mode_label(features, id),
            knob.label(),
            knob.value()
        ));
    }

    let legend: Vec<String> = Preset::ALL
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{} {}", i + 1, p.name()))
        .collect();
    lines.push(format!("Presets: {}", legend.join("  ")));

    lines.push(match deck.cursor() {
        Some(cursor) => format!(
            "Waypoint: {}/{} [J add, H update, K/L nav, G delete]",
            cursor + 1,
            deck.len()
        ),
        None => "Waypoint: none [J add]".to_string(),
    });
    lines
}

fn mode_label(features: &FeatureSet, id: FeatureId) -> &'static str {
    let on_off = |on: bool| if on { "On" } else { "Off" };
    match id {
        FeatureId::Parallax => on_off(features.parallax.mode),
        FeatureId::Breathing => on_off(features.breathing.mode),
        FeatureId::Color => features.color.mode.name(),
        FeatureId::Motion => features.motion.mode.name(),
        FeatureId::Trails => on_off(features.trails.mode),
        FeatureId::Physics => features.physics.mode.name(),
        FeatureId::Chaos => on_off(features.chaos.mode),
    }
}

#[cfg(test)]
#[path = "../tests/unit/hud.rs"]
mod tests;
