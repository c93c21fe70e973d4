//! Saved parameter snapshots with a cyclic cursor.

use tracing::debug;

use super::{AnimationState, Settings};

/// Immutable snapshot of an [`AnimationState`]'s settings.
///
/// Holds its own copy of every field, knobs included, so nothing stored here
/// aliases the live state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
    settings: Settings,
}

impl Waypoint {
    pub fn capture(state: &AnimationState) -> Self {
        Self {
            settings: *state.settings(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Hard-cut restore into `state`.
    pub fn restore_into(&self, state: &mut AnimationState) {
        state.replace_settings(self.settings);
    }
}

/// Ordered waypoint collection. When non-empty the cursor always indexes a
/// stored waypoint.
#[derive(Clone, Debug, Default)]
pub struct WaypointDeck {
    items: Vec<Waypoint>,
    cursor: Option<usize>,
}

impl WaypointDeck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<&Waypoint> {
        self.cursor.and_then(|i| self.items.get(i))
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.items.get(index)
    }

    /// Snapshot `state` as a new last waypoint and move the cursor to it.
    pub fn append(&mut self, state: &AnimationState) {
        self.items.push(Waypoint::capture(state));
        self.cursor = Some(self.items.len() - 1);
        debug!(count = self.items.len(), "waypoint appended");
    }

    /// Overwrite the waypoint under the cursor. No-op when empty.
    pub fn update_current(&mut self, state: &AnimationState) -> bool {
        let Some(i) = self.cursor else {
            return false;
        };
        let Some(slot) = self.items.get_mut(i) else {
            return false;
        };
        *slot = Waypoint::capture(state);
        debug!(index = i, "waypoint updated");
        true
    }

    /// Step the cursor back (cyclically) and restore that waypoint.
    pub fn prev(&mut self, state: &mut AnimationState) -> bool {
        self.step(state, -1)
    }

    /// Step the cursor forward (cyclically) and restore that waypoint.
    pub fn next(&mut self, state: &mut AnimationState) -> bool {
        self.step(state, 1)
    }

    /// Remove the highest-index waypoint. If the cursor falls off the end it
    /// is clamped and the new current waypoint is restored.
    pub fn delete_last(&mut self, state: &mut AnimationState) -> bool {
        if self.items.pop().is_none() {
            return false;
        }
        let len = self.items.len();
        if len == 0 {
            self.cursor = None;
            debug!("last waypoint deleted; deck empty");
            return true;
        }
        if let Some(i) = self.cursor
            && i >= len
        {
            self.cursor = Some(len - 1);
            self.items[len - 1].restore_into(state);
        }
        debug!(count = len, "waypoint deleted");
        true
    }

    fn step(&mut self, state: &mut AnimationState, delta: i64) -> bool {
        let len = self.items.len();
        if len == 0 {
            return false;
        }
        let from = self.cursor.unwrap_or(0) as i64;
        let to = (from + delta).rem_euclid(len as i64) as usize;
        self.cursor = Some(to);
        self.items[to].restore_into(state);
        debug!(index = to, count = len, "waypoint restored");
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/waypoint.rs"]
mod tests;
