//! Keyboard-driven drag sensor (impure shell).
//!
//! Stands in for a pointer sensor: a cursor walks the candidate target list
//! supplied by the layout, and lift/drop/cancel intents become the four
//! sensor events. By construction a gesture always arrives as
//! start → over* → end|cancel, which is the ordering the engine assumes.

use crate::state::SensorEvent;

/// Cursor over the current candidate target ids.
#[derive(Debug, Clone, Default)]
pub struct KeyboardSensor {
    candidates: Vec<String>,
    cursor: usize,
    dragging: bool,
}

impl KeyboardSensor {
    /// Idle sensor with no candidates.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a lift is in flight.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Id under the cursor, if any.
    pub fn current(&self) -> Option<&str> {
        self.candidates.get(self.cursor).map(String::as_str)
    }

    /// Replace the candidate list (after every tree or drag-phase change).
    ///
    /// Keeps the cursor on the same id when it survives the refresh,
    /// otherwise clamps into range.
    pub fn refresh(&mut self, candidates: Vec<String>) {
        let previous = self.current().map(str::to_owned);
        self.candidates = candidates;
        self.cursor = previous
            .and_then(|p| self.candidates.iter().position(|c| *c == p))
            .unwrap_or_else(|| self.cursor.min(self.candidates.len().saturating_sub(1)));
    }

    /// Advance the cursor (wrapping). Emits a hover event while dragging.
    pub fn next(&mut self) -> Option<SensorEvent> {
        self.step(1)
    }

    /// Retreat the cursor (wrapping). Emits a hover event while dragging.
    pub fn prev(&mut self) -> Option<SensorEvent> {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> Option<SensorEvent> {
        if self.candidates.is_empty() {
            return None;
        }
        let len = self.candidates.len() as isize;
        self.cursor = ((self.cursor as isize + delta).rem_euclid(len)) as usize;
        if self.dragging {
            Some(SensorEvent::Over {
                over: self.current().map(str::to_owned),
            })
        } else {
            None
        }
    }

    /// Lift the node under the cursor, or drop the lifted node on it.
    pub fn activate(&mut self) -> Option<SensorEvent> {
        let current = self.current()?.to_owned();
        if self.dragging {
            self.dragging = false;
            Some(SensorEvent::End {
                over: Some(current),
            })
        } else {
            self.dragging = true;
            Some(SensorEvent::Start { active: current })
        }
    }

    /// Abort an in-flight drag. No event when idle.
    pub fn cancel(&mut self) -> Option<SensorEvent> {
        if self.dragging {
            self.dragging = false;
            Some(SensorEvent::Cancel)
        } else {
            None
        }
    }
}
