// Gesture mode: decided fresh every frame from the index and middle fingers.

use crate::fingers::{Finger, FingerStates};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureMode {
    /// No hand, or a finger pattern we don't act on.
    #[default]
    Idle,
    /// Index + middle up: pick a tool from the header.
    Select,
    /// Only the index up: draw.
    Draw,
}

impl GestureMode {
    /// `None` means no hand (or nothing decidable) this frame.
    pub fn resolve(states: Option<&FingerStates>) -> Self {
        let Some(states) = states else {
            return GestureMode::Idle;
        };
        match (states.is_up(Finger::Index), states.is_up(Finger::Middle)) {
            (true, true) => GestureMode::Select,
            (true, false) => GestureMode::Draw,
            _ => GestureMode::Idle,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GestureMode::Idle => "IDLE",
            GestureMode::Select => "SELECT",
            GestureMode::Draw => "DRAW",
        }
    }
}
