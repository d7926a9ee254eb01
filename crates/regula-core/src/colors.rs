//! ANSI palette for automaton dumps and simulation traces.

use crate::StateId;

/// Escape codes keyed by what they highlight. Every field is empty when
/// colors are off, so callers interpolate unconditionally.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    /// State IDs (blue).
    pub state: &'static str,
    /// Consumed symbols and accept verdicts (green).
    pub symbol: &'static str,
    /// Unlabeled edges and state sets.
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        state: "\x1b[34m",
        symbol: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        state: "",
        symbol: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    /// `S{id}`, highlighted.
    pub fn state_id(&self, id: StateId) -> String {
        format!("{}S{}{}", self.state, id, self.reset)
    }
}
