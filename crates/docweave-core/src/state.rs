//! The block-transition state machine.
//!
//! The converter carries exactly one piece of state across lines: the
//! classification of the previously processed line. The only edge that
//! triggers output of its own is PROSE→CODE, which must emit the
//! block-start markup exactly once per maximal code run.

use serde::{Deserialize, Serialize};

use crate::enums::Classification;

/// The action to take before rendering the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// No block boundary was crossed.
    None,
    /// A code run begins here; emit the block-start markup first.
    StartCodeBlock,
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::None => write!(f, "none"),
            Transition::StartCodeBlock => write!(f, "start-code-block"),
        }
    }
}

/// Tracks the classification of the previously processed line.
///
/// The previous classification initializes to [`Classification::Code`]:
/// no block-start is pending before the very first line, so a stream
/// that opens with code must not emit a spurious marker, and a stream
/// that opens with prose needs no marker either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamState {
    previous: Classification,
}

impl StreamState {
    /// Create the initial state, with the previous classification
    /// pinned to `Code`.
    pub fn new() -> Self {
        Self {
            previous: Classification::Code,
        }
    }

    /// The classification of the previously processed line.
    pub fn previous(&self) -> Classification {
        self.previous
    }

    /// Feed the current line's classification and advance.
    ///
    /// Returns the action to apply before the current line's own
    /// output. The state advances unconditionally, so each call
    /// accounts for exactly one processed line.
    pub fn observe(&mut self, current: Classification) -> Transition {
        let action = match (self.previous, current) {
            (Classification::Prose, Classification::Code) => Transition::StartCodeBlock,
            _ => Transition::None,
        };
        self.previous = current;
        action
    }
}

impl Default for StreamState {
    fn default() -> Self {
        Self::new()
    }
}
