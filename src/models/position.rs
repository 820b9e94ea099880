//! Fretboard positions produced by the optimizer

use serde::{Deserialize, Serialize};

/// A scored string/fret option for one note. Generated and discarded per note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub string: u8,
    pub fret: u8,
    pub score: i32,
}

/// The position chosen for one note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignedPosition {
    pub string: u8,
    pub fret: u8,
    /// No string can reach the note; `string`/`fret` hold the 0/0 sentinel
    pub unreachable: bool,
}

impl AssignedPosition {
    /// Sentinel returned for a note no string can reach
    pub const UNREACHABLE: AssignedPosition = AssignedPosition {
        string: 0,
        fret: 0,
        unreachable: true,
    };

    pub fn placed(string: u8, fret: u8) -> Self {
        AssignedPosition {
            string,
            fret,
            unreachable: false,
        }
    }

    pub fn is_placed(&self) -> bool {
        !self.unreachable
    }
}

impl From<Candidate> for AssignedPosition {
    fn from(candidate: Candidate) -> Self {
        AssignedPosition::placed(candidate.string, candidate.fret)
    }
}

/// One note of an optimized riff: the input pitch and where it was placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabNote {
    /// Input pitch number; `None` when a frequency had no pitch
    pub pitch: Option<i32>,
    pub string: u8,
    pub fret: u8,
    pub unreachable: bool,
}

impl TabNote {
    pub fn new(pitch: Option<i32>, position: AssignedPosition) -> Self {
        TabNote {
            pitch,
            string: position.string,
            fret: position.fret,
            unreachable: position.unreachable,
        }
    }

    pub fn position(&self) -> AssignedPosition {
        AssignedPosition {
            string: self.string,
            fret: self.fret,
            unreachable: self.unreachable,
        }
    }
}

/// Where the hand was after the last successfully placed note.
///
/// Both fields start empty (unanchored). An unreachable note leaves the state
/// untouched, so the next note is scored against the last placed one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerState {
    pub previous_fret: Option<u8>,
    pub previous_string: Option<u8>,
}

impl OptimizerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the -1 "none" sentinels used at the JavaScript boundary.
    /// Any negative or out-of-range value means "none".
    pub fn from_sentinels(previous_fret: i32, previous_string: i32) -> Self {
        OptimizerState {
            previous_fret: u8::try_from(previous_fret).ok(),
            previous_string: u8::try_from(previous_string).ok(),
        }
    }

    pub fn is_anchored(&self) -> bool {
        self.previous_fret.is_some() || self.previous_string.is_some()
    }

    /// Carry the state forward past one resolved note
    pub fn advance(&mut self, position: &AssignedPosition) {
        if position.is_placed() {
            self.previous_fret = Some(position.fret);
            self.previous_string = Some(position.string);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sentinels() {
        assert_eq!(OptimizerState::from_sentinels(-1, -1), OptimizerState::new());
        let state = OptimizerState::from_sentinels(5, 2);
        assert_eq!(state.previous_fret, Some(5));
        assert_eq!(state.previous_string, Some(2));
        assert!(state.is_anchored());
        assert!(!OptimizerState::from_sentinels(-1, -1).is_anchored());
    }

    #[test]
    fn test_advance_only_on_success() {
        let mut state = OptimizerState::new();
        state.advance(&AssignedPosition::UNREACHABLE);
        assert!(!state.is_anchored());

        state.advance(&AssignedPosition::placed(3, 7));
        assert_eq!(state.previous_string, Some(3));
        assert_eq!(state.previous_fret, Some(7));

        state.advance(&AssignedPosition::UNREACHABLE);
        assert_eq!(state.previous_string, Some(3));
        assert_eq!(state.previous_fret, Some(7));
    }

    #[test]
    fn test_tab_note_serialization() {
        let note = TabNote::new(Some(61), AssignedPosition::placed(4, 2));
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"pitch":61,"string":4,"fret":2,"unreachable":false}"#);
        assert_eq!(note.position(), AssignedPosition::placed(4, 2));
    }
}
