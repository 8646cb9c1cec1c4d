//! Transposition state for one page session
//!
//! Holds the semitone offset and the accidental preference. The offset is
//! kept inside [MIN_OFFSET, MAX_OFFSET] by every mutation path.

use serde::{Deserialize, Serialize};
use crate::models::AccidentalPreference;
use crate::parse::steps::parse_steps;

pub const MIN_OFFSET: i32 = -11;
pub const MAX_OFFSET: i32 = 11;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TranspositionState {
    offset_semitones: i32,
    preference: AccidentalPreference,
}

impl TranspositionState {
    pub fn new(offset: i32, preference: AccidentalPreference) -> Self {
        Self {
            offset_semitones: clamp_offset(offset),
            preference,
        }
    }

    /// Build the initial state from page-supplied values
    ///
    /// `initial_steps` is the raw server value (absent or unparsable means 0),
    /// `preference` the value of whichever preference control is checked.
    pub fn from_page(initial_steps: Option<&str>, preference: Option<&str>) -> Self {
        let offset = initial_steps.map(parse_steps).unwrap_or(0);
        let preference = preference
            .map(AccidentalPreference::from_control_value)
            .unwrap_or_default();
        Self::new(offset, preference)
    }

    pub fn offset(&self) -> i32 {
        self.offset_semitones
    }

    /// Set the offset, clamped; returns the stored value
    pub fn set_offset(&mut self, offset: i32) -> i32 {
        self.offset_semitones = clamp_offset(offset);
        self.offset_semitones
    }

    pub fn preference(&self) -> AccidentalPreference {
        self.preference
    }

    pub fn set_preference(&mut self, preference: AccidentalPreference) {
        self.preference = preference;
    }
}

/// Clamp a requested offset to the supported range
pub fn clamp_offset(offset: i32) -> i32 {
    offset.clamp(MIN_OFFSET, MAX_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_on_construction_and_set() {
        let mut state = TranspositionState::new(40, AccidentalPreference::Sharp);
        assert_eq!(state.offset(), 11);

        assert_eq!(state.set_offset(-20), -11);
        assert_eq!(state.set_offset(15), 11);
        assert_eq!(state.set_offset(-3), -3);
    }

    #[test]
    fn test_from_page_defaults() {
        let state = TranspositionState::from_page(None, None);
        assert_eq!(state.offset(), 0);
        assert_eq!(state.preference(), AccidentalPreference::Unspecified);

        let state = TranspositionState::from_page(Some("abc"), Some(""));
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_from_page_values() {
        let state = TranspositionState::from_page(Some(" -4 "), Some("flat"));
        assert_eq!(state.offset(), -4);
        assert_eq!(state.preference(), AccidentalPreference::Flat);

        let state = TranspositionState::from_page(Some("30"), Some("sharp"));
        assert_eq!(state.offset(), 11);
    }
}
