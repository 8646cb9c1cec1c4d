//! Transposition controller
//!
//! Owns the session's `TranspositionState` and the chord annotations it
//! applies to. The setters are the only way to change offset or
//! preference, and every change re-derives all display texts from the
//! annotations' original text.

use serde::{Deserialize, Serialize};
use crate::models::{AccidentalPreference, ChordAnnotation, TranspositionState};
use crate::parse::parse_steps;
use super::rewrite::rewrite_chord;

/// New display text for the annotation at `index`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DisplayUpdate {
    pub index: usize,
    pub text: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TranspositionController {
    state: TranspositionState,
    annotations: Vec<ChordAnnotation>,
}

impl TranspositionController {
    /// Create a controller and render the annotations for `state`
    pub fn new<I, S>(state: TranspositionState, originals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut controller = Self {
            state,
            annotations: originals.into_iter().map(ChordAnnotation::new).collect(),
        };
        controller.apply();
        controller
    }

    pub fn state(&self) -> TranspositionState {
        self.state
    }

    pub fn offset(&self) -> i32 {
        self.state.offset()
    }

    pub fn preference(&self) -> AccidentalPreference {
        self.state.preference()
    }

    pub fn annotations(&self) -> &[ChordAnnotation] {
        &self.annotations
    }

    /// Set the offset (clamped) and re-render; returns the stored offset
    pub fn set_offset(&mut self, offset: i32) -> i32 {
        let clamped = self.state.set_offset(offset);
        log::debug!("transpose: offset {} (requested {})", clamped, offset);
        self.apply();
        clamped
    }

    /// Move the offset by `delta` semitones, as the +/- buttons do
    pub fn transpose_by(&mut self, delta: i32) -> i32 {
        self.set_offset(self.state.offset().saturating_add(delta))
    }

    /// Set the offset from the raw numeric field; unparsable text means 0
    pub fn set_offset_from_input(&mut self, raw: &str) -> i32 {
        self.set_offset(parse_steps(raw))
    }

    pub fn reset(&mut self) -> i32 {
        self.set_offset(0)
    }

    /// Store a new preference and re-render with the current offset
    pub fn set_preference(&mut self, preference: AccidentalPreference) {
        log::debug!("transpose: preference '{}'", preference);
        self.state.set_preference(preference);
        self.apply();
    }

    /// Current display text of every annotation, in document order
    pub fn display_texts(&self) -> Vec<String> {
        self.annotations.iter().map(|a| a.display_text.clone()).collect()
    }

    pub fn display_updates(&self) -> Vec<DisplayUpdate> {
        self.annotations
            .iter()
            .enumerate()
            .map(|(index, a)| DisplayUpdate {
                index,
                text: a.display_text.clone(),
            })
            .collect()
    }

    fn apply(&mut self) {
        let steps = self.state.offset();
        let preference = self.state.preference();
        for annotation in &mut self.annotations {
            annotation.display_text = rewrite_chord(annotation.original_text(), steps, preference);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(originals: &[&str]) -> TranspositionController {
        TranspositionController::new(TranspositionState::default(), originals.iter().copied())
    }

    #[test]
    fn test_initial_render_uses_initial_state() {
        let c = TranspositionController::new(
            TranspositionState::new(2, AccidentalPreference::Sharp),
            ["[G]", "[Em]"],
        );
        assert_eq!(c.display_texts(), vec!["[A]", "[F#m]"]);
    }

    #[test]
    fn test_set_offset_clamps() {
        let mut c = controller(&["[C]"]);
        assert_eq!(c.set_offset(15), 11);
        assert_eq!(c.display_texts(), vec!["[B]"]);
        assert_eq!(c.set_offset(-20), -11);
        assert_eq!(c.display_texts(), vec!["[C#]"]);
    }

    #[test]
    fn test_transpose_by_accumulates_offset_not_text() {
        let mut c = controller(&["[G]"]);
        c.set_preference(AccidentalPreference::Sharp);
        c.transpose_by(2);
        c.transpose_by(2);
        assert_eq!(c.offset(), 4);
        assert_eq!(c.display_texts(), vec!["[B]"]);
        assert_eq!(c.annotations()[0].original_text(), "[G]");
    }

    #[test]
    fn test_transpose_by_stops_at_bounds() {
        let mut c = controller(&["[C]"]);
        for _ in 0..10 {
            c.transpose_by(2);
        }
        assert_eq!(c.offset(), 11);
        c.transpose_by(i32::MIN);
        assert_eq!(c.offset(), -11);
    }

    #[test]
    fn test_set_preference_is_idempotent() {
        let mut c = controller(&["[C]", "[Am7/G]"]);
        c.set_offset(1);
        c.set_preference(AccidentalPreference::Flat);
        let first = c.display_texts();
        c.set_preference(AccidentalPreference::Flat);
        assert_eq!(c.display_texts(), first);
        assert_eq!(first, vec!["[Db]", "[Bbm7/Ab]"]);
    }

    #[test]
    fn test_input_field() {
        let mut c = controller(&["[D]"]);
        assert_eq!(c.set_offset_from_input(" 3 "), 3);
        assert_eq!(c.display_texts(), vec!["[F]"]);
        assert_eq!(c.set_offset_from_input("three"), 0);
        assert_eq!(c.display_texts(), vec!["[D]"]);
        assert_eq!(c.set_offset_from_input("-40"), -11);
    }

    #[test]
    fn test_reset() {
        let mut c = controller(&["[E]"]);
        c.set_offset(5);
        assert_eq!(c.reset(), 0);
        assert_eq!(c.display_texts(), vec!["[E]"]);
    }

    #[test]
    fn test_display_updates_are_indexed() {
        let mut c = controller(&["[C]", "no chord"]);
        c.set_offset(2);
        let updates = c.display_updates();
        assert_eq!(updates[0], DisplayUpdate { index: 0, text: "[D]".to_string() });
        assert_eq!(updates[1], DisplayUpdate { index: 1, text: "no chord".to_string() });
    }
}
