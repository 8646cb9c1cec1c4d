//! WASM API for chord transposition
//!
//! Stateless helpers (`shiftNote`, `transposeChord`, …) plus a session API
//! for pages that wire their own DOM: the controller lives in WASM and every
//! call returns the new steps value and the display text of each chord.

use wasm_bindgen::prelude::*;
use std::sync::Mutex;
use lazy_static::lazy_static;
use crate::error::{SheetError, SheetResult};
use crate::models::{AccidentalPreference, TranspositionState};
use crate::parse;
use crate::transposition::{self, TranspositionController};
use super::helpers::{deserialize, serialize};
use super::types::TranspositionSnapshot;
use crate::{wasm_info, wasm_log};

// WASM-owned transposition session for the current page
lazy_static! {
    static ref SESSION: Mutex<Option<TranspositionController>> = Mutex::new(None);
}

/// Shift a single note name; unknown names come back unchanged
#[wasm_bindgen(js_name = shiftNote)]
pub fn shift_note(name: &str, steps: i32, preference: &str) -> String {
    transposition::shift_note(name, steps, AccidentalPreference::from_control_value(preference))
}

/// Transpose the first chord in `text`
#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord(text: &str, steps: i32, preference: &str) -> String {
    transposition::rewrite_chord(text, steps, AccidentalPreference::from_control_value(preference))
}

/// Split a chord into root, quality and bass; `undefined` if `text` holds none
#[wasm_bindgen(js_name = parseChord)]
pub fn parse_chord(text: &str) -> Result<JsValue, JsValue> {
    serialize(&parse::parse_chord(text), "parseChord serialization error")
}

/// Transpose every bracketed chord in a song text
///
/// Without a preference each chord is spelled after its own root's key.
#[wasm_bindgen(js_name = transposeSongText)]
pub fn transpose_song_text(text: &str, steps: i32, preference: Option<String>) -> String {
    let preference = preference.as_deref().map(AccidentalPreference::from_control_value);
    transposition::transpose_song_text(text, steps, preference)
}

/// "sharp" or "flat" for a key name such as "Eb major"
#[wasm_bindgen(js_name = keyPreference)]
pub fn key_preference(key: &str) -> String {
    transposition::key_preference(key).as_str().to_string()
}

// ============================================================================
// Session API
// ============================================================================

/// Start a session for the page's chords
///
/// # Parameters
/// - `initial_steps`: server-supplied offset (unparsable or absent means 0)
/// - `preference`: value of the checked preference control, if any
/// - `chords_js`: array of authored chord strings, in document order
#[wasm_bindgen(js_name = initTransposition)]
pub fn init_transposition(
    initial_steps: Option<String>,
    preference: Option<String>,
    chords_js: JsValue,
) -> Result<JsValue, JsValue> {
    let chords: Vec<String> = deserialize(chords_js, "initTransposition: chords must be a string array")?;
    let snapshot = start_session(initial_steps.as_deref(), preference.as_deref(), chords)?;
    serialize(&snapshot, "initTransposition serialization error")
}

#[wasm_bindgen(js_name = transposeBy)]
pub fn transpose_by(delta: i32) -> Result<JsValue, JsValue> {
    let snapshot = with_session(|c| {
        c.transpose_by(delta);
    })?;
    serialize(&snapshot, "transposeBy serialization error")
}

#[wasm_bindgen(js_name = setSteps)]
pub fn set_steps(steps: i32) -> Result<JsValue, JsValue> {
    let snapshot = with_session(|c| {
        c.set_offset(steps);
    })?;
    serialize(&snapshot, "setSteps serialization error")
}

/// Apply the raw text of the steps field
#[wasm_bindgen(js_name = setStepsFromInput)]
pub fn set_steps_from_input(raw: &str) -> Result<JsValue, JsValue> {
    let snapshot = with_session(|c| {
        c.set_offset_from_input(raw);
    })?;
    serialize(&snapshot, "setStepsFromInput serialization error")
}

#[wasm_bindgen(js_name = resetSteps)]
pub fn reset_steps() -> Result<JsValue, JsValue> {
    let snapshot = with_session(|c| {
        c.reset();
    })?;
    serialize(&snapshot, "resetSteps serialization error")
}

#[wasm_bindgen(js_name = setPreference)]
pub fn set_preference(preference: &str) -> Result<JsValue, JsValue> {
    let preference = AccidentalPreference::from_control_value(preference);
    let snapshot = with_session(|c| c.set_preference(preference))?;
    serialize(&snapshot, "setPreference serialization error")
}

#[wasm_bindgen(js_name = getTranspositionState)]
pub fn get_transposition_state() -> Result<JsValue, JsValue> {
    let snapshot = with_session(|_| {})?;
    serialize(&snapshot, "getTranspositionState serialization error")
}

/// Replace the session with one for `chords`
pub fn start_session(
    initial_steps: Option<&str>,
    preference: Option<&str>,
    chords: Vec<String>,
) -> SheetResult<TranspositionSnapshot> {
    let state = TranspositionState::from_page(initial_steps, preference);
    wasm_info!(
        "initTransposition: {} chords, steps={}, preference='{}'",
        chords.len(),
        state.offset(),
        state.preference()
    );

    let controller = TranspositionController::new(state, chords);
    let snapshot = TranspositionSnapshot::from(&controller);

    let mut session = SESSION
        .lock()
        .map_err(|e| SheetError::Session(format!("lock failed: {}", e)))?;
    *session = Some(controller);
    Ok(snapshot)
}

/// Run `f` against the current session and snapshot the result
pub fn with_session<F>(f: F) -> SheetResult<TranspositionSnapshot>
where
    F: FnOnce(&mut TranspositionController),
{
    let mut session = SESSION
        .lock()
        .map_err(|e| SheetError::Session(format!("lock failed: {}", e)))?;
    let controller = session
        .as_mut()
        .ok_or_else(|| SheetError::Session("call initTransposition first".to_string()))?;

    f(controller);
    wasm_log!("session: steps={}, preference='{}'", controller.offset(), controller.preference());
    Ok(TranspositionSnapshot::from(&*controller))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stateless_exports() {
        assert_eq!(shift_note("C", 1, "flat"), "Db");
        assert_eq!(shift_note("C", 1, ""), "C#");
        assert_eq!(transpose_chord("[Am7/G]", 2, "sharp"), "[Bm7/A]");
        assert_eq!(transpose_song_text("[F] [C]", 1, None), "[Gb] [C#]");
        assert_eq!(transpose_song_text("[F] [C]", 1, Some("sharp".to_string())), "[F#] [C#]");
        assert_eq!(key_preference("Eb major"), "flat");
    }

    #[test]
    fn test_only_exact_flat_selects_flats() {
        assert_eq!(shift_note("C", 1, "b"), "C#");
        assert_eq!(shift_note("C", 1, "Flat"), "C#");
        assert_eq!(transpose_chord("[C]", 1, " flat "), "[C#]");
        assert_eq!(transpose_chord("[C]", 1, "flat"), "[Db]");
        assert_eq!(transpose_song_text("[C]", 1, Some("FLAT".to_string())), "[C#]");
    }

    // The session is process-wide, so the whole lifecycle runs in one test
    #[test]
    fn test_session_lifecycle() {
        let snapshot = start_session(Some("1"), Some("sharp"), vec!["[G]".to_string(), "[Em/B]".to_string()]).unwrap();
        assert_eq!(snapshot.steps, 1);
        assert_eq!(snapshot.updates[0].text, "[G#]");

        let snapshot = with_session(|c| {
            c.transpose_by(2);
        })
        .unwrap();
        assert_eq!(snapshot.steps, 3);
        assert_eq!(snapshot.updates[1].text, "[Gm/D]");

        let snapshot = with_session(|c| c.set_preference(AccidentalPreference::Flat)).unwrap();
        assert_eq!(snapshot.updates[0].text, "[Bb]");

        let snapshot = with_session(|c| {
            c.set_offset_from_input("nope");
        })
        .unwrap();
        assert_eq!(snapshot.steps, 0);
        assert_eq!(snapshot.updates[0].text, "[G]");
    }
}
