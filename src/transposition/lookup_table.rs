//! Note spelling tables for semitone transposition
//!
//! Both tables are indexed by pitch class (C=0 … B=11), so
//! `SHARP_NOTES[i]` and `FLAT_NOTES[i]` always name the same pitch.
//!
//! Example:
//!   pitch_class("C#") → Some(1)
//!   pitch_class("Db") → Some(1)
//!   spell(1, Flat)    → "Db"
//!   spell(1, Sharp)   → "C#"

use crate::models::AccidentalPreference;

pub const PITCH_CLASSES: usize = 12;

pub const SHARP_NOTES: [&str; PITCH_CLASSES] =
    ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

pub const FLAT_NOTES: [&str; PITCH_CLASSES] =
    ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"];

/// Pitch class of a note name found in either table
///
/// The sharp table is searched first. Names in neither table (Cb, E#,
/// lowercase, double accidentals) have no pitch class here.
pub fn pitch_class(name: &str) -> Option<usize> {
    SHARP_NOTES
        .iter()
        .position(|&n| n == name)
        .or_else(|| FLAT_NOTES.iter().position(|&n| n == name))
}

/// Spellings outside both tables, with the in-table name they sound as
pub const ENHARMONIC_SPELLINGS: [(&str, &str); 4] = [("B#", "C"), ("E#", "F"), ("Cb", "B"), ("Fb", "E")];

/// Pitch class of a note name, also resolving B#, E#, Cb and Fb
pub fn pitch_class_enharmonic(name: &str) -> Option<usize> {
    pitch_class(name).or_else(|| {
        ENHARMONIC_SPELLINGS
            .iter()
            .find(|(spelling, _)| *spelling == name)
            .and_then(|(_, natural)| pitch_class(natural))
    })
}

/// Table used for output under a preference; sharps unless flats are asked for
pub fn table_for(preference: AccidentalPreference) -> &'static [&'static str; PITCH_CLASSES] {
    if preference.prefers_flats() {
        &FLAT_NOTES
    } else {
        &SHARP_NOTES
    }
}

/// Name of a pitch class under a preference
pub fn spell(pitch_class: usize, preference: AccidentalPreference) -> &'static str {
    table_for(preference)[pitch_class % PITCH_CLASSES]
}
