//! Whole-song transposition
//!
//! Rewrites every strictly-formed bracketed chord in a block of song text.
//! Without an explicit preference each chord is spelled after its own root:
//! roots of sharp keys keep sharps, roots of flat keys get flats.
//! Song texts may also spell notes as B#, E#, Cb or Fb; those are read as
//! their in-table equivalents before shifting.

use crate::models::AccidentalPreference;
use crate::parse::{find_chord, BRACKETED_CHORD_REGEX};
use super::rewrite::rewrite_chord_with;
use super::shift::shift_note_enharmonic;

const SHARP_KEYS: [&str; 8] = ["C", "G", "D", "A", "E", "B", "F#", "C#"];

/// Accidental preference implied by a key name such as "D major" or "Bb"
pub fn key_preference(key: &str) -> AccidentalPreference {
    let root = key.split_whitespace().next().unwrap_or("");
    if SHARP_KEYS.contains(&root) {
        AccidentalPreference::Sharp
    } else {
        AccidentalPreference::Flat
    }
}

/// Transpose every bracketed chord in `song_text` by `steps` semitones
pub fn transpose_song_text(
    song_text: &str,
    steps: i32,
    preference: Option<AccidentalPreference>,
) -> String {
    BRACKETED_CHORD_REGEX
        .replace_all(song_text, |caps: &regex::Captures| {
            let chord = &caps[1];
            let preference = preference.unwrap_or_else(|| {
                find_chord(chord)
                    .map(|m| key_preference(&m.chord.root))
                    .unwrap_or_default()
            });
            rewrite_chord_with(chord, |note| shift_note_enharmonic(note, steps, preference))
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_preference() {
        assert_eq!(key_preference("D major"), AccidentalPreference::Sharp);
        assert_eq!(key_preference("F#"), AccidentalPreference::Sharp);
        assert_eq!(key_preference("Bb minor"), AccidentalPreference::Flat);
        assert_eq!(key_preference("F"), AccidentalPreference::Flat);
        assert_eq!(key_preference(""), AccidentalPreference::Flat);
    }

    #[test]
    fn test_transposes_every_chord() {
        let text = "[G]Amazing [D/F#]grace\n[C]how [G]sweet";
        assert_eq!(
            transpose_song_text(text, 2, Some(AccidentalPreference::Sharp)),
            "[A]Amazing [E/G#]grace\n[D]how [A]sweet"
        );
    }

    #[test]
    fn test_preference_from_each_root() {
        // F is a flat key, so F+1 is spelled Gb; C is a sharp key, so C+1 is C#
        assert_eq!(transpose_song_text("[F] [C]", 1, None), "[Gb] [C#]");
    }

    #[test]
    fn test_enharmonic_spellings_are_transposed() {
        assert_eq!(
            transpose_song_text("[Cb] [E#] [Fb/B#]", 1, Some(AccidentalPreference::Sharp)),
            "[C] [F#] [F/C#]"
        );
        assert_eq!(
            transpose_song_text("[Cbmaj7]", 2, Some(AccidentalPreference::Flat)),
            "[Dbmaj7]"
        );
    }

    #[test]
    fn test_remarks_untouched() {
        assert_eq!(
            transpose_song_text("[Intro x2] [Am]", 3, Some(AccidentalPreference::Flat)),
            "[Intro x2] [Cm]"
        );
    }
}
