//! Chord symbol rewrite
//!
//! Transposes the first chord found in an annotation's text. Root and bass
//! are shifted independently; quality, delimiters and any text around the
//! chord are kept as they are.

use crate::models::AccidentalPreference;
use crate::parse::find_chord;
use super::shift::shift_note;

/// Rewrite the first chord in `original_text`, or return the text unchanged
/// when it holds no chord
pub fn rewrite_chord(original_text: &str, steps: i32, preference: AccidentalPreference) -> String {
    rewrite_chord_with(original_text, |note| shift_note(note, steps, preference))
}

/// Rewrite the first chord in `original_text`, mapping root and bass with `shift`
pub(crate) fn rewrite_chord_with<F>(original_text: &str, shift: F) -> String
where
    F: Fn(&str) -> String,
{
    let Some(found) = find_chord(original_text) else {
        return original_text.to_string();
    };

    let root = shift(&found.chord.root);
    let bass = found.chord.bass.as_deref().map(&shift);

    found.splice(original_text, &root, bass.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use AccidentalPreference::*;

    #[test]
    fn test_slash_chord() {
        assert_eq!(rewrite_chord("[Am7/G]", 2, Sharp), "[Bm7/A]");
        assert_eq!(rewrite_chord("[Am7/G]", 1, Flat), "[Bbm7/Ab]");
        assert_eq!(rewrite_chord("[Am7/G]", 1, Sharp), "[A#m7/G#]");
    }

    #[test]
    fn test_down_a_semitone() {
        assert_eq!(rewrite_chord("[C#]", -1, Flat), "[C]");
        assert_eq!(rewrite_chord("[C]", -1, Flat), "[B]");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(rewrite_chord("not a chord", 3, Sharp), "not a chord");
        assert_eq!(rewrite_chord("", 3, Sharp), "");
        assert_eq!(rewrite_chord("[N.C.]", 3, Sharp), "[N.C.]");
    }

    #[test]
    fn test_zero_offset_respells_only() {
        assert_eq!(rewrite_chord("[Bb]", 0, Flat), "[Bb]");
        assert_eq!(rewrite_chord("[Bb]", 0, Sharp), "[A#]");
    }

    #[test]
    fn test_only_first_chord_rewritten() {
        assert_eq!(rewrite_chord("[G] [D]", 2, Sharp), "[A] [D]");
    }

    #[test]
    fn test_bare_chord() {
        assert_eq!(rewrite_chord("Dsus4/A", 5, Sharp), "Gsus4/D");
    }

    #[test]
    fn test_unknown_bass_is_kept() {
        // "Cb" is in neither spelling table, so only the root moves
        assert_eq!(rewrite_chord("[G/Cb]", 2, Sharp), "[A/Cb]");
    }

    #[test]
    fn test_quality_kept_verbatim() {
        assert_eq!(rewrite_chord("[Ebmaj7#11]", 3, Sharp), "[F#maj7#11]");
        assert_eq!(rewrite_chord("[F#m7b5/C]", -2, Flat), "[Em7b5/Bb]");
    }
}
