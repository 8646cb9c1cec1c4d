//! Semitone shift of a single note name

use crate::models::AccidentalPreference;
use super::lookup_table::{pitch_class, pitch_class_enharmonic, spell, PITCH_CLASSES};

/// Shift a note name by `steps` semitones and spell it per `preference`
///
/// Names outside both spelling tables come back unchanged.
pub fn shift_note(name: &str, steps: i32, preference: AccidentalPreference) -> String {
    shift_resolved(pitch_class(name), name, steps, preference)
}

/// `shift_note` that also accepts B#, E#, Cb and Fb, as song texts may
pub fn shift_note_enharmonic(name: &str, steps: i32, preference: AccidentalPreference) -> String {
    shift_resolved(pitch_class_enharmonic(name), name, steps, preference)
}

fn shift_resolved(class: Option<usize>, name: &str, steps: i32, preference: AccidentalPreference) -> String {
    match class {
        Some(idx) => {
            let classes = PITCH_CLASSES as i32;
            let new_idx = (idx as i32 + steps.rem_euclid(classes)).rem_euclid(classes) as usize;
            spell(new_idx, preference).to_string()
        }
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transposition::lookup_table::{FLAT_NOTES, SHARP_NOTES};
    use AccidentalPreference::*;

    fn all_names() -> impl Iterator<Item = &'static str> {
        SHARP_NOTES.iter().chain(FLAT_NOTES.iter()).copied()
    }

    #[test]
    fn test_enharmonic_divergence() {
        assert_eq!(shift_note("C", 1, Flat), "Db");
        assert_eq!(shift_note("C", 1, Sharp), "C#");
        assert_eq!(shift_note("C", 1, Unspecified), "C#");
    }

    #[test]
    fn test_wraps_in_both_directions() {
        assert_eq!(shift_note("B", 1, Sharp), "C");
        assert_eq!(shift_note("C", -1, Sharp), "B");
        assert_eq!(shift_note("Db", -11, Flat), "D");
        assert_eq!(shift_note("A", 11, Flat), "Ab");
    }

    #[test]
    fn test_flat_input_sharp_output() {
        assert_eq!(shift_note("Bb", 2, Sharp), "C");
        assert_eq!(shift_note("Eb", 0, Sharp), "D#");
        assert_eq!(shift_note("F#", 0, Flat), "Gb");
    }

    #[test]
    fn test_unknown_name_passthrough() {
        assert_eq!(shift_note("H", 3, Sharp), "H");
        assert_eq!(shift_note("Cb", 1, Flat), "Cb");
        assert_eq!(shift_note("", 5, Sharp), "");
    }

    #[test]
    fn test_zero_offset_is_identity_within_table() {
        for name in SHARP_NOTES {
            assert_eq!(shift_note(name, 0, Sharp), name);
        }
        for name in FLAT_NOTES {
            assert_eq!(shift_note(name, 0, Flat), name);
        }
    }

    #[test]
    fn test_shift_is_invertible() {
        for pref in [Sharp, Flat] {
            for name in all_names() {
                for steps in -11..=11 {
                    let there = shift_note(name, steps, pref);
                    let back = shift_note(&there, -steps, pref);
                    assert_eq!(pitch_class(&back), pitch_class(name), "{} {} {:?}", name, steps, pref);
                }
            }
        }
        for name in SHARP_NOTES {
            for steps in -11..=11 {
                assert_eq!(shift_note(&shift_note(name, steps, Sharp), -steps, Sharp), name);
            }
        }
    }

    #[test]
    fn test_sharp_and_flat_outputs_are_enharmonic() {
        for name in all_names() {
            for steps in -11..=11 {
                let sharp = shift_note(name, steps, Sharp);
                let flat = shift_note(name, steps, Flat);
                assert_eq!(pitch_class(&sharp), pitch_class(&flat));
            }
        }
    }

    #[test]
    fn test_enharmonic_shift() {
        assert_eq!(shift_note_enharmonic("Cb", 1, Sharp), "C");
        assert_eq!(shift_note_enharmonic("E#", 1, Sharp), "F#");
        assert_eq!(shift_note_enharmonic("B#", -1, Flat), "B");
        assert_eq!(shift_note_enharmonic("Fb", 0, Flat), "E");
        assert_eq!(shift_note_enharmonic("Bb", 2, Sharp), "C");
        assert_eq!(shift_note_enharmonic("H", 2, Sharp), "H");
    }

    #[test]
    fn test_large_steps_do_not_panic() {
        assert_eq!(shift_note("C", 25, Sharp), "C#");
        assert_eq!(shift_note("C", -25, Flat), "B");
        assert_eq!(shift_note("B", i32::MAX, Sharp), shift_note("B", i32::MAX % 12, Sharp));
    }
}
