//! Strict bracketed chord grammar used on whole song texts
//!
//! Unlike annotation extraction, which treats everything after the root as
//! opaque, song text is only scanned for chords of a known shape so that
//! bracketed remarks such as "[x2]" or "[Solo]" are left alone.

use once_cell::sync::Lazy;
use regex::Regex;

/// Bracketed chord: root, optional quality, extension, alterations and bass
pub static BRACKETED_CHORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(\[",
        r"[A-G][#b]?",                      // root
        r"(?:m|min|maj|sus|dim|aug|m7b5)?", // quality
        r"(?:\d+|add\d+)?",                 // extension (7, 9, 13, add9)
        r"(?:[#b]\d+)*",                    // alterations (b5, #11)
        r"(?:/[A-G][#b]?)?",                // slash bass
        r"\])",
    ))
    .expect("bracketed chord pattern is valid")
});

/// All bracketed chords in `text`, in order of appearance
pub fn extract_bracketed_chords(text: &str) -> Vec<String> {
    BRACKETED_CHORD_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_in_order() {
        let chords = extract_bracketed_chords("[G]Amazing [D/F#]grace, how [Em7]sweet");
        assert_eq!(chords, vec!["[G]", "[D/F#]", "[Em7]"]);
    }

    #[test]
    fn test_known_shapes() {
        for chord in ["[Cmaj7]", "[Bbm7b5]", "[F#sus4]", "[Dadd9]", "[E7#9]", "[Abdim]", "[C7b9#11/E]"] {
            assert!(BRACKETED_CHORD_REGEX.is_match(chord), "{}", chord);
        }
    }

    #[test]
    fn test_ignores_remarks() {
        assert!(extract_bracketed_chords("[x2] [Solo] [N.C.] [h]").is_empty());
    }
}
