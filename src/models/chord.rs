//! Chord annotation models
//!
//! A `ChordAnnotation` is one chord element on the page. Its original text
//! is fixed when the sheet is loaded; the display text is always derived
//! from it and never fed back into a transposition.

use serde::{Deserialize, Serialize};

/// One chord element on the sheet
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChordAnnotation {
    /// Chord as authored, e.g. "[Am7/G]"
    original_text: String,

    /// Text currently shown for the chord
    pub display_text: String,
}

impl ChordAnnotation {
    pub fn new(original_text: impl Into<String>) -> Self {
        let original_text = original_text.into();
        Self {
            display_text: original_text.clone(),
            original_text,
        }
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }
}

/// Root, opaque quality and optional bass of a chord symbol
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ParsedChord {
    pub root: String,

    /// Everything between root and bass, kept verbatim ("m7", "sus4", "")
    pub quality: String,

    pub bass: Option<String>,
}

/// Location of a chord inside an annotation's text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChordMatch {
    /// Byte offset of the first matched character (the opening bracket if any)
    pub start: usize,

    /// Byte offset one past the last matched character
    pub end: usize,

    /// Whether the chord was enclosed in `[` `]`
    pub bracketed: bool,

    pub chord: ParsedChord,
}

impl ChordMatch {
    /// Rebuild `text` with this match replaced by `root`/`bass`, keeping the
    /// quality and the delimiters as captured
    pub fn splice(&self, text: &str, root: &str, bass: Option<&str>) -> String {
        let mut out = String::with_capacity(text.len() + 2);
        out.push_str(&text[..self.start]);
        if self.bracketed {
            out.push('[');
        }
        out.push_str(root);
        out.push_str(&self.chord.quality);
        if let Some(bass) = bass {
            out.push('/');
            out.push_str(bass);
        }
        if self.bracketed {
            out.push(']');
        }
        out.push_str(&text[self.end..]);
        out
    }
}
