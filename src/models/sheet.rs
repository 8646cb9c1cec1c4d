//! Prepared song sheet lines

use serde::{Deserialize, Serialize};

/// One rendered line of a song sheet
///
/// `chord` holds the chord layer as markup (chords wrapped in spans), or
/// the whole header text for a section header. `lyric` is plain text.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SheetLine {
    pub chord: String,
    pub lyric: String,

    /// True for "Verse", "Chorus:" and similar header lines
    #[serde(default)]
    pub is_section_header: bool,
}

impl SheetLine {
    pub fn new(chord: impl Into<String>, lyric: impl Into<String>) -> Self {
        Self {
            chord: chord.into(),
            lyric: lyric.into(),
            is_section_header: false,
        }
    }

    pub fn section_header(text: impl Into<String>) -> Self {
        Self {
            chord: text.into(),
            lyric: String::new(),
            is_section_header: true,
        }
    }
}
