//! Parsing module for the song sheet
//!
//! Small hand-written parsers for chord symbols in annotation text and for
//! the free-text offset field, plus the strict bracketed-chord grammar used
//! on whole song texts.

pub mod bracketed;
pub mod chord;
pub mod steps;

// Re-export commonly used types
pub use bracketed::{extract_bracketed_chords, BRACKETED_CHORD_REGEX};
pub use chord::{find_chord, parse_chord, pitch_name_len};
pub use steps::parse_steps;
