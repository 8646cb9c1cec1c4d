pub mod controller;
pub mod lookup_table;
pub mod rewrite;
pub mod shift;
pub mod song_text;

pub use controller::{DisplayUpdate, TranspositionController};
pub use lookup_table::{pitch_class, pitch_class_enharmonic, FLAT_NOTES, SHARP_NOTES};
pub use rewrite::rewrite_chord;
pub use shift::{shift_note, shift_note_enharmonic};
pub use song_text::{key_preference, transpose_song_text};
