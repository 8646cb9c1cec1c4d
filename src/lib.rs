//! Song Sheet WASM Module
//!
//! Chord transposition for song sheets: chords are rewritten from their
//! authored text by a signed semitone offset with sharp or flat spelling.
//! The module also prepares raw song text into chord/lyric line pairs,
//! decides the column layout of the rendered sheet and drives auto-scroll.

pub mod models;
pub mod parse;
pub mod transposition;
pub mod sheet;
pub mod layout;
pub mod scroll;
pub mod config;
pub mod error;
pub mod api;

// Re-export commonly used types
pub use models::{AccidentalPreference, ChordAnnotation, ParsedChord, SheetLine, TranspositionState};
pub use config::SheetConfig;
pub use error::{SheetError, SheetResult};
pub use transposition::{rewrite_chord, shift_note, transpose_song_text, DisplayUpdate, TranspositionController};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A logger may already be installed by the host page
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Song sheet WASM module initialized");
}
