//! Models module for the song sheet
//!
//! This module contains the data models shared by transposition,
//! sheet preparation and the WASM API.

pub mod accidental;
pub mod chord;
pub mod sheet;
pub mod transposition_state;

// Re-export commonly used types
pub use accidental::AccidentalPreference;
pub use chord::{ChordAnnotation, ChordMatch, ParsedChord};
pub use sheet::SheetLine;
pub use transposition_state::{TranspositionState, MAX_OFFSET, MIN_OFFSET};
