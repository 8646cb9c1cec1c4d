//! Song sheet WASM API
//!
//! The JavaScript-facing surface of the module.
//!
//! # Module Structure
//!
//! - `helpers`: logging macros, JS value (de)serialization and config reading
//! - `types`: result types shared by several exports
//! - `transpose`: stateless transposition helpers and the session API
//! - `sheet`: song text preparation, sheet markup and column layout
//! - `page`: `bindSongSheet`, which wires a rendered sheet page end to end

pub mod helpers;
pub mod types;
pub mod transpose;
pub mod sheet;
pub mod page;

pub use transpose::{
    shift_note, transpose_chord, parse_chord, transpose_song_text, key_preference,
    init_transposition, transpose_by, set_steps, set_steps_from_input, reset_steps,
    set_preference, get_transposition_state,
};
pub use sheet::{prepare_song, render_sheet_html, render_song_text, compute_column_layout_js};
pub use page::bind_song_sheet;
pub use types::TranspositionSnapshot;
