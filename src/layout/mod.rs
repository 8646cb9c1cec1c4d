//! Sheet layout
//!
//! Computes the column reflow of the sheet container from measurements taken
//! by the page. The page binding measures and applies; everything here is
//! pure.

pub mod column;

pub use column::{
    compute_column_layout, desired_column_width, longest_line_length, vertical_toggle_label,
    ColumnLayout, ColumnLayoutInput, ColumnMode, ContainerWidth,
};
