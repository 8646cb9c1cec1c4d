//! Sheet markup rendering
//!
//! Renders prepared `SheetLine`s into the `.song-content` container the page
//! script and the column layout work against. Chord layers are already
//! escaped markup; lyric layers are escaped by the template.

use serde::Serialize;
use crate::error::SheetResult;
use crate::models::SheetLine;

const SHEET_TEMPLATE: &str = include_str!("templates/sheet.html.mustache");

/// Data handed to the sheet template
#[derive(Debug, Clone, Serialize)]
pub struct SheetTemplateContext<'a> {
    pub lines: &'a [SheetLine],

    /// Start in the single-column vertical view
    pub vertical: bool,
}

impl<'a> SheetTemplateContext<'a> {
    pub fn new(lines: &'a [SheetLine]) -> Self {
        Self { lines, vertical: false }
    }

    pub fn vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }
}

/// Render the sheet container for `lines`
pub fn render_sheet_html(lines: &[SheetLine], vertical: bool) -> SheetResult<String> {
    render_with_context(&SheetTemplateContext::new(lines).vertical(vertical))
}

pub fn render_with_context(context: &SheetTemplateContext<'_>) -> SheetResult<String> {
    let template = mustache::compile_str(SHEET_TEMPLATE)?;
    Ok(template.render_to_string(context)?)
}
