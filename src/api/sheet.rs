//! WASM API for sheet preparation and layout

use wasm_bindgen::prelude::*;
use crate::layout::{compute_column_layout, ColumnLayoutInput};
use crate::models::SheetLine;
use crate::sheet;
use super::helpers::{config_from_js, deserialize, serialize};
use crate::wasm_log;

/// Split raw song text into chord/lyric line pairs
///
/// # Returns
/// Array of `{ chord, lyric, is_section_header }`; chord layers are markup
#[wasm_bindgen(js_name = prepareSong)]
pub fn prepare_song(text: &str, with_data_attr: bool) -> Result<JsValue, JsValue> {
    let lines = sheet::prepare_song(text, with_data_attr);
    wasm_log!("prepareSong: {} lines", lines.len());
    serialize(&lines, "prepareSong serialization error")
}

/// Render prepared lines into the sheet container markup
#[wasm_bindgen(js_name = renderSheetHtml)]
pub fn render_sheet_html(lines_js: JsValue, vertical: bool) -> Result<String, JsValue> {
    let lines: Vec<SheetLine> = deserialize(lines_js, "renderSheetHtml: invalid lines")?;
    Ok(sheet::render_sheet_html(&lines, vertical)?)
}

/// Prepare and render raw song text in one step
#[wasm_bindgen(js_name = renderSongText)]
pub fn render_song_text(text: &str, vertical: bool) -> Result<String, JsValue> {
    let lines = sheet::prepare_song(text, true);
    Ok(sheet::render_sheet_html(&lines, vertical)?)
}

/// Column layout for measured sheet metrics
///
/// `config_js` may be `undefined` to use the default limits.
#[wasm_bindgen(js_name = computeColumnLayout)]
pub fn compute_column_layout_js(input_js: JsValue, config_js: JsValue) -> Result<JsValue, JsValue> {
    let input: ColumnLayoutInput = deserialize(input_js, "computeColumnLayout: invalid input")?;
    let config = config_from_js(config_js)?;
    let layout = compute_column_layout(&input, &config);
    serialize(&layout, "computeColumnLayout serialization error")
}
