//! Page binding configuration
//!
//! Selectors and ids the page binding looks for, plus the constants for
//! column reflow and auto-scroll. Every field has a default matching the
//! stock sheet markup, so callers only pass what they change.

use serde::{Deserialize, Serialize};
use crate::error::{SheetError, SheetResult};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SheetConfig {
    /// Chord elements carrying the authored chord
    pub chord_selector: String,

    /// `data-*` key (without the prefix) holding the authored chord
    pub chord_data_key: String,

    /// Numeric offset field
    pub steps_input_id: String,

    /// Buttons carrying a signed `data-step`
    pub transpose_button_selector: String,

    /// `data-*` key on transpose buttons
    pub step_data_key: String,

    pub reset_button_selector: String,

    /// Radio inputs valued "sharp", "flat" or ""
    pub preference_input_selector: String,

    /// Window property holding the server-supplied offset
    pub initial_steps_property: String,

    /// Sheet container measured and reflowed by the layout
    pub container_selector: String,

    /// Line blocks and section headers inside the container
    pub line_selector: String,
    pub chord_line_selector: String,
    pub lyric_line_selector: String,

    pub vertical_toggle_id: String,

    /// Upper bound on the number of columns
    pub max_columns: u32,

    /// Characters added to the longest line when sizing a column
    pub extra_padding_chars: u32,

    /// Content must be taller than this share of the viewport to split
    pub tall_content_fraction: f64,

    pub auto_scroll_toggle_id: String,
    pub max_scroll_speed: u32,
    pub scroll_speed_step: u32,
    pub scroll_interval_ms: i32,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            chord_selector: ".chord".to_string(),
            chord_data_key: "chord".to_string(),
            steps_input_id: "steps".to_string(),
            transpose_button_selector: ".transpose-btn".to_string(),
            step_data_key: "step".to_string(),
            reset_button_selector: ".transpose-reset".to_string(),
            preference_input_selector: ".prefer-toggle input".to_string(),
            initial_steps_property: "initialSteps".to_string(),
            container_selector: ".song-content".to_string(),
            line_selector: ".line-block, .section-header".to_string(),
            chord_line_selector: ".chord-line".to_string(),
            lyric_line_selector: ".lyric-line".to_string(),
            vertical_toggle_id: "toggle-vertical".to_string(),
            max_columns: 3,
            extra_padding_chars: 5,
            tall_content_fraction: 0.8,
            auto_scroll_toggle_id: "auto-scroll-toggle".to_string(),
            max_scroll_speed: 4,
            scroll_speed_step: 1,
            scroll_interval_ms: 50,
        }
    }
}

impl SheetConfig {
    /// Parse a (possibly partial) JSON configuration
    pub fn from_json(json: &str) -> SheetResult<Self> {
        let config: SheetConfig =
            serde_json::from_str(json).map_err(|e| SheetError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SheetResult<()> {
        if self.max_columns == 0 {
            return Err(SheetError::Config("max_columns must be at least 1".to_string()));
        }
        if self.scroll_speed_step == 0 {
            return Err(SheetError::Config("scroll_speed_step must be at least 1".to_string()));
        }
        if self.scroll_interval_ms <= 0 {
            return Err(SheetError::Config(format!(
                "scroll_interval_ms must be positive (got {})",
                self.scroll_interval_ms
            )));
        }
        if self.tall_content_fraction.is_nan() || self.tall_content_fraction < 0.0 {
            return Err(SheetError::Config("tall_content_fraction must be non-negative".to_string()));
        }
        Ok(())
    }

    /// `data-` attribute name for chord elements
    pub fn chord_attribute(&self) -> String {
        format!("data-{}", self.chord_data_key)
    }

    pub fn step_attribute(&self) -> String {
        format!("data-{}", self.step_data_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_markup() {
        let config = SheetConfig::default();
        assert_eq!(config.chord_attribute(), "data-chord");
        assert_eq!(config.step_attribute(), "data-step");
        assert_eq!(config.max_columns, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SheetConfig::from_json(r#"{"max_columns": 2, "chord_selector": ".ch"}"#).unwrap();
        assert_eq!(config.max_columns, 2);
        assert_eq!(config.chord_selector, ".ch");
        assert_eq!(config.steps_input_id, "steps");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(SheetConfig::from_json(r#"{"max_columns": 0}"#).is_err());
        assert!(SheetConfig::from_json(r#"{"scroll_interval_ms": -5}"#).is_err());
        assert!(SheetConfig::from_json("not json").is_err());
    }
}
