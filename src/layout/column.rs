//! Column count computation
//!
//! Takes the text metrics measured by the page and decides how the sheet
//! container is laid out: how many CSS columns, which mode class, how wide,
//! and whether it is centred. The page applies the result as styles.

use serde::{Deserialize, Serialize};
use crate::config::SheetConfig;

/// Measurements taken from the rendered sheet
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ColumnLayoutInput {
    /// Longest chord or lyric line, in characters
    pub longest_line_chars: usize,

    /// Width of one monospace character in pixels
    pub char_width: f64,

    /// Current container width in pixels
    pub container_width: f64,

    /// Full scroll height of the container content
    pub content_height: f64,

    pub viewport_height: f64,

    /// Manual single-column override is on
    pub vertical_mode: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnMode {
    SingleColumn,
    MultiColumn,
}

impl ColumnMode {
    /// CSS class applied to the container
    pub fn class_name(&self) -> &'static str {
        match self {
            ColumnMode::SingleColumn => "single-column",
            ColumnMode::MultiColumn => "multi-column",
        }
    }

    /// The class removed when this mode is applied
    pub fn other_class_name(&self) -> &'static str {
        match self {
            ColumnMode::SingleColumn => "multi-column",
            ColumnMode::MultiColumn => "single-column",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ContainerWidth {
    Pixels(f64),
    Full,
}

impl ContainerWidth {
    /// CSS width value
    pub fn css(&self) -> String {
        match self {
            ContainerWidth::Pixels(px) => format!("{}px", px),
            ContainerWidth::Full => "100%".to_string(),
        }
    }
}

/// Layout decision for the sheet container
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ColumnLayout {
    pub column_count: u32,
    pub mode: ColumnMode,
    pub width: ContainerWidth,

    /// Horizontal auto margins
    pub centered: bool,
}

/// Width of one column that fits the longest line plus padding
pub fn desired_column_width(input: &ColumnLayoutInput, config: &SheetConfig) -> f64 {
    (input.longest_line_chars as f64 + config.extra_padding_chars as f64) * input.char_width
}

/// Decide the container layout for the measured sheet
pub fn compute_column_layout(input: &ColumnLayoutInput, config: &SheetConfig) -> ColumnLayout {
    let column_width = desired_column_width(input, config);

    if input.vertical_mode {
        return single_column(column_width);
    }

    let max_columns = config.max_columns.max(1);
    let fitting = if column_width > 0.0 {
        (input.container_width / column_width).floor()
    } else {
        f64::from(max_columns)
    };
    let column_count = (fitting.max(1.0) as u32).min(max_columns);

    // Short songs stay in one column even when several would fit
    let tall_enough = input.content_height > input.viewport_height * config.tall_content_fraction;

    if column_count > 1 && tall_enough {
        ColumnLayout {
            column_count,
            mode: ColumnMode::MultiColumn,
            width: ContainerWidth::Full,
            centered: false,
        }
    } else {
        single_column(column_width)
    }
}

fn single_column(column_width: f64) -> ColumnLayout {
    ColumnLayout {
        column_count: 1,
        mode: ColumnMode::SingleColumn,
        width: ContainerWidth::Pixels(column_width),
        centered: true,
    }
}

/// Longest line over (chord line length, lyric line length) pairs
pub fn longest_line_length<I>(lines: I) -> Option<usize>
where
    I: IntoIterator<Item = (usize, usize)>,
{
    lines
        .into_iter()
        .map(|(chord, lyric)| chord.max(lyric))
        .max()
}

/// Label for the vertical toggle button in the given mode
pub fn vertical_toggle_label(vertical_mode: bool) -> &'static str {
    if vertical_mode {
        "Switch to Multi-Column View"
    } else {
        "Switch to Single Column View"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(container_width: f64, content_height: f64) -> ColumnLayoutInput {
        ColumnLayoutInput {
            longest_line_chars: 35,
            char_width: 10.0,
            container_width,
            content_height,
            viewport_height: 1000.0,
            vertical_mode: false,
        }
    }

    #[test]
    fn test_desired_width_includes_padding() {
        assert_eq!(desired_column_width(&input(0.0, 0.0), &SheetConfig::default()), 400.0);
    }

    #[test]
    fn test_multi_column_when_wide_and_tall() {
        let layout = compute_column_layout(&input(1250.0, 2000.0), &SheetConfig::default());
        assert_eq!(layout.column_count, 3);
        assert_eq!(layout.mode, ColumnMode::MultiColumn);
        assert_eq!(layout.width, ContainerWidth::Full);
        assert!(!layout.centered);
    }

    #[test]
    fn test_column_count_capped() {
        let layout = compute_column_layout(&input(4000.0, 2000.0), &SheetConfig::default());
        assert_eq!(layout.column_count, 3);

        let config = SheetConfig { max_columns: 2, ..SheetConfig::default() };
        assert_eq!(compute_column_layout(&input(4000.0, 2000.0), &config).column_count, 2);
    }

    #[test]
    fn test_short_song_stays_single() {
        let layout = compute_column_layout(&input(1250.0, 800.0), &SheetConfig::default());
        assert_eq!(layout.column_count, 1);
        assert_eq!(layout.mode, ColumnMode::SingleColumn);
        assert_eq!(layout.width, ContainerWidth::Pixels(400.0));
        assert!(layout.centered);
    }

    #[test]
    fn test_narrow_container_single() {
        let layout = compute_column_layout(&input(300.0, 5000.0), &SheetConfig::default());
        assert_eq!(layout.column_count, 1);
        assert_eq!(layout.mode, ColumnMode::SingleColumn);
    }

    #[test]
    fn test_vertical_mode_forces_single() {
        let mut measured = input(4000.0, 5000.0);
        measured.vertical_mode = true;
        let layout = compute_column_layout(&measured, &SheetConfig::default());
        assert_eq!(layout.column_count, 1);
        assert_eq!(layout.width.css(), "400px");
        assert!(layout.centered);
    }

    #[test]
    fn test_longest_line() {
        assert_eq!(longest_line_length(vec![(10, 4), (3, 22), (0, 0)]), Some(22));
        assert_eq!(longest_line_length(Vec::new()), None);
    }

    #[test]
    fn test_labels_and_classes() {
        assert_eq!(vertical_toggle_label(true), "Switch to Multi-Column View");
        assert_eq!(vertical_toggle_label(false), "Switch to Single Column View");
        assert_eq!(ColumnMode::MultiColumn.class_name(), "multi-column");
        assert_eq!(ColumnMode::SingleColumn.other_class_name(), "multi-column");
        assert_eq!(ContainerWidth::Full.css(), "100%");
    }
}
