//! Song sheet preparation
//!
//! Turns raw song text (lyrics with inline `[Chord]` markers) into pairs of
//! chord and lyric layers ready for rendering. Chords are placed above the
//! lyric column where they were written, and wrapped in spans carrying the
//! authored chord in `data-chord` so the page can transpose them later.

pub mod render;

use crate::models::SheetLine;
use crate::parse::BRACKETED_CHORD_REGEX;

pub use render::render_sheet_html;

/// First words that mark a line as a section header
pub const SECTION_KEYWORDS: [&str; 10] = [
    "Intro", "Verse", "Melody", "Prechorus", "Pre-chorus", "Pre Chorus",
    "Chorus", "Interlude", "Outro", "Bridge",
];

/// Clean up spacing in a chord sheet
///
/// Trailing whitespace is removed from every line, runs of blank lines
/// collapse to one and leading blank lines are dropped.
pub fn normalise_spacing(text: &str) -> String {
    let mut cleaned: Vec<&str> = Vec::new();
    for line in text.lines() {
        let stripped = line.trim_end();
        let previous_has_text = cleaned.last().map_or(false, |l| !l.is_empty());
        if !stripped.is_empty() || previous_has_text {
            cleaned.push(stripped);
        }
    }
    cleaned.join("\n")
}

/// Whether the line's first word names a song section ("Chorus:", "verse")
pub fn is_section_header(line: &str) -> bool {
    let first_word = line
        .split_whitespace()
        .next()
        .map(|w| w.trim_end_matches(':'))
        .unwrap_or("");
    !first_word.is_empty()
        && SECTION_KEYWORDS
            .iter()
            .any(|kw| kw.eq_ignore_ascii_case(first_word))
}

/// Split a raw line into (chord layer, lyric layer)
///
/// The lyric layer is the column grid: runs of spaces collapse to one, and
/// each chord is padded to start at the lyric column where it appeared.
/// Section headers come back whole as the chord layer with an empty lyric.
pub fn split_chord_lyric_line(line: &str) -> (String, String) {
    if is_section_header(line) {
        return (line.trim_end().to_string(), String::new());
    }

    let chars: Vec<char> = line.chars().collect();
    let mut chord_layer = String::new();
    let mut lyric_layer = String::new();
    let mut chord_len = 0usize;
    let mut lyric_col = 0usize;
    let mut last_space = false;
    let mut i = 0usize;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '[' {
            if let Some(offset) = chars[i + 1..].iter().position(|&c| c == ']') {
                let end = i + 1 + offset;
                if lyric_col > chord_len {
                    chord_layer.extend(std::iter::repeat(' ').take(lyric_col - chord_len));
                    chord_len = lyric_col;
                }
                chord_layer.extend(&chars[i..=end]);
                chord_len += end - i + 1;
                i = end + 1;
                continue;
            }
            // Unmatched '[' is ordinary lyric text
        }

        if ch == ' ' {
            if last_space {
                i += 1;
                continue;
            }
            last_space = true;
        } else {
            last_space = false;
        }

        lyric_layer.push(ch);
        lyric_col += 1;
        i += 1;
    }

    (chord_layer.trim_end().to_string(), lyric_layer.trim_end().to_string())
}

/// Escape text for inclusion in HTML element content or attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape `text` and wrap each bracketed chord in a `chord` span
///
/// With `with_data_attr` the span also records the authored chord in
/// `data-chord`, which is what the page transposes from.
pub fn highlight_chords(text: &str, with_data_attr: bool) -> String {
    let escaped = escape_html(text);
    let replacement = if with_data_attr {
        r#"<span class="chord" data-chord="$1">$1</span>"#
    } else {
        r#"<span class="chord">$1</span>"#
    };
    BRACKETED_CHORD_REGEX
        .replace_all(&escaped, replacement)
        .into_owned()
}

/// Split and highlight every non-blank line of `text`
pub fn process_song_text(text: &str, with_data_attr: bool) -> Vec<SheetLine> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (chord, lyric) = split_chord_lyric_line(line);
            let markup = highlight_chords(&chord, with_data_attr);
            if lyric.is_empty() && is_section_header(line) {
                SheetLine::section_header(markup)
            } else {
                SheetLine::new(markup, lyric)
            }
        })
        .collect()
}

/// Normalise spacing, then split and highlight
pub fn prepare_song(text: &str, with_data_attr: bool) -> Vec<SheetLine> {
    let cleaned = normalise_spacing(text);
    let lines = process_song_text(&cleaned, with_data_attr);
    log::debug!("sheet: prepared {} lines", lines.len());
    lines
}
