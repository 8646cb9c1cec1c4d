//! Chord symbol extraction
//!
//! Finds the first chord symbol in an annotation's text and splits it into
//! root, quality and optional bass. The quality is opaque: whatever sits
//! between the root and the bass (or the closing bracket) is kept verbatim.
//!
//! Recognised forms:
//!   "[Am7/G]"       bracketed, anywhere in the text (first one wins)
//!   "Am7/G"         bare, only when the whole trimmed text is the chord
//!
//! A quality never spans a line break. Extraction never fails loudly; text
//! without a chord yields `None`.

use crate::models::{ChordMatch, ParsedChord};

/// Find the first chord in `text`
pub fn find_chord(text: &str) -> Option<ChordMatch> {
    find_bracketed(text).or_else(|| find_bare(text))
}

/// Parse a complete chord symbol, with or without brackets
pub fn parse_chord(text: &str) -> Option<ParsedChord> {
    find_chord(text).map(|m| m.chord)
}

/// Length in bytes of a pitch name at the start of `s` (letter A-G plus an
/// optional `#` or `b`), or `None` if `s` does not start with one
pub fn pitch_name_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b'A'..=b'G') => {}
        _ => return None,
    }
    match bytes.get(1) {
        Some(b'#') | Some(b'b') => Some(2),
        _ => Some(1),
    }
}

fn find_bracketed(text: &str) -> Option<ChordMatch> {
    let bytes = text.as_bytes();

    for (open, _) in text.match_indices('[') {
        let root_start = open + 1;
        let root_len = match pitch_name_len(&text[root_start..]) {
            Some(len) => len,
            None => continue,
        };
        let root_end = root_start + root_len;

        let mut pos = root_end;
        while pos < bytes.len() {
            if let Some((bass_end, close_end)) = bass_then_close(bytes, pos) {
                return Some(ChordMatch {
                    start: open,
                    end: close_end,
                    bracketed: true,
                    chord: ParsedChord {
                        root: text[root_start..root_end].to_string(),
                        quality: text[root_end..pos].to_string(),
                        bass: Some(text[pos + 1..bass_end].to_string()),
                    },
                });
            }
            match bytes[pos] {
                b']' => {
                    return Some(ChordMatch {
                        start: open,
                        end: pos + 1,
                        bracketed: true,
                        chord: ParsedChord {
                            root: text[root_start..root_end].to_string(),
                            quality: text[root_end..pos].to_string(),
                            bass: None,
                        },
                    });
                }
                b'\n' | b'\r' => break,
                _ => pos += 1,
            }
        }
    }

    None
}

/// Match `/` pitch `]` at `pos`; returns (end of bass, end of match)
fn bass_then_close(bytes: &[u8], pos: usize) -> Option<(usize, usize)> {
    if bytes.get(pos) != Some(&b'/') {
        return None;
    }
    if !matches!(bytes.get(pos + 1), Some(b'A'..=b'G')) {
        return None;
    }

    let after_letter = pos + 2;
    if matches!(bytes.get(after_letter), Some(b'#') | Some(b'b'))
        && bytes.get(after_letter + 1) == Some(&b']')
    {
        return Some((after_letter + 1, after_letter + 2));
    }
    if bytes.get(after_letter) == Some(&b']') {
        return Some((after_letter, after_letter + 1));
    }
    None
}

fn find_bare(text: &str) -> Option<ChordMatch> {
    let trimmed = text.trim();
    if trimmed.is_empty()
        || trimmed.chars().any(|c| c.is_whitespace() || c == '[' || c == ']')
    {
        return None;
    }

    let root_len = pitch_name_len(trimmed)?;
    let start = text.len() - text.trim_start().len();
    let rest = &trimmed[root_len..];

    let (quality, bass) = match rest.rfind('/') {
        Some(slash) if pitch_name_len(&rest[slash + 1..]) == Some(rest.len() - slash - 1) => {
            (&rest[..slash], Some(rest[slash + 1..].to_string()))
        }
        _ => (rest, None),
    };

    Some(ChordMatch {
        start,
        end: start + trimmed.len(),
        bracketed: false,
        chord: ParsedChord {
            root: trimmed[..root_len].to_string(),
            quality: quality.to_string(),
            bass,
        },
    })
}
