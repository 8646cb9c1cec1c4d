//! Accidental spelling preference for transposed pitch names
//!
//! The page exposes this as a radio group whose values are "sharp", "flat"
//! or "" (no explicit choice). Anything other than "flat" spells output
//! with sharps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccidentalPreference {
    Sharp,
    Flat,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl AccidentalPreference {
    /// Value as exposed by the preference control
    pub fn as_str(&self) -> &'static str {
        match self {
            AccidentalPreference::Sharp => "sharp",
            AccidentalPreference::Flat => "flat",
            AccidentalPreference::Unspecified => "",
        }
    }

    /// Value of the preference control, matched exactly
    ///
    /// Only "flat" and "sharp" are recognised; anything else (including
    /// "Flat" or " flat ") is unspecified and therefore spelled with sharps.
    /// Use `FromStr` for lenient parsing of typed input.
    pub fn from_control_value(value: &str) -> Self {
        match value {
            "flat" => AccidentalPreference::Flat,
            "sharp" => AccidentalPreference::Sharp,
            _ => AccidentalPreference::Unspecified,
        }
    }

    pub fn prefers_flats(&self) -> bool {
        matches!(self, AccidentalPreference::Flat)
    }
}

impl fmt::Display for AccidentalPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccidentalPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sharp" | "#" | "♯" => Ok(AccidentalPreference::Sharp),
            "flat" | "b" | "♭" => Ok(AccidentalPreference::Flat),
            "" => Ok(AccidentalPreference::Unspecified),
            _ => Err(format!("Invalid accidental preference: '{}'. Expected sharp, flat or empty", s)),
        }
    }
}
