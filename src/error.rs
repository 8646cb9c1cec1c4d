//! Error types for the song sheet module
//!
//! Transposition itself never fails; these errors only come from the
//! boundary with the page (DOM lookups and calls, JS value conversion) and
//! from template rendering.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error)]
pub enum SheetError {
    /// A required element is not in the document
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A DOM call was rejected by the browser
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// The transposition session is missing or unusable
    #[error("Transposition session unavailable: {0}")]
    Session(String),

    /// Converting between Rust and JavaScript values failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be read
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The sheet template failed to compile or render
    #[error("Template error: {0}")]
    Template(String),
}

impl SheetError {
    /// Wrap a rejected DOM call, keeping whatever the browser reported
    pub fn dom(context: &str, value: JsValue) -> Self {
        let detail = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        SheetError::Dom(format!("{}: {}", context, detail))
    }
}

impl From<mustache::Error> for SheetError {
    fn from(err: mustache::Error) -> Self {
        SheetError::Template(err.to_string())
    }
}

impl From<SheetError> for JsValue {
    fn from(err: SheetError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type SheetResult<T> = Result<T, SheetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SheetError::MissingElement("#steps".to_string()).to_string(),
            "Missing element: #steps"
        );
        assert_eq!(
            SheetError::Config("max_columns must be at least 1".to_string()).to_string(),
            "Invalid configuration: max_columns must be at least 1"
        );
    }
}
