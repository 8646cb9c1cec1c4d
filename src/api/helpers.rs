//! Shared helpers for WASM API operations
//!
//! Logging macros, JS value (de)serialization with error context, and the
//! optional-config handling used by the exported functions.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::config::SheetConfig;
use crate::error::SheetError;

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

// Routed through `log` so console_log picks them up in the browser and
// native tests stay quiet.

pub fn log_debug(msg: &str) {
    log::debug!("[WASM] {}", msg);
}

pub fn log_info(msg: &str) {
    log::info!("[WASM] {}", msg);
}

pub fn log_warn(msg: &str) {
    log::warn!("[WASM] ⚠️ {}", msg);
}

pub fn log_error(msg: &str) {
    log::error!("[WASM] ❌ {}", msg);
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let err = SheetError::Serialization(format!("{}: {}", error_context, e));
        log_error(&err.to_string());
        JsValue::from(err)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let err = SheetError::Serialization(format!("{}: {}", error_context, e));
        log_error(&err.to_string());
        JsValue::from(err)
    })
}

/// Read an optional config object; `undefined`/`null` means defaults
pub fn config_from_js(value: JsValue) -> Result<SheetConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(SheetConfig::default());
    }
    let config: SheetConfig = deserialize(value, "Invalid sheet config")?;
    config.validate().map_err(|e| {
        log_error(&e.to_string());
        JsValue::from(e)
    })?;
    Ok(config)
}
