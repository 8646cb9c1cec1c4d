//! Shared types for the WASM API
//!
//! Result types returned to JavaScript by more than one API module.

use crate::models::AccidentalPreference;
use crate::transposition::{DisplayUpdate, TranspositionController};

/// Transposition state plus the texts the page should show
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct TranspositionSnapshot {
    /// Clamped offset, for the numeric field
    pub steps: i32,
    pub preference: AccidentalPreference,
    pub updates: Vec<DisplayUpdate>,
}

impl From<&TranspositionController> for TranspositionSnapshot {
    fn from(controller: &TranspositionController) -> Self {
        Self {
            steps: controller.offset(),
            preference: controller.preference(),
            updates: controller.display_updates(),
        }
    }
}
