//! Auto-scroll speed control
//!
//! The page shows a display speed from 0 to the configured maximum; the
//! window scrolls by half that many pixels on every timer tick. Speed 0
//! means no timer runs.

use serde::{Deserialize, Serialize};
use crate::config::SheetConfig;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoScroll {
    display_speed: u32,
    max_speed: u32,
    step: u32,
}

impl AutoScroll {
    pub fn new(max_speed: u32, step: u32) -> Self {
        Self {
            display_speed: 0,
            max_speed,
            step: step.max(1),
        }
    }

    pub fn from_config(config: &SheetConfig) -> Self {
        Self::new(config.max_scroll_speed, config.scroll_speed_step)
    }

    pub fn display_speed(&self) -> u32 {
        self.display_speed
    }

    pub fn speed_up(&mut self) -> u32 {
        self.display_speed = self.display_speed.saturating_add(self.step).min(self.max_speed);
        self.display_speed
    }

    pub fn slow_down(&mut self) -> u32 {
        self.display_speed = self.display_speed.saturating_sub(self.step);
        self.display_speed
    }

    /// Pixels scrolled per tick
    pub fn pixels_per_tick(&self) -> f64 {
        f64::from(self.display_speed) / 2.0
    }

    /// Whether a timer should be running at the current speed
    pub fn is_active(&self) -> bool {
        self.pixels_per_tick() > 0.0
    }

    /// Text for the speed button
    pub fn label(&self) -> String {
        format!("Scroll Speed {}x", self.display_speed)
    }
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self::from_config(&SheetConfig::default())
    }
}

/// True once the viewport bottom has reached the end of the page
pub fn reached_bottom(inner_height: f64, scroll_y: f64, body_height: f64) -> bool {
    inner_height + scroll_y >= body_height
}
