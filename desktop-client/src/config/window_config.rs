use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const MIN_WINDOW_DIMENSION: f32 = 200.0;
pub const MAX_WINDOW_DIMENSION: f32 = 2000.0;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        let range = MIN_WINDOW_DIMENSION..=MAX_WINDOW_DIMENSION;
        if !range.contains(&self.width) || !range.contains(&self.height) {
            return Err(format!(
                "window size must be between {} and {} in each dimension, got {}x{}",
                MIN_WINDOW_DIMENSION, MAX_WINDOW_DIMENSION, self.width, self.height
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 400.0,
        }
    }
}
