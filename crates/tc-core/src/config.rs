//! Editor configuration.
//!
//! Hosts pass this as JSON (camelCase). Every field is optional; omitted
//! fields take the defaults below.

use crate::model::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE, Viewport,
    clamp_font_size,
};
use serde::{Deserialize, Serialize};

/// Key under which the document is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "canvasState";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    pub viewport: Viewport,
    pub default_font_size: f64,
    pub default_font_family: String,
    pub min_font_size: f64,
    pub max_font_size: f64,
    /// Maximum number of undo steps kept. `None` keeps every step.
    pub history_depth: Option<usize>,
    pub storage_key: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            default_font_size: DEFAULT_FONT_SIZE,
            default_font_family: DEFAULT_FONT_FAMILY.to_string(),
            min_font_size: MIN_FONT_SIZE,
            max_font_size: MAX_FONT_SIZE,
            history_depth: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse a JSON config. Inconsistent values are normalized
    /// (see [`EditorConfig::normalized`]).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// Swap inverted font bounds, pull the default size into range and keep
    /// at least one undo step when history is capped.
    pub fn normalized(mut self) -> Self {
        if self.min_font_size > self.max_font_size {
            std::mem::swap(&mut self.min_font_size, &mut self.max_font_size);
        }
        self.default_font_size =
            clamp_font_size(self.default_font_size, self.min_font_size, self.max_font_size);
        self.history_depth = self.history_depth.map(|depth| depth.max(1));
        if self.storage_key.is_empty() {
            self.storage_key = DEFAULT_STORAGE_KEY.to_string();
        }
        self
    }

    pub fn clamp_font_size(&self, size: f64) -> f64 {
        clamp_font_size(size, self.min_font_size, self.max_font_size)
    }
}
