//! Core data model for text canvas documents.
//!
//! A document is a flat, ordered list of `TextItem`s. List order is paint
//! order and hit-test order; there is no scene graph and no z-index.
//! `(x, y)` is the left end of the text baseline, so an item's glyphs
//! extend upward from `y` by roughly `font_size`.

use serde::{Deserialize, Serialize};

/// Smallest font size the style controls allow.
pub const MIN_FONT_SIZE: f64 = 10.0;
/// Largest font size the style controls allow.
pub const MAX_FONT_SIZE: f64 = 100.0;
/// Font size used for new text when nothing else is configured.
pub const DEFAULT_FONT_SIZE: f64 = 18.0;
/// Font family used for new text when nothing else is configured.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

// ─── Viewport ────────────────────────────────────────────────────────────

/// The canvas (viewport) dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Viewport {
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

// ─── Text items ──────────────────────────────────────────────────────────

/// A positioned, styled string on the canvas.
///
/// Serialized in the persisted-state shape: camelCase keys with the content
/// stored under `text`. `content` is accepted on read as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextItem {
    #[serde(rename = "text", alias = "content", default)]
    pub content: String,
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default)]
    pub is_bold: bool,
    #[serde(default)]
    pub is_italic: bool,
    #[serde(default)]
    pub is_underline: bool,
}

fn default_font_size() -> f64 {
    DEFAULT_FONT_SIZE
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

impl TextItem {
    /// Create an unstyled item at `(x, y)`.
    pub fn new(content: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            content: content.into(),
            x,
            y,
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            is_bold: false,
            is_italic: false,
            is_underline: false,
        }
    }

    pub fn with_font(mut self, size: f64, family: impl Into<String>) -> Self {
        self.font_size = size;
        self.font_family = family.into();
        self
    }

    /// CSS font shorthand used by the Canvas2D `font` property,
    /// e.g. `"italic bold 18px Arial"`.
    pub fn css_font(&self) -> String {
        let mut font = String::new();
        if self.is_italic {
            font.push_str("italic ");
        }
        if self.is_bold {
            font.push_str("bold ");
        }
        font.push_str(&format!("{}px {}", self.font_size, self.font_family));
        font
    }
}

/// Clamp a font size into `[min, max]`. NaN collapses to `min`.
pub fn clamp_font_size(size: f64, min: f64, max: f64) -> f64 {
    if size.is_nan() {
        return min;
    }
    size.clamp(min, max)
}
