//! Text measurement seam.
//!
//! Hit testing, drag clamping and underline painting all need the rendered
//! width of an item. In the browser that comes from
//! `CanvasRenderingContext2d::measureText`; natively we fall back to a
//! per-glyph estimate.

use tc_core::TextItem;

pub trait TextMeasure {
    /// Rendered width of `item.content` in the item's own font.
    fn text_width(&self, item: &TextItem) -> f64;
}

/// Fixed-advance estimate: every glyph is `advance * font_size` wide,
/// bold glyphs 10% wider.
#[derive(Debug, Clone, Copy)]
pub struct ApproxMeasure {
    pub advance: f64,
}

impl Default for ApproxMeasure {
    fn default() -> Self {
        Self { advance: 0.5 }
    }
}

impl TextMeasure for ApproxMeasure {
    fn text_width(&self, item: &TextItem) -> f64 {
        let glyphs = item.content.chars().count() as f64;
        let weight = if item.is_bold { 1.1 } else { 1.0 };
        glyphs * item.font_size * self.advance * weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_scales_with_length_and_size() {
        let m = ApproxMeasure::default();
        let item = TextItem::new("abcd", 0.0, 0.0).with_font(20.0, "Arial");
        assert_eq!(m.text_width(&item), 40.0);

        let mut bold = item.clone();
        bold.is_bold = true;
        assert!(m.text_width(&bold) > 40.0);

        assert_eq!(m.text_width(&TextItem::new("", 0.0, 0.0)), 0.0);
    }
}
