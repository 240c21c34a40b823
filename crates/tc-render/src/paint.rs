//! Text items → backend-neutral drawing commands.
//!
//! Every change repaints the whole canvas: clear, then each item in list
//! order. The host executes the returned ops against its surface (Canvas2D
//! in the browser).

use crate::hit::item_bounds;
use crate::measure::TextMeasure;
use kurbo::Rect;
use tc_core::{TextItem, Viewport};

/// Gap between baseline and underline bar.
const UNDERLINE_OFFSET: f64 = 2.0;
/// Underline bar thickness.
const UNDERLINE_THICKNESS: f64 = 1.0;
/// Padding between an item's box and its selection outline.
const SELECTION_PAD: f64 = 3.0;

pub const TEXT_COLOR: &str = "#000000";
pub const SELECTION_COLOR: &str = "#4FC3F7";

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Clear a region to transparent.
    Clear(Rect),
    /// Set the CSS font shorthand for subsequent text.
    SetFont(String),
    SetFillColor(&'static str),
    SetStrokeColor(&'static str),
    /// Fill `text` with its baseline starting at `(x, y)`.
    FillText { text: String, x: f64, y: f64 },
    FillRect(Rect),
    StrokeRect(Rect),
}

/// Paint the full document.
///
/// Call once per change; the result starts with a full-canvas clear.
pub fn paint_scene(
    items: &[TextItem],
    viewport: Viewport,
    selected: Option<usize>,
    measure: &dyn TextMeasure,
) -> Vec<DrawOp> {
    let mut ops = Vec::with_capacity(2 + items.len() * 4);
    ops.push(DrawOp::Clear(Rect::new(
        0.0,
        0.0,
        viewport.width,
        viewport.height,
    )));
    ops.push(DrawOp::SetFillColor(TEXT_COLOR));

    for item in items {
        paint_item(&mut ops, item, measure);
    }

    if let Some(item) = selected.and_then(|i| items.get(i)) {
        let outline = item_bounds(item, measure).inflate(SELECTION_PAD, SELECTION_PAD);
        ops.push(DrawOp::SetStrokeColor(SELECTION_COLOR));
        ops.push(DrawOp::StrokeRect(outline));
    }

    log::trace!("painted {} items as {} ops", items.len(), ops.len());
    ops
}

fn paint_item(ops: &mut Vec<DrawOp>, item: &TextItem, measure: &dyn TextMeasure) {
    ops.push(DrawOp::SetFont(item.css_font()));
    ops.push(DrawOp::FillText {
        text: item.content.clone(),
        x: item.x,
        y: item.y,
    });
    if item.is_underline {
        let width = measure.text_width(item);
        let top = item.y + UNDERLINE_OFFSET;
        ops.push(DrawOp::FillRect(Rect::new(
            item.x,
            top,
            item.x + width,
            top + UNDERLINE_THICKNESS,
        )));
    }
}
