//! Hit testing: point → item lookup.
//!
//! Items are scanned in list order and the first whose box contains the
//! point wins. There is no topmost-first tie-break: an earlier item shadows
//! a later one it overlaps, even though the later one paints on top.

use crate::measure::TextMeasure;
use kurbo::{Point, Rect};
use tc_core::TextItem;

/// Axis-aligned box of a rendered item. Width is measured; height is
/// approximated by the font size, extending upward from the baseline.
pub fn item_bounds(item: &TextItem, measure: &dyn TextMeasure) -> Rect {
    let width = measure.text_width(item);
    Rect::new(item.x, item.y - item.font_size, item.x + width, item.y)
}

/// Index of the first item whose box contains `(px, py)`, edges included.
/// Returns `None` for background.
pub fn hit_test(
    items: &[TextItem],
    measure: &dyn TextMeasure,
    px: f64,
    py: f64,
) -> Option<usize> {
    let point = Point::new(px, py);
    items
        .iter()
        .position(|item| contains_inclusive(item_bounds(item, measure), point))
}

// `Rect::contains` is half-open; pointer hits on the right/bottom edge count.
fn contains_inclusive(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}
