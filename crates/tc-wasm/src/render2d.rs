//! Canvas2D backend.
//!
//! Executes `DrawOp`s against an HTML `<canvas>` via
//! `CanvasRenderingContext2d`, and measures text with the same context so
//! hit boxes match what is on screen.

use tc_core::TextItem;
use tc_render::{DrawOp, TextMeasure};
use web_sys::CanvasRenderingContext2d;

/// Measures text with `measureText` in the item's own font.
pub struct Canvas2dMeasure<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> Canvas2dMeasure<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl TextMeasure for Canvas2dMeasure<'_> {
    fn text_width(&self, item: &TextItem) -> f64 {
        self.ctx.save();
        self.ctx.set_font(&item.css_font());
        let width = self
            .ctx
            .measure_text(&item.content)
            .map(|m| m.width())
            .unwrap_or(0.0);
        self.ctx.restore();
        width
    }
}

/// Run a full repaint.
pub fn execute(ctx: &CanvasRenderingContext2d, ops: &[DrawOp]) {
    for op in ops {
        match op {
            DrawOp::Clear(r) => {
                ctx.clear_rect(r.x0, r.y0, r.width(), r.height());
                ctx.set_text_baseline("alphabetic");
            }
            DrawOp::SetFont(font) => ctx.set_font(font),
            DrawOp::SetFillColor(color) => ctx.set_fill_style_str(color),
            DrawOp::SetStrokeColor(color) => ctx.set_stroke_style_str(color),
            DrawOp::FillText { text, x, y } => {
                let _ = ctx.fill_text(text, *x, *y);
            }
            DrawOp::FillRect(r) => ctx.fill_rect(r.x0, r.y0, r.width(), r.height()),
            DrawOp::StrokeRect(r) => {
                ctx.save();
                ctx.set_line_width(1.0);
                let _ = ctx.set_line_dash(&js_sys::Array::of2(
                    &wasm_bindgen::JsValue::from_f64(4.0),
                    &wasm_bindgen::JsValue::from_f64(3.0),
                ));
                ctx.stroke_rect(r.x0, r.y0, r.width(), r.height());
                ctx.restore();
            }
        }
    }
}
