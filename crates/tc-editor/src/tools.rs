//! Selection/drag tool.
//!
//! Translates pointer events into `DragAction`s that the editor applies to
//! the item list. The tool itself never touches items; it only tracks the
//! selection, the drag flag and where inside the item the pointer grabbed.

use crate::input::InputEvent;
use tc_core::{TextItem, Viewport};

/// The item under the pointer at pointer-down, with its current origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragAction {
    None,
    /// Pointer-down landed on an item: select it and start dragging.
    Select(usize),
    /// Move the dragged item so its origin is at `(x, y)` (unclamped).
    MoveTo { index: usize, x: f64, y: f64 },
    /// Drag ended. `origin` is where the item sat when it was grabbed.
    Release { index: usize, origin: (f64, f64) },
}

#[derive(Debug, Clone, Default)]
pub struct DragTool {
    /// Currently selected item.
    pub selected: Option<usize>,
    dragging: bool,
    /// Pointer offset from the item origin at grab time.
    grab_dx: f64,
    grab_dy: f64,
    /// Item origin at grab time.
    origin: (f64, f64),
}

impl DragTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Handle a pointer event. `hit` is only consulted on pointer-down.
    pub fn handle(&mut self, event: &InputEvent, hit: Option<Hit>) -> DragAction {
        match event {
            InputEvent::PointerDown { x, y } => {
                let Some(hit) = hit else {
                    // Background click keeps the current selection.
                    return DragAction::None;
                };
                self.selected = Some(hit.index);
                self.dragging = true;
                self.origin = (hit.x, hit.y);
                self.grab_dx = x - hit.x;
                self.grab_dy = y - hit.y;
                DragAction::Select(hit.index)
            }
            InputEvent::PointerMove { x, y } => match self.selected {
                Some(index) if self.dragging => DragAction::MoveTo {
                    index,
                    x: x - self.grab_dx,
                    y: y - self.grab_dy,
                },
                _ => DragAction::None,
            },
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => {
                if !self.dragging {
                    return DragAction::None;
                }
                self.dragging = false;
                match self.selected {
                    Some(index) => DragAction::Release {
                        index,
                        origin: self.origin,
                    },
                    None => DragAction::None,
                }
            }
            InputEvent::Key { .. } => DragAction::None,
        }
    }

    /// Forget the selection (and any drag in flight).
    pub fn clear(&mut self) {
        self.selected = None;
        self.dragging = false;
    }
}

/// Clamp an item origin so its box (`text_width` wide, `font_size` tall,
/// above the baseline) stays inside the viewport.
///
/// Text wider than the canvas is pinned to the left edge; text taller than
/// the canvas is pinned to the top.
pub fn clamp_to_viewport(
    item: &TextItem,
    x: f64,
    y: f64,
    text_width: f64,
    viewport: Viewport,
) -> (f64, f64) {
    let x = x.min(viewport.width - text_width).max(0.0);
    let y = y.max(item.font_size).min(viewport.height.max(item.font_size));
    (x, y)
}
