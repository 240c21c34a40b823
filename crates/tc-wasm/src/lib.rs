//! WASM bridge for Text Canvas: exposes the Rust editor to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page wires its buttons,
//! pointer listeners and text-input field to a `TextCanvas`; every method
//! that changes something repaints the canvas and writes the document
//! through to `localStorage` before returning.

#[cfg(target_arch = "wasm32")]
mod logger;
mod render2d;
mod storage;

use render2d::Canvas2dMeasure;
use storage::LocalStorage;
use tc_core::{EditorConfig, Viewport};
use tc_editor::input::Modifiers;
use tc_editor::shortcuts::{ShortcutAction, ShortcutMap};
use tc_editor::{EditorState, Effects};
use tc_render::paint_scene;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// The main WASM-facing canvas controller.
///
/// Holds the editor state and the canvas context. All interaction from the
/// page goes through this struct.
#[wasm_bindgen]
pub struct TextCanvas {
    state: EditorState,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// `None` when the page has no usable local storage.
    storage: Option<LocalStorage>,
}

#[wasm_bindgen]
impl TextCanvas {
    /// Attach to a `<canvas>` element with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<TextCanvas, JsValue> {
        Self::build(canvas, EditorConfig::default())
    }

    /// Attach with a JSON `EditorConfig`. Invalid JSON falls back to the
    /// defaults. The canvas element's size always wins over `viewport`.
    pub fn with_config(canvas: HtmlCanvasElement, config_json: &str) -> Result<TextCanvas, JsValue> {
        let config = EditorConfig::from_json(config_json).unwrap_or_else(|e| {
            log::warn!("invalid editor config, using defaults: {e}");
            EditorConfig::default()
        });
        Self::build(canvas, config)
    }

    /// Repaint the whole canvas from the current items.
    pub fn render(&self) {
        let measure = Canvas2dMeasure::new(&self.ctx);
        let ops = paint_scene(
            self.state.items(),
            self.state.viewport(),
            self.state.selected(),
            &measure,
        );
        render2d::execute(&self.ctx, &ops);
    }

    /// Resize the `<canvas>` element and the editor's viewport together.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        let effects = self.state.set_viewport(Viewport {
            width: f64::from(width),
            height: f64::from(height),
        });
        self.apply(effects);
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    /// Handle pointer down (canvas-relative). Returns true if anything changed.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> bool {
        let effects = {
            let measure = Canvas2dMeasure::new(&self.ctx);
            self.state.pointer_down(x, y, &measure)
        };
        self.apply(effects)
    }

    /// Handle pointer move. Returns true if the dragged item moved.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        let effects = {
            let measure = Canvas2dMeasure::new(&self.ctx);
            self.state.pointer_move(x, y, &measure)
        };
        self.apply(effects)
    }

    /// Handle pointer up. Returns true if a drag was committed.
    pub fn handle_pointer_up(&mut self) -> bool {
        let effects = self.state.pointer_up();
        self.apply(effects)
    }

    /// Handle the pointer leaving the canvas; ends any drag.
    pub fn handle_pointer_leave(&mut self) -> bool {
        let effects = self.state.pointer_up();
        self.apply(effects)
    }

    /// Whether a drag is in progress (for the `move` cursor).
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    // ─── Text entry ──────────────────────────────────────────────────────

    /// Open the add-text field. Returns `{"x":..,"y":..}`: where to place
    /// the input, relative to the canvas.
    pub fn add_text(&mut self) -> String {
        let (x, y) = self.state.begin_text_entry();
        serde_json::json!({ "x": x, "y": y }).to_string()
    }

    /// Commit the add-text field (Enter). Returns true if text was added.
    pub fn commit_text(&mut self, text: &str) -> bool {
        let effects = self.state.commit_text_entry(text);
        self.apply(effects) && effects.persist
    }

    /// Close the add-text field without adding anything (Escape).
    pub fn cancel_text(&mut self) -> bool {
        let effects = self.state.cancel_text_entry();
        self.apply(effects)
    }

    // ─── Edit ────────────────────────────────────────────────────────────

    /// Undo the last edit.
    pub fn undo(&mut self) -> bool {
        let effects = self.state.undo();
        self.apply(effects)
    }

    /// Redo the last undone edit.
    pub fn redo(&mut self) -> bool {
        let effects = self.state.redo();
        self.apply(effects)
    }

    pub fn toggle_bold(&mut self) -> bool {
        let effects = self.state.toggle_bold();
        self.apply(effects)
    }

    pub fn toggle_italic(&mut self) -> bool {
        let effects = self.state.toggle_italic();
        self.apply(effects)
    }

    pub fn toggle_underline(&mut self) -> bool {
        let effects = self.state.toggle_underline();
        self.apply(effects)
    }

    /// Center the selected text on the canvas.
    pub fn center(&mut self) -> bool {
        let effects = {
            let measure = Canvas2dMeasure::new(&self.ctx);
            self.state.center_selected(&measure)
        };
        self.apply(effects)
    }

    pub fn increase_font_size(&mut self) -> bool {
        let effects = self.state.increase_font_size();
        self.apply(effects)
    }

    pub fn decrease_font_size(&mut self) -> bool {
        let effects = self.state.decrease_font_size();
        self.apply(effects)
    }

    pub fn set_font_size(&mut self, size: f64) -> bool {
        let effects = self.state.set_font_size(size);
        self.apply(effects)
    }

    pub fn set_font_family(&mut self, family: &str) -> bool {
        let effects = self.state.set_font_family(family);
        self.apply(effects)
    }

    // ─── Keyboard Shortcut API ───────────────────────────────────────────

    /// Handle a keyboard event. `entry_text` is the add-text field's value
    /// when the event comes from that field. Returns a JSON string:
    /// `{"changed":bool,"action":"<action_name>"}`.
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
        entry_text: Option<String>,
    ) -> String {
        let mods = Modifiers {
            shift,
            ctrl,
            alt,
            meta,
        };
        let Some(action) = ShortcutMap::resolve(key, mods) else {
            return key_result_json(false, None);
        };
        let effects = self.state.apply_shortcut(action, entry_text.as_deref());
        let changed = self.apply(effects);
        key_result_json(changed, Some(action))
    }

    // ─── Controls & state ────────────────────────────────────────────────

    /// Style-control state as JSON (font size label, family select,
    /// toggle buttons, undo/redo availability).
    pub fn get_controls(&self) -> String {
        serde_json::to_string(&self.state.controls()).unwrap_or_else(|_| "{}".to_string())
    }

    /// The document in its persisted shape: `{"textArray":[...]}`.
    pub fn get_state_json(&self) -> String {
        tc_core::CanvasState::to_json(self.state.items())
            .unwrap_or_else(|_| r#"{"textArray":[]}"#.to_string())
    }

    /// Restore the document from local storage. Returns true if any items
    /// were loaded.
    pub fn load_from_storage(&mut self) -> bool {
        let effects = match &self.storage {
            Some(store) => self.state.load(store),
            None => return false,
        };
        self.apply(effects);
        !self.state.items().is_empty()
    }

    /// Write the document to local storage. Returns true on success.
    pub fn save_to_storage(&mut self) -> bool {
        let Some(store) = self.storage.as_mut() else {
            return false;
        };
        match self.state.save(store) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }
}

// ─── Private helpers ─────────────────────────────────────────────────────

impl TextCanvas {
    fn build(canvas: HtmlCanvasElement, mut config: EditorConfig) -> Result<TextCanvas, JsValue> {
        // Set up panic hook and logger for better error messages in console
        console_error_panic_hook_setup();
        #[cfg(target_arch = "wasm32")]
        logger::init(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        });

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        config.viewport = Viewport {
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        };

        let storage = LocalStorage::open()
            .inspect_err(|e| log::warn!("{e}; canvas state will not persist"))
            .ok();

        Ok(Self {
            state: EditorState::new(config),
            canvas,
            ctx,
            storage,
        })
    }

    /// Carry out an action's effects. Returns true if anything happened.
    fn apply(&mut self, effects: Effects) -> bool {
        if effects.redraw {
            self.render();
        }
        if effects.persist {
            self.save_to_storage();
        }
        !effects.is_none()
    }
}

fn key_result_json(changed: bool, action: Option<ShortcutAction>) -> String {
    serde_json::json!({
        "changed": changed,
        "action": action.map_or("none", ShortcutAction::name),
    })
    .to_string()
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Text Canvas WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
