//! Editor state: the text item store, its history, the drag tool and the
//! style controls, behind one value the host owns.
//!
//! Every action mutates the state in place and returns [`Effects`] telling
//! the host what to do next: repaint, write the document through to
//! storage, refresh the style-control UI. Actions that need a selection
//! quietly do nothing without one.

use crate::history::History;
use crate::input::InputEvent;
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::tools::{DragAction, DragTool, Hit, clamp_to_viewport};
use serde::Serialize;
use tc_core::persist::{self, KeyValueStore};
use tc_core::{EditorConfig, PersistError, TextItem, Viewport};
use tc_render::TextMeasure;
use tc_render::hit::hit_test;

/// What the host must do after an action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Effects {
    /// Repaint the canvas.
    pub redraw: bool,
    /// Write the document to storage.
    pub persist: bool,
    /// Refresh the style controls (font label, family select, toggles).
    pub controls: bool,
}

impl Effects {
    pub const fn none() -> Self {
        Self {
            redraw: false,
            persist: false,
            controls: false,
        }
    }

    /// A committed document edit.
    pub const fn edit() -> Self {
        Self {
            redraw: true,
            persist: true,
            controls: true,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            redraw: true,
            persist: false,
            controls: false,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::none()
    }
}

/// Snapshot of the style-control UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlState {
    pub font_size: f64,
    pub font_family: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub has_selection: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub entry_pending: bool,
}

pub struct EditorState {
    config: EditorConfig,
    /// The text item store. List order is paint order and hit order.
    items: Vec<TextItem>,
    history: History,
    drag: DragTool,
    /// Font size shown in the controls; applied to new and selected text.
    font_size: f64,
    /// Font family shown in the controls; applied to new and selected text.
    font_family: String,
    /// Whether the add-text input field is open.
    entry_pending: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorState {
    pub fn new(config: EditorConfig) -> Self {
        let config = config.normalized();
        Self {
            history: History::new(config.history_depth),
            drag: DragTool::new(),
            font_size: config.default_font_size,
            font_family: config.default_font_family.clone(),
            items: Vec::new(),
            entry_pending: false,
            config,
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn items(&self) -> &[TextItem] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.drag.selected
    }

    pub fn selected_item(&self) -> Option<&TextItem> {
        self.drag.selected.and_then(|i| self.items.get(i))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_entry_pending(&self) -> bool {
        self.entry_pending
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Resize the canvas. Items keep their positions.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Effects {
        self.config.viewport = viewport;
        Effects::redraw()
    }

    pub fn controls(&self) -> ControlState {
        let selected = self.selected_item();
        ControlState {
            font_size: self.font_size,
            font_family: self.font_family.clone(),
            bold: selected.is_some_and(|i| i.is_bold),
            italic: selected.is_some_and(|i| i.is_italic),
            underline: selected.is_some_and(|i| i.is_underline),
            has_selection: selected.is_some(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            entry_pending: self.entry_pending,
        }
    }

    // ─── Text entry ──────────────────────────────────────────────────────

    /// Open the add-text input field. Returns where to place it, relative
    /// to the canvas origin.
    pub fn begin_text_entry(&mut self) -> (f64, f64) {
        self.entry_pending = true;
        let (cx, cy) = self.config.viewport.center();
        (cx - 100.0, cy - 20.0)
    }

    /// Enter in the input field: add `text` at the canvas center with the
    /// current control font, select it and close the field.
    ///
    /// Blank text just closes the field.
    pub fn commit_text_entry(&mut self, text: &str) -> Effects {
        if !self.entry_pending {
            return Effects::none();
        }
        self.entry_pending = false;
        if text.trim().is_empty() {
            log::debug!("ignoring blank text entry");
            return Effects {
                controls: true,
                ..Effects::none()
            };
        }

        let (cx, cy) = self.config.viewport.center();
        let item = TextItem::new(text, cx, cy).with_font(self.font_size, self.font_family.clone());
        self.items.push(item);
        self.drag.clear();
        self.drag.selected = Some(self.items.len() - 1);
        self.history.save_state(&self.items);
        Effects::edit()
    }

    /// Escape in the input field.
    pub fn cancel_text_entry(&mut self) -> Effects {
        if !std::mem::take(&mut self.entry_pending) {
            return Effects::none();
        }
        Effects {
            controls: true,
            ..Effects::none()
        }
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    /// Dispatch any input event.
    pub fn handle_input(&mut self, event: &InputEvent, measure: &dyn TextMeasure) -> Effects {
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(*x, *y, measure),
            InputEvent::PointerMove { x, y } => self.pointer_move(*x, *y, measure),
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => self.pointer_up(),
            InputEvent::Key { key, modifiers } => match ShortcutMap::resolve(key, *modifiers) {
                Some(action) => self.apply_shortcut(action, None),
                None => Effects::none(),
            },
        }
    }

    /// Select the first item under the pointer and start dragging it.
    pub fn pointer_down(&mut self, x: f64, y: f64, measure: &dyn TextMeasure) -> Effects {
        let hit = hit_test(&self.items, measure, x, y).map(|index| Hit {
            index,
            x: self.items[index].x,
            y: self.items[index].y,
        });
        match self.drag.handle(&InputEvent::PointerDown { x, y }, hit) {
            DragAction::Select(index) => {
                self.sync_controls_from(index);
                Effects {
                    redraw: true,
                    controls: true,
                    persist: false,
                }
            }
            _ => Effects::none(),
        }
    }

    /// Move the dragged item, clamped so it stays on the canvas.
    pub fn pointer_move(&mut self, x: f64, y: f64, measure: &dyn TextMeasure) -> Effects {
        let DragAction::MoveTo { index, x, y } =
            self.drag.handle(&InputEvent::PointerMove { x, y }, None)
        else {
            return Effects::none();
        };
        let viewport = self.config.viewport;
        let Some(item) = self.items.get_mut(index) else {
            return Effects::none();
        };
        let width = measure.text_width(item);
        let (nx, ny) = clamp_to_viewport(item, x, y, width, viewport);
        if nx == item.x && ny == item.y {
            return Effects::none();
        }
        item.x = nx;
        item.y = ny;
        Effects::redraw()
    }

    /// End the drag (pointer-up or pointer-leave). A drag that left the
    /// item somewhere new becomes one undo step.
    pub fn pointer_up(&mut self) -> Effects {
        let DragAction::Release { index, origin } =
            self.drag.handle(&InputEvent::PointerLeave, None)
        else {
            return Effects::none();
        };
        match self.items.get(index) {
            Some(item) if (item.x, item.y) != origin => {
                log::debug!("drag of item {index} committed");
                self.history.save_state(&self.items);
                Effects::edit()
            }
            _ => Effects::none(),
        }
    }

    // ─── History ─────────────────────────────────────────────────────────

    pub fn undo(&mut self) -> Effects {
        match self.history.undo() {
            Some(items) => self.restore(items),
            None => Effects::none(),
        }
    }

    pub fn redo(&mut self) -> Effects {
        match self.history.redo() {
            Some(items) => self.restore(items),
            None => Effects::none(),
        }
    }

    fn restore(&mut self, items: Vec<TextItem>) -> Effects {
        self.items = items;
        match self.drag.selected {
            Some(index) if index < self.items.len() => self.sync_controls_from(index),
            _ => self.drag.clear(),
        }
        Effects::edit()
    }

    // ─── Style ───────────────────────────────────────────────────────────

    pub fn toggle_bold(&mut self) -> Effects {
        self.edit_selected(|item| item.is_bold = !item.is_bold)
    }

    pub fn toggle_italic(&mut self) -> Effects {
        self.edit_selected(|item| item.is_italic = !item.is_italic)
    }

    pub fn toggle_underline(&mut self) -> Effects {
        self.edit_selected(|item| item.is_underline = !item.is_underline)
    }

    pub fn increase_font_size(&mut self) -> Effects {
        self.set_font_size(self.font_size + 1.0)
    }

    pub fn decrease_font_size(&mut self) -> Effects {
        self.set_font_size(self.font_size - 1.0)
    }

    /// Set the control font size (clamped) and apply it to the selection.
    pub fn set_font_size(&mut self, size: f64) -> Effects {
        if self.selected_item().is_none() {
            return Effects::none();
        }
        let size = self.config.clamp_font_size(size);
        self.font_size = size;
        self.edit_selected(|item| item.font_size = size)
    }

    /// Set the control font family and apply it to the selection.
    pub fn set_font_family(&mut self, family: &str) -> Effects {
        let family = family.trim();
        if family.is_empty() || self.selected_item().is_none() {
            return Effects::none();
        }
        self.font_family = family.to_string();
        self.edit_selected(|item| item.font_family = family.to_string())
    }

    /// Center the selected item's box on the canvas.
    pub fn center_selected(&mut self, measure: &dyn TextMeasure) -> Effects {
        let viewport = self.config.viewport;
        self.edit_selected(|item| {
            let width = measure.text_width(item);
            let x = (viewport.width - width) / 2.0;
            let y = (viewport.height + item.font_size) / 2.0;
            let (x, y) = clamp_to_viewport(item, x, y, width, viewport);
            item.x = x;
            item.y = y;
        })
    }

    /// Apply `edit` to the selected item. An edit that leaves the item as
    /// it was is not recorded, so redo survives it.
    fn edit_selected(&mut self, edit: impl FnOnce(&mut TextItem)) -> Effects {
        let Some(item) = self.drag.selected.and_then(|i| self.items.get_mut(i)) else {
            return Effects::none();
        };
        let before = item.clone();
        edit(item);
        if *item == before {
            return Effects::none();
        }
        self.history.save_state(&self.items);
        Effects::edit()
    }

    fn sync_controls_from(&mut self, index: usize) {
        if let Some(item) = self.items.get(index) {
            self.font_size = item.font_size;
            self.font_family = item.font_family.clone();
        }
    }

    // ─── Shortcuts ───────────────────────────────────────────────────────

    /// Run a shortcut. `entry_text` is the input field's value, used by
    /// `CommitText`.
    pub fn apply_shortcut(
        &mut self,
        action: ShortcutAction,
        entry_text: Option<&str>,
    ) -> Effects {
        match action {
            ShortcutAction::CommitText => match entry_text {
                Some(text) => self.commit_text_entry(text),
                None => Effects::none(),
            },
            ShortcutAction::CancelText => self.cancel_text_entry(),
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::Redo => self.redo(),
            ShortcutAction::ToggleBold => self.toggle_bold(),
            ShortcutAction::ToggleItalic => self.toggle_italic(),
            ShortcutAction::ToggleUnderline => self.toggle_underline(),
            ShortcutAction::IncreaseFontSize => self.increase_font_size(),
            ShortcutAction::DecreaseFontSize => self.decrease_font_size(),
        }
    }

    // ─── Persistence ─────────────────────────────────────────────────────

    /// Restore the document from `store`. History restarts with the loaded
    /// list as its baseline; the first item (if any) is selected.
    pub fn load(&mut self, store: &dyn KeyValueStore) -> Effects {
        self.items = persist::load(store, &self.config.storage_key);
        self.history.reset(&self.items);
        self.drag.clear();
        self.entry_pending = false;
        if !self.items.is_empty() {
            self.drag.selected = Some(0);
            self.sync_controls_from(0);
        }
        Effects {
            redraw: true,
            persist: false,
            controls: true,
        }
    }

    /// Write the document through to `store`.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), PersistError> {
        persist::save(store, &self.config.storage_key, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tc_core::MemoryStore;
    use tc_render::ApproxMeasure;

    const M: ApproxMeasure = ApproxMeasure { advance: 0.5 };

    fn add(state: &mut EditorState, text: &str) -> Effects {
        state.begin_text_entry();
        state.commit_text_entry(text)
    }

    #[test]
    fn text_entry_anchor_is_centered() {
        let mut state = EditorState::default();
        assert_eq!(state.begin_text_entry(), (300.0, 280.0));
        assert!(state.is_entry_pending());
        assert!(state.cancel_text_entry().controls);
        assert!(!state.is_entry_pending());
        assert!(state.cancel_text_entry().is_none());
    }

    #[test]
    fn commit_adds_selected_item_at_center() {
        let mut state = EditorState::default();
        assert_eq!(add(&mut state, "Hello"), Effects::edit());

        let item = &state.items()[0];
        assert_eq!(item.content, "Hello");
        assert_eq!((item.x, item.y), (400.0, 300.0));
        assert_eq!(item.font_size, 18.0);
        assert_eq!(item.font_family, "Arial");
        assert!(!item.is_bold && !item.is_italic && !item.is_underline);
        assert_eq!(state.selected(), Some(0));
        assert!(state.history().can_undo());
    }

    #[test]
    fn commit_without_entry_or_blank_adds_nothing() {
        let mut state = EditorState::default();
        assert!(state.commit_text_entry("orphan").is_none());
        assert!(!add(&mut state, "   ").persist);
        assert!(state.items().is_empty());
        assert!(!state.history().can_undo());
    }

    #[test]
    fn style_actions_without_selection_noop() {
        let mut state = EditorState::default();
        assert!(state.toggle_bold().is_none());
        assert!(state.toggle_italic().is_none());
        assert!(state.toggle_underline().is_none());
        assert!(state.increase_font_size().is_none());
        assert!(state.decrease_font_size().is_none());
        assert!(state.set_font_family("Georgia").is_none());
        assert!(state.center_selected(&M).is_none());
        assert_eq!(state.controls().font_size, 18.0);
    }

    #[test]
    fn font_size_is_clamped() {
        let mut state = EditorState::default();
        add(&mut state, "x");
        state.set_font_size(99.0);
        state.increase_font_size();
        state.increase_font_size();
        assert_eq!(state.items()[0].font_size, 100.0);

        state.set_font_size(11.0);
        for _ in 0..5 {
            state.decrease_font_size();
        }
        assert_eq!(state.items()[0].font_size, 10.0);
        assert_eq!(state.controls().font_size, 10.0);
    }

    #[test]
    fn unchanged_style_edits_leave_history_alone() {
        let mut state = EditorState::default();
        add(&mut state, "Hello");
        state.set_font_size(100.0);
        state.toggle_bold();
        state.undo();
        let depth = state.history().undo_depth();

        assert!(state.increase_font_size().is_none());
        assert!(state.set_font_family("Arial").is_none());
        state.set_font_size(10.0);
        let depth_after_resize = state.history().undo_depth();
        assert_eq!(depth_after_resize, depth + 1);
        assert!(state.decrease_font_size().is_none());

        assert_eq!(state.center_selected(&M), Effects::edit());
        assert!(state.center_selected(&M).is_none());
        assert_eq!(state.history().undo_depth(), depth_after_resize + 1);
    }

    #[test]
    fn noop_edits_preserve_redo() {
        let mut state = EditorState::default();
        add(&mut state, "Hello");
        state.set_font_size(100.0);
        state.toggle_bold();
        state.undo();

        state.increase_font_size();
        state.set_font_family("Arial");
        assert!(state.history().can_redo());
        state.redo();
        assert!(state.items()[0].is_bold);
    }

    #[test]
    fn font_family_applies_to_selection() {
        let mut state = EditorState::default();
        add(&mut state, "x");
        assert_eq!(state.set_font_family("Georgia"), Effects::edit());
        assert_eq!(state.items()[0].font_family, "Georgia");
        assert!(state.set_font_family("  ").is_none());
    }

    #[test]
    fn pointer_down_selects_first_hit_and_syncs_controls() {
        let mut state = EditorState::default();
        add(&mut state, "small");
        state.set_font_size(12.0);
        add(&mut state, "other");
        state.set_font_size(24.0);
        state.set_font_family("Georgia");
        assert_eq!(state.selected(), Some(1));

        // Both items cover (405, 295); the earlier one wins.
        let fx = state.pointer_down(405.0, 295.0, &M);
        assert!(fx.redraw && fx.controls && !fx.persist);
        assert_eq!(state.selected(), Some(0));
        assert_eq!(state.controls().font_size, 12.0);
        assert_eq!(state.controls().font_family, "Arial");
        assert!(state.is_dragging());
        state.pointer_up();
        assert!(!state.is_dragging());
    }

    #[test]
    fn drag_commits_one_history_step() {
        let mut state = EditorState::default();
        add(&mut state, "Hello");
        let depth = state.history().undo_depth();

        state.pointer_down(401.0, 295.0, &M);
        for step in 1..=5 {
            let fx = state.pointer_move(401.0 + step as f64 * 10.0, 295.0, &M);
            assert_eq!(fx, Effects::redraw());
        }
        assert_eq!(state.history().undo_depth(), depth);
        assert_eq!(state.pointer_up(), Effects::edit());
        assert_eq!(state.history().undo_depth(), depth + 1);
        assert_eq!(state.items()[0].x, 450.0);

        state.undo();
        assert_eq!(state.items()[0].x, 400.0);
    }

    #[test]
    fn click_without_move_adds_no_history() {
        let mut state = EditorState::default();
        add(&mut state, "Hello");
        let depth = state.history().undo_depth();
        state.pointer_down(401.0, 295.0, &M);
        assert!(state.pointer_up().is_none());
        assert_eq!(state.history().undo_depth(), depth);
    }

    #[test]
    fn center_uses_measured_width() {
        let mut state = EditorState::default();
        add(&mut state, "Hello"); // 45 wide at 18px
        state.center_selected(&M);
        let item = &state.items()[0];
        assert_eq!(item.x, (800.0 - 45.0) / 2.0);
        assert_eq!(item.y, (600.0 + 18.0) / 2.0);
    }

    #[test]
    fn undo_past_selection_clears_it() {
        let mut state = EditorState::default();
        add(&mut state, "a");
        add(&mut state, "b");
        assert_eq!(state.selected(), Some(1));
        state.undo();
        assert_eq!(state.selected(), None);
        assert!(!state.controls().has_selection);
        assert!(state.toggle_bold().is_none());
    }

    #[test]
    fn key_events_dispatch_shortcuts() {
        use crate::input::Modifiers;
        let mut state = EditorState::default();
        add(&mut state, "a");
        let cmd = Modifiers {
            meta: true,
            ..Modifiers::default()
        };

        state.handle_input(&InputEvent::key("b", cmd), &M);
        assert!(state.items()[0].is_bold);
        state.handle_input(&InputEvent::key("z", cmd), &M);
        assert!(!state.items()[0].is_bold);
        assert!(
            state
                .handle_input(&InputEvent::key("q", Modifiers::default()), &M)
                .is_none()
        );
    }

    #[test]
    fn commit_shortcut_uses_entry_text() {
        let mut state = EditorState::default();
        state.begin_text_entry();
        assert!(
            state
                .apply_shortcut(ShortcutAction::CommitText, None)
                .is_none()
        );
        state.apply_shortcut(ShortcutAction::CommitText, Some("typed"));
        assert_eq!(state.items()[0].content, "typed");
    }

    #[test]
    fn load_selects_first_item_and_resets_history() {
        let mut store = MemoryStore::new();
        let mut first = EditorState::default();
        add(&mut first, "one");
        first.set_font_size(30.0);
        first.set_font_family("Georgia");
        add(&mut first, "two");
        first.save(&mut store).unwrap();

        let mut second = EditorState::default();
        let fx = second.load(&store);
        assert!(fx.redraw && fx.controls);
        assert_eq!(second.items(), first.items());
        assert_eq!(second.selected(), Some(0));
        assert_eq!(second.controls().font_size, 30.0);
        assert_eq!(second.controls().font_family, "Georgia");
        assert!(!second.history().can_undo());

        // Undo after a fresh edit returns to the loaded document.
        second.toggle_bold();
        second.undo();
        assert_eq!(second.items(), first.items());
    }

    #[test]
    fn load_from_empty_store_is_empty() {
        let mut state = EditorState::default();
        state.load(&MemoryStore::new());
        assert!(state.items().is_empty());
        assert_eq!(state.selected(), None);
    }
}
