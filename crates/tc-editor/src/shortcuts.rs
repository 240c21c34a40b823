//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s.
//! The map lives in Rust so the browser bridge and native hosts agree.

use crate::input::Modifiers;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Text entry ──
    /// Enter: commit the pending text-input field.
    CommitText,
    /// Escape: close the pending text-input field.
    CancelText,

    // ── Edit ──
    Undo,
    Redo,

    // ── Style ──
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    IncreaseFontSize,
    DecreaseFontSize,
}

impl ShortcutAction {
    pub fn name(self) -> &'static str {
        match self {
            Self::CommitText => "commitText",
            Self::CancelText => "cancelText",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::ToggleBold => "bold",
            Self::ToggleItalic => "italic",
            Self::ToggleUnderline => "underline",
            Self::IncreaseFontSize => "increaseFontSize",
            Self::DecreaseFontSize => "decreaseFontSize",
        }
    }
}

/// Resolves key events into shortcut actions.
///
/// `meta` is ⌘ on macOS; `ctrl` plays the same role elsewhere.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Enter"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
        let cmd = modifiers.ctrl || modifiers.meta;

        if cmd && modifiers.shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                "b" | "B" => Some(ShortcutAction::ToggleBold),
                "i" | "I" => Some(ShortcutAction::ToggleItalic),
                "u" | "U" => Some(ShortcutAction::ToggleUnderline),
                "=" | "+" => Some(ShortcutAction::IncreaseFontSize),
                "-" => Some(ShortcutAction::DecreaseFontSize),
                _ => None,
            };
        }

        match key {
            "Enter" => Some(ShortcutAction::CommitText),
            "Escape" => Some(ShortcutAction::CancelText),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };
    const CMD: Modifiers = Modifiers {
        meta: true,
        ..NONE
    };
    const CTRL: Modifiers = Modifiers { ctrl: true, ..NONE };
    const CMD_SHIFT: Modifiers = Modifiers {
        shift: true,
        ..CMD
    };

    #[test]
    fn resolve_text_entry_keys() {
        assert_eq!(
            ShortcutMap::resolve("Enter", NONE),
            Some(ShortcutAction::CommitText)
        );
        assert_eq!(
            ShortcutMap::resolve("Escape", NONE),
            Some(ShortcutAction::CancelText)
        );
    }

    #[test]
    fn resolve_undo_redo() {
        assert_eq!(ShortcutMap::resolve("z", CMD), Some(ShortcutAction::Undo));
        assert_eq!(ShortcutMap::resolve("z", CTRL), Some(ShortcutAction::Undo));
        assert_eq!(
            ShortcutMap::resolve("Z", CMD_SHIFT),
            Some(ShortcutAction::Redo)
        );
        assert_eq!(ShortcutMap::resolve("y", CTRL), Some(ShortcutAction::Redo));
    }

    #[test]
    fn resolve_style_toggles() {
        assert_eq!(
            ShortcutMap::resolve("b", CMD),
            Some(ShortcutAction::ToggleBold)
        );
        assert_eq!(
            ShortcutMap::resolve("i", CTRL),
            Some(ShortcutAction::ToggleItalic)
        );
        assert_eq!(
            ShortcutMap::resolve("u", CMD),
            Some(ShortcutAction::ToggleUnderline)
        );
        assert_eq!(
            ShortcutMap::resolve("+", CMD),
            Some(ShortcutAction::IncreaseFontSize)
        );
        assert_eq!(
            ShortcutMap::resolve("-", CTRL),
            Some(ShortcutAction::DecreaseFontSize)
        );
    }

    #[test]
    fn resolve_modifier_precedence() {
        // Plain letters are typed text, not shortcuts.
        assert_eq!(ShortcutMap::resolve("z", NONE), None);
        assert_eq!(ShortcutMap::resolve("b", NONE), None);
        // Cmd+Enter is not a commit.
        assert_eq!(ShortcutMap::resolve("Enter", CMD), None);
    }

    #[test]
    fn resolve_unknown_key() {
        assert_eq!(ShortcutMap::resolve("q", NONE), None);
        assert_eq!(ShortcutMap::resolve("q", CMD), None);
    }
}
