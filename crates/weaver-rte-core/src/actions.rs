//! Keyboard input: keys, modifier combos, and the shortcut map.
//!
//! Platform-specific code converts native key events into [`KeyCombo`]s;
//! everything past that point is platform-agnostic.

use smol_str::SmolStr;

use crate::commands::CommandName;

/// Key values for keyboard input.
///
/// Only the keys the editor reacts to get their own variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key.
    Character(SmolStr),

    /// Unknown/unidentified key.
    Unidentified,

    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Enter,
    Escape,
    Tab,
}

impl Key {
    /// Create a character key.
    pub fn character(s: impl Into<SmolStr>) -> Self {
        Self::Character(s.into())
    }

    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Home" => Key::Home,
            "End" => Key::End,
            "Enter" => Key::Enter,
            "Escape" => Key::Escape,
            "Tab" => Key::Tab,
            s if s.chars().count() == 1 => Key::character(s),
            _ => Key::Unidentified,
        }
    }

    /// Lowercased character, for case-insensitive shortcut matching.
    fn lowercase_char(&self) -> Option<char> {
        match self {
            Key::Character(s) => {
                let mut chars = s.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                c.to_lowercase().next()
            }
            _ => None,
        }
    }
}

/// Modifier key state for a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const META: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: true,
    };

    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        alt: false,
        shift: true,
        meta: false,
    };

    pub const META_SHIFT: Self = Self {
        ctrl: false,
        alt: false,
        shift: true,
        meta: true,
    };

    /// Ctrl, or Cmd on Mac. Either one arms the shortcut map on every platform.
    pub fn has_primary(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A key combination for triggering an action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::CTRL,
        }
    }

    pub fn meta(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::META,
        }
    }
}

/// Result of handling a keydown event.
#[derive(Debug, Clone, PartialEq)]
pub enum KeydownResult {
    /// Event was handled, prevent default.
    Handled,
    /// Event was not a keybinding, let platform handle it.
    NotHandled,
}

/// Map a key combination to its editor shortcut.
///
/// Requires Ctrl or Cmd. `z` is undo, `Shift+z` and `y` are redo.
pub fn shortcut_for(combo: &KeyCombo) -> Option<CommandName> {
    if !combo.modifiers.has_primary() {
        return None;
    }
    match combo.key.lowercase_char()? {
        'b' => Some(CommandName::Bold),
        'i' => Some(CommandName::Italic),
        'u' => Some(CommandName::Underline),
        'z' if combo.modifiers.shift => Some(CommandName::Redo),
        'z' => Some(CommandName::Undo),
        'y' => Some(CommandName::Redo),
        _ => None,
    }
}
