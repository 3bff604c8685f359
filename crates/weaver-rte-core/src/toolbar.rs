//! Toolbar model: control layout, focus traversal, and the mode toggle.
//!
//! The platform layer renders [`TOOLBAR_ITEMS`] in order and forwards
//! activations and key presses to the [`Editor`](crate::Editor).

use crate::actions::Key;
use crate::commands::CommandName;
use crate::host::PressedIndicator;
use crate::types::Mode;

/// What a toolbar control does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarControl {
    Command(CommandName),
    /// Flips between visual and source mode.
    ModeToggle,
}

impl ToolbarControl {
    /// Stable identifier (command name, or `toggle-html`).
    pub fn id(self) -> &'static str {
        match self {
            ToolbarControl::Command(name) => name.as_str(),
            ToolbarControl::ModeToggle => "toggle-html",
        }
    }
}

/// A control's accessible label and visible glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarItem {
    pub control: ToolbarControl,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn command(name: CommandName, label: &'static str, icon: &'static str) -> ToolbarItem {
    ToolbarItem {
        control: ToolbarControl::Command(name),
        label,
        icon,
    }
}

/// Toolbar controls in display order. The mode toggle is always last.
pub const TOOLBAR_ITEMS: [ToolbarItem; 18] = [
    command(CommandName::Bold, "Bold", "B"),
    command(CommandName::Italic, "Italic", "I"),
    command(CommandName::Underline, "Underline", "U"),
    command(CommandName::StrikeThrough, "Strikethrough", "S"),
    command(CommandName::Paragraph, "Paragraph", "P"),
    command(CommandName::Heading1, "Heading 1", "H1"),
    command(CommandName::Heading2, "Heading 2", "H2"),
    command(CommandName::Heading3, "Heading 3", "H3"),
    command(CommandName::Blockquote, "Blockquote", "❝"),
    command(CommandName::UnorderedList, "Bulleted list", "•"),
    command(CommandName::OrderedList, "Numbered list", "1."),
    command(CommandName::Link, "Insert link", "🔗"),
    command(CommandName::Unlink, "Remove link", "⤺"),
    command(CommandName::HorizontalRule, "Horizontal rule", "―"),
    command(CommandName::ClearFormatting, "Clear formatting", "✖"),
    command(CommandName::Undo, "Undo", "↺"),
    command(CommandName::Redo, "Redo", "↻"),
    ToolbarItem {
        control: ToolbarControl::ModeToggle,
        label: "Toggle HTML view",
        icon: "</>",
    },
];

/// Index of the control that should receive focus after `key`.
///
/// ArrowRight/ArrowLeft move to the neighbour, wrapping at either end.
/// Returns `None` for any other key, or when `current` is out of range.
pub fn focus_target(len: usize, current: usize, key: &Key) -> Option<usize> {
    if current >= len {
        return None;
    }
    match key {
        Key::ArrowRight => Some((current + 1) % len),
        Key::ArrowLeft => Some((current + len - 1) % len),
        _ => None,
    }
}

/// Holds the mode toggle control so any mode change can update it.
pub struct Toolbar<B> {
    mode_toggle: Option<B>,
}

impl<B> Default for Toolbar<B> {
    fn default() -> Self {
        Self { mode_toggle: None }
    }
}

impl<B: PressedIndicator> Toolbar<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mode_toggle(&mut self, button: B) {
        self.mode_toggle = Some(button);
    }

    /// Pressed while in source mode.
    pub fn update_mode_toggle(&self, mode: Mode) {
        if let Some(button) = &self.mode_toggle {
            button.set_pressed(mode == Mode::Source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_every_command_once() {
        let commands: Vec<_> = TOOLBAR_ITEMS
            .iter()
            .filter_map(|item| match item.control {
                ToolbarControl::Command(name) => Some(name),
                ToolbarControl::ModeToggle => None,
            })
            .collect();
        assert_eq!(commands, CommandName::ALL.to_vec());
        assert_eq!(
            TOOLBAR_ITEMS.last().map(|i| i.control),
            Some(ToolbarControl::ModeToggle)
        );
    }

    #[test]
    fn test_focus_wraps() {
        let len = TOOLBAR_ITEMS.len();
        assert_eq!(focus_target(len, 0, &Key::ArrowRight), Some(1));
        assert_eq!(focus_target(len, len - 1, &Key::ArrowRight), Some(0));
        assert_eq!(focus_target(len, 0, &Key::ArrowLeft), Some(len - 1));
        assert_eq!(focus_target(len, 5, &Key::ArrowLeft), Some(4));
    }

    #[test]
    fn test_focus_ignores_other_keys() {
        assert_eq!(focus_target(3, 1, &Key::ArrowDown), None);
        assert_eq!(focus_target(3, 1, &Key::character("a")), None);
        assert_eq!(focus_target(3, 7, &Key::ArrowRight), None);
        assert_eq!(focus_target(0, 0, &Key::ArrowRight), None);
    }

    #[test]
    fn test_control_ids() {
        assert_eq!(ToolbarControl::ModeToggle.id(), "toggle-html");
        assert_eq!(
            ToolbarControl::Command(CommandName::StrikeThrough).id(),
            "strikeThrough"
        );
    }
}
