//! weaver-rte-core: rich-text editor logic without DOM dependencies.
//!
//! This crate provides:
//! - Host capability traits (`EditingEngine`, `SelectionHost`, `ViewPane`, ...)
//! - `SelectionTracker`, `CommandTable`, `ModeController`, `Toolbar` components
//! - `Editor<P>` - the controller tying them together, generic over an
//!   `EditorPlatform`
//!
//! The browser implementation lives in `weaver-rte-browser`.

pub mod actions;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod editor;
pub mod host;
pub mod modes;
pub mod selection;
pub mod serializer;
pub mod toolbar;
pub mod types;

pub use actions::{Key, KeyCombo, KeydownResult, Modifiers, shortcut_for};
pub use commands::{
    CommandAction, CommandDescriptor, CommandName, CommandTable, LINK_PROMPT, UnknownCommand,
};
pub use config::{
    DEFAULT_NAME_PREFIX, DEFAULT_SYNC_DELAY, EditorConfig, HostNameHints, NameSequence,
    resolve_name,
};
pub use debounce::{SyncDebouncer, SyncTicket};
pub use editor::{Editor, EditorParts, char_count_label};
pub use host::{
    EditingEngine, EditorHost, EditorPlatform, FieldSink, FormatError, HtmlFormatter,
    HtmlSanitizer, PressedIndicator, SelectionHost, StatusSink, TextPrompt, ViewPane,
};
pub use modes::{ModeController, ModeListener};
pub use selection::SelectionTracker;
pub use serializer::{serialize_markup, serialize_view};
pub use smol_str::SmolStr;
pub use toolbar::{TOOLBAR_ITEMS, Toolbar, ToolbarControl, ToolbarItem, focus_target};
pub use types::{Mode, Phase, UnknownMode};
