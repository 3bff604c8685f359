//! Browser DOM layer for the weaver rich-text editor.
//!
//! This crate implements the `weaver-rte-core` host traits over the page's
//! native editing commands and wires a core `Editor` to live DOM events. It
//! assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `scaffold`: builds and removes the editor's DOM around a host element
//! - `host`: `execCommand` / Selection API implementation of `EditorHost`
//! - `views`: view, field, status and button adapters over scaffold elements
//! - `editor`: `BrowserEditor`, the attached editor and its event listeners
//! - `events`: keyboard event extraction
//! - `formatter`: JS-function formatter and sanitizer hooks
//!
//! # Re-exports
//!
//! This crate re-exports `weaver-rte-core` for convenience, so consumers
//! only need to depend on `weaver-rte-browser`.

// Re-export core crate
pub use weaver_rte_core;
pub use weaver_rte_core::*;

pub mod dom;
pub mod editor;
pub mod error;
pub mod events;
pub mod formatter;
pub mod host;
pub mod scaffold;
pub mod views;

pub use editor::{BrowserController, BrowserEditor, BrowserPlatform};
pub use error::EditorError;
pub use events::key_combo_from_event;
pub use formatter::{GlobalFormatter, JsFormatter, JsSanitizer, escape_html};
pub use host::BrowserHost;
pub use scaffold::{HostElement, Scaffold};
pub use views::{BackingField, RenderedPane, SourcePane, StatusBar, ToolbarButton};
