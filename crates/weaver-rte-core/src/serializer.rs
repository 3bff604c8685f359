//! Content serialization for the rendered view.
//!
//! The only normalization applied today is trailing-whitespace trimming.
//! Structural normalization, if it is ever needed, belongs here.

use crate::host::ViewPane;

/// Normalize rendered markup into the string stored in the backing field.
pub fn serialize_markup(markup: &str) -> String {
    markup.trim_end().to_string()
}

/// Serialize the current content of the rendered view.
pub fn serialize_view<V: ViewPane>(view: &V) -> String {
    serialize_markup(&view.content())
}
