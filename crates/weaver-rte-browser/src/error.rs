//! Errors raised while attaching an editor to the page.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// The selector matched nothing, or the value was not an element.
    #[error("Target element not found: {0}")]
    TargetNotFound(String),

    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    /// A DOM call threw.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for EditorError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        EditorError::Dom(message)
    }
}

pub type Result<T, E = EditorError> = std::result::Result<T, E>;
