//! Small DOM helpers shared by the scaffold and the view adapters.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{EditorError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(EditorError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(EditorError::NoDocument)
}

/// Resolve a CSS selector to the editor's host element.
pub fn find_target(document: &Document, selector: &str) -> Result<Element> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| EditorError::TargetNotFound(selector.to_string()))
}

/// Create `<tag class="...">` and cast it to the expected element type.
pub fn create_element<T: JsCast>(document: &Document, tag: &str, class: &str) -> Result<T> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element
        .dyn_into::<T>()
        .map_err(|_| EditorError::Dom(format!("<{tag}> has an unexpected element type")))
}

pub fn set_attributes(element: &Element, attrs: &[(&str, &str)]) -> Result<()> {
    for (name, value) in attrs {
        element.set_attribute(name, value)?;
    }
    Ok(())
}

/// Show or hide an element through its inline `display` style.
pub fn set_visible(element: &HtmlElement, visible: bool) {
    let style = element.style();
    let result = if visible {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", "none")
    };
    if let Err(e) = result {
        tracing::warn!(target: "weaver::browser", "failed to toggle visibility: {e:?}");
    }
}

/// The element's inline `display` value, empty if unset.
pub fn inline_display(element: &HtmlElement) -> String {
    element
        .style()
        .get_property_value("display")
        .unwrap_or_default()
}

/// Put back an inline `display` value captured with [`inline_display`].
pub fn restore_display(element: &HtmlElement, display: &str) {
    let style = element.style();
    let result = if display.is_empty() {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", display)
    };
    if let Err(e) = result {
        tracing::warn!(target: "weaver::browser", "failed to restore display: {e:?}");
    }
}
