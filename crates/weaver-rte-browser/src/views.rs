//! Core view and sink traits implemented over scaffold elements.

use web_sys::{HtmlElement, HtmlTextAreaElement};
use weaver_rte_core::{FieldSink, PressedIndicator, StatusSink, ViewPane, char_count_label};

use crate::dom::set_visible;

/// The contenteditable view. Content is its markup; length is its text.
#[derive(Clone)]
pub struct RenderedPane(pub HtmlElement);

impl ViewPane for RenderedPane {
    fn content(&self) -> String {
        self.0.inner_html()
    }

    fn set_content(&self, content: &str) {
        self.0.set_inner_html(content);
    }

    fn text_len(&self) -> usize {
        self.0.text_content().unwrap_or_default().chars().count()
    }

    fn set_visible(&self, visible: bool) {
        set_visible(&self.0, visible);
    }
}

/// The raw-markup textarea.
#[derive(Clone)]
pub struct SourcePane(pub HtmlTextAreaElement);

impl ViewPane for SourcePane {
    fn content(&self) -> String {
        self.0.value()
    }

    fn set_content(&self, content: &str) {
        self.0.set_value(content);
    }

    fn text_len(&self) -> usize {
        self.0.value().chars().count()
    }

    fn set_visible(&self, visible: bool) {
        set_visible(&self.0, visible);
    }
}

/// The form field that carries the value on submit.
#[derive(Clone)]
pub struct BackingField(pub HtmlTextAreaElement);

impl FieldSink for BackingField {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_value(&self, value: &str) {
        self.0.set_value(value);
    }
}

#[derive(Clone)]
pub struct StatusBar {
    pub char_count: HtmlElement,
    /// `aria-live` region.
    pub live: HtmlElement,
}

impl StatusSink for StatusBar {
    fn show_char_count(&self, count: usize) {
        self.char_count
            .set_text_content(Some(&char_count_label(count)));
    }

    fn announce(&self, message: &str) {
        self.live.set_text_content(Some(message));
    }
}

/// A toolbar button; pressed state is `aria-pressed` plus `is-active`.
#[derive(Clone)]
pub struct ToolbarButton(pub HtmlElement);

impl PressedIndicator for ToolbarButton {
    fn set_pressed(&self, pressed: bool) {
        let value = if pressed { "true" } else { "false" };
        if let Err(e) = self.0.set_attribute("aria-pressed", value) {
            tracing::warn!(target: "weaver::browser", "failed to set aria-pressed: {e:?}");
        }
        let _ = self.0.class_list().toggle_with_force("is-active", pressed);
    }
}
