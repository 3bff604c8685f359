//! `EditorHost` over the document's native editing commands and the
//! window Selection API.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument, HtmlElement, Node, Range, Selection, Window};
use weaver_rte_core::{EditingEngine, SelectionHost, TextPrompt};

use crate::error::{EditorError, Result};

/// Editing surface backed by `document.execCommand` and `window.getSelection()`.
///
/// Selection ranges only count as "inside" when their common ancestor lies
/// within `surface` (the rendered view).
#[derive(Clone)]
pub struct BrowserHost {
    window: Window,
    document: HtmlDocument,
    surface: HtmlElement,
}

impl BrowserHost {
    pub fn new(window: Window, document: &Document, surface: HtmlElement) -> Result<Self> {
        let document = document
            .clone()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| EditorError::Dom("document is not an HTML document".into()))?;
        Ok(Self {
            window,
            document,
            surface,
        })
    }

    fn selection(&self) -> Option<Selection> {
        self.window.get_selection().ok().flatten()
    }
}

impl EditingEngine for BrowserHost {
    fn exec_command(&self, command: &str, value: Option<&str>) -> bool {
        let result = match value {
            Some(value) => self
                .document
                .exec_command_with_show_ui_and_value(command, false, value),
            None => self.document.exec_command(command),
        };
        result.unwrap_or_else(|e| {
            tracing::warn!(target: "weaver::browser", command, "execCommand threw: {e:?}");
            false
        })
    }

    fn query_command_state(&self, command: &str) -> bool {
        self.document.query_command_state(command).unwrap_or(false)
    }
}

impl SelectionHost for BrowserHost {
    type Range = Range;

    fn current_range(&self) -> Option<Range> {
        let selection = self.selection()?;
        if selection.range_count() == 0 {
            return None;
        }
        selection.get_range_at(0).ok()
    }

    fn surface_contains(&self, range: &Range) -> bool {
        match range.common_ancestor_container() {
            Ok(ancestor) => {
                let ancestor: &Node = &ancestor;
                self.surface.contains(Some(ancestor))
            }
            Err(_) => false,
        }
    }

    fn clear_selection(&self) {
        if let Some(selection) = self.selection() {
            let _ = selection.remove_all_ranges();
        }
    }

    fn apply_range(&self, range: &Range) {
        let Some(selection) = self.selection() else {
            return;
        };
        if let Err(e) = selection.add_range(range) {
            tracing::warn!(target: "weaver::browser", "failed to restore selection: {e:?}");
        }
    }
}

impl TextPrompt for BrowserHost {
    fn request_text(&self, message: &str) -> Option<String> {
        self.window.prompt_with_message(message).ok().flatten()
    }
}
