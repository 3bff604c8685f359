//! JsEditor - the rich-text editor wrapper for JavaScript.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use weaver_rte_browser::{BrowserEditor, EditorError, Mode, NameSequence, dom};

use crate::types::EditorOptions;

thread_local! {
    /// Fallback names are unique per module instance.
    static NAMES: RefCell<NameSequence> = RefCell::new(NameSequence::new());
}

/// A rich-text editor attached to a page element.
///
/// ```js
/// const editor = new RichTextEditor("#body", { syncDelayMs: 300 });
/// editor.onModeChange((mode) => console.log(mode));
/// editor.exec("bold");
/// const html = editor.destroy();
/// ```
#[wasm_bindgen(js_name = RichTextEditor)]
pub struct JsEditor {
    inner: BrowserEditor,
}

#[wasm_bindgen(js_class = RichTextEditor)]
impl JsEditor {
    /// Attach to `target`: an element, or a CSS selector for one.
    ///
    /// Throws if the target cannot be found.
    #[wasm_bindgen(constructor)]
    pub fn new(target: JsValue, options: JsValue) -> Result<JsEditor, JsError> {
        let config = EditorOptions::config_from_js(&options)?;

        let element = resolve_target(&target).map_err(to_js_error)?;
        let inner = NAMES
            .with(|names| BrowserEditor::attach(element, config, &mut names.borrow_mut()))
            .map_err(to_js_error)?;

        Ok(Self { inner })
    }

    /// The backing field's name.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    /// Current backing-field value.
    #[wasm_bindgen(js_name = getValue)]
    pub fn get_value(&self) -> String {
        self.inner.value()
    }

    /// `"visual"` or `"source"`.
    #[wasm_bindgen(js_name = getMode)]
    pub fn get_mode(&self) -> String {
        self.inner.mode().as_str().to_string()
    }

    /// Switch to `"visual"` or `"source"`. Returns whether the mode changed.
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&self, mode: &str) -> Result<bool, JsError> {
        let mode: Mode = mode.parse().map_err(|e| JsError::new(&format!("{}", e)))?;
        Ok(self.inner.set_mode(mode))
    }

    /// Flip modes and return the new one.
    #[wasm_bindgen(js_name = toggleMode)]
    pub fn toggle_mode(&self) -> String {
        self.inner.toggle_mode().as_str().to_string()
    }

    /// Run a toolbar command by name (`"bold"`, `"h2"`, `"link"`, ...).
    ///
    /// Returns false for unknown names.
    #[wasm_bindgen]
    pub fn exec(&self, name: &str) -> bool {
        self.inner.exec(name)
    }

    /// Call `callback(mode)` after every mode change.
    #[wasm_bindgen(js_name = onModeChange)]
    pub fn on_mode_change(&self, callback: js_sys::Function) {
        self.inner.on_mode_change(move |mode| {
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(mode.as_str())) {
                tracing::warn!(target: "weaver::js", "onModeChange callback threw: {e:?}");
            }
        });
    }

    /// Sync one last time and restore the page.
    ///
    /// Returns the final value, or `undefined` if already destroyed.
    #[wasm_bindgen]
    pub fn destroy(&mut self) -> Option<String> {
        self.inner.destroy()
    }
}

fn resolve_target(target: &JsValue) -> Result<Element, EditorError> {
    if let Some(selector) = target.as_string() {
        let document = dom::document()?;
        return dom::find_target(&document, &selector);
    }
    target
        .dyn_ref::<Element>()
        .cloned()
        .ok_or_else(|| EditorError::TargetNotFound(format!("{target:?}")))
}

fn to_js_error(e: EditorError) -> JsError {
    JsError::new(&e.to_string())
}
