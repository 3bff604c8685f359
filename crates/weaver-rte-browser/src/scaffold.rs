//! Builds the editor's DOM around a host element and takes it down again.
//!
//! ```text
//! div.ve-wrapper
//! ├── div.ve-toolbar-container > div.ve-toolbar[role=toolbar] > button.ve-btn * 18
//! ├── div.ve-body
//! │   ├── div.ve-view.ve-view-wysiwyg[contenteditable]
//! │   └── textarea.ve-view.ve-view-source
//! ├── div.ve-statusbar > span.ve-char-count
//! ├── div.ve-live.ve-visually-hidden[aria-live=polite]
//! └── textarea.ve-backfield[hidden]   (container hosts only)
//! ```

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlTextAreaElement};
use weaver_rte_core::{HostNameHints, TOOLBAR_ITEMS, ToolbarControl};

use crate::dom::{self, create_element, set_attributes};
use crate::error::{EditorError, Result};

/// The element an editor was attached to.
#[derive(Clone)]
pub enum HostElement {
    /// Reused as the backing field and hidden while the editor is attached.
    TextArea(HtmlTextAreaElement),
    /// Replaced by the scaffold; its markup seeds the rendered view.
    Container(HtmlElement),
}

impl HostElement {
    pub fn from_element(element: Element) -> Result<Self> {
        let element = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(textarea) => return Ok(HostElement::TextArea(textarea)),
            Err(element) => element,
        };
        element
            .dyn_into::<HtmlElement>()
            .map(HostElement::Container)
            .map_err(|_| EditorError::Dom("target is not an HTML element".into()))
    }

    pub fn element(&self) -> &HtmlElement {
        match self {
            HostElement::TextArea(textarea) => textarea,
            HostElement::Container(element) => element,
        }
    }

    pub fn is_textarea(&self) -> bool {
        matches!(self, HostElement::TextArea(_))
    }

    pub fn name_hints(&self) -> HostNameHints {
        let element = self.element();
        HostNameHints {
            data_name: element.get_attribute("data-name"),
            name_attr: element.get_attribute("name"),
        }
    }

    /// Markup the editor starts from.
    pub fn initial_markup(&self) -> String {
        match self {
            HostElement::TextArea(textarea) => textarea.value(),
            HostElement::Container(element) => element.inner_html(),
        }
    }
}

pub struct Scaffold {
    host: HostElement,
    /// Host's inline `display` before it was hidden.
    host_display: String,
    pub wrapper: HtmlElement,
    pub toolbar: HtmlElement,
    pub buttons: Vec<(ToolbarControl, HtmlElement)>,
    pub rendered: HtmlElement,
    pub source: HtmlTextAreaElement,
    pub field: HtmlTextAreaElement,
    pub char_count: HtmlElement,
    pub live: HtmlElement,
}

impl Scaffold {
    /// Build the scaffold and put it into the page in place of `host`.
    ///
    /// View contents are left empty; the controller loads them.
    pub fn build(document: &Document, host: HostElement, name: &str) -> Result<Self> {
        let wrapper: HtmlElement = create_element(document, "div", "ve-wrapper")?;

        let toolbar_container: HtmlElement =
            create_element(document, "div", "ve-toolbar-container")?;
        let toolbar: HtmlElement = create_element(document, "div", "ve-toolbar")?;
        set_attributes(
            &toolbar,
            &[("role", "toolbar"), ("aria-label", "Editor toolbar")],
        )?;
        let mut buttons = Vec::with_capacity(TOOLBAR_ITEMS.len());
        for item in TOOLBAR_ITEMS.iter() {
            let button: HtmlElement = create_element(document, "button", "ve-btn")?;
            set_attributes(
                &button,
                &[
                    ("type", "button"),
                    ("aria-label", item.label),
                    ("data-command", item.control.id()),
                ],
            )?;
            if item.control == ToolbarControl::ModeToggle {
                button.set_attribute("data-toggle-html", "true")?;
            }
            button.set_text_content(Some(item.icon));
            toolbar.append_child(&button)?;
            buttons.push((item.control, button));
        }
        toolbar_container.append_child(&toolbar)?;

        let body: HtmlElement = create_element(document, "div", "ve-body")?;
        let rendered: HtmlElement = create_element(document, "div", "ve-view ve-view-wysiwyg")?;
        rendered.set_attribute("contenteditable", "true")?;
        let source: HtmlTextAreaElement =
            create_element(document, "textarea", "ve-view ve-view-source")?;
        source.set_attribute("spellcheck", "false")?;
        body.append_child(&rendered)?;
        body.append_child(&source)?;

        let status: HtmlElement = create_element(document, "div", "ve-statusbar")?;
        let char_count: HtmlElement = create_element(document, "span", "ve-char-count")?;
        status.append_child(&char_count)?;

        let live: HtmlElement = create_element(document, "div", "ve-live ve-visually-hidden")?;
        live.set_attribute("aria-live", "polite")?;

        wrapper.append_child(&toolbar_container)?;
        wrapper.append_child(&body)?;
        wrapper.append_child(&status)?;
        wrapper.append_child(&live)?;

        let host_display = dom::inline_display(host.element());
        let field = match &host {
            HostElement::TextArea(textarea) => {
                dom::set_visible(textarea, false);
                textarea.after_with_node_1(&wrapper)?;
                textarea.clone()
            }
            HostElement::Container(element) => {
                let field: HtmlTextAreaElement =
                    create_element(document, "textarea", "ve-backfield")?;
                field.set_name(name);
                field.set_hidden(true);
                wrapper.append_child(&field)?;
                element.replace_with_with_node_1(&wrapper)?;
                field
            }
        };

        Ok(Self {
            host,
            host_display,
            wrapper,
            toolbar,
            buttons,
            rendered,
            source,
            field,
            char_count,
            live,
        })
    }

    pub fn host(&self) -> &HostElement {
        &self.host
    }

    pub fn button(&self, control: ToolbarControl) -> Option<&HtmlElement> {
        self.buttons
            .iter()
            .find(|(c, _)| *c == control)
            .map(|(_, b)| b)
    }

    /// Remove the scaffold and reinstate the host element.
    ///
    /// A container host gets the rendered view's markup back. Best
    /// effort: DOM failures are logged.
    pub fn teardown(&self) {
        let result = match &self.host {
            HostElement::TextArea(textarea) => {
                dom::restore_display(textarea, &self.host_display);
                self.wrapper.remove();
                Ok(())
            }
            HostElement::Container(element) => {
                element.set_inner_html(&self.rendered.inner_html());
                self.wrapper.replace_with_with_node_1(element)
            }
        };
        if let Err(e) = result {
            tracing::warn!(target: "weaver::browser", "scaffold teardown failed: {e:?}");
        }
    }
}
