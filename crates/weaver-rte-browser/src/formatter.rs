//! Formatter and sanitizer hooks backed by JavaScript functions.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use weaver_rte_core::{FormatError, HtmlFormatter, HtmlSanitizer};

/// Calls a JS `(html: string) => string` to pretty-print markup.
pub struct JsFormatter(pub Function);

impl HtmlFormatter for JsFormatter {
    fn format(&self, html: &str) -> Result<String, FormatError> {
        call_string_fn(&self.0, &JsValue::NULL, html)
    }
}

/// Uses `window.Formatter.format` if the page provides one.
///
/// The global is looked up on every call, so a formatter loaded after the
/// editor was attached is still picked up. Without one, markup passes
/// through unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalFormatter;

impl HtmlFormatter for GlobalFormatter {
    fn format(&self, html: &str) -> Result<String, FormatError> {
        match global_format_fn() {
            Some((this, format)) => call_string_fn(&format, &this, html),
            None => Ok(html.to_string()),
        }
    }
}

fn global_format_fn() -> Option<(JsValue, Function)> {
    let window = web_sys::window()?;
    let formatter = Reflect::get(&window, &JsValue::from_str("Formatter")).ok()?;
    if formatter.is_undefined() || formatter.is_null() {
        return None;
    }
    let format = Reflect::get(&formatter, &JsValue::from_str("format"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some((formatter, format))
}

fn call_string_fn(function: &Function, this: &JsValue, html: &str) -> Result<String, FormatError> {
    let result = function
        .call1(this, &JsValue::from_str(html))
        .map_err(|e| FormatError(format!("{e:?}")))?;
    result
        .as_string()
        .ok_or_else(|| FormatError::from("formatter did not return a string"))
}

/// Calls a JS `(html: string) => string` on markup leaving source mode.
///
/// If the function throws or returns a non-string, the failure is logged as
/// an error and the markup is escaped and inserted as text instead.
pub struct JsSanitizer(pub Function);

impl HtmlSanitizer for JsSanitizer {
    fn sanitize(&self, html: &str) -> String {
        match self
            .0
            .call1(&JsValue::NULL, &JsValue::from_str(html))
            .map(|v| v.as_string())
        {
            Ok(Some(clean)) => clean,
            Ok(None) => {
                tracing::error!(target: "weaver::browser", "sanitizer returned a non-string, inserting escaped markup");
                escape_html(html)
            }
            Err(e) => {
                tracing::error!(target: "weaver::browser", "sanitizer threw, inserting escaped markup: {e:?}");
                escape_html(html)
            }
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
