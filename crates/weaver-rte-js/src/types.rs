//! Types exposed to JavaScript via wasm-bindgen.

use std::time::Duration;

use js_sys::{Function, Reflect};
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;
use weaver_rte_browser::{EditorConfig, JsFormatter, JsSanitizer};

/// Plain-data editor options.
///
/// The function-valued options (`sanitizeHTML`, `formatHTML`) are read from
/// the same object separately; see [`EditorOptions::config_from_js`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    /// Backing-field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Milliseconds to wait after input before syncing the backing field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_delay_ms: Option<u32>,
}

#[wasm_bindgen(typescript_custom_section)]
const TS_EDITOR_OPTIONS_HOOKS: &'static str = r#"
export interface EditorOptions {
    sanitizeHTML?: (html: string) => string;
    formatHTML?: (html: string) => string;
}
"#;

impl EditorOptions {
    /// Build an editor config from a JS options object, hooks included.
    ///
    /// `undefined` and `null` yield the defaults.
    pub fn config_from_js(value: &JsValue) -> Result<EditorConfig, JsError> {
        if value.is_undefined() || value.is_null() {
            return Ok(EditorConfig::new());
        }
        let options: EditorOptions = serde_wasm_bindgen::from_value(value.clone())
            .map_err(|e| JsError::new(&format!("Invalid editor options: {}", e)))?;

        let mut config = EditorConfig::new();
        if let Some(name) = &options.name {
            config = config.name(name.clone());
        }
        if let Some(ms) = options.sync_delay_ms {
            config = config.sync_delay(Duration::from_millis(u64::from(ms)));
        }
        if let Some(sanitize) = function_option(value, "sanitizeHTML")? {
            config = config.sanitizer(JsSanitizer(sanitize));
        }
        if let Some(format) = function_option(value, "formatHTML")? {
            config = config.formatter(JsFormatter(format));
        }
        Ok(config)
    }
}

fn function_option(options: &JsValue, key: &str) -> Result<Option<Function>, JsError> {
    let value = Reflect::get(options, &JsValue::from_str(key))
        .map_err(|_| JsError::new(&format!("Failed to read option {key}")))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    value
        .dyn_into::<Function>()
        .map(Some)
        .map_err(|_| JsError::new(&format!("Option {key} must be a function")))
}
