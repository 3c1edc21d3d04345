//! Utility functions for the Yew UI

use crate::bridge::js_error_message;
use ifc_viewer_core::{FragmentIdMap, Result, ViewerConfig, ViewerError};
use js_sys::{Array, Object};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::UrlSearchParams;

/// Id of the optional inline JSON config element
pub const CONFIG_ELEMENT_ID: &str = "viewer-config";

/// `1` and `true` switch a flag on, anything else off
pub fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true")
}

/// Apply URL query overrides (`worker`, `wasm`, `debug`) on top of `config`
pub fn apply_query_overrides(
    mut config: ViewerConfig,
    param: impl Fn(&str) -> Option<String>,
) -> ViewerConfig {
    if let Some(worker) = param("worker").filter(|w| !w.is_empty()) {
        config.worker_url = worker;
    }
    if let Some(wasm) = param("wasm").filter(|w| !w.is_empty()) {
        config.wasm_absolute = wasm.starts_with("http://") || wasm.starts_with("https://");
        config.wasm_path = wasm;
    }
    if let Some(debug) = param("debug") {
        config.debug = parse_flag(&debug);
    }
    config
}

/// Query parameters of the page URL
pub fn page_query() -> Option<UrlSearchParams> {
    let search = web_sys::window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()
}

/// Whether the `debug` parameter is switched on
pub fn debug_flag(params: &UrlSearchParams) -> bool {
    params.get("debug").is_some_and(|value| parse_flag(&value))
}

/// Parse the inline config document; malformed JSON falls back to defaults
pub fn parse_inline_config(json: &str) -> ViewerConfig {
    match serde_json::from_str(json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[config] ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e);
            ViewerConfig::default()
        }
    }
}

/// Viewer config for this page: defaults, inline JSON, then URL query
pub fn load_config() -> ViewerConfig {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return ViewerConfig::default(),
    };

    let inline = window
        .document()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let config = match inline {
        Some(json) if !json.trim().is_empty() => parse_inline_config(&json),
        _ => ViewerConfig::default(),
    };

    match page_query() {
        Some(params) => apply_query_overrides(config, |key| params.get(key)),
        None => config,
    }
}

/// Read a picked or dropped file into memory
pub async fn read_file(file: web_sys::File) -> Result<Vec<u8>> {
    let name = file.name();
    let file = gloo_file::File::from(file);
    gloo_file::futures::read_as_bytes(&file)
        .await
        .map_err(|e| ViewerError::resource(format!("could not read {name}: {e}")))
}

/// Convert a highlighter payload (`{ [fragmentId]: Set<number> }`)
///
/// Entries keep the object's key order. Values that are not iterable or not
/// numeric are skipped.
pub fn fragment_id_map(value: &JsValue) -> FragmentIdMap {
    let mut map = FragmentIdMap::new();
    let Some(object) = value.dyn_ref::<Object>() else {
        return map;
    };

    for entry in Object::entries(object).iter() {
        let entry: Array = entry.unchecked_into();
        let Some(fragment_id) = entry.get(0).as_string() else {
            continue;
        };
        let ids = match js_sys::try_iter(&entry.get(1)) {
            Ok(Some(iter)) => iter
                .filter_map(|item| item.ok()?.as_f64())
                .filter(|id| *id >= 0.0)
                .map(|id| id as u64)
                .collect(),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::debug!("[selection] unreadable ids for {}: {}", fragment_id, js_error_message(&e));
                Vec::new()
            }
        };
        map.insert(fragment_id, ids);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn query(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let params: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| params.get(key).cloned()
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("yes"));
    }

    #[test]
    fn test_query_overrides() {
        let config = apply_query_overrides(
            ViewerConfig::default(),
            query(&[("wasm", "/static/web-ifc/"), ("debug", "1")]),
        );
        assert_eq!(config.wasm_path, "/static/web-ifc/");
        assert!(!config.wasm_absolute);
        assert!(config.debug);
        assert_eq!(config.worker_url, ViewerConfig::default().worker_url);
    }

    #[test]
    fn test_empty_overrides_are_ignored() {
        let config =
            apply_query_overrides(ViewerConfig::default(), query(&[("worker", "")]));
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_invalid_inline_config_falls_back() {
        assert_eq!(parse_inline_config("{ not json"), ViewerConfig::default());
        assert_eq!(parse_inline_config(r#"{ "background": 255 }"#).background, 255);
    }
}
