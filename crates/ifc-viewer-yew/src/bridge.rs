//! Bridge between the Rust viewer and the JavaScript 3D engine
//!
//! The engine lives in `js/engine.js`, a thin wrapper over
//! `@thatopen/components`. This module declares its surface and routes the
//! `log` facade to the browser console.

use crate::utils::{debug_flag, page_query};
use js_sys::{Float64Array, Uint8Array};
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

// JavaScript FFI
#[wasm_bindgen(module = "/js/engine.js")]
extern "C" {
    /// Engine instance: components, world, fragments, loader, highlighter
    #[derive(Debug, Clone)]
    pub type JsViewer;

    #[wasm_bindgen(constructor)]
    pub fn new() -> JsViewer;

    /// Create scene/camera/renderer on the viewport and start the fragment worker
    #[wasm_bindgen(method, catch, js_name = createWorld)]
    pub async fn create_world(
        this: &JsViewer,
        viewport: &HtmlElement,
        worker_url: &str,
        background: u32,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = addModel)]
    pub fn add_model(this: &JsViewer, model: &JsValue);

    /// Remove from the scene and dispose the fragments
    #[wasm_bindgen(method, js_name = removeModel)]
    pub fn remove_model(this: &JsViewer, model: &JsValue);

    #[wasm_bindgen(method, js_name = setLookAt)]
    pub fn set_look_at(
        this: &JsViewer,
        px: f64,
        py: f64,
        pz: f64,
        tx: f64,
        ty: f64,
        tz: f64,
        animate: bool,
    );

    /// `[min_x, min_y, min_z, max_x, max_y, max_z]`, undefined for empty models
    #[wasm_bindgen(method, js_name = boundingBox)]
    pub fn bounding_box(this: &JsViewer, model: &JsValue) -> Option<Float64Array>;

    #[wasm_bindgen(method, js_name = onCameraRest)]
    pub fn on_camera_rest(this: &JsViewer, callback: &Closure<dyn Fn()>);

    #[wasm_bindgen(method)]
    pub fn update(this: &JsViewer);

    #[wasm_bindgen(method, catch, js_name = setupIfcLoader)]
    pub async fn setup_ifc_loader(
        this: &JsViewer,
        wasm_path: &str,
        absolute: bool,
        auto_set_wasm: bool,
    ) -> Result<(), JsValue>;

    /// Resolves to the loaded fragments model
    #[wasm_bindgen(method, catch, js_name = loadIfc)]
    pub async fn load_ifc(this: &JsViewer, bytes: &Uint8Array, name: &str)
        -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = setupHighlighter)]
    pub fn setup_highlighter(this: &JsViewer) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = onHighlight)]
    pub fn on_highlight(this: &JsViewer, callback: &Closure<dyn Fn(JsValue)>);

    #[wasm_bindgen(method, js_name = onClear)]
    pub fn on_clear(this: &JsViewer, callback: &Closure<dyn Fn()>);
}

/// Human-readable message of a thrown JS value
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Whether the page URL asks for verbose logging (`?debug=1` or `?debug=true`)
pub fn debug_requested() -> bool {
    page_query().is_some_and(|params| debug_flag(&params))
}

/// `log` backend writing to the browser console
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from(record.args().to_string());
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::log_1(&msg),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger; call once at startup
///
/// Info and above are always shown, debug output only with `?debug=1`.
pub fn init_logging() {
    let level = if debug_requested() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
        log::debug!("[viewer] debug logging enabled via URL");
    }
}

/// Raise the log level after configuration is known
pub fn enable_debug_logging() {
    log::set_max_level(LevelFilter::Debug);
}
