//! Browser implementations of the viewer's engine traits
//!
//! All three share one [`JsViewer`]: the loader needs the fragments manager
//! the world created, and the highlighter binds to that world.

use crate::bridge::{js_error_message, JsViewer};
use crate::utils::fragment_id_map;
use async_trait::async_trait;
use ifc_viewer_core::{
    BoundingBox, CameraPose, Engine, FragmentIdMap, HighlightSource, IfcConverter,
    LoaderSettings, Result, ViewerConfig, ViewerError,
};
use js_sys::Uint8Array;
use std::cell::Cell;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

/// Scene, camera and renderer from `@thatopen/components`
#[derive(Debug, Clone)]
pub struct WebEngine {
    viewer: JsViewer,
}

impl WebEngine {
    pub fn new(viewer: JsViewer) -> Self {
        Self { viewer }
    }
}

#[async_trait(?Send)]
impl Engine for WebEngine {
    type Viewport = HtmlElement;
    type Node = JsValue;

    async fn create_world(&self, viewport: &HtmlElement, config: &ViewerConfig) -> Result<()> {
        log::debug!("[engine] creating world, worker {}", config.worker_url);
        self.viewer
            .create_world(viewport, &config.worker_url, config.background)
            .await
            .map_err(|e| ViewerError::engine_init(js_error_message(&e)))
    }

    fn add_node(&self, node: &JsValue) {
        self.viewer.add_model(node);
    }

    fn remove_node(&self, node: &JsValue) {
        self.viewer.remove_model(node);
    }

    fn set_camera_pose(&self, pose: &CameraPose, animate: bool) {
        let p = pose.position;
        let t = pose.target;
        self.viewer.set_look_at(p.x, p.y, p.z, t.x, t.y, t.z, animate);
    }

    fn bounding_box(&self, node: &JsValue) -> Option<BoundingBox> {
        let values = self.viewer.bounding_box(node)?.to_vec();
        BoundingBox::from_slice(&values)
    }

    fn on_camera_rest(&self, handler: Box<dyn Fn()>) {
        let closure = Closure::<dyn Fn()>::new(move || handler());
        self.viewer.on_camera_rest(&closure);
        // Lives as long as the page
        closure.forget();
    }

    fn redraw(&self) {
        self.viewer.update();
    }
}

/// `IfcLoader` of `@thatopen/components`, producing fragments models
#[derive(Debug)]
pub struct WebIfcLoader {
    viewer: JsViewer,
    loaded: Cell<u32>,
}

impl WebIfcLoader {
    pub fn new(viewer: JsViewer) -> Self {
        Self {
            viewer,
            loaded: Cell::new(0),
        }
    }

    /// Fragments model ids must be unique per session, also when the same
    /// file is loaded twice
    fn next_model_name(&self) -> String {
        let n = self.loaded.get() + 1;
        self.loaded.set(n);
        format!("ifc-model-{n}")
    }
}

#[async_trait(?Send)]
impl IfcConverter for WebIfcLoader {
    type Node = JsValue;

    async fn configure(&self, settings: &LoaderSettings) -> Result<()> {
        self.viewer
            .setup_ifc_loader(
                &settings.wasm_path,
                settings.wasm_absolute,
                settings.auto_set_wasm,
            )
            .await
            .map_err(|e| ViewerError::resource(js_error_message(&e)))
    }

    async fn convert(&self, bytes: &[u8]) -> Result<JsValue> {
        let data = Uint8Array::from(bytes);
        let name = self.next_model_name();
        self.viewer
            .load_ifc(&data, &name)
            .await
            .map_err(|e| ViewerError::classify_load_failure(js_error_message(&e)))
    }
}

/// Front-end `Highlighter` click selection
#[derive(Debug, Clone)]
pub struct WebHighlighter {
    viewer: JsViewer,
}

impl WebHighlighter {
    pub fn new(viewer: JsViewer) -> Self {
        Self { viewer }
    }
}

impl HighlightSource for WebHighlighter {
    fn setup(&self) -> Result<()> {
        self.viewer
            .setup_highlighter()
            .map_err(|e| ViewerError::resource(js_error_message(&e)))
    }

    fn on_highlight(&self, handler: Box<dyn Fn(FragmentIdMap)>) {
        let closure = Closure::<dyn Fn(JsValue)>::new(move |map: JsValue| {
            handler(fragment_id_map(&map));
        });
        self.viewer.on_highlight(&closure);
        closure.forget();
    }

    fn on_clear(&self, handler: Box<dyn Fn()>) {
        let closure = Closure::<dyn Fn()>::new(move || handler());
        self.viewer.on_clear(&closure);
        closure.forget();
    }
}
