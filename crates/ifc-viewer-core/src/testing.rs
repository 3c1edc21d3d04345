// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory collaborators for tests

use crate::{
    BoundingBox, CameraPose, Engine, FragmentIdMap, HighlightSource, IfcConverter,
    LoaderSettings, Result, ViewerConfig, ViewerError,
};
use async_trait::async_trait;
use nalgebra::Point3;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Smallest byte sequence the fake converter accepts as IFC
pub const MINIMAL_IFC: &[u8] = b"ISO-10303-21;\nHEADER;\nENDSEC;\nDATA;\nENDSEC;\nEND-ISO-10303-21;\n";

#[derive(Clone, Debug, PartialEq)]
pub struct FakeNode {
    pub id: u64,
    pub bounds: Option<BoundingBox>,
}

impl FakeNode {
    pub fn new(id: u64, bounds: Option<BoundingBox>) -> Self {
        Self { id, bounds }
    }
}

#[derive(Default)]
struct EngineState {
    scene: RefCell<Vec<u64>>,
    max_scene_len: Cell<usize>,
    poses: RefCell<Vec<(CameraPose, bool)>>,
    redraws: Cell<usize>,
    worlds: Cell<usize>,
    rest_handler: RefCell<Option<Box<dyn Fn()>>>,
    world_error: RefCell<Option<ViewerError>>,
}

/// Records every scene and camera call
#[derive(Clone, Default)]
pub struct FakeEngine {
    state: Rc<EngineState>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_world(&self, err: ViewerError) {
        *self.state.world_error.borrow_mut() = Some(err);
    }

    pub fn scene_nodes(&self) -> Vec<u64> {
        self.state.scene.borrow().clone()
    }

    pub fn max_scene_len(&self) -> usize {
        self.state.max_scene_len.get()
    }

    pub fn poses(&self) -> Vec<(CameraPose, bool)> {
        self.state.poses.borrow().clone()
    }

    pub fn redraws(&self) -> usize {
        self.state.redraws.get()
    }

    /// Number of `create_world` calls
    pub fn worlds(&self) -> usize {
        self.state.worlds.get()
    }

    /// Simulate the camera controls coming to rest
    pub fn rest_camera(&self) {
        if let Some(handler) = self.state.rest_handler.borrow().as_ref() {
            handler();
        }
    }
}

#[async_trait(?Send)]
impl Engine for FakeEngine {
    type Viewport = ();
    type Node = FakeNode;

    async fn create_world(&self, _viewport: &(), _config: &ViewerConfig) -> Result<()> {
        self.state.worlds.set(self.state.worlds.get() + 1);
        tokio::task::yield_now().await;
        match self.state.world_error.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn add_node(&self, node: &FakeNode) {
        let mut scene = self.state.scene.borrow_mut();
        scene.push(node.id);
        self.state
            .max_scene_len
            .set(self.state.max_scene_len.get().max(scene.len()));
    }

    fn remove_node(&self, node: &FakeNode) {
        self.state.scene.borrow_mut().retain(|id| *id != node.id);
    }

    fn set_camera_pose(&self, pose: &CameraPose, animate: bool) {
        self.state.poses.borrow_mut().push((*pose, animate));
    }

    fn bounding_box(&self, node: &FakeNode) -> Option<BoundingBox> {
        node.bounds
    }

    fn on_camera_rest(&self, handler: Box<dyn Fn()>) {
        *self.state.rest_handler.borrow_mut() = Some(handler);
    }

    fn redraw(&self) {
        self.state.redraws.set(self.state.redraws.get() + 1);
    }
}

#[derive(Default)]
struct ConverterState {
    next_node: Cell<u64>,
    scripted: RefCell<VecDeque<Result<FakeNode>>>,
    configure_error: RefCell<Option<ViewerError>>,
    configured: RefCell<Option<LoaderSettings>>,
    calls: Cell<usize>,
}

/// Accepts bytes starting with the STEP magic; yields once before answering
/// so overlapping loads can be observed
#[derive(Clone, Default)]
pub struct FakeConverter {
    state: Rc<ConverterState>,
}

impl FakeConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next conversion
    pub fn script(&self, result: Result<FakeNode>) {
        self.state.scripted.borrow_mut().push_back(result);
    }

    pub fn fail_configure(&self, err: ViewerError) {
        *self.state.configure_error.borrow_mut() = Some(err);
    }

    pub fn configured(&self) -> Option<LoaderSettings> {
        self.state.configured.borrow().clone()
    }

    pub fn calls(&self) -> usize {
        self.state.calls.get()
    }
}

#[async_trait(?Send)]
impl IfcConverter for FakeConverter {
    type Node = FakeNode;

    async fn configure(&self, settings: &LoaderSettings) -> Result<()> {
        if let Some(err) = self.state.configure_error.borrow_mut().take() {
            return Err(err);
        }
        *self.state.configured.borrow_mut() = Some(settings.clone());
        Ok(())
    }

    async fn convert(&self, bytes: &[u8]) -> Result<FakeNode> {
        self.state.calls.set(self.state.calls.get() + 1);
        tokio::task::yield_now().await;

        if let Some(result) = self.state.scripted.borrow_mut().pop_front() {
            return result;
        }
        if !bytes.starts_with(b"ISO-10303-21") {
            return Err(ViewerError::parse("missing ISO-10303-21 header"));
        }
        let id = self.state.next_node.get() + 1;
        self.state.next_node.set(id);
        let size = id as f64 * 10.0;
        Ok(FakeNode::new(
            id,
            Some(BoundingBox::new(Point3::origin(), Point3::new(size, size, size))),
        ))
    }
}

type HighlightHandler = Box<dyn Fn(FragmentIdMap)>;

#[derive(Default)]
struct HighlightState {
    on_highlight: RefCell<Vec<HighlightHandler>>,
    on_clear: RefCell<Vec<Box<dyn Fn()>>>,
    unavailable: Cell<bool>,
}

/// Highlighter driven by hand from tests
#[derive(Clone, Default)]
pub struct FakeHighlighter {
    state: Rc<HighlightState>,
}

impl FakeHighlighter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        let highlighter = Self::default();
        highlighter.state.unavailable.set(true);
        highlighter
    }

    pub fn highlight(&self, map: FragmentIdMap) {
        for handler in self.state.on_highlight.borrow().iter() {
            handler(map.clone());
        }
    }

    pub fn clear(&self) {
        for handler in self.state.on_clear.borrow().iter() {
            handler();
        }
    }

    pub fn subscriptions(&self) -> (usize, usize) {
        (
            self.state.on_highlight.borrow().len(),
            self.state.on_clear.borrow().len(),
        )
    }
}

impl HighlightSource for FakeHighlighter {
    fn setup(&self) -> Result<()> {
        if self.state.unavailable.get() {
            Err(ViewerError::resource("Highlighter component not registered"))
        } else {
            Ok(())
        }
    }

    fn on_highlight(&self, handler: Box<dyn Fn(FragmentIdMap)>) {
        self.state.on_highlight.borrow_mut().push(handler);
    }

    fn on_clear(&self, handler: Box<dyn Fn()>) {
        self.state.on_clear.borrow_mut().push(handler);
    }
}
