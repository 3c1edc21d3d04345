// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Traits for the external collaborators
//!
//! The viewer never renders, parses or raycasts itself. These traits are the
//! whole surface it needs from the 3D engine, the IFC conversion pipeline and
//! the highlight subsystem. Everything runs on one UI event loop, so futures
//! are not required to be `Send`.

use crate::{BoundingBox, CameraPose, FragmentIdMap, LoaderSettings, Result, ViewerConfig};
use async_trait::async_trait;

/// 3D engine owning scene, camera and renderer
#[async_trait(?Send)]
pub trait Engine {
    /// Display surface the renderer binds to
    type Viewport: ?Sized;
    /// Opaque scene node of a loaded model
    type Node;

    /// Create the world (scene, camera, renderer) on `viewport` and start the
    /// engine
    ///
    /// Fails when the runtime cannot start, e.g. missing cross-origin
    /// isolation or an unreachable worker script.
    async fn create_world(&self, viewport: &Self::Viewport, config: &ViewerConfig) -> Result<()>;

    /// Add a model root to the scene
    fn add_node(&self, node: &Self::Node);

    /// Remove a model root from the scene
    fn remove_node(&self, node: &Self::Node);

    /// Move the camera, optionally animated
    fn set_camera_pose(&self, pose: &CameraPose, animate: bool);

    /// World-space bounds of a node, `None` if the engine cannot tell
    fn bounding_box(&self, node: &Self::Node) -> Option<BoundingBox>;

    /// Register the callback fired when camera motion comes to rest
    fn on_camera_rest(&self, handler: Box<dyn Fn()>);

    /// Refresh model geometry for the current camera
    fn redraw(&self);
}

/// IFC-to-geometry conversion pipeline
#[async_trait(?Send)]
pub trait IfcConverter {
    type Node;

    /// Point the converter at its decoder assets
    async fn configure(&self, settings: &LoaderSettings) -> Result<()>;

    /// Convert IFC bytes into a scene node
    ///
    /// Errors should be [`ViewerError::Parse`](crate::ViewerError::Parse) or
    /// [`ViewerError::Resource`](crate::ViewerError::Resource).
    async fn convert(&self, bytes: &[u8]) -> Result<Self::Node>;
}

/// Picking/highlight subsystem
pub trait HighlightSource {
    /// Bind the highlighter to the world. An error means selection is not
    /// available in this build of the engine.
    fn setup(&self) -> Result<()>;

    /// Register the handler for new highlights
    fn on_highlight(&self, handler: Box<dyn Fn(FragmentIdMap)>);

    /// Register the handler for a cleared highlight
    fn on_clear(&self, handler: Box<dyn Fn()>);
}
