// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene ownership: the engine world, the attached model and the camera

use crate::{
    CameraPose, Engine, Framing, ModelHandle, ModelId, Result, ViewerConfig, ViewerError,
};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Owns the engine world and is the only code that mutates the scene
///
/// At most one model is attached at a time.
pub struct SceneHost<E: Engine> {
    engine: Rc<E>,
    default_pose: CameraPose,
    framing: Framing,
    current: RefCell<Option<ModelHandle<E::Node>>>,
    pose: Cell<CameraPose>,
}

impl<E: Engine + 'static> SceneHost<E> {
    /// Create the world on `viewport` and move the camera to the default pose
    ///
    /// Any engine failure is reported as [`ViewerError::EngineInit`].
    pub async fn initialize(
        engine: E,
        viewport: &E::Viewport,
        config: &ViewerConfig,
    ) -> Result<Self> {
        engine
            .create_world(viewport, config)
            .await
            .map_err(|e| match e {
                ViewerError::EngineInit(msg) => ViewerError::EngineInit(msg),
                other => ViewerError::EngineInit(other.to_string()),
            })?;

        let engine = Rc::new(engine);
        let weak: Weak<E> = Rc::downgrade(&engine);
        engine.on_camera_rest(Box::new(move || {
            if let Some(engine) = weak.upgrade() {
                engine.redraw();
            }
        }));

        let default_pose = config.default_camera;
        engine.set_camera_pose(&default_pose, false);
        log::info!("[scene] world created, camera at {:?}", default_pose.position);

        Ok(Self {
            engine,
            default_pose,
            framing: config.framing(),
            current: RefCell::new(None),
            pose: Cell::new(default_pose),
        })
    }

    /// Attach `handle`, detaching whatever model was attached before
    ///
    /// The new node is added before the old one is removed, so the scene is
    /// never empty during a replace. Returns the id of the superseded model.
    pub fn attach_model(&self, handle: ModelHandle<E::Node>) -> Option<ModelId> {
        self.engine.add_node(handle.node());
        self.engine.redraw();
        log::debug!("[scene] attached {} ({})", handle.id(), handle.name());

        let previous = self.current.borrow_mut().replace(handle);
        previous.map(|old| {
            self.engine.remove_node(old.node());
            log::debug!("[scene] detached superseded {}", old.id());
            old.id()
        })
    }

    /// Detach model `id`; no-op if it is not the attached model
    pub fn detach_model(&self, id: ModelId) -> bool {
        let mut current = self.current.borrow_mut();
        if current.as_ref().map(ModelHandle::id) != Some(id) {
            return false;
        }
        if let Some(old) = current.take() {
            self.engine.remove_node(old.node());
            log::debug!("[scene] detached {}", old.id());
        }
        true
    }

    /// Detach whatever is attached
    pub fn clear(&self) -> Option<ModelId> {
        let id = self.current_model()?;
        self.detach_model(id);
        Some(id)
    }

    /// Id of the attached model
    pub fn current_model(&self) -> Option<ModelId> {
        self.current.borrow().as_ref().map(ModelHandle::id)
    }

    /// Name of the attached model
    pub fn current_name(&self) -> Option<String> {
        self.current
            .borrow()
            .as_ref()
            .map(|h| h.name().to_string())
    }

    /// Frame the camera on model `id`
    ///
    /// No-op (returns `None`) when `id` is absent or not attached, or when the
    /// engine cannot produce usable bounds.
    pub fn frame_camera(&self, id: Option<ModelId>) -> Option<CameraPose> {
        let id = id?;
        let bounds = {
            let current = self.current.borrow();
            let handle = current.as_ref().filter(|h| h.id() == id)?;
            self.engine.bounding_box(handle.node())
        };
        let Some(pose) = bounds.and_then(|b| self.framing.pose_for(&b)) else {
            log::warn!("[scene] {} has no usable bounds, camera left as is", id);
            return None;
        };
        self.apply_pose(pose, true);
        Some(pose)
    }

    /// Frame the attached model, if any
    pub fn frame_current(&self) -> Option<CameraPose> {
        self.frame_camera(self.current_model())
    }

    /// Animate back to the default pose
    pub fn reset_camera(&self) -> CameraPose {
        self.apply_pose(self.default_pose, true);
        self.default_pose
    }

    /// Last pose the camera was sent to
    pub fn camera_pose(&self) -> CameraPose {
        self.pose.get()
    }

    fn apply_pose(&self, pose: CameraPose, animate: bool) {
        self.engine.set_camera_pose(&pose, animate);
        self.pose.set(pose);
    }
}
