// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Application lifecycle: boot, load/replace, camera commands, selection
//!
//! ```text
//! Initializing ──boot ok──▶ Ready ◀──load done/failed── Loading
//!      │                      └────────load requested──────▶┘
//!      └──boot failed──▶ Error (terminal)
//! ```

use crate::{
    is_ifc_file_name, CameraPose, Engine, EventSlot, HighlightSource, IfcConverter, ModelId,
    ModelLoader, PanelView, PropertiesPanelController, Result, SceneHost, SelectionBridge,
    StatusLine, StatusPhase, StatusReporter, ViewerConfig, ViewerError,
};
use once_cell::unsync::OnceCell;
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

/// Lifecycle state of the viewer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewerStatus {
    /// Engine startup in progress
    Initializing,
    /// Idle, accepting files
    Ready,
    /// A model is being read and converted
    Loading,
    /// Startup failed; nothing works from here on
    Error(String),
}

impl ViewerStatus {
    /// Whether load/fit/reset controls should accept input
    pub fn accepts_input(&self) -> bool {
        matches!(self, ViewerStatus::Ready)
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, ViewerStatus::Error(_))
    }
}

/// Everything that only exists after a successful boot
struct Services<E: Engine, C: IfcConverter<Node = E::Node>> {
    scene: SceneHost<E>,
    loader: ModelLoader<C>,
    selection: Option<SelectionBridge>,
}

/// Top-level orchestrator
///
/// Owns the lifecycle state and the components. All methods take `&self` so
/// the controller can be shared (`Rc`) between UI callbacks; scene changes are
/// serialized because only one load may be in flight.
pub struct AppController<E: Engine, C: IfcConverter<Node = E::Node>> {
    config: ViewerConfig,
    state: RefCell<ViewerStatus>,
    state_changed: EventSlot<ViewerStatus>,
    reporter: StatusReporter,
    panel: Rc<PropertiesPanelController>,
    booting: Cell<bool>,
    services: OnceCell<Services<E, C>>,
}

impl<E, C> AppController<E, C>
where
    E: Engine + 'static,
    C: IfcConverter<Node = E::Node>,
{
    /// Create a controller in [`ViewerStatus::Initializing`]
    ///
    /// Subscribe to the reporter, panel and state before calling
    /// [`boot`](Self::boot) to see the startup messages.
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            state: RefCell::new(ViewerStatus::Initializing),
            state_changed: EventSlot::new(),
            reporter: StatusReporter::new(),
            panel: Rc::new(PropertiesPanelController::new()),
            booting: Cell::new(false),
            services: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Current lifecycle state
    pub fn status(&self) -> ViewerStatus {
        self.state.borrow().clone()
    }

    /// Status slot shown to the user
    pub fn reporter(&self) -> &StatusReporter {
        &self.reporter
    }

    /// Properties panel for the current selection
    pub fn panel(&self) -> &PropertiesPanelController {
        &self.panel
    }

    /// Receive lifecycle changes (one subscriber)
    pub fn on_state_change(&self, handler: impl Fn(&ViewerStatus) + 'static) {
        self.state_changed.subscribe(handler);
    }

    /// Start the engine, the loader and (if available) selection
    ///
    /// Only the first call does anything; later calls, also ones overlapping
    /// a boot still in progress, are ignored. On failure the controller moves
    /// to the terminal [`ViewerStatus::Error`] and the error is returned.
    pub async fn boot(
        &self,
        engine: E,
        converter: C,
        highlighter: Option<&dyn HighlightSource>,
        viewport: &E::Viewport,
    ) -> Result<()> {
        if *self.state.borrow() != ViewerStatus::Initializing || self.booting.replace(true) {
            log::warn!("[app] boot called twice, ignoring");
            return Ok(());
        }
        self.reporter
            .report(StatusPhase::Initializing, "Initializing engine...");

        let started = self
            .start_services(engine, converter, highlighter, viewport)
            .await
            .and_then(|services| {
                let selection = services.selection.is_some();
                self.services
                    .set(services)
                    .map_err(|_| ViewerError::engine_init("viewer services already started"))?;
                Ok(selection)
            });

        match started {
            Ok(selection) => {
                self.panel.clear();
                self.set_state(ViewerStatus::Ready);
                self.reporter.report(StatusPhase::Ready, "Ready");
                log::info!("[app] ready (selection: {})", selection);
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                log::error!("[app] {}", message);
                self.set_state(ViewerStatus::Error(message.clone()));
                self.reporter
                    .report(StatusPhase::Error, format!("Engine error: {message}"));
                Err(e)
            }
        }
    }

    async fn start_services(
        &self,
        engine: E,
        converter: C,
        highlighter: Option<&dyn HighlightSource>,
        viewport: &E::Viewport,
    ) -> Result<Services<E, C>> {
        let scene = SceneHost::initialize(engine, viewport, &self.config).await?;
        let loader = ModelLoader::initialize(converter, &self.config.loader_settings())
            .await
            .map_err(|e| ViewerError::engine_init(e.to_string()))?;

        let selection = highlighter.and_then(SelectionBridge::connect);
        if let Some(bridge) = &selection {
            let panel = Rc::clone(&self.panel);
            bridge.subscribe(move |event| panel.show(event));
        }

        Ok(Services {
            scene,
            loader,
            selection,
        })
    }

    /// Whether the highlighter was available at boot
    pub fn selection_available(&self) -> bool {
        self.services
            .get()
            .is_some_and(|s| s.selection.is_some())
    }

    /// Id of the model currently in the scene
    pub fn current_model(&self) -> Option<ModelId> {
        self.services.get()?.scene.current_model()
    }

    /// Load a file whose bytes arrive through `bytes`
    ///
    /// The name is checked first: non-`.ifc` files are rejected without
    /// reading them and without a state change. While loading, the previous
    /// model stays attached; it is replaced only once the new one converted
    /// successfully. Any failure leaves the viewer [`ViewerStatus::Ready`]
    /// with the error in the status slot.
    pub async fn load<F>(&self, file_name: &str, bytes: F) -> Result<ModelId>
    where
        F: Future<Output = Result<Vec<u8>>>,
    {
        if self.state.borrow().is_fatal() {
            return Err(ViewerError::NotReady);
        }
        if !is_ifc_file_name(file_name) {
            let err = ViewerError::InvalidInput(file_name.to_string());
            log::warn!("[app] rejected {}", file_name);
            self.reporter
                .report(StatusPhase::Error, "Please load an .ifc file");
            return Err(err);
        }
        let services = self.services_for_input()?;
        if *self.state.borrow() == ViewerStatus::Loading || services.loader.is_loading() {
            self.reporter.report(
                StatusPhase::Error,
                format!("{file_name} ignored: another model is still loading"),
            );
            return Err(ViewerError::Busy);
        }

        self.set_state(ViewerStatus::Loading);
        self.reporter
            .report(StatusPhase::Loading, format!("Loading {file_name}..."));
        log::info!("[app] loading {}", file_name);

        let result = match bytes.await {
            Ok(data) => services.loader.load(file_name, &data).await,
            Err(e) => Err(e),
        };

        self.set_state(ViewerStatus::Ready);
        match result {
            Ok(handle) => {
                let id = handle.id();
                if let Some(old) = services.scene.attach_model(handle) {
                    log::info!("[app] replaced {} with {}", old, id);
                    self.panel.clear();
                }
                services.scene.frame_camera(Some(id));
                self.reporter
                    .report(StatusPhase::Ready, format!("{file_name} loaded"));
                Ok(id)
            }
            Err(e) => {
                log::error!("[app] failed to load {}: {}", file_name, e);
                self.reporter.report(StatusPhase::Error, format!("Error: {e}"));
                Err(e)
            }
        }
    }

    /// [`load`](Self::load) with bytes already in memory
    pub async fn load_bytes(&self, file_name: &str, bytes: Vec<u8>) -> Result<ModelId> {
        self.load(file_name, std::future::ready(Ok(bytes))).await
    }

    /// Frame the attached model; `Ok(None)` when nothing is loaded
    pub fn fit_to_model(&self) -> Result<Option<CameraPose>> {
        let services = self.services_for_input()?;
        Ok(services.scene.frame_current())
    }

    /// Back to the default camera pose, with or without a model
    pub fn reset_camera(&self) -> Result<CameraPose> {
        let services = self.services_for_input()?;
        Ok(services.scene.reset_camera())
    }

    /// Detach the current model and reset the properties panel
    pub fn clear_model(&self) -> Result<Option<ModelId>> {
        let services = self.services_for_input()?;
        let removed = services.scene.clear();
        if let Some(id) = removed {
            log::info!("[app] cleared {}", id);
            self.panel.clear();
            self.reporter.report(StatusPhase::Ready, "Ready");
        }
        Ok(removed)
    }

    /// Last status line, if any
    pub fn status_line(&self) -> Option<StatusLine> {
        self.reporter.current()
    }

    /// Current properties panel content
    pub fn panel_view(&self) -> PanelView {
        self.panel.view()
    }

    /// Booted services, or `NotReady`
    ///
    /// Before boot completes the status tells the user to wait. After a fatal
    /// boot the engine error stays visible.
    fn services_for_input(&self) -> Result<&Services<E, C>> {
        if self.state.borrow().is_fatal() {
            return Err(ViewerError::NotReady);
        }
        match self.services.get() {
            Some(services) => Ok(services),
            None => {
                log::warn!("[app] input before the engine is ready");
                self.reporter.report(
                    StatusPhase::Error,
                    "Engine is still starting, try again in a moment",
                );
                Err(ViewerError::NotReady)
            }
        }
    }

    fn set_state(&self, next: ViewerStatus) {
        let changed = {
            let mut state = self.state.borrow_mut();
            if *state == next {
                false
            } else {
                log::debug!("[app] {:?} -> {:?}", *state, next);
                *state = next.clone();
                true
            }
        };
        if changed {
            self.state_changed.emit(&next);
        }
    }
}
