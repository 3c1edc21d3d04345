//! Yew UI Components for the IFC Viewer

mod properties_panel;
mod status_bar;
mod toolbar;
mod viewer_layout;
mod viewport;

pub use properties_panel::PropertiesPanel;
pub use status_bar::StatusBar;
pub use toolbar::Toolbar;
pub use viewer_layout::ViewerLayout;
pub use viewport::Viewport;

use crate::engine::{WebEngine, WebIfcLoader};
use crate::state::{ViewerAction, ViewerStateContext};
use crate::utils::read_file;
use ifc_viewer_core::AppController;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Controller wired to the browser engine
pub type WebController = AppController<WebEngine, WebIfcLoader>;

/// Shared controller handed down to the components
#[derive(Clone)]
pub struct ControllerContext(pub Rc<WebController>);

impl PartialEq for ControllerContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Read `file` and hand it to the controller
///
/// Status and lifecycle updates arrive through the controller's
/// subscriptions; only the model flag is synced here.
pub(crate) fn start_load(
    controller: Rc<WebController>,
    state: ViewerStateContext,
    file: web_sys::File,
) {
    spawn_local(async move {
        let name = file.name();
        if let Err(e) = controller.load(&name, read_file(file)).await {
            log::debug!("[ui] load of {} ended with {}", name, e);
        }
        state.dispatch(ViewerAction::SetHasModel(
            controller.current_model().is_some(),
        ));
    });
}
