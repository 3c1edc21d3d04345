//! Main viewer layout component
//!
//! Toolbar on top, viewport with the properties sidebar, status bar below.
//! Owns the controller and boots it once the viewport element exists.

use super::{ControllerContext, PropertiesPanel, StatusBar, Toolbar, Viewport, WebController};
use crate::bridge::{enable_debug_logging, JsViewer};
use crate::engine::{WebEngine, WebHighlighter, WebIfcLoader};
use crate::state::{use_viewer_state, ViewerAction, ViewerStateContext};
use crate::utils::load_config;
use ifc_viewer_core::HighlightSource;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Main viewer layout component
#[function_component]
pub fn ViewerLayout() -> Html {
    let state = use_viewer_state();
    let viewport_ref = use_node_ref();

    let controller = use_memo((), |_| {
        let config = load_config();
        if config.debug {
            enable_debug_logging();
        }
        WebController::new(config)
    });

    // Subscribe to the controller and boot, once on mount
    {
        let controller = controller.clone();
        let dispatcher = state.dispatcher();
        let viewport_ref = viewport_ref.clone();
        use_effect_with((), move |_| {
            let d = dispatcher.clone();
            controller
                .reporter()
                .subscribe(move |line| d.dispatch(ViewerAction::SetStatus(line.clone())));
            let d = dispatcher.clone();
            controller
                .panel()
                .subscribe(move |view| d.dispatch(ViewerAction::SetPanel(view.clone())));
            let d = dispatcher.clone();
            controller.on_state_change(move |status| {
                d.dispatch(ViewerAction::SetLifecycle(status.clone()))
            });

            match viewport_ref.cast::<HtmlElement>() {
                Some(viewport) => spawn_local(async move {
                    let viewer = JsViewer::new();
                    let highlighter = WebHighlighter::new(viewer.clone());
                    let highlighter: &dyn HighlightSource = &highlighter;
                    let booted = controller
                        .boot(
                            WebEngine::new(viewer.clone()),
                            WebIfcLoader::new(viewer),
                            Some(highlighter),
                            &viewport,
                        )
                        .await;
                    dispatcher.dispatch(ViewerAction::SetSelectionAvailable(
                        controller.selection_available(),
                    ));
                    if booted.is_ok() {
                        log::info!("[ui] viewer started");
                    }
                }),
                None => log::error!("[ui] viewport element not mounted"),
            }

            || ()
        });
    }

    html! {
        <ContextProvider<ViewerStateContext> context={state.clone()}>
            <ContextProvider<ControllerContext> context={ControllerContext(controller.clone())}>
                <div class="viewer-layout">
                    <Toolbar />
                    <div class="viewer-main">
                        <Viewport viewport_ref={viewport_ref.clone()} />
                        <aside class="properties-sidebar">
                            <div class="panel-header">{"Properties"}</div>
                            <PropertiesPanel />
                        </aside>
                    </div>
                    <StatusBar />
                </div>
            </ContextProvider<ControllerContext>>
        </ContextProvider<ViewerStateContext>>
    }
}
