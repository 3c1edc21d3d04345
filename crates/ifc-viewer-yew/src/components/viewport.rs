//! 3D viewport: render surface, drop zone and fatal error overlay

use super::{start_load, ControllerContext};
use crate::state::{ViewerAction, ViewerStateContext};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ViewportProps {
    /// Element the engine renderer attaches its canvas to
    pub viewport_ref: NodeRef,
}

/// Viewport component
#[function_component]
pub fn Viewport(props: &ViewportProps) -> Html {
    let state = use_context::<ViewerStateContext>().expect("ViewerStateContext not found");
    let ControllerContext(controller) =
        use_context::<ControllerContext>().expect("ControllerContext not found");

    let ondragover = {
        let state = state.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            if state.controls_enabled() && !state.drag_over {
                state.dispatch(ViewerAction::SetDragOver(true));
            }
        })
    };

    let ondragleave = {
        let state = state.clone();
        Callback::from(move |_: DragEvent| {
            state.dispatch(ViewerAction::SetDragOver(false));
        })
    };

    let ondrop = {
        let state = state.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            state.dispatch(ViewerAction::SetDragOver(false));
            // After a failed boot the overlay already explains; while starting
            // or loading the controller reports why the drop is refused
            if state.fatal_error().is_some() {
                return;
            }
            let file = e
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                start_load(controller.clone(), state.clone(), file);
            }
        })
    };

    html! {
        <div class="viewport-container" {ondragover} {ondragleave} {ondrop}>
            <div class="viewport" ref={props.viewport_ref.clone()} />

            if let Some(message) = state.fatal_error() {
                <div class="drop-zone fatal">
                    <div class="drop-zone-icon">{"⚠️"}</div>
                    <p class="drop-zone-title">{"The 3D engine failed to start"}</p>
                    <p class="drop-zone-error">{message}</p>
                    <p class="drop-zone-hint">{"Check the browser console for details."}</p>
                </div>
            } else if state.show_drop_zone() {
                <div class={classes!("drop-zone", state.drag_over.then_some("dragover"))}>
                    <div class="drop-zone-icon">{"📦"}</div>
                    <p class="drop-zone-title">{"Drop an IFC file here"}</p>
                    <p class="drop-zone-hint">{"or use Load IFC in the toolbar"}</p>
                </div>
            }
        </div>
    }
}
