//! Toolbar with file and camera commands

use super::{start_load, ControllerContext};
use crate::state::{ViewerAction, ViewerStateContext};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Toolbar component
#[function_component]
pub fn Toolbar() -> Html {
    let state = use_context::<ViewerStateContext>().expect("ViewerStateContext not found");
    let ControllerContext(controller) =
        use_context::<ControllerContext>().expect("ControllerContext not found");

    let file_input_ref = use_node_ref();
    let disabled = !state.controls_enabled();

    let on_file_change = {
        let state = state.clone();
        let controller = controller.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                start_load(controller.clone(), state.clone(), file);
            }
            // Picking the same file again must fire `change` again
            input.set_value("");
        })
    };

    let on_open = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_fit = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| match controller.fit_to_model() {
            Ok(Some(pose)) => log::debug!("[ui] framed model from {:?}", pose.position),
            Ok(None) => log::debug!("[ui] fit: nothing to frame"),
            Err(e) => log::debug!("[ui] fit ignored: {}", e),
        })
    };

    let on_reset = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = controller.reset_camera() {
                log::debug!("[ui] reset ignored: {}", e);
            }
        })
    };

    let on_clear = {
        let state = state.clone();
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| match controller.clear_model() {
            Ok(_) => state.dispatch(ViewerAction::SetHasModel(false)),
            Err(e) => log::debug!("[ui] clear ignored: {}", e),
        })
    };

    html! {
        <div class="toolbar">
            <div class="toolbar-group">
                <input
                    ref={file_input_ref}
                    type="file"
                    accept=".ifc"
                    style="display: none"
                    onchange={on_file_change}
                />
                <button class="tool-btn" onclick={on_open} {disabled} title="Open IFC file">
                    {"📁 Load IFC"}
                </button>
            </div>

            <div class="toolbar-separator" />

            <div class="toolbar-group">
                <button class="tool-btn" onclick={on_fit} {disabled} title="Fit model to view">
                    {"⛶ Fit"}
                </button>
                <button class="tool-btn" onclick={on_reset} {disabled} title="Reset camera">
                    {"⟲ Reset"}
                </button>
            </div>

            <div class="toolbar-separator" />

            <div class="toolbar-group">
                <button
                    class="tool-btn"
                    onclick={on_clear}
                    disabled={disabled || !state.has_model}
                    title="Remove the loaded model"
                >
                    {"✕ Clear"}
                </button>
            </div>
        </div>
    }
}
