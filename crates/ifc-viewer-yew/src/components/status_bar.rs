//! Status bar component

use crate::state::ViewerStateContext;
use yew::prelude::*;

/// Status bar component
#[function_component]
pub fn StatusBar() -> Html {
    let state = use_context::<ViewerStateContext>().expect("ViewerStateContext not found");

    let (phase_class, message) = match &state.status {
        Some(line) => (line.phase.css_class(), line.message.clone()),
        None => ("loading", "Initializing...".to_string()),
    };

    html! {
        <div class="status-bar">
            <div class="status-left">
                <span class={classes!("status", phase_class)} title={message.clone()}>
                    {message}
                </span>
            </div>
            <div class="status-right">
                if !state.selection_available {
                    <span class="status-selection-off" title="Highlighter not available">
                        {"Selection off"}
                    </span>
                }
            </div>
        </div>
    }
}
