//! Properties panel - shows the picked element

use crate::state::ViewerStateContext;
use ifc_viewer_core::PanelView;
use yew::prelude::*;

/// Properties panel component
#[function_component]
pub fn PropertiesPanel() -> Html {
    let state = use_context::<ViewerStateContext>().expect("ViewerStateContext not found");

    html! {
        <div class="properties-panel">
            {
                match &state.panel {
                    PanelView::Empty => html! {
                        <div class="empty-state">
                            if state.selection_available {
                                <p>{"Click an element in the model to see its properties"}</p>
                            } else {
                                <p>{"Element selection is not available in this viewer build"}</p>
                            }
                        </div>
                    },
                    PanelView::Identification { element_id, fragment_label } => html! {
                        <>
                            <div class="property-section">
                                <div class="section-header">{"Identification"}</div>
                                <div class="property-row">
                                    <span class="property-label">{"Express ID"}</span>
                                    <span class="property-value">{element_id.to_string()}</span>
                                </div>
                                <div class="property-row">
                                    <span class="property-label">{"Fragment ID"}</span>
                                    <span class="property-value global-id">{fragment_label.clone()}</span>
                                </div>
                            </div>
                            <div class="property-section">
                                <div class="section-header">{"Note"}</div>
                                <p class="property-note">
                                    {"Full IFC property sets need a property manager; only identification is shown here."}
                                </p>
                            </div>
                        </>
                    },
                }
            }
        </div>
    }
}
