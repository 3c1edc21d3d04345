//! IFC Viewer
//!
//! WASM entry point: installs the panic hook and console logger, then mounts
//! the Yew UI. The 3D engine is started by the layout once the viewport
//! element exists.

use wasm_bindgen::prelude::*;
use yew::prelude::*;

/// Main application component
#[function_component]
fn App() -> Html {
    html! {
        <ifc_viewer_yew::ViewerLayout />
    }
}

/// WASM entry point - starts Yew UI
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    ifc_viewer_yew::init_logging();
    log::info!("[viewer] starting IFC viewer {}", env!("CARGO_PKG_VERSION"));

    yew::Renderer::<App>::new().render();
}
