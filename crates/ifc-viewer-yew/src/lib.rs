//! IFC Viewer Yew UI Components
//!
//! Web UI for the IFC viewer using the Yew framework, plus the browser
//! implementations of the core engine traits over `@thatopen/components`.

pub mod bridge;
pub mod components;
pub mod engine;
pub mod state;
pub mod utils;

// Re-exports
pub use bridge::{init_logging, JsViewer};
pub use components::*;
pub use engine::{WebEngine, WebHighlighter, WebIfcLoader};
pub use state::{use_viewer_state, ViewerAction, ViewerState};
