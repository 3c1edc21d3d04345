// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC Viewer Core - lifecycle orchestration for a browser IFC viewer
//!
//! The 3D engine, the IFC-to-geometry conversion and the picking/highlight
//! subsystem are external collaborators. This crate defines the narrow traits
//! it needs from them and coordinates everything in between: engine startup,
//! model loading and replacement, camera framing, status reporting and
//! selection display.
//!
//! # Architecture
//!
//! Components, leaf to root:
//!
//! - [`StatusReporter`] - single status slot, last write wins
//! - [`SceneHost`] - owns the engine world and the currently attached model
//! - [`ModelLoader`] - turns IFC bytes into a [`ModelHandle`]
//! - [`SelectionBridge`] - republishes highlight events as [`SelectionEvent`]s
//! - [`PropertiesPanelController`] - keeps the [`PanelView`] for the selection
//! - [`AppController`] - owns the lifecycle state machine and wires it all up
//!
//! # Example
//!
//! ```ignore
//! use ifc_viewer_core::{AppController, ViewerConfig};
//!
//! let app = AppController::new(ViewerConfig::default());
//! app.reporter().subscribe(|line| println!("{}", line.message));
//! app.boot(engine, converter, highlighter, &viewport).await?;
//! app.load_bytes("house.ifc", bytes).await?;
//! ```

pub mod camera;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod events;
pub mod loader;
pub mod model;
pub mod panel;
pub mod scene;
pub mod selection;
pub mod status;

#[cfg(test)]
pub(crate) mod testing;

pub use camera::*;
pub use config::*;
pub use controller::*;
pub use engine::*;
pub use error::*;
pub use events::*;
pub use loader::*;
pub use model::*;
pub use panel::*;
pub use scene::*;
pub use selection::*;
pub use status::*;
