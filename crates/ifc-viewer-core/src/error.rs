// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for viewer operations

use thiserror::Error;

/// Result type alias for viewer operations
pub type Result<T> = std::result::Result<T, ViewerError>;

/// Errors that can occur while running the viewer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    /// The 3D/WASM runtime could not start. Fatal: no model can ever be loaded.
    #[error("Engine initialization failed: {0}")]
    EngineInit(String),

    /// Malformed or unsupported IFC content
    #[error("Could not read IFC model: {0}")]
    Parse(String),

    /// A decoder asset (wasm, worker) or the file itself could not be reached
    #[error("Required resource unavailable: {0}")]
    Resource(String),

    /// The user picked or dropped something that is not an `.ifc` file
    #[error("'{0}' is not an .ifc file")]
    InvalidInput(String),

    /// A load was requested while another one is still in flight
    #[error("Another model is still loading")]
    Busy,

    /// The viewer has not finished booting, or booting failed
    #[error("Viewer is not ready")]
    NotReady,
}

/// Message fragments that point at an unreachable asset rather than bad content
const RESOURCE_MARKERS: &[&str] = &[
    "failed to fetch",
    "networkerror",
    "network error",
    "404",
    "cors",
];

/// Decoder assets; they count as unreachable only together with
/// [`ASSET_FAILURES`] wording, since decoder crashes on bad content report
/// `wasm-function[..]` frames
const DECODER_ASSETS: &[&str] = &[".wasm", "worker"];

/// Wording of an asset that could not be fetched or started
const ASSET_FAILURES: &[&str] = &[
    "fetch",
    "compile",
    "instantiate",
    "failed to load",
    "could not load",
    "not found",
    "mime",
];

impl ViewerError {
    /// Create an engine initialization error
    pub fn engine_init(msg: impl Into<String>) -> Self {
        ViewerError::EngineInit(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        ViewerError::Parse(msg.into())
    }

    /// Create a resource error
    pub fn resource(msg: impl Into<String>) -> Self {
        ViewerError::Resource(msg.into())
    }

    /// Only engine initialization failures end the viewer's life
    pub fn is_fatal(&self) -> bool {
        matches!(self, ViewerError::EngineInit(_))
    }

    /// Map an opaque conversion failure onto the error taxonomy
    ///
    /// The external converter only reports a message. Messages about
    /// fetching, networking, or a decoder wasm/worker asset that failed to load
    /// become [`ViewerError::Resource`]; everything else is treated as bad content.
    pub fn classify_load_failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_ascii_lowercase();
        let unreachable_asset = DECODER_ASSETS.iter().any(|a| lower.contains(a))
            && ASSET_FAILURES.iter().any(|f| lower.contains(f));
        if unreachable_asset || RESOURCE_MARKERS.iter().any(|m| lower.contains(m)) {
            ViewerError::Resource(message)
        } else {
            ViewerError::Parse(message)
        }
    }
}
