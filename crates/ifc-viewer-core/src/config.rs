// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Viewer configuration

use crate::{CameraPose, Framing};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Fragment worker used by the engine for background conversion
pub const DEFAULT_WORKER_URL: &str =
    "https://thatopen.github.io/engine_fragment/resources/worker.mjs";

/// Location of the web-ifc decoder wasm
pub const DEFAULT_WASM_PATH: &str = "https://unpkg.com/web-ifc@0.0.72/";

/// Scene background (0xRRGGBB)
pub const DEFAULT_BACKGROUND: u32 = 0x0a0a0b;

/// Runtime configuration for the viewer
///
/// Every field has a default so partial JSON documents deserialize.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// URL of the fragments worker script
    pub worker_url: String,
    /// Base path of the IFC decoder wasm assets
    pub wasm_path: String,
    /// Whether `wasm_path` is absolute or relative to the page
    pub wasm_absolute: bool,
    /// Scene background colour as 0xRRGGBB
    pub background: u32,
    /// Pose used at startup and by camera reset
    pub default_camera: CameraPose,
    /// Framing distance multiplier on the largest model extent
    pub frame_distance_factor: f64,
    /// Direction from the model center towards the framing camera
    pub frame_direction: [f64; 3],
    /// Verbose console logging
    pub debug: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            worker_url: DEFAULT_WORKER_URL.to_string(),
            wasm_path: DEFAULT_WASM_PATH.to_string(),
            wasm_absolute: true,
            background: DEFAULT_BACKGROUND,
            default_camera: CameraPose::default(),
            frame_distance_factor: 1.5,
            frame_direction: [1.0, 0.7, 1.0],
            debug: false,
        }
    }
}

impl ViewerConfig {
    /// Framing parameters derived from this config
    pub fn framing(&self) -> Framing {
        let [x, y, z] = self.frame_direction;
        Framing {
            distance_factor: self.frame_distance_factor,
            direction: Vector3::new(x, y, z),
        }
    }

    /// Settings handed to the IFC converter
    pub fn loader_settings(&self) -> LoaderSettings {
        LoaderSettings {
            wasm_path: self.wasm_path.clone(),
            wasm_absolute: self.wasm_absolute,
            auto_set_wasm: false,
        }
    }
}

/// Configuration for the external IFC conversion pipeline
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderSettings {
    pub wasm_path: String,
    pub wasm_absolute: bool,
    /// Let the converter pick its own wasm location (disabled: we always pin one)
    pub auto_set_wasm: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ViewerConfig =
            serde_json::from_str(r#"{ "wasm_path": "/assets/web-ifc/", "debug": true }"#).unwrap();

        assert_eq!(config.wasm_path, "/assets/web-ifc/");
        assert!(config.debug);
        assert_eq!(config.worker_url, DEFAULT_WORKER_URL);
        assert_eq!(config.default_camera, CameraPose::default());
        assert_eq!(config.background, DEFAULT_BACKGROUND);
    }

    #[test]
    fn test_camera_override() {
        let config: ViewerConfig = serde_json::from_str(
            r#"{ "default_camera": { "position": [1.0, 2.0, 3.0], "target": [0.0, 0.0, 0.0] } }"#,
        )
        .unwrap();

        assert_eq!(config.default_camera.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_loader_settings_pin_wasm() {
        let settings = ViewerConfig::default().loader_settings();
        assert_eq!(settings.wasm_path, DEFAULT_WASM_PATH);
        assert!(settings.wasm_absolute);
        assert!(!settings.auto_set_wasm);
    }
}
