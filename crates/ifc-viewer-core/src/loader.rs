// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC model loading

use crate::{IfcConverter, LoaderSettings, ModelHandle, ModelId, Result, ViewerError};
use std::cell::Cell;

/// Extension accepted for model files (compared case-insensitively)
pub const IFC_EXTENSION: &str = ".ifc";

/// Whether `file_name` names an IFC file
pub fn is_ifc_file_name(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(IFC_EXTENSION)
}

/// Converts IFC bytes into [`ModelHandle`]s through the external pipeline
///
/// Only one conversion runs at a time; a second `load` while one is pending
/// fails with [`ViewerError::Busy`] and leaves the first untouched.
pub struct ModelLoader<C: IfcConverter> {
    converter: C,
    next_id: Cell<u64>,
    in_flight: Cell<bool>,
}

/// Clears the in-flight flag however the load ends
struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<C: IfcConverter> ModelLoader<C> {
    /// Configure the converter's decoder assets
    pub async fn initialize(converter: C, settings: &LoaderSettings) -> Result<Self> {
        converter.configure(settings).await?;
        log::info!(
            "[loader] IFC decoder configured from {} (absolute: {})",
            settings.wasm_path,
            settings.wasm_absolute
        );
        Ok(Self {
            converter,
            next_id: Cell::new(0),
            in_flight: Cell::new(false),
        })
    }

    /// Whether a conversion is currently pending
    pub fn is_loading(&self) -> bool {
        self.in_flight.get()
    }

    /// Convert `bytes` into a model named `name`
    pub async fn load(&self, name: &str, bytes: &[u8]) -> Result<ModelHandle<C::Node>> {
        if self.in_flight.replace(true) {
            return Err(ViewerError::Busy);
        }
        let _guard = InFlight(&self.in_flight);

        if bytes.is_empty() {
            return Err(ViewerError::parse(format!("{name} is empty")));
        }

        log::debug!("[loader] converting {} ({} bytes)", name, bytes.len());
        let node = self.converter.convert(bytes).await?;

        let id = ModelId(self.next_id.get() + 1);
        self.next_id.set(id.0);
        Ok(ModelHandle::new(id, name, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeConverter, MINIMAL_IFC};
    use crate::ViewerConfig;

    async fn loader(converter: FakeConverter) -> ModelLoader<FakeConverter> {
        ModelLoader::initialize(converter, &ViewerConfig::default().loader_settings())
            .await
            .unwrap()
    }

    #[test]
    fn test_ifc_extension_is_case_insensitive() {
        assert!(is_ifc_file_name("house.ifc"));
        assert!(is_ifc_file_name("HOUSE.IFC"));
        assert!(is_ifc_file_name("Bridge.Ifc"));
        assert!(!is_ifc_file_name("house.ifczip"));
        assert!(!is_ifc_file_name("house.ifc.txt"));
        assert!(!is_ifc_file_name("ifc"));
    }

    #[tokio::test]
    async fn test_initialize_configures_converter() {
        let converter = FakeConverter::new();
        let _loader = loader(converter.clone()).await;
        assert_eq!(
            converter.configured(),
            Some(ViewerConfig::default().loader_settings())
        );
    }

    #[tokio::test]
    async fn test_configure_failure_propagates() {
        let converter = FakeConverter::new();
        converter.fail_configure(ViewerError::resource("web-ifc.wasm: 404"));
        let result =
            ModelLoader::initialize(converter, &ViewerConfig::default().loader_settings()).await;
        assert!(matches!(result, Err(ViewerError::Resource(_))));
    }

    #[tokio::test]
    async fn test_load_assigns_increasing_ids() {
        let loader = loader(FakeConverter::new()).await;
        let a = loader.load("a.ifc", MINIMAL_IFC).await.unwrap();
        let b = loader.load("b.ifc", MINIMAL_IFC).await.unwrap();

        assert_eq!(a.id(), ModelId(1));
        assert_eq!(b.id(), ModelId(2));
        assert_eq!(b.name(), "b.ifc");
    }

    #[tokio::test]
    async fn test_parse_error_is_recoverable() {
        let loader = loader(FakeConverter::new()).await;
        let err = loader.load("bad.ifc", b"not ifc at all").await.unwrap_err();
        assert!(matches!(err, ViewerError::Parse(_)));
        assert!(!loader.is_loading());

        assert!(loader.load("good.ifc", MINIMAL_IFC).await.is_ok());
    }

    #[tokio::test]
    async fn test_empty_bytes_never_reach_converter() {
        let converter = FakeConverter::new();
        let loader = loader(converter.clone()).await;

        let err = loader.load("empty.ifc", &[]).await.unwrap_err();
        assert_eq!(err, ViewerError::Parse("empty.ifc is empty".into()));
        assert_eq!(converter.calls(), 0);
    }

    #[tokio::test]
    async fn test_overlapping_load_is_rejected() {
        let converter = FakeConverter::new();
        let loader = loader(converter.clone()).await;

        let (first, second) = tokio::join!(
            loader.load("first.ifc", MINIMAL_IFC),
            loader.load("second.ifc", MINIMAL_IFC)
        );

        assert_eq!(first.unwrap().name(), "first.ifc");
        assert_eq!(second.unwrap_err(), ViewerError::Busy);
        assert_eq!(converter.calls(), 1);
        assert!(!loader.is_loading());
    }
}
