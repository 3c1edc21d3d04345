// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loaded model handles

use std::fmt;

/// Identity of a loaded model, unique for the lifetime of a viewer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub u64);

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model#{}", self.0)
    }
}

/// One loaded IFC model
///
/// Wraps the engine's opaque scene node. Handles are moved into the
/// [`SceneHost`](crate::SceneHost) on attach and dropped there on detach, so a
/// detached handle cannot be reached again.
#[derive(Debug)]
pub struct ModelHandle<N> {
    id: ModelId,
    name: String,
    node: N,
}

impl<N> ModelHandle<N> {
    pub fn new(id: ModelId, name: impl Into<String>, node: N) -> Self {
        Self {
            id,
            name: name.into(),
            node,
        }
    }

    pub fn id(&self) -> ModelId {
        self.id
    }

    /// Name of the file the model was loaded from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Engine scene node of the model root
    pub fn node(&self) -> &N {
        &self.node
    }
}
