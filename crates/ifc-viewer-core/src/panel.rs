// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Properties panel content for the current selection

use crate::{EventSlot, SelectionEvent, SelectionKey};
use std::cell::RefCell;

/// Characters of the fragment id shown before the ellipsis
pub const FRAGMENT_PREFIX_LEN: usize = 12;

/// What the properties panel shows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PanelView {
    /// Placeholder asking the user to pick an element
    #[default]
    Empty,
    /// Identification of one picked element
    Identification {
        element_id: u64,
        fragment_label: String,
    },
}

impl PanelView {
    pub fn for_selection(key: &SelectionKey) -> Self {
        PanelView::Identification {
            element_id: key.element_id,
            fragment_label: fragment_label(&key.fragment_id),
        }
    }
}

/// First [`FRAGMENT_PREFIX_LEN`] characters of a fragment id plus `...`
///
/// The ellipsis is always appended, also for short ids.
pub fn fragment_label(fragment_id: &str) -> String {
    let prefix: String = fragment_id.chars().take(FRAGMENT_PREFIX_LEN).collect();
    format!("{prefix}...")
}

/// Keeps the panel view in sync with selection events
#[derive(Debug, Default)]
pub struct PropertiesPanelController {
    view: RefCell<PanelView>,
    changed: EventSlot<PanelView>,
}

impl PropertiesPanelController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `event` into the panel
    pub fn show(&self, event: &SelectionEvent) {
        let view = match event {
            SelectionEvent::Selected(key) => PanelView::for_selection(key),
            SelectionEvent::Cleared => PanelView::Empty,
        };
        *self.view.borrow_mut() = view.clone();
        self.changed.emit(&view);
    }

    /// Back to the placeholder
    pub fn clear(&self) {
        self.show(&SelectionEvent::Cleared);
    }

    pub fn view(&self) -> PanelView {
        self.view.borrow().clone()
    }

    /// Render target for panel changes (one subscriber)
    pub fn subscribe(&self, handler: impl Fn(&PanelView) + 'static) {
        self.changed.subscribe(handler);
    }
}
