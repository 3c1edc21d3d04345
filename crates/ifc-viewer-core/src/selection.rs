// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Selection events from the highlight subsystem

use crate::{EventSlot, HighlightSource};
use std::fmt;
use std::rc::Rc;

/// Highlighted elements grouped by fragment, in provider order
///
/// The highlighter hands over a map of fragment id to element-id set. Order
/// is whatever the provider iterates in; nothing here sorts it. With an
/// unordered provider the "first" entry is therefore not deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FragmentIdMap {
    entries: Vec<(String, Vec<u64>)>,
}

impl FragmentIdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment with its element ids
    pub fn insert(&mut self, fragment_id: impl Into<String>, element_ids: Vec<u64>) {
        self.entries.push((fragment_id.into(), element_ids));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u64])> {
        self.entries
            .iter()
            .map(|(fragment, ids)| (fragment.as_str(), ids.as_slice()))
    }

    /// First element of the first fragment
    ///
    /// `None` when the map is empty or its first fragment has no elements;
    /// later fragments are not consulted.
    pub fn first_selection(&self) -> Option<SelectionKey> {
        let (fragment_id, element_ids) = self.entries.first()?;
        let element_id = *element_ids.first()?;
        Some(SelectionKey {
            fragment_id: fragment_id.clone(),
            element_id,
        })
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<u64>)> for FragmentIdMap {
    fn from_iter<I: IntoIterator<Item = (S, Vec<u64>)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(fragment, ids)| (fragment.into(), ids))
                .collect(),
        }
    }
}

/// Identifies one element: the element id is only unique within its fragment
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectionKey {
    pub fragment_id: String,
    pub element_id: u64,
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.fragment_id, self.element_id)
    }
}

/// Simplified selection change
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    Selected(SelectionKey),
    Cleared,
}

impl SelectionEvent {
    /// Reduce a highlight payload to a single selection
    pub fn from_highlight(map: &FragmentIdMap) -> Self {
        match map.first_selection() {
            Some(key) => SelectionEvent::Selected(key),
            None => SelectionEvent::Cleared,
        }
    }
}

/// Republishes highlight/clear events as [`SelectionEvent`]s
pub struct SelectionBridge {
    events: Rc<EventSlot<SelectionEvent>>,
}

impl SelectionBridge {
    /// Subscribe once to `source`
    ///
    /// Returns `None` when the highlighter cannot be set up; the viewer then
    /// runs without selection.
    pub fn connect(source: &dyn HighlightSource) -> Option<Self> {
        if let Err(e) = source.setup() {
            log::warn!("[selection] highlighter not available: {}", e);
            return None;
        }

        let events = Rc::new(EventSlot::new());

        let on_highlight = Rc::clone(&events);
        source.on_highlight(Box::new(move |map| {
            let event = SelectionEvent::from_highlight(&map);
            log::debug!("[selection] highlight over {} fragment(s): {:?}", map.len(), event);
            on_highlight.emit(&event);
        }));

        let on_clear = Rc::clone(&events);
        source.on_clear(Box::new(move || {
            log::debug!("[selection] cleared");
            on_clear.emit(&SelectionEvent::Cleared);
        }));

        Some(Self { events })
    }

    /// Receive selection changes (one subscriber)
    pub fn subscribe(&self, handler: impl Fn(&SelectionEvent) + 'static) {
        self.events.subscribe(handler);
    }
}
