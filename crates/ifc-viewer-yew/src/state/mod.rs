//! UI state for the IFC viewer
//!
//! A mirror of what the [`AppController`](ifc_viewer_core::AppController)
//! publishes, kept in Yew's reducer so components re-render on change.

use ifc_viewer_core::{PanelView, StatusLine, ViewerStatus};
use std::rc::Rc;
use yew::prelude::*;

/// Everything the components render from
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerState {
    /// Lifecycle of the controller
    pub lifecycle: ViewerStatus,
    /// Last status line
    pub status: Option<StatusLine>,
    /// Properties panel content
    pub panel: PanelView,
    /// A file is dragged over the viewport
    pub drag_over: bool,
    /// A model is attached to the scene
    pub has_model: bool,
    /// Highlighter was available at boot
    pub selection_available: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            lifecycle: ViewerStatus::Initializing,
            status: None,
            panel: PanelView::Empty,
            drag_over: false,
            has_model: false,
            selection_available: true,
        }
    }
}

impl ViewerState {
    /// Load, fit and reset are usable
    pub fn controls_enabled(&self) -> bool {
        self.lifecycle.accepts_input()
    }

    /// Drop zone overlay over the viewport
    pub fn show_drop_zone(&self) -> bool {
        !self.has_model && self.lifecycle != ViewerStatus::Loading
    }

    /// Message of a failed boot
    pub fn fatal_error(&self) -> Option<&str> {
        match &self.lifecycle {
            ViewerStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Actions that modify state
pub enum ViewerAction {
    SetLifecycle(ViewerStatus),
    SetStatus(StatusLine),
    SetPanel(PanelView),
    SetDragOver(bool),
    SetHasModel(bool),
    SetSelectionAvailable(bool),
}

impl Reducible for ViewerState {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            ViewerAction::SetLifecycle(lifecycle) => {
                next.lifecycle = lifecycle;
            }
            ViewerAction::SetStatus(line) => {
                next.status = Some(line);
            }
            ViewerAction::SetPanel(view) => {
                next.panel = view;
            }
            ViewerAction::SetDragOver(over) => {
                next.drag_over = over;
            }
            ViewerAction::SetHasModel(has_model) => {
                next.has_model = has_model;
                if has_model {
                    next.drag_over = false;
                }
            }
            ViewerAction::SetSelectionAvailable(available) => {
                next.selection_available = available;
            }
        }

        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

/// Hook to use viewer state
#[hook]
pub fn use_viewer_state() -> UseReducerHandle<ViewerState> {
    use_reducer(ViewerState::default)
}

/// Context type for viewer state
pub type ViewerStateContext = UseReducerHandle<ViewerState>;

#[cfg(test)]
mod tests {
    use super::*;
    use ifc_viewer_core::StatusPhase;

    fn reduce(state: ViewerState, action: ViewerAction) -> ViewerState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_controls_follow_lifecycle() {
        let state = ViewerState::default();
        assert!(!state.controls_enabled());

        let ready = reduce(state, ViewerAction::SetLifecycle(ViewerStatus::Ready));
        assert!(ready.controls_enabled());

        let loading = reduce(ready, ViewerAction::SetLifecycle(ViewerStatus::Loading));
        assert!(!loading.controls_enabled());
        assert!(!loading.show_drop_zone());
    }

    #[test]
    fn test_drop_zone_returns_after_failed_first_load() {
        let state = reduce(
            ViewerState::default(),
            ViewerAction::SetLifecycle(ViewerStatus::Loading),
        );
        let failed = reduce(state, ViewerAction::SetLifecycle(ViewerStatus::Ready));
        assert!(failed.show_drop_zone());

        let loaded = reduce(failed, ViewerAction::SetHasModel(true));
        assert!(!loaded.show_drop_zone());
    }

    #[test]
    fn test_fatal_error_message() {
        let state = reduce(
            ViewerState::default(),
            ViewerAction::SetLifecycle(ViewerStatus::Error("no worker".into())),
        );
        assert_eq!(state.fatal_error(), Some("no worker"));
        assert!(!state.controls_enabled());
    }

    #[test]
    fn test_unchanged_state_is_reused() {
        let state = Rc::new(ViewerState::default());
        let next = state.clone().reduce(ViewerAction::SetDragOver(false));
        assert!(Rc::ptr_eq(&state, &next));

        let next = next.reduce(ViewerAction::SetStatus(StatusLine {
            phase: StatusPhase::Ready,
            message: "Ready".into(),
        }));
        assert!(!Rc::ptr_eq(&state, &next));
    }
}
