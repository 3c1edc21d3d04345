// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status line reporting

use crate::EventSlot;
use std::cell::RefCell;

/// Phase of the operation a status message belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusPhase {
    Initializing,
    Loading,
    Ready,
    Error,
}

impl StatusPhase {
    /// CSS modifier class for the status slot
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusPhase::Initializing | StatusPhase::Loading => "loading",
            StatusPhase::Ready => "ready",
            StatusPhase::Error => "error",
        }
    }
}

/// One rendered status message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub phase: StatusPhase,
    pub message: String,
}

/// Single visible status slot: no history, last write wins
#[derive(Debug, Default)]
pub struct StatusReporter {
    current: RefCell<Option<StatusLine>>,
    changed: EventSlot<StatusLine>,
}

impl StatusReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visible status
    pub fn report(&self, phase: StatusPhase, message: impl Into<String>) {
        let line = StatusLine {
            phase,
            message: message.into(),
        };
        log::debug!("[status] {:?}: {}", line.phase, line.message);
        *self.current.borrow_mut() = Some(line.clone());
        self.changed.emit(&line);
    }

    /// Currently visible status, if anything was reported yet
    pub fn current(&self) -> Option<StatusLine> {
        self.current.borrow().clone()
    }

    /// Render target for status changes (one subscriber)
    pub fn subscribe(&self, handler: impl Fn(&StatusLine) + 'static) {
        self.changed.subscribe(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_last_write_wins() {
        let reporter = StatusReporter::new();
        assert!(reporter.current().is_none());

        reporter.report(StatusPhase::Loading, "Loading house.ifc...");
        reporter.report(StatusPhase::Ready, "house.ifc loaded");

        let line = reporter.current().unwrap();
        assert_eq!(line.phase, StatusPhase::Ready);
        assert_eq!(line.message, "house.ifc loaded");
    }

    #[test]
    fn test_subscriber_sees_every_write() {
        let reporter = StatusReporter::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        reporter.subscribe(move |line| sink.borrow_mut().push(line.phase));

        reporter.report(StatusPhase::Initializing, "Starting engine...");
        reporter.report(StatusPhase::Error, "boom");

        assert_eq!(
            *seen.borrow(),
            vec![StatusPhase::Initializing, StatusPhase::Error]
        );
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(StatusPhase::Initializing.css_class(), "loading");
        assert_eq!(StatusPhase::Ready.css_class(), "ready");
        assert_eq!(StatusPhase::Error.css_class(), "error");
    }
}
