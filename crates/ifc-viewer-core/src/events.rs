// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed single-subscriber event slots

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Handler<T> = Rc<dyn Fn(&T)>;

/// An event with at most one active subscriber
///
/// Subscribing again replaces the previous handler. Emitting with no
/// subscriber is a no-op. The handler is cloned out of the slot before it
/// runs, so a handler may safely re-subscribe or emit on the same slot.
pub struct EventSlot<T> {
    handler: RefCell<Option<Handler<T>>>,
}

impl<T> EventSlot<T> {
    pub fn new() -> Self {
        Self {
            handler: RefCell::new(None),
        }
    }

    /// Install `handler`, replacing any previous one
    pub fn subscribe(&self, handler: impl Fn(&T) + 'static) {
        *self.handler.borrow_mut() = Some(Rc::new(handler));
    }

    /// Drop the current handler
    pub fn unsubscribe(&self) {
        self.handler.borrow_mut().take();
    }

    pub fn is_subscribed(&self) -> bool {
        self.handler.borrow().is_some()
    }

    /// Deliver `event` to the subscriber, if any
    pub fn emit(&self, event: &T) {
        let handler = self.handler.borrow().clone();
        if let Some(handler) = handler {
            handler(event);
        }
    }
}

impl<T> Default for EventSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSlot")
            .field("subscribed", &self.is_subscribed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_resubscribe_replaces_handler() {
        let slot = EventSlot::<u32>::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let f = first.clone();
        slot.subscribe(move |v| f.set(f.get() + v));
        slot.emit(&1);

        let s = second.clone();
        slot.subscribe(move |v| s.set(s.get() + v));
        slot.emit(&10);

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 10);
    }

    #[test]
    fn test_emit_without_subscriber() {
        let slot = EventSlot::<String>::new();
        slot.emit(&"nobody listening".to_string());
        assert!(!slot.is_subscribed());
    }

    #[test]
    fn test_handler_may_unsubscribe_itself() {
        let slot = Rc::new(EventSlot::<()>::new());
        let calls = Rc::new(Cell::new(0));

        let inner = slot.clone();
        let c = calls.clone();
        slot.subscribe(move |_| {
            c.set(c.get() + 1);
            inner.unsubscribe();
        });

        slot.emit(&());
        slot.emit(&());
        assert_eq!(calls.get(), 1);
    }
}
