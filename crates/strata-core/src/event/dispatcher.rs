// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::types::{Event, TypedEvent};

/// Routes one event to handlers written against a concrete event type.
///
/// ```
/// use strata_core::event::{Event, EventDispatcher, WindowCloseEvent};
///
/// let mut event: Event = WindowCloseEvent.into();
/// let mut running = true;
/// EventDispatcher::new(&mut event).dispatch::<WindowCloseEvent>(|_| {
///     running = false;
///     true
/// });
/// assert!(!running);
/// assert!(event.is_handled());
/// ```
pub struct EventDispatcher<'a> {
    event: &'a mut Event,
}

impl<'a> EventDispatcher<'a> {
    /// Binds a dispatcher to `event`.
    pub fn new(event: &'a mut Event) -> Self {
        Self { event }
    }

    /// Invokes `handler` if the bound event is a `T`.
    ///
    /// A `true` result marks the event as handled. A `false` result leaves the
    /// handled state as it was, since the latch is never reset. Returns whether
    /// the handler ran.
    pub fn dispatch<T: TypedEvent>(&mut self, handler: impl FnOnce(&T) -> bool) -> bool {
        let Some(typed) = self.event.downcast::<T>() else {
            return false;
        };
        log::trace!("Dispatching {typed} to a {:?} handler.", T::KIND);
        if handler(typed) {
            self.event.mark_handled();
        }
        true
    }

    /// The event this dispatcher is bound to.
    pub fn event(&self) -> &Event {
        self.event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyPressedEvent, MouseMovedEvent, WindowCloseEvent, WindowResizeEvent};
    use crate::platform::input::KeyCode;

    #[test]
    fn non_matching_handler_is_not_called() {
        let mut event: Event = MouseMovedEvent::new(1.0, 1.0).into();
        let mut calls = 0;

        let ran = EventDispatcher::new(&mut event).dispatch::<WindowCloseEvent>(|_| {
            calls += 1;
            true
        });

        assert!(!ran);
        assert_eq!(calls, 0);
        assert!(!event.is_handled());
    }

    #[test]
    fn matching_handler_runs_once_and_sets_handled() {
        for result in [true, false] {
            let mut event: Event = KeyPressedEvent::new(KeyCode::Q, 0).into();
            let mut calls = 0;

            let ran = EventDispatcher::new(&mut event).dispatch::<KeyPressedEvent>(|e| {
                assert_eq!(e.key_code(), KeyCode::Q);
                calls += 1;
                result
            });

            assert!(ran);
            assert_eq!(calls, 1);
            assert_eq!(event.is_handled(), result);
        }
    }

    #[test]
    fn several_dispatch_calls_run_in_order() {
        let mut event: Event = WindowResizeEvent::new(640, 480).into();
        let mut seen = Vec::new();

        let mut dispatcher = EventDispatcher::new(&mut event);
        dispatcher.dispatch::<WindowCloseEvent>(|_| {
            seen.push("close");
            true
        });
        dispatcher.dispatch::<WindowResizeEvent>(|e| {
            seen.push("resize");
            e.width() == 640
        });
        dispatcher.dispatch::<WindowResizeEvent>(|_| {
            seen.push("resize-again");
            false
        });

        assert_eq!(seen, vec!["resize", "resize-again"]);
        assert!(dispatcher.event().is_handled(), "a later false must not reset the latch");
    }
}
