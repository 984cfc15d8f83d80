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

/// Manages a generic event channel.
///
/// The window pushes platform events into the sender while it polls; the
/// application drains the receiver right after, on the same thread, so every
/// event of one poll is dispatched before the next frame starts.
#[derive(Debug)]
pub struct EventBus<T: Send + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Send + 'static> EventBus<T> {
    /// Creates a new EventBus with an unbounded channel for a specific event type.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        log::info!("EventBus initialized.");
        Self { sender, receiver }
    }

    /// Returns a clone of the sender end of the channel.
    pub fn sender(&self) -> flume::Sender<T> {
        self.sender.clone()
    }

    /// Takes every event queued so far, in send order, without blocking.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }

    /// Returns `true` when no event is waiting.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl<T: Send + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Event, KeyTypedEvent, WindowCloseEvent, WindowResizeEvent};

    #[test]
    fn event_bus_starts_empty() {
        let bus = EventBus::<Event>::new();
        assert!(bus.is_empty());
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn drain_preserves_send_order() {
        let bus = EventBus::<Event>::new();
        let sender = bus.sender();

        let first: Event = WindowResizeEvent::new(1, 1).into();
        let second: Event = KeyTypedEvent::new('k').into();
        let third: Event = WindowCloseEvent.into();

        sender.send(first.clone()).expect("Send 1 should succeed");
        sender.send(second.clone()).expect("Send 2 should succeed");
        sender.send(third.clone()).expect("Send 3 should succeed");

        assert_eq!(bus.drain(), vec![first, second, third]);
        assert!(bus.is_empty());
    }

    #[test]
    fn send_error_on_receiver_drop() {
        let bus = EventBus::<Event>::new();
        let sender = bus.sender();

        drop(bus);

        match sender.send(WindowCloseEvent.into()) {
            Err(flume::SendError(_)) => { /* This is the expected outcome */ }
            Ok(()) => panic!("Send unexpectedly succeeded after receiver drop"),
        }
    }
}
