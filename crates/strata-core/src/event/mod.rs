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

//! The engine event model.
//!
//! - [`Event`] and the typed payloads ([`KeyPressedEvent`], [`WindowCloseEvent`], ...)
//!   describe what happened.
//! - [`EventDispatcher`] routes an event to a handler written for its concrete type.
//! - [`EventBus`] is the channel the window pushes platform events into.

mod bus;
mod dispatcher;
mod types;

pub use self::bus::EventBus;
pub use self::dispatcher::EventDispatcher;
pub use self::types::*;

/// The sending half handed to a window so it can deliver events.
pub type EventSender = flume::Sender<Event>;
