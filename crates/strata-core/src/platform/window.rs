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

use crate::event::EventSender;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

/// A trait that abstracts the behavior of a window.
///
/// Any windowing backend (Winit, SDL2, Glfw, etc.) can implement this trait
/// to host an engine [`Application`](crate::application::Application). The
/// native handle is exposed through the `raw-window-handle` traits.
pub trait Window: HasWindowHandle + HasDisplayHandle {
    /// Processes pending platform events, then presents the back buffer.
    ///
    /// Every event produced while polling is sent to the registered sink
    /// before this call returns.
    fn on_update(&mut self);

    /// Registers the single sink that receives this window's events.
    /// A later call replaces the previous sink.
    fn set_event_sink(&mut self, sink: EventSender);

    /// Width of the drawable area, in pixels.
    fn width(&self) -> u32;

    /// Height of the drawable area, in pixels.
    fn height(&self) -> u32;

    /// Returns the display scale factor of the window.
    fn scale_factor(&self) -> f64 {
        1.0
    }

    /// Enables or disables waiting for vertical sync when presenting.
    fn set_vsync(&mut self, enabled: bool);

    /// Returns `true` when presenting waits for vertical sync.
    fn is_vsync(&self) -> bool;
}
