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

//! The debug UI overlay contract.

use crate::event::Event;
use crate::layer::Layer;

/// An immediate-mode UI overlay that brackets every frame's UI hooks.
///
/// The application owns exactly one overlay. It is attached like a layer,
/// is fed every event before the layer stack through
/// [`UiOverlay::capture_event`], and wraps all `on_ui_render` calls of a
/// frame between [`UiOverlay::begin`] and [`UiOverlay::end`].
pub trait UiOverlay: Layer {
    /// Feeds `event` to the UI and returns whether the UI captures it.
    ///
    /// Called for every event, handled or not. A captured event is not
    /// offered to the layer stack.
    fn capture_event(&mut self, event: &Event) -> bool;

    /// Starts a UI pass for a window of `window_size` pixels.
    fn begin(&mut self, window_size: (u32, u32));

    /// The UI context layers draw into during the current pass.
    fn context(&self) -> &egui::Context;

    /// Finishes the pass and paints the result over a window of
    /// `window_size` pixels.
    fn end(&mut self, window_size: (u32, u32));
}
