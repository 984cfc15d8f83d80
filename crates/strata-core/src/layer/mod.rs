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

//! Layers: the units of per-frame behavior composed by the application.
//!
//! A [`Layer`] receives lifecycle hooks from the [`LayerStack`] that owns it.
//! Regular layers update before overlays; events travel the other way, from
//! the most recently pushed overlay down to the first layer, and stop at the
//! first layer that marks them handled.

mod stack;

pub use self::stack::{LayerId, LayerStack};

use crate::event::Event;
use crate::platform::input::InputState;
use crate::renderer::RendererApi;
use std::time::Duration;

/// Elapsed time between two consecutive frames.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Timestep(f32);

impl Timestep {
    /// Creates a timestep from a number of seconds.
    pub fn from_seconds(seconds: f32) -> Self {
        Self(seconds)
    }

    /// The timestep in seconds.
    pub fn seconds(&self) -> f32 {
        self.0
    }

    /// The timestep in milliseconds.
    pub fn milliseconds(&self) -> f32 {
        self.0 * 1000.0
    }
}

impl From<Duration> for Timestep {
    fn from(duration: Duration) -> Self {
        Self(duration.as_secs_f32())
    }
}

/// What a layer can reach while it is being attached.
pub struct LayerContext<'a> {
    /// The active graphics backend, for creating GPU resources.
    pub renderer: &'a dyn RendererApi,
    /// The drawable size of the window, in pixels.
    pub window_size: (u32, u32),
}

/// What a layer can reach during its per-frame update.
pub struct FrameContext<'a> {
    /// The active graphics backend, for issuing draw calls.
    pub renderer: &'a dyn RendererApi,
    /// Keyboard and mouse state as of the end of the previous poll.
    pub input: &'a InputState,
    /// Time since the previous frame.
    pub timestep: Timestep,
    /// The drawable size of the window, in pixels.
    pub window_size: (u32, u32),
    /// Zero-based index of the frame being produced.
    pub frame_index: u64,
}

/// A unit of per-frame behavior with attach/detach/update/event/UI hooks.
///
/// Every hook has an empty default so a layer only implements what it uses.
pub trait Layer {
    /// A human readable name, used in logs.
    fn name(&self) -> &str;

    /// Called exactly once when the layer is pushed, before any update.
    fn on_attach(&mut self, _ctx: &LayerContext<'_>) {}

    /// Called exactly once when the layer is popped or its stack is torn down.
    fn on_detach(&mut self) {}

    /// Called once per frame while attached.
    fn on_update(&mut self, _ctx: &FrameContext<'_>) {}

    /// Called for each event that reaches this layer. Call
    /// [`Event::mark_handled`] to stop the event from reaching lower layers.
    fn on_event(&mut self, _event: &mut Event) {}

    /// Called once per frame, after every layer's `on_update`, between the
    /// debug UI's begin and end.
    fn on_ui_render(&mut self, _ui: &egui::Context) {}
}
