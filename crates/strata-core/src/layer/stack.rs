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

use super::{FrameContext, Layer, LayerContext};
use crate::event::Event;
use std::fmt;
use std::ops::ControlFlow;

/// A handle to a layer owned by a [`LayerStack`], returned when it is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u64);

struct LayerEntry {
    id: LayerId,
    layer: Box<dyn Layer>,
}

/// An ordered set of layers followed by overlays.
///
/// `[ layer 0 .. layer n | overlay 0 .. overlay m ]`
///
/// Layers are inserted at the boundary between the two regions, which then
/// advances; overlays are appended at the end. Updates run front to back and
/// events run back to front, so overlays see input first and draw last.
pub struct LayerStack {
    entries: Vec<LayerEntry>,
    layer_insert_index: usize,
    next_id: u64,
}

impl LayerStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            layer_insert_index: 0,
            next_id: 0,
        }
    }

    /// Inserts `layer` after the existing layers and before every overlay,
    /// then attaches it.
    pub fn push_layer(&mut self, mut layer: Box<dyn Layer>, ctx: &LayerContext<'_>) -> LayerId {
        let id = self.allocate_id();
        log::debug!("Pushing layer '{}' ({id:?}).", layer.name());
        layer.on_attach(ctx);
        self.entries
            .insert(self.layer_insert_index, LayerEntry { id, layer });
        self.layer_insert_index += 1;
        id
    }

    /// Appends `overlay` after everything else, then attaches it.
    pub fn push_overlay(&mut self, mut overlay: Box<dyn Layer>, ctx: &LayerContext<'_>) -> LayerId {
        let id = self.allocate_id();
        log::debug!("Pushing overlay '{}' ({id:?}).", overlay.name());
        overlay.on_attach(ctx);
        self.entries.push(LayerEntry { id, layer: overlay });
        id
    }

    /// Removes the layer `id`, detaches it and hands it back to the caller.
    ///
    /// Returns `None` without detaching anything if `id` is not a layer of
    /// this stack (overlays are only removed by [`LayerStack::pop_overlay`]).
    pub fn pop_layer(&mut self, id: LayerId) -> Option<Box<dyn Layer>> {
        let Some(index) = self.entries[..self.layer_insert_index]
            .iter()
            .position(|entry| entry.id == id)
        else {
            log::debug!("pop_layer: {id:?} is not on the stack, ignoring.");
            return None;
        };
        self.layer_insert_index -= 1;
        Some(self.detach_at(index))
    }

    /// Removes the overlay `id`, detaches it and hands it back to the caller.
    ///
    /// Returns `None` without detaching anything if `id` is not an overlay of
    /// this stack.
    pub fn pop_overlay(&mut self, id: LayerId) -> Option<Box<dyn Layer>> {
        let Some(offset) = self.entries[self.layer_insert_index..]
            .iter()
            .position(|entry| entry.id == id)
        else {
            log::debug!("pop_overlay: {id:?} is not on the stack, ignoring.");
            return None;
        };
        Some(self.detach_at(self.layer_insert_index + offset))
    }

    /// Updates every layer, front to back.
    pub fn update(&mut self, ctx: &FrameContext<'_>) {
        for entry in &mut self.entries {
            entry.layer.on_update(ctx);
        }
    }

    /// Runs every layer's UI hook, front to back.
    pub fn render_ui(&mut self, ui: &egui::Context) {
        for entry in &mut self.entries {
            entry.layer.on_ui_render(ui);
        }
    }

    /// Offers `event` to each layer from the top of the stack down, stopping
    /// after the first one that leaves it handled. Returns the final handled
    /// state.
    ///
    /// The flag is checked after each layer, so an event that arrives already
    /// handled still reaches the topmost layer and goes no further.
    pub fn propagate_event(&mut self, event: &mut Event) -> bool {
        let _ = self.entries.iter_mut().rev().try_for_each(|entry| {
            entry.layer.on_event(event);
            if event.is_handled() {
                log::trace!("{event} handled by '{}'.", entry.layer.name());
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        event.is_handled()
    }

    /// Detaches and drops every layer, top of the stack first.
    pub fn clear(&mut self) {
        while let Some(mut entry) = self.entries.pop() {
            entry.layer.on_detach();
        }
        self.layer_insert_index = 0;
    }

    /// Total number of layers and overlays.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is on the stack.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of regular layers (the overlay region starts after them).
    pub fn layer_count(&self) -> usize {
        self.layer_insert_index
    }

    /// Number of overlays.
    pub fn overlay_count(&self) -> usize {
        self.entries.len() - self.layer_insert_index
    }

    /// Iterates the stack front to back (update order).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (LayerId, &dyn Layer)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.id, entry.layer.as_ref()))
    }

    fn allocate_id(&mut self) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        id
    }

    fn detach_at(&mut self, index: usize) -> Box<dyn Layer> {
        let mut entry = self.entries.remove(index);
        log::debug!("Detaching '{}' ({:?}).", entry.layer.name(), entry.id);
        entry.layer.on_detach();
        entry.layer
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LayerStack {
    fn drop(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("LayerStack dropped with {} entries, detaching.", self.len());
        }
        self.clear();
    }
}

impl fmt::Debug for LayerStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerStack")
            .field(
                "entries",
                &self
                    .entries
                    .iter()
                    .map(|entry| (entry.id, entry.layer.name()))
                    .collect::<Vec<_>>(),
            )
            .field("layer_insert_index", &self.layer_insert_index)
            .finish()
    }
}
