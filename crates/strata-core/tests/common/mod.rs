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

//! In-memory collaborators shared by the integration tests.

#![allow(dead_code)]

use raw_window_handle::{
    DisplayHandle, HandleError, HasDisplayHandle, HasWindowHandle, WindowHandle,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use strata_core::event::{Event, EventCategory, EventSender, WindowResizeEvent};
use strata_core::layer::{FrameContext, Layer, LayerContext};
use strata_core::renderer::{
    BufferLayout, GraphicsBackend, IndexBuffer, RenderError, RendererApi, Shader, ShaderError,
    VertexArray, VertexBuffer,
};
use strata_core::ui::UiOverlay;

/// A shared, append-only trace of what the collaborators observed.
pub type Journal = Rc<RefCell<Vec<String>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn entries(journal: &Journal) -> Vec<String> {
    journal.borrow().clone()
}

pub fn record(journal: &Journal, entry: impl Into<String>) {
    journal.borrow_mut().push(entry.into());
}

// --- Window ---

/// A window that replays one scripted batch of events per `on_update`.
pub struct MockWindow {
    width: u32,
    height: u32,
    vsync: bool,
    sink: Option<EventSender>,
    script: VecDeque<Vec<Event>>,
    journal: Journal,
}

impl MockWindow {
    pub fn new(width: u32, height: u32, journal: &Journal) -> Self {
        Self {
            width,
            height,
            vsync: false,
            sink: None,
            script: VecDeque::new(),
            journal: journal.clone(),
        }
    }

    /// Queues the events delivered by the next unconsumed poll.
    pub fn then_emit(mut self, events: Vec<Event>) -> Self {
        self.script.push_back(events);
        self
    }
}

impl Drop for MockWindow {
    fn drop(&mut self) {
        record(&self.journal, "window dropped");
    }
}

impl strata_core::platform::Window for MockWindow {
    fn on_update(&mut self) {
        record(&self.journal, "window update");
        let batch = self.script.pop_front().unwrap_or_default();
        for event in batch {
            if let Some(resize) = event.downcast::<WindowResizeEvent>() {
                self.width = resize.width();
                self.height = resize.height();
            }
            if let Some(sink) = &self.sink {
                sink.send(event).unwrap();
            }
        }
    }

    fn set_event_sink(&mut self, sink: EventSender) {
        self.sink = Some(sink);
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_vsync(&mut self, enabled: bool) {
        self.vsync = enabled;
    }

    fn is_vsync(&self) -> bool {
        self.vsync
    }
}

impl HasWindowHandle for MockWindow {
    fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
        Err(HandleError::Unavailable)
    }
}

impl HasDisplayHandle for MockWindow {
    fn display_handle(&self) -> Result<DisplayHandle<'_>, HandleError> {
        Err(HandleError::Unavailable)
    }
}

// --- Renderer ---

#[derive(Debug, Default)]
pub struct MockVertexBuffer {
    pub vertices: Vec<f32>,
    layout: BufferLayout,
}

impl VertexBuffer for MockVertexBuffer {
    fn bind(&self) {}
    fn unbind(&self) {}
    fn layout(&self) -> &BufferLayout {
        &self.layout
    }
    fn set_layout(&mut self, layout: BufferLayout) {
        self.layout = layout;
    }
}

#[derive(Debug)]
pub struct MockIndexBuffer {
    count: u32,
}

impl IndexBuffer for MockIndexBuffer {
    fn bind(&self) {}
    fn unbind(&self) {}
    fn count(&self) -> u32 {
        self.count
    }
}

#[derive(Debug, Default)]
pub struct MockVertexArray {
    vertex_buffers: Vec<Box<dyn VertexBuffer>>,
    index_buffer: Option<Box<dyn IndexBuffer>>,
}

impl VertexArray for MockVertexArray {
    fn bind(&self) {}
    fn unbind(&self) {}

    fn add_vertex_buffer(&mut self, buffer: Box<dyn VertexBuffer>) -> Result<(), RenderError> {
        if buffer.layout().is_empty() {
            return Err(RenderError::EmptyLayout);
        }
        self.vertex_buffers.push(buffer);
        Ok(())
    }

    fn set_index_buffer(&mut self, buffer: Box<dyn IndexBuffer>) {
        self.index_buffer = Some(buffer);
    }

    fn vertex_buffers(&self) -> &[Box<dyn VertexBuffer>] {
        &self.vertex_buffers
    }

    fn index_buffer(&self) -> Option<&dyn IndexBuffer> {
        self.index_buffer.as_deref()
    }
}

#[derive(Debug)]
pub struct MockShader {
    name: String,
}

impl Shader for MockShader {
    fn bind(&self) {}
    fn unbind(&self) {}
    fn name(&self) -> &str {
        &self.name
    }
}

/// A renderer that journals its state-changing calls.
pub struct MockRenderer {
    journal: Journal,
}

impl MockRenderer {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl RendererApi for MockRenderer {
    fn backend(&self) -> GraphicsBackend {
        GraphicsBackend::OpenGl
    }

    fn set_clear_color(&self, color: [f32; 4]) {
        record(&self.journal, format!("clear color {color:?}"));
    }

    fn clear(&self) {
        record(&self.journal, "clear");
    }

    fn set_viewport(&self, x: u32, y: u32, width: u32, height: u32) {
        record(&self.journal, format!("viewport {x} {y} {width} {height}"));
    }

    fn draw_indexed(&self, vertex_array: &dyn VertexArray) {
        let count = vertex_array.index_buffer().map_or(0, |ib| ib.count());
        record(&self.journal, format!("draw {count}"));
    }

    fn create_vertex_buffer(&self, vertices: &[f32]) -> Result<Box<dyn VertexBuffer>, RenderError> {
        Ok(Box::new(MockVertexBuffer {
            vertices: vertices.to_vec(),
            layout: BufferLayout::default(),
        }))
    }

    fn create_index_buffer(&self, indices: &[u32]) -> Result<Box<dyn IndexBuffer>, RenderError> {
        Ok(Box::new(MockIndexBuffer {
            count: indices.len() as u32,
        }))
    }

    fn create_vertex_array(&self) -> Result<Box<dyn VertexArray>, RenderError> {
        Ok(Box::new(MockVertexArray::default()))
    }

    fn create_shader(
        &self,
        name: &str,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Box<dyn Shader>, ShaderError> {
        if vertex_src.is_empty() || fragment_src.is_empty() {
            return Err(ShaderError::CreationFailed {
                name: name.to_owned(),
                details: "empty source".to_owned(),
            });
        }
        Ok(Box::new(MockShader {
            name: name.to_owned(),
        }))
    }
}

// --- Layers ---

/// A layer that journals every hook as `"<name> <hook>"`.
pub struct RecordingLayer {
    name: String,
    journal: Journal,
    handles_events: bool,
}

impl RecordingLayer {
    pub fn new(name: &str, journal: &Journal) -> Self {
        Self {
            name: name.to_owned(),
            journal: journal.clone(),
            handles_events: false,
        }
    }

    /// Makes the layer mark every event it receives as handled.
    pub fn handling(mut self) -> Self {
        self.handles_events = true;
        self
    }
}

impl Layer for RecordingLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_attach(&mut self, _ctx: &LayerContext<'_>) {
        record(&self.journal, format!("{} attach", self.name));
    }

    fn on_detach(&mut self) {
        record(&self.journal, format!("{} detach", self.name));
    }

    fn on_update(&mut self, _ctx: &FrameContext<'_>) {
        record(&self.journal, format!("{} update", self.name));
    }

    fn on_event(&mut self, event: &mut Event) {
        record(&self.journal, format!("{} event {:?}", self.name, event.kind()));
        if self.handles_events {
            event.mark_handled();
        }
    }

    fn on_ui_render(&mut self, _ui: &egui::Context) {
        record(&self.journal, format!("{} ui", self.name));
    }
}

// --- Overlay ---

/// A debug overlay that runs real egui passes without painting anything.
pub struct HeadlessUi {
    ctx: egui::Context,
    journal: Journal,
    captures: EventCategory,
    panics_on_attach: bool,
}

impl HeadlessUi {
    pub fn new(journal: &Journal) -> Self {
        Self {
            ctx: egui::Context::default(),
            journal: journal.clone(),
            captures: EventCategory::EMPTY,
            panics_on_attach: false,
        }
    }

    /// Captures every event in `category`, as a UI under the cursor would.
    pub fn capturing(mut self, category: EventCategory) -> Self {
        self.captures = category;
        self
    }

    pub fn panicking_on_attach(mut self) -> Self {
        self.panics_on_attach = true;
        self
    }
}

impl Layer for HeadlessUi {
    fn name(&self) -> &str {
        "ui"
    }

    fn on_attach(&mut self, _ctx: &LayerContext<'_>) {
        assert!(!self.panics_on_attach, "ui attach failed");
        record(&self.journal, "ui attach");
    }

    fn on_detach(&mut self) {
        record(&self.journal, "ui detach");
    }

    fn on_update(&mut self, _ctx: &FrameContext<'_>) {
        record(&self.journal, "ui update");
    }

    fn on_ui_render(&mut self, _ui: &egui::Context) {
        record(&self.journal, "ui ui");
    }
}

impl UiOverlay for HeadlessUi {
    fn capture_event(&mut self, event: &Event) -> bool {
        record(&self.journal, format!("ui event {:?}", event.kind()));
        event.is_in_category(self.captures)
    }

    fn begin(&mut self, window_size: (u32, u32)) {
        record(&self.journal, format!("ui begin {}x{}", window_size.0, window_size.1));
        let screen = egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(window_size.0 as f32, window_size.1 as f32),
        );
        self.ctx.begin_pass(egui::RawInput {
            screen_rect: Some(screen),
            ..Default::default()
        });
    }

    fn context(&self) -> &egui::Context {
        &self.ctx
    }

    fn end(&mut self, window_size: (u32, u32)) {
        let _ = self.ctx.end_pass();
        record(&self.journal, format!("ui end {}x{}", window_size.0, window_size.1));
    }
}
