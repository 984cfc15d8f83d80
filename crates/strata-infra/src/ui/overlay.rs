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

//! The egui overlay layer, painted with `egui_glow`.

use super::EguiInput;
use std::sync::Arc;
use std::time::Instant;
use strata_core::event::{Event, EventCategory};
use strata_core::layer::{FrameContext, Layer, LayerContext};
use strata_core::renderer::RenderError;
use strata_core::ui::UiOverlay;

/// Weight of the newest sample in the smoothed frame time.
const FRAME_TIME_SMOOTHING: f32 = 0.1;

#[derive(Debug, Default, Clone, Copy)]
struct FrameStats {
    last_ms: f32,
    smoothed_ms: f32,
    frame_index: u64,
}

impl FrameStats {
    fn record(&mut self, ctx: &FrameContext<'_>) {
        let ms = ctx.timestep.milliseconds();
        self.smoothed_ms = if self.smoothed_ms == 0.0 {
            ms
        } else {
            self.smoothed_ms + (ms - self.smoothed_ms) * FRAME_TIME_SMOOTHING
        };
        self.last_ms = ms;
        self.frame_index = ctx.frame_index;
    }

    fn fps(&self) -> f32 {
        if self.smoothed_ms > 0.0 {
            1000.0 / self.smoothed_ms
        } else {
            0.0
        }
    }
}

/// The debug UI: an egui context fed from engine events and painted over
/// the frame with OpenGL.
pub struct EguiOverlay {
    ctx: egui::Context,
    painter: egui_glow::Painter,
    input: EguiInput,
    start: Instant,
    show_stats: bool,
    stats: FrameStats,
}

impl EguiOverlay {
    /// Creates the overlay on the GL context `gl`.
    ///
    /// `pixels_per_point` is the window's scale factor; `show_stats` toggles
    /// the frame statistics window.
    pub fn new(
        gl: Arc<glow::Context>,
        pixels_per_point: f32,
        show_stats: bool,
    ) -> Result<Self, RenderError> {
        let painter = egui_glow::Painter::new(gl, "", None, false)
            .map_err(|e| RenderError::BackendError(e.to_string()))?;
        Ok(Self {
            ctx: egui::Context::default(),
            painter,
            input: EguiInput::new(pixels_per_point),
            start: Instant::now(),
            show_stats,
            stats: FrameStats::default(),
        })
    }

    /// Shows or hides the frame statistics window.
    pub fn set_show_stats(&mut self, show: bool) {
        self.show_stats = show;
    }
}

impl Layer for EguiOverlay {
    fn name(&self) -> &str {
        "EguiOverlay"
    }

    fn on_attach(&mut self, ctx: &LayerContext<'_>) {
        self.ctx.set_visuals(egui::Visuals::dark());
        log::info!(
            "Debug UI attached ({}x{}, {} px/pt).",
            ctx.window_size.0,
            ctx.window_size.1,
            self.input.pixels_per_point()
        );
    }

    fn on_detach(&mut self) {
        self.painter.destroy();
        log::info!("Debug UI detached.");
    }

    fn on_update(&mut self, ctx: &FrameContext<'_>) {
        self.stats.record(ctx);
    }

    fn on_ui_render(&mut self, ui: &egui::Context) {
        if !self.show_stats {
            return;
        }
        let stats = self.stats;
        egui::Window::new("Stats")
            .default_pos(egui::pos2(10.0, 10.0))
            .resizable(false)
            .show(ui, |ui| {
                ui.label(format!(
                    "Frame time: {:.3} ms ({:.1} FPS)",
                    stats.smoothed_ms,
                    stats.fps()
                ));
                ui.label(format!("Last frame: {:.3} ms", stats.last_ms));
                ui.label(format!("Frame: {}", stats.frame_index));
            });
    }
}

impl UiOverlay for EguiOverlay {
    fn capture_event(&mut self, event: &Event) -> bool {
        self.input.push(event);
        (event.is_in_category(EventCategory::MOUSE) && self.ctx.wants_pointer_input())
            || (event.is_in_category(EventCategory::KEYBOARD) && self.ctx.wants_keyboard_input())
    }

    fn begin(&mut self, window_size: (u32, u32)) {
        let mut raw_input = self
            .input
            .take_raw_input(window_size, self.start.elapsed().as_secs_f64());
        raw_input.max_texture_side = Some(self.painter.max_texture_side());
        self.ctx.begin_pass(raw_input);
    }

    fn context(&self) -> &egui::Context {
        &self.ctx
    }

    fn end(&mut self, window_size: (u32, u32)) {
        let output = self.ctx.end_pass();
        let primitives = self.ctx.tessellate(output.shapes, output.pixels_per_point);
        self.painter.paint_and_update_textures(
            [window_size.0, window_size.1],
            output.pixels_per_point,
            &primitives,
            &output.textures_delta,
        );
    }
}
