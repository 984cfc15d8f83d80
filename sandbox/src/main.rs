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

// Strata Engine Sandbox
// Main binary for testing and demos

use std::path::Path;

use anyhow::{Context, Result};
use strata_sdk::prelude::*;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 3],
    color: [f32; 4],
}

const VERTICES: &[Vertex] = &[
    Vertex {
        position: [-0.5, -0.5, 0.0],
        color: [0.0, 0.0, 0.9, 1.0],
    },
    Vertex {
        position: [0.5, -0.5, 0.0],
        color: [0.0, 0.0, 1.0, 1.0],
    },
    Vertex {
        position: [0.0, 0.5, 0.0],
        color: [1.0, 1.0, 0.9, 1.0],
    },
];

const INDICES: &[u32] = &[0, 1, 2];

const VERTEX_SHADER: &str = r#"
    #version 330 core

    layout(location = 0) in vec3 a_Position;
    layout(location = 1) in vec4 a_Color;

    out vec4 v_Color;

    void main() {
        v_Color = a_Color;
        gl_Position = vec4(a_Position, 1.0);
    }
"#;

const FRAGMENT_SHADER: &str = r#"
    #version 330 core

    layout(location = 0) out vec4 color;

    in vec4 v_Color;

    void main() {
        color = v_Color;
    }
"#;

/// Draws one colored triangle every frame.
struct TriangleLayer {
    vertex_array: Box<dyn VertexArray>,
    shader: Box<dyn Shader>,
}

impl TriangleLayer {
    fn new(renderer: &dyn RendererApi) -> Result<Self, RenderError> {
        let mut vertex_buffer = renderer.create_vertex_buffer(bytemuck::cast_slice(VERTICES))?;
        vertex_buffer.set_layout(BufferLayout::new([
            BufferElement::new(ShaderDataType::Float3, "a_Position"),
            BufferElement::new(ShaderDataType::Float4, "a_Color").normalized(),
        ]));

        let mut vertex_array = renderer.create_vertex_array()?;
        vertex_array.add_vertex_buffer(vertex_buffer)?;
        vertex_array.set_index_buffer(renderer.create_index_buffer(INDICES)?);

        // Compile and link failures surface as `RenderError::Shader`.
        let shader = renderer.create_shader("triangle", VERTEX_SHADER, FRAGMENT_SHADER)?;
        Ok(Self {
            vertex_array,
            shader,
        })
    }
}

impl Layer for TriangleLayer {
    fn name(&self) -> &str {
        "Triangle"
    }

    fn on_attach(&mut self, _ctx: &LayerContext<'_>) {
        log::info!("Triangle ready, shader '{}'.", self.shader.name());
    }

    fn on_update(&mut self, ctx: &FrameContext<'_>) {
        self.shader.bind();
        ctx.renderer.draw_indexed(self.vertex_array.as_ref());
    }
}

/// Logs input and shows the live input state in a small window.
#[derive(Default)]
struct InputLogLayer {
    cursor: (f32, f32),
    last_key: Option<KeyCode>,
    typed: String,
}

impl Layer for InputLogLayer {
    fn name(&self) -> &str {
        "InputLog"
    }

    fn on_update(&mut self, ctx: &FrameContext<'_>) {
        self.cursor = ctx.input.mouse_position();
        if ctx.input.is_key_pressed(KeyCode::TAB) {
            log::trace!("Tab key is held.");
        }
    }

    fn on_event(&mut self, event: &mut Event) {
        let mut dispatcher = EventDispatcher::new(event);
        dispatcher.dispatch::<KeyPressedEvent>(|e| {
            log::debug!("{e}");
            self.last_key = Some(e.key_code());
            false
        });
        dispatcher.dispatch::<KeyTypedEvent>(|e| {
            self.typed.push(e.character());
            if self.typed.chars().count() > 32 {
                self.typed.remove(0);
            }
            false
        });
        dispatcher.dispatch::<MouseButtonPressedEvent>(|e| {
            log::debug!("{e}");
            false
        });
    }

    fn on_ui_render(&mut self, ui: &egui::Context) {
        egui::Window::new("Input")
            .default_pos(egui::pos2(10.0, 120.0))
            .show(ui, |ui| {
                ui.label(format!("Cursor: {:.0}, {:.0}", self.cursor.0, self.cursor.1));
                match self.last_key {
                    Some(key) => ui.label(format!("Last key: {key}")),
                    None => ui.label("Last key: -"),
                };
                ui.label(format!("Typed: {}", self.typed));
            });
    }
}

fn load_config() -> Result<ApplicationConfig> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "sandbox.json".to_owned());
    if !Path::new(&path).exists() {
        log::info!("No configuration at '{path}', using defaults.");
        return Ok(ApplicationConfig::default());
    }
    ApplicationConfig::from_file(&path).with_context(|| format!("loading '{path}'"))
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    Engine::run(config, |app| {
        let triangle = TriangleLayer::new(app.renderer())?;
        app.push_layer(triangle);
        app.push_overlay(InputLogLayer::default());
        Ok(())
    })
}
