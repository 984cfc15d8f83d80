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

use super::{OpenGlIndexBuffer, OpenGlShader, OpenGlVertexArray, OpenGlVertexBuffer};
use glow::HasContext;
use std::sync::Arc;
use strata_core::renderer::{
    GraphicsBackend, IndexBuffer, RenderError, RendererApi, Shader, ShaderError, VertexArray,
    VertexBuffer,
};

/// [`RendererApi`] over an OpenGL 3.3 core context.
pub struct OpenGlRendererApi {
    gl: Arc<glow::Context>,
}

impl OpenGlRendererApi {
    /// Wraps the function table of a context that is current on this thread.
    pub fn new(gl: Arc<glow::Context>) -> Self {
        // SAFETY: plain GL queries on the current context.
        unsafe {
            log::info!(
                "OpenGL renderer: {} ({}), version {}",
                gl.get_parameter_string(glow::RENDERER),
                gl.get_parameter_string(glow::VENDOR),
                gl.get_parameter_string(glow::VERSION)
            );
        }
        Self { gl }
    }

    /// The function table shared with every resource this API creates.
    pub fn gl(&self) -> &Arc<glow::Context> {
        &self.gl
    }
}

impl RendererApi for OpenGlRendererApi {
    fn backend(&self) -> GraphicsBackend {
        GraphicsBackend::OpenGl
    }

    fn set_clear_color(&self, color: [f32; 4]) {
        let [r, g, b, a] = color;
        unsafe { self.gl.clear_color(r, g, b, a) }
    }

    fn clear(&self) {
        unsafe { self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT) }
    }

    fn set_viewport(&self, x: u32, y: u32, width: u32, height: u32) {
        unsafe {
            self.gl
                .viewport(x as i32, y as i32, width as i32, height as i32)
        }
    }

    fn draw_indexed(&self, vertex_array: &dyn VertexArray) {
        let Some(index_buffer) = vertex_array.index_buffer() else {
            log::warn!("draw_indexed on a vertex array without an index buffer, skipping.");
            return;
        };
        vertex_array.bind();
        unsafe {
            self.gl.draw_elements(
                glow::TRIANGLES,
                index_buffer.count() as i32,
                glow::UNSIGNED_INT,
                0,
            )
        }
    }

    fn create_vertex_buffer(&self, vertices: &[f32]) -> Result<Box<dyn VertexBuffer>, RenderError> {
        Ok(Box::new(OpenGlVertexBuffer::new(self.gl.clone(), vertices)?))
    }

    fn create_index_buffer(&self, indices: &[u32]) -> Result<Box<dyn IndexBuffer>, RenderError> {
        Ok(Box::new(OpenGlIndexBuffer::new(self.gl.clone(), indices)?))
    }

    fn create_vertex_array(&self) -> Result<Box<dyn VertexArray>, RenderError> {
        Ok(Box::new(OpenGlVertexArray::new(self.gl.clone())?))
    }

    fn create_shader(
        &self,
        name: &str,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Box<dyn Shader>, ShaderError> {
        Ok(Box::new(OpenGlShader::new(
            self.gl.clone(),
            name,
            vertex_src,
            fragment_src,
        )?))
    }
}
