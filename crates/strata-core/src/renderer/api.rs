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

use super::buffer::{IndexBuffer, VertexBuffer};
use super::error::{RenderError, ShaderError};
use super::shader::Shader;
use super::vertex_array::VertexArray;
use std::fmt;

/// The graphics backends the engine can be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphicsBackend {
    /// OpenGL 3.3 core profile.
    OpenGl,
}

impl fmt::Display for GraphicsBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicsBackend::OpenGl => write!(f, "OpenGL"),
        }
    }
}

/// The entry point to the active graphics backend.
///
/// Exactly one implementation is compiled into an engine build; it is chosen
/// with a cargo feature of the infrastructure crate. Every `create_*` call
/// returns a new heap-allocated resource owned by the caller; dropping it
/// releases the GPU object.
pub trait RendererApi {
    /// The backend behind this API.
    fn backend(&self) -> GraphicsBackend;

    /// Sets the color used by [`RendererApi::clear`].
    fn set_clear_color(&self, color: [f32; 4]);

    /// Clears the color and depth attachments of the current framebuffer.
    fn clear(&self);

    /// Sets the rectangle of the framebuffer that draws are mapped to.
    fn set_viewport(&self, x: u32, y: u32, width: u32, height: u32);

    /// Draws the triangles described by the bound index buffer of `vertex_array`.
    ///
    /// A vertex array without an index buffer draws nothing.
    fn draw_indexed(&self, vertex_array: &dyn VertexArray);

    /// Uploads `vertices` into a new vertex buffer with an empty layout.
    fn create_vertex_buffer(&self, vertices: &[f32]) -> Result<Box<dyn VertexBuffer>, RenderError>;

    /// Uploads `indices` into a new index buffer.
    fn create_index_buffer(&self, indices: &[u32]) -> Result<Box<dyn IndexBuffer>, RenderError>;

    /// Creates an empty vertex array.
    fn create_vertex_array(&self) -> Result<Box<dyn VertexArray>, RenderError>;

    /// Compiles and links a program from vertex and fragment source text.
    fn create_shader(
        &self,
        name: &str,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Box<dyn Shader>, ShaderError>;
}
