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

use glow::HasContext;
use std::fmt;
use std::sync::Arc;
use strata_core::renderer::{BufferLayout, IndexBuffer, RenderError, VertexBuffer};

/// Binding point used to fill every new buffer.
///
/// The element array binding is part of the bound vertex array's state, so
/// uploading indices through it would replace another vertex array's index
/// buffer. The array buffer binding is global.
const UPLOAD_TARGET: u32 = glow::ARRAY_BUFFER;

fn create_buffer(
    gl: &glow::Context,
    bytes: &[u8],
    resource: &'static str,
) -> Result<glow::Buffer, RenderError> {
    // SAFETY: plain GL calls on the current context; `bytes` is copied by the driver.
    unsafe {
        let id = gl
            .create_buffer()
            .map_err(|details| RenderError::ResourceCreation { resource, details })?;
        gl.bind_buffer(UPLOAD_TARGET, Some(id));
        gl.buffer_data_u8_slice(UPLOAD_TARGET, bytes, glow::STATIC_DRAW);
        gl.bind_buffer(UPLOAD_TARGET, None);
        Ok(id)
    }
}

/// A GL array buffer holding interleaved `f32` vertex data.
pub struct OpenGlVertexBuffer {
    gl: Arc<glow::Context>,
    id: glow::Buffer,
    layout: BufferLayout,
}

impl OpenGlVertexBuffer {
    /// Uploads `vertices` into a new static buffer.
    pub fn new(gl: Arc<glow::Context>, vertices: &[f32]) -> Result<Self, RenderError> {
        let id = create_buffer(&gl, bytemuck::cast_slice(vertices), "vertex buffer")?;
        log::trace!("Created vertex buffer {id:?} ({} floats).", vertices.len());
        Ok(Self {
            gl,
            id,
            layout: BufferLayout::default(),
        })
    }
}

impl VertexBuffer for OpenGlVertexBuffer {
    fn bind(&self) {
        unsafe { self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.id)) }
    }

    fn unbind(&self) {
        unsafe { self.gl.bind_buffer(glow::ARRAY_BUFFER, None) }
    }

    fn layout(&self) -> &BufferLayout {
        &self.layout
    }

    fn set_layout(&mut self, layout: BufferLayout) {
        self.layout = layout;
    }
}

impl Drop for OpenGlVertexBuffer {
    fn drop(&mut self) {
        unsafe { self.gl.delete_buffer(self.id) }
    }
}

impl fmt::Debug for OpenGlVertexBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenGlVertexBuffer")
            .field("id", &self.id)
            .field("stride", &self.layout.stride())
            .finish()
    }
}

/// A GL element buffer of `u32` indices.
pub struct OpenGlIndexBuffer {
    gl: Arc<glow::Context>,
    id: glow::Buffer,
    count: u32,
}

impl OpenGlIndexBuffer {
    /// Uploads `indices` into a new static buffer.
    pub fn new(gl: Arc<glow::Context>, indices: &[u32]) -> Result<Self, RenderError> {
        let count = u32::try_from(indices.len()).map_err(|_| RenderError::ResourceCreation {
            resource: "index buffer",
            details: format!("{} indices exceed u32::MAX", indices.len()),
        })?;
        let id = create_buffer(&gl, bytemuck::cast_slice(indices), "index buffer")?;
        log::trace!("Created index buffer {id:?} ({count} indices).");
        Ok(Self { gl, id, count })
    }
}

impl IndexBuffer for OpenGlIndexBuffer {
    fn bind(&self) {
        unsafe { self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.id)) }
    }

    fn unbind(&self) {
        unsafe { self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None) }
    }

    fn count(&self) -> u32 {
        self.count
    }
}

impl Drop for OpenGlIndexBuffer {
    fn drop(&mut self) {
        unsafe { self.gl.delete_buffer(self.id) }
    }
}

impl fmt::Debug for OpenGlIndexBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenGlIndexBuffer")
            .field("id", &self.id)
            .field("count", &self.count)
            .finish()
    }
}
