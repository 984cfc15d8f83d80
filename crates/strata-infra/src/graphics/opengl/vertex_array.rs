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
use strata_core::renderer::{
    BufferElement, IndexBuffer, RenderError, ScalarType, ShaderDataType, VertexArray,
    VertexBuffer,
};

/// The GL component type of a scalar type, as accepted by
/// `glVertexAttribPointer`. Booleans are one byte each.
pub(crate) fn gl_scalar_type(scalar: ScalarType) -> u32 {
    match scalar {
        ScalarType::Bool => glow::UNSIGNED_BYTE,
        ScalarType::Float => glow::FLOAT,
        ScalarType::Int => glow::INT,
    }
}

/// One `glVertexAttribPointer` call: components and byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AttributeSlot {
    components: i32,
    offset: i32,
}

/// The attribute slots an element occupies. Matrices take one slot per
/// column since a single attribute holds at most four components.
fn attribute_slots(element: &BufferElement) -> Vec<AttributeSlot> {
    let columns = match element.data_type() {
        ShaderDataType::Mat3 => 3,
        ShaderDataType::Mat4 => 4,
        _ => 1,
    };
    let components = element.component_count() / columns;
    let column_size = element.size() / columns;
    (0..columns)
        .map(|column| AttributeSlot {
            components: components as i32,
            offset: (element.offset() + column * column_size) as i32,
        })
        .collect()
}

/// A GL vertex array object binding vertex buffers to an index buffer.
pub struct OpenGlVertexArray {
    gl: Arc<glow::Context>,
    id: glow::VertexArray,
    vertex_buffers: Vec<Box<dyn VertexBuffer>>,
    index_buffer: Option<Box<dyn IndexBuffer>>,
    next_attribute: u32,
}

impl OpenGlVertexArray {
    /// Creates an empty vertex array object.
    pub fn new(gl: Arc<glow::Context>) -> Result<Self, RenderError> {
        // SAFETY: plain GL call on the current context.
        let id = unsafe { gl.create_vertex_array() }.map_err(|details| {
            RenderError::ResourceCreation {
                resource: "vertex array",
                details,
            }
        })?;
        Ok(Self {
            gl,
            id,
            vertex_buffers: Vec::new(),
            index_buffer: None,
            next_attribute: 0,
        })
    }
}

impl VertexArray for OpenGlVertexArray {
    fn bind(&self) {
        unsafe { self.gl.bind_vertex_array(Some(self.id)) }
    }

    fn unbind(&self) {
        unsafe { self.gl.bind_vertex_array(None) }
    }

    fn add_vertex_buffer(&mut self, buffer: Box<dyn VertexBuffer>) -> Result<(), RenderError> {
        let layout = buffer.layout();
        if layout.is_empty() {
            return Err(RenderError::EmptyLayout);
        }

        self.bind();
        buffer.bind();
        let stride = layout.stride() as i32;
        for element in layout {
            let gl_type = gl_scalar_type(element.data_type().scalar_type());
            for slot in attribute_slots(element) {
                let index = self.next_attribute;
                // SAFETY: the vertex array and its source buffer are bound above,
                // offsets stay inside the stride computed by the layout.
                unsafe {
                    self.gl.enable_vertex_attrib_array(index);
                    match element.data_type().scalar_type() {
                        ScalarType::Int => self.gl.vertex_attrib_pointer_i32(
                            index,
                            slot.components,
                            gl_type,
                            stride,
                            slot.offset,
                        ),
                        ScalarType::Float | ScalarType::Bool => self.gl.vertex_attrib_pointer_f32(
                            index,
                            slot.components,
                            gl_type,
                            element.is_normalized(),
                            stride,
                            slot.offset,
                        ),
                    }
                }
                self.next_attribute += 1;
            }
        }
        log::trace!(
            "Vertex array {:?}: {} attributes after adding a buffer of stride {stride}.",
            self.id,
            self.next_attribute
        );

        self.vertex_buffers.push(buffer);
        Ok(())
    }

    fn set_index_buffer(&mut self, buffer: Box<dyn IndexBuffer>) {
        self.bind();
        buffer.bind();
        self.index_buffer = Some(buffer);
    }

    fn vertex_buffers(&self) -> &[Box<dyn VertexBuffer>] {
        &self.vertex_buffers
    }

    fn index_buffer(&self) -> Option<&dyn IndexBuffer> {
        self.index_buffer.as_deref()
    }
}

impl Drop for OpenGlVertexArray {
    fn drop(&mut self) {
        unsafe { self.gl.delete_vertex_array(self.id) }
    }
}

impl fmt::Debug for OpenGlVertexArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenGlVertexArray")
            .field("id", &self.id)
            .field("vertex_buffers", &self.vertex_buffers)
            .field("index_buffer", &self.index_buffer)
            .finish()
    }
}
