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
use super::error::RenderError;
use std::fmt;

/// Binds vertex buffers and their attribute layouts to one index buffer.
///
/// Adding a vertex buffer walks its [`BufferLayout`](super::BufferLayout) and
/// enables one attribute per element, continuing the attribute index across
/// buffers.
pub trait VertexArray: fmt::Debug {
    /// Makes this vertex array current.
    fn bind(&self);

    /// Clears the current vertex array.
    fn unbind(&self);

    /// Attaches a vertex buffer and configures its attributes.
    ///
    /// # Errors
    /// Returns [`RenderError::EmptyLayout`] if the buffer has no layout.
    fn add_vertex_buffer(&mut self, buffer: Box<dyn VertexBuffer>) -> Result<(), RenderError>;

    /// Attaches the index buffer used by indexed draws.
    fn set_index_buffer(&mut self, buffer: Box<dyn IndexBuffer>);

    /// The attached vertex buffers, in attachment order.
    fn vertex_buffers(&self) -> &[Box<dyn VertexBuffer>];

    /// The attached index buffer, if any.
    fn index_buffer(&self) -> Option<&dyn IndexBuffer>;
}
