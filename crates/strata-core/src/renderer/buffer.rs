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

//! Buffer abstractions shared by every graphics backend.
//!
//! The layout types ([`ShaderDataType`], [`BufferElement`], [`BufferLayout`])
//! describe how vertex data is packed. The [`VertexBuffer`] and [`IndexBuffer`]
//! traits are realized by the active backend and created through
//! [`RendererApi`](crate::renderer::RendererApi).

use std::fmt;

/// Data types a shader attribute can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderDataType {
    /// A single boolean.
    Bool,
    /// One 32-bit float.
    Float,
    /// Two 32-bit floats.
    Float2,
    /// Three 32-bit floats.
    Float3,
    /// Four 32-bit floats.
    Float4,
    /// One 32-bit signed integer.
    Int,
    /// Two 32-bit signed integers.
    Int2,
    /// Three 32-bit signed integers.
    Int3,
    /// Four 32-bit signed integers.
    Int4,
    /// A 3x3 float matrix.
    Mat3,
    /// A 4x4 float matrix.
    Mat4,
}

/// The scalar type behind a [`ShaderDataType`], used by backends to pick the
/// native attribute type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Boolean components.
    Bool,
    /// 32-bit float components.
    Float,
    /// 32-bit signed integer components.
    Int,
}

impl ShaderDataType {
    /// Every defined data type, in declaration order.
    pub const ALL: [ShaderDataType; 11] = [
        ShaderDataType::Bool,
        ShaderDataType::Float,
        ShaderDataType::Float2,
        ShaderDataType::Float3,
        ShaderDataType::Float4,
        ShaderDataType::Int,
        ShaderDataType::Int2,
        ShaderDataType::Int3,
        ShaderDataType::Int4,
        ShaderDataType::Mat3,
        ShaderDataType::Mat4,
    ];

    /// Size of one value of this type, in bytes.
    pub const fn size(&self) -> u32 {
        match self {
            ShaderDataType::Bool => 1,
            ShaderDataType::Float => 4,
            ShaderDataType::Float2 => 4 * 2,
            ShaderDataType::Float3 => 4 * 3,
            ShaderDataType::Float4 => 4 * 4,
            ShaderDataType::Int => 4,
            ShaderDataType::Int2 => 4 * 2,
            ShaderDataType::Int3 => 4 * 3,
            ShaderDataType::Int4 => 4 * 4,
            ShaderDataType::Mat3 => 4 * 3 * 3,
            ShaderDataType::Mat4 => 4 * 4 * 4,
        }
    }

    /// Number of scalar components in one value of this type.
    pub const fn component_count(&self) -> u32 {
        match self {
            ShaderDataType::Bool => 1,
            ShaderDataType::Float => 1,
            ShaderDataType::Float2 => 2,
            ShaderDataType::Float3 => 3,
            ShaderDataType::Float4 => 4,
            ShaderDataType::Int => 1,
            ShaderDataType::Int2 => 2,
            ShaderDataType::Int3 => 3,
            ShaderDataType::Int4 => 4,
            ShaderDataType::Mat3 => 3 * 3,
            ShaderDataType::Mat4 => 4 * 4,
        }
    }

    /// The scalar type of each component.
    pub const fn scalar_type(&self) -> ScalarType {
        match self {
            ShaderDataType::Bool => ScalarType::Bool,
            ShaderDataType::Float
            | ShaderDataType::Float2
            | ShaderDataType::Float3
            | ShaderDataType::Float4
            | ShaderDataType::Mat3
            | ShaderDataType::Mat4 => ScalarType::Float,
            ShaderDataType::Int
            | ShaderDataType::Int2
            | ShaderDataType::Int3
            | ShaderDataType::Int4 => ScalarType::Int,
        }
    }
}

/// One named attribute inside a [`BufferLayout`].
///
/// Size and component count derive from the data type. The offset is assigned
/// by the layout that owns the element and is zero until then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferElement {
    data_type: ShaderDataType,
    name: String,
    size: u32,
    offset: u32,
    component_count: u32,
    normalized: bool,
}

impl BufferElement {
    /// Creates a non-normalized element of the given type.
    pub fn new(data_type: ShaderDataType, name: impl Into<String>) -> Self {
        let element = Self {
            data_type,
            name: name.into(),
            size: data_type.size(),
            offset: 0,
            component_count: data_type.component_count(),
            normalized: false,
        };
        log::trace!("{element}");
        element
    }

    /// Marks the element as normalized: integer data is mapped to `[0, 1]` or
    /// `[-1, 1]` when the shader reads it.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalized = true;
        self
    }

    /// The element's data type.
    pub fn data_type(&self) -> ShaderDataType {
        self.data_type
    }

    /// The attribute name, as the shader declares it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Byte offset from the start of a vertex.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Number of scalar components.
    pub fn component_count(&self) -> u32 {
        self.component_count
    }

    /// Whether the data is normalized when read.
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }
}

impl fmt::Display for BufferElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Buffer Element] Name: {}, Offset: {}, Size: {}, Components: {}, Normalized: {}",
            self.name, self.offset, self.size, self.component_count, self.normalized
        )
    }
}

/// The ordered attributes of one vertex, with computed offsets and stride.
///
/// ```
/// use strata_core::renderer::{BufferElement, BufferLayout, ShaderDataType};
///
/// let layout = BufferLayout::new([
///     BufferElement::new(ShaderDataType::Float3, "a_Position"),
///     BufferElement::new(ShaderDataType::Float4, "a_Color"),
///     BufferElement::new(ShaderDataType::Float3, "a_Normal"),
/// ]);
/// let offsets: Vec<u32> = layout.iter().map(|e| e.offset()).collect();
/// assert_eq!(offsets, vec![0, 12, 28]);
/// assert_eq!(layout.stride(), 40);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferLayout {
    elements: Vec<BufferElement>,
    stride: u32,
}

impl BufferLayout {
    /// Builds a layout from elements in attribute order.
    pub fn new(elements: impl IntoIterator<Item = BufferElement>) -> Self {
        let mut layout = Self {
            elements: elements.into_iter().collect(),
            stride: 0,
        };
        layout.calculate_offsets_and_stride();
        layout
    }

    /// Replaces every element and recomputes offsets and stride from scratch.
    pub fn set_elements(&mut self, elements: impl IntoIterator<Item = BufferElement>) {
        self.elements = elements.into_iter().collect();
        self.calculate_offsets_and_stride();
    }

    /// Total size of one vertex, in bytes.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// The elements in attribute order.
    pub fn elements(&self) -> &[BufferElement] {
        &self.elements
    }

    /// Iterates the elements in attribute order.
    pub fn iter(&self) -> std::slice::Iter<'_, BufferElement> {
        self.elements.iter()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when the layout has no element.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn calculate_offsets_and_stride(&mut self) {
        let mut offset = 0;
        for element in &mut self.elements {
            element.offset = offset;
            offset += element.size;
        }
        self.stride = offset;
    }
}

impl FromIterator<BufferElement> for BufferLayout {
    fn from_iter<I: IntoIterator<Item = BufferElement>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a BufferLayout {
    type Item = &'a BufferElement;
    type IntoIter = std::slice::Iter<'a, BufferElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// A block of vertex data uploaded to the GPU.
pub trait VertexBuffer: fmt::Debug {
    /// Makes this buffer current in the active graphics context.
    fn bind(&self);

    /// Detaches this buffer from the active graphics context.
    fn unbind(&self);

    /// The layout describing one vertex in this buffer.
    fn layout(&self) -> &BufferLayout;

    /// Sets the layout describing one vertex in this buffer.
    fn set_layout(&mut self, layout: BufferLayout);
}

/// A block of `u32` indices uploaded to the GPU.
pub trait IndexBuffer: fmt::Debug {
    /// Makes this buffer current in the active graphics context.
    fn bind(&self);

    /// Detaches this buffer from the active graphics context.
    fn unbind(&self);

    /// Number of indices in the buffer.
    fn count(&self) -> u32;
}
