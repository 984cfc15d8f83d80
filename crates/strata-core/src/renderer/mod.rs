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

//! Provides the public, backend-agnostic rendering contracts.
//!
//! This module defines the 'what' of rendering: buffer layouts and the
//! [`RendererApi`] through which buffers, vertex arrays and shaders are
//! created. The 'how' lives in a concrete backend of `strata-infra` that
//! implements these traits.

mod api;
mod buffer;
pub mod error;
mod shader;
mod vertex_array;

pub use self::api::{GraphicsBackend, RendererApi};
pub use self::buffer::{
    BufferElement, BufferLayout, IndexBuffer, ScalarType, ShaderDataType, VertexBuffer,
};
pub use self::error::{RenderError, ShaderError, ShaderStage};
pub use self::shader::Shader;
pub use self::vertex_array::VertexArray;
