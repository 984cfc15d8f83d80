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

//! The OpenGL 3.3 core backend, built on `glow`.
//!
//! Every resource keeps a shared handle to the `glow` context and deletes its
//! GL object on drop.

mod api;
mod buffer;
mod shader;
mod vertex_array;

pub use self::api::OpenGlRendererApi;
pub use self::buffer::{OpenGlIndexBuffer, OpenGlVertexBuffer};
pub use self::shader::OpenGlShader;
pub use self::vertex_array::OpenGlVertexArray;
