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

use std::fmt;

/// A compiled and linked vertex + fragment program.
///
/// Created through [`RendererApi::create_shader`](crate::renderer::RendererApi::create_shader);
/// the program lives until the value is dropped.
pub trait Shader: fmt::Debug {
    /// Makes this program current for subsequent draw calls.
    fn bind(&self);

    /// Clears the current program.
    fn unbind(&self);

    /// The name the program was created with.
    fn name(&self) -> &str;
}
