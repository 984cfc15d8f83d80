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

//! Everything an application usually needs, in one import.

pub use crate::{Engine, StrataApplication};
pub use strata_core::egui;
pub use strata_core::event::{
    Event, EventCategory, EventDispatcher, EventKind, KeyPressedEvent, KeyReleasedEvent,
    KeyTypedEvent, MouseButtonPressedEvent, MouseButtonReleasedEvent, MouseMovedEvent,
    MouseScrolledEvent, WindowCloseEvent, WindowResizeEvent,
};
pub use strata_core::layer::{FrameContext, Layer, LayerContext, LayerId, Timestep};
pub use strata_core::platform::{Input, KeyCode, MouseButton};
pub use strata_core::renderer::{
    BufferElement, BufferLayout, IndexBuffer, RenderError, RendererApi, Shader, ShaderDataType,
    ShaderError, VertexArray, VertexBuffer,
};
pub use strata_core::{Application, ApplicationConfig};
