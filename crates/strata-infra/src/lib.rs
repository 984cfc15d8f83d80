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

//! # Strata Infra
//!
//! Concrete implementations of the contracts declared by `strata-core`:
//!
//! - [`platform`]: winit input translation and the winit + glutin window.
//! - [`graphics`]: the OpenGL renderer backend.
//! - [`ui`]: the egui debug overlay, painted with `egui_glow`.

#![warn(missing_docs)]

#[cfg(not(feature = "opengl"))]
compile_error!("strata-infra needs a graphics backend: enable the `opengl` feature.");

pub mod graphics;
pub mod platform;
#[cfg(feature = "opengl")]
pub mod ui;

#[cfg(feature = "opengl")]
pub use self::graphics::opengl::OpenGlRendererApi;
#[cfg(feature = "opengl")]
pub use self::platform::window::{WindowError, WinitWindow, WinitWindowBuilder};
#[cfg(feature = "opengl")]
pub use self::ui::EguiOverlay;
