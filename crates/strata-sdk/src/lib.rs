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

//! # Strata SDK
//!
//! The public entry point of the engine.
//!
//! [`Engine::create`] builds the window, the OpenGL renderer and the egui
//! debug overlay from an [`ApplicationConfig`] and wires them into a core
//! [`Application`]. Most applications only need [`Engine::run`] and the
//! [`prelude`].

#![warn(missing_docs)]

pub mod prelude;

use anyhow::Result;
use strata_core::platform::Window;
use strata_core::{Application, ApplicationConfig};
use strata_infra::{EguiOverlay, OpenGlRendererApi, WinitWindow, WinitWindowBuilder};

/// The application type produced by [`Engine::create`].
pub type StrataApplication = Application<WinitWindow, EguiOverlay>;

/// The public entry point for the Strata Engine.
pub struct Engine;

impl Engine {
    /// Creates the window, renderer and debug overlay described by `config`
    /// and hands them to a new application.
    ///
    /// # Errors
    /// Fails if the window, its OpenGL context or the overlay's painter
    /// cannot be created.
    ///
    /// # Panics
    /// Panics if another application is alive on this thread.
    pub fn create(config: ApplicationConfig) -> Result<StrataApplication> {
        log::info!("Strata Engine SDK: Starting...");
        let window = WinitWindowBuilder::from_config(&config).build()?;
        let gl = window.gl();
        let renderer = OpenGlRendererApi::new(gl.clone());
        let ui = EguiOverlay::new(gl, window.scale_factor() as f32, config.show_debug_window)?;
        Ok(Application::new(window, Box::new(renderer), ui, config))
    }

    /// Creates an application, lets `setup` push its layers, then runs the
    /// frame loop until the window is closed.
    ///
    /// This blocks the current thread until the application stops.
    pub fn run<F>(config: ApplicationConfig, setup: F) -> Result<()>
    where
        F: FnOnce(&mut StrataApplication) -> Result<()>,
    {
        let mut app = Self::create(config)?;
        setup(&mut app)?;
        app.run();
        log::info!("Strata Engine SDK: Stopped.");
        Ok(())
    }
}
