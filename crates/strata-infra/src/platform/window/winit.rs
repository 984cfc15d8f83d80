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

//! A `winit`-based implementation of the engine's `Window` trait, presenting
//! through an OpenGL surface created with `glutin`.

use super::WindowError;
use crate::platform::input::InputTranslator;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow as _};
use raw_window_handle::{
    DisplayHandle, HandleError, HasDisplayHandle, HasWindowHandle, WindowHandle,
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use strata_core::config::ApplicationConfig;
use strata_core::event::EventSender;
use strata_core::platform::Window;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window as NativeWindow, WindowId};

/// A builder for creating `WinitWindow` instances.
///
/// This follows the builder pattern to provide an ergonomic API for window creation.
pub struct WinitWindowBuilder {
    title: String,
    width: u32,
    height: u32,
    vsync: bool,
}

impl WinitWindowBuilder {
    /// Creates a new `WinitWindowBuilder` with default settings.
    pub fn new() -> Self {
        Self::from_config(&ApplicationConfig::default())
    }

    /// Takes the title, size and vsync setting from an application config.
    pub fn from_config(config: &ApplicationConfig) -> Self {
        Self {
            title: config.title.clone(),
            width: config.width,
            height: config.height,
            vsync: config.vsync,
        }
    }

    /// Sets the title of the window to be built.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial inner dimensions of the window to be built.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets whether presentation waits for vertical sync.
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Creates the event loop, the window and a current OpenGL 3.3 core
    /// context on it.
    ///
    /// # Errors
    /// Returns a [`WindowError`] if any platform or GL object cannot be created.
    pub fn build(self) -> Result<WinitWindow, WindowError> {
        log::info!(
            "Building window with title: '{}' and size: {}x{}",
            self.title,
            self.width,
            self.height
        );

        let event_loop = EventLoop::new()?;

        let window_attributes = NativeWindow::default_attributes()
            .with_title(self.title)
            .with_inner_size(LogicalSize::new(self.width, self.height))
            .with_visible(true);
        let template = ConfigTemplateBuilder::new().with_alpha_size(8);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(window_attributes))
            .build(&event_loop, template, pick_config)
            .map_err(|e| WindowError::Display(e.to_string()))?;
        let window = window
            .ok_or_else(|| WindowError::Display("no window was created".to_owned()))?;

        let gl_display = gl_config.display();
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_profile(GlProfile::Core)
            .build(Some(window.window_handle()?.as_raw()));
        // SAFETY: the raw window handle passed in the attributes belongs to
        // `window`, which outlives the context (see `WindowState` field order).
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes)? };

        let surface_attributes = window.build_surface_attributes(Default::default())?;
        // SAFETY: same as above, the surface never outlives `window`.
        let gl_surface =
            unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes)? };
        let gl_context = not_current.make_current(&gl_surface)?;

        // SAFETY: the context is current on this thread and the loader comes
        // from the display that created it.
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol| gl_display.get_proc_address(symbol))
        };

        let mut state = WindowState {
            gl: Arc::new(gl),
            gl_surface,
            gl_context,
            window,
            sink: None,
            translator: InputTranslator::new(),
            vsync: self.vsync,
        };
        state.apply_swap_interval();

        log::info!(
            "Winit window created successfully (id: {:?}, {} samples).",
            state.window.id(),
            gl_config.num_samples()
        );
        Ok(WinitWindow { state, event_loop })
    }
}

impl Default for WinitWindowBuilder {
    /// Creates a new `WinitWindowBuilder` with default settings.
    fn default() -> Self {
        Self::new()
    }
}

/// Picks the configuration with the most MSAA samples.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, candidate| {
            if candidate.num_samples() > best.num_samples() {
                candidate
            } else {
                best
            }
        })
        // glutin only calls the picker with a non-empty set.
        .expect("glutin offered no GL configuration")
}

/// Everything the event handler touches while events are pumped.
struct WindowState {
    // Field order is drop order: GL objects go before the window they render to.
    gl: Arc<glow::Context>,
    gl_surface: Surface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
    window: NativeWindow,
    sink: Option<EventSender>,
    translator: InputTranslator,
    vsync: bool,
}

impl WindowState {
    fn apply_swap_interval(&self) {
        let interval = if self.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = self.gl_surface.set_swap_interval(&self.gl_context, interval) {
            log::warn!("Could not set the swap interval (vsync: {}): {e}", self.vsync);
        }
    }

    fn resize_surface(&self, size: PhysicalSize<u32>) {
        if let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
            self.gl_surface.resize(&self.gl_context, width, height);
        }
    }
}

impl ApplicationHandler for WindowState {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if id != self.window.id() {
            return;
        }
        if let WindowEvent::Resized(size) = event {
            self.resize_surface(size);
        }
        let Some(sink) = &self.sink else {
            return;
        };
        self.translator.translate(&event, |engine_event| {
            if sink.send(engine_event).is_err() {
                log::warn!("Event sink disconnected, dropping event.");
            }
        });
    }
}

/// A `winit` window with a current OpenGL context, driven by pumping its
/// event loop once per frame.
pub struct WinitWindow {
    state: WindowState,
    event_loop: EventLoop<()>,
}

impl WinitWindow {
    /// The OpenGL function table bound to this window's context.
    pub fn gl(&self) -> Arc<glow::Context> {
        self.state.gl.clone()
    }
}

impl Window for WinitWindow {
    fn on_update(&mut self) {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.state);
        if let PumpStatus::Exit(code) = status {
            log::info!("Event loop exited with code {code}.");
        }
        if let Err(e) = self.state.gl_surface.swap_buffers(&self.state.gl_context) {
            log::error!("Failed to present: {e}");
        }
    }

    fn set_event_sink(&mut self, sink: EventSender) {
        self.state.sink = Some(sink);
    }

    fn width(&self) -> u32 {
        self.state.window.inner_size().width
    }

    fn height(&self) -> u32 {
        self.state.window.inner_size().height
    }

    /// Returns the display's scale factor, used for HiDPI rendering.
    fn scale_factor(&self) -> f64 {
        self.state.window.scale_factor()
    }

    fn set_vsync(&mut self, enabled: bool) {
        self.state.vsync = enabled;
        self.state.apply_swap_interval();
    }

    fn is_vsync(&self) -> bool {
        self.state.vsync
    }
}

impl HasWindowHandle for WinitWindow {
    /// Provides the raw window handle required by graphics backends.
    fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
        self.state.window.window_handle()
    }
}

impl HasDisplayHandle for WinitWindow {
    /// Provides the raw display handle required by graphics backends.
    fn display_handle(&self) -> Result<DisplayHandle<'_>, HandleError> {
        self.state.window.display_handle()
    }
}
