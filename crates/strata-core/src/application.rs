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

//! The application: owner of the window, renderer, debug UI and layers, and
//! driver of the frame loop.

use crate::config::ApplicationConfig;
use crate::event::{
    Event, EventBus, EventDispatcher, WindowCloseEvent, WindowResizeEvent,
};
use crate::layer::{FrameContext, Layer, LayerContext, LayerId, LayerStack, Timestep};
use crate::platform::input::InputState;
use crate::platform::window::Window;
use crate::renderer::RendererApi;
use crate::ui::UiOverlay;
use std::cell::Cell;
use std::time::Instant;

thread_local! {
    static APPLICATION_ALIVE: Cell<bool> = const { Cell::new(false) };
}

/// Holds the thread's single-instance slot and frees it when dropped, also
/// when construction unwinds halfway.
struct InstanceGuard;

impl InstanceGuard {
    fn acquire() -> Self {
        let already_alive = APPLICATION_ALIVE.with(|alive| alive.replace(true));
        assert!(!already_alive, "Application already exists!");
        Self
    }
}

impl Drop for InstanceGuard {
    fn drop(&mut self) {
        APPLICATION_ALIVE.with(|alive| alive.set(false));
    }
}

/// Owns every engine collaborator and runs the frame loop.
///
/// At most one `Application` may exist per thread at a time; constructing a
/// second one panics. The slot is released when the application is dropped.
pub struct Application<W: Window, U: UiOverlay> {
    // Field order is drop order: layers and the overlay release their GPU
    // resources while the renderer and the window's context are still alive.
    layer_stack: LayerStack,
    ui: U,
    renderer: Box<dyn RendererApi>,
    window: W,
    input: InputState,
    events: EventBus<Event>,
    config: ApplicationConfig,
    running: bool,
    minimized: bool,
    frame_index: u64,
    last_frame: Instant,
    _instance: InstanceGuard,
}

impl<W: Window, U: UiOverlay> Application<W, U> {
    /// Builds the application around its collaborators and attaches `ui`.
    ///
    /// # Panics
    ///
    /// Panics if another `Application` is alive on the current thread.
    pub fn new(
        mut window: W,
        renderer: Box<dyn RendererApi>,
        mut ui: U,
        config: ApplicationConfig,
    ) -> Self {
        let instance = InstanceGuard::acquire();

        let events = EventBus::new();
        window.set_event_sink(events.sender());
        window.set_vsync(config.vsync);

        let window_size = (window.width(), window.height());
        renderer.set_clear_color(config.clear_color);
        renderer.set_viewport(0, 0, window_size.0, window_size.1);

        ui.on_attach(&LayerContext {
            renderer: renderer.as_ref(),
            window_size,
        });

        log::info!(
            "Application '{}' created ({}x{}, {} backend).",
            config.title,
            window_size.0,
            window_size.1,
            renderer.backend()
        );

        Self {
            layer_stack: LayerStack::new(),
            ui,
            renderer,
            window,
            input: InputState::new(),
            events,
            config,
            running: true,
            minimized: window_size.0 == 0 || window_size.1 == 0,
            frame_index: 0,
            last_frame: Instant::now(),
            _instance: instance,
        }
    }

    /// Pushes a layer below every overlay and attaches it.
    pub fn push_layer(&mut self, layer: impl Layer + 'static) -> LayerId {
        let ctx = LayerContext {
            renderer: self.renderer.as_ref(),
            window_size: self.window_size(),
        };
        self.layer_stack.push_layer(Box::new(layer), &ctx)
    }

    /// Pushes an overlay on top of the stack and attaches it.
    pub fn push_overlay(&mut self, overlay: impl Layer + 'static) -> LayerId {
        let ctx = LayerContext {
            renderer: self.renderer.as_ref(),
            window_size: self.window_size(),
        };
        self.layer_stack.push_overlay(Box::new(overlay), &ctx)
    }

    /// Detaches and returns the layer `id`, if it is on the stack.
    pub fn pop_layer(&mut self, id: LayerId) -> Option<Box<dyn Layer>> {
        self.layer_stack.pop_layer(id)
    }

    /// Detaches and returns the overlay `id`, if it is on the stack.
    pub fn pop_overlay(&mut self, id: LayerId) -> Option<Box<dyn Layer>> {
        self.layer_stack.pop_overlay(id)
    }

    /// Runs frames until a window-close event is dispatched.
    pub fn run(&mut self) {
        log::info!("Entering main loop.");
        self.last_frame = Instant::now();
        while self.running {
            self.run_frame();
        }
        log::info!("Main loop exited after {} frames.", self.frame_index);
    }

    /// Produces a single frame: clear, update, UI, present, then dispatch
    /// everything the window delivered during its poll.
    pub fn run_frame(&mut self) {
        let now = Instant::now();
        let timestep = Timestep::from(now.duration_since(self.last_frame));
        self.last_frame = now;
        let window_size = self.window_size();

        self.renderer.clear();

        if !self.minimized {
            let ctx = FrameContext {
                renderer: self.renderer.as_ref(),
                input: &self.input,
                timestep,
                window_size,
                frame_index: self.frame_index,
            };
            self.ui.on_update(&ctx);
            self.layer_stack.update(&ctx);
        }

        self.ui.begin(window_size);
        let ui_ctx = self.ui.context().clone();
        self.ui.on_ui_render(&ui_ctx);
        self.layer_stack.render_ui(&ui_ctx);
        self.ui.end(window_size);

        self.window.on_update();
        for event in self.events.drain() {
            self.on_event(event);
        }

        self.frame_index += 1;
    }

    /// Routes one event through the application, then the debug UI, then the
    /// layers from the top of the stack down. Returns whether it ended up
    /// handled.
    ///
    /// The debug UI sees every event. Input it captures is not offered to the
    /// layers.
    pub fn on_event(&mut self, mut event: Event) -> bool {
        log::trace!("{event}");
        self.input.apply(&event);

        let running = &mut self.running;
        let minimized = &mut self.minimized;
        let renderer = self.renderer.as_ref();

        let mut dispatcher = EventDispatcher::new(&mut event);
        dispatcher.dispatch::<WindowCloseEvent>(|_| {
            log::info!("Window close requested, stopping.");
            *running = false;
            true
        });
        dispatcher.dispatch::<WindowResizeEvent>(|e| {
            *minimized = e.width() == 0 || e.height() == 0;
            if !*minimized {
                renderer.set_viewport(0, 0, e.width(), e.height());
            }
            false
        });

        if self.ui.capture_event(&event) {
            log::trace!("{event} captured by the debug UI.");
            return true;
        }
        self.layer_stack.propagate_event(&mut event)
    }

    /// Stops the loop after the current frame.
    pub fn close(&mut self) {
        self.running = false;
    }

    /// Whether the loop will run another frame.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the window is currently minimized (zero sized).
    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// Number of frames produced so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// The platform window.
    pub fn window(&self) -> &W {
        &self.window
    }

    /// The platform window, mutably.
    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    /// The active graphics backend.
    pub fn renderer(&self) -> &dyn RendererApi {
        self.renderer.as_ref()
    }

    /// The debug UI overlay.
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Keyboard and mouse state tracked from dispatched events.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// The layers and overlays, in update order.
    pub fn layer_stack(&self) -> &LayerStack {
        &self.layer_stack
    }

    /// The configuration the application was created with.
    pub fn config(&self) -> &ApplicationConfig {
        &self.config
    }

    fn window_size(&self) -> (u32, u32) {
        (self.window.width(), self.window.height())
    }
}

impl<W: Window, U: UiOverlay> Drop for Application<W, U> {
    fn drop(&mut self) {
        log::info!("Application shutting down...");
        self.layer_stack.clear();
        self.ui.on_detach();
        log::info!("Application shutdown complete.");
    }
}
