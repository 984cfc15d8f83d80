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

//! Windowing: the winit + glutin window hosting the OpenGL context.

mod winit;

pub use self::winit::{WinitWindow, WinitWindowBuilder};

use std::fmt;

/// Failures while creating the window or its graphics context.
#[derive(Debug)]
pub enum WindowError {
    /// The platform event loop could not be created.
    EventLoop(::winit::error::EventLoopError),
    /// No window or GL configuration could be created for the display.
    Display(String),
    /// The window's native handle is not available.
    Handle(raw_window_handle::HandleError),
    /// The OpenGL context or surface could not be created or made current.
    Context(glutin::error::Error),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::EventLoop(e) => write!(f, "Failed to create the event loop: {e}"),
            WindowError::Display(details) => write!(f, "Failed to create the window: {details}"),
            WindowError::Handle(e) => write!(f, "Window handle unavailable: {e}"),
            WindowError::Context(e) => write!(f, "OpenGL context error: {e}"),
        }
    }
}

impl std::error::Error for WindowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WindowError::EventLoop(e) => Some(e),
            WindowError::Display(_) => None,
            WindowError::Handle(e) => Some(e),
            WindowError::Context(e) => Some(e),
        }
    }
}

impl From<::winit::error::EventLoopError> for WindowError {
    fn from(err: ::winit::error::EventLoopError) -> Self {
        WindowError::EventLoop(err)
    }
}

impl From<raw_window_handle::HandleError> for WindowError {
    fn from(err: raw_window_handle::HandleError) -> Self {
        WindowError::Handle(err)
    }
}

impl From<glutin::error::Error> for WindowError {
    fn from(err: glutin::error::Error) -> Self {
        WindowError::Context(err)
    }
}
