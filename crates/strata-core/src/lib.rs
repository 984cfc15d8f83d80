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

//! # Strata Core
//!
//! The backend-agnostic heart of the Strata engine.
//!
//! It defines the event model, the layer stack, the renderer and window
//! contracts, and the [`Application`](application::Application) that drives
//! the frame loop. Concrete windows, graphics backends and the debug UI live
//! in `strata-infra` and plug in through the traits declared here.

#![warn(missing_docs)]

pub mod application;
pub mod config;
pub mod event;
pub mod layer;
pub mod platform;
pub mod renderer;
pub mod ui;
pub mod utils;

pub use self::application::Application;
pub use self::config::{ApplicationConfig, ConfigError};

/// The immediate-mode UI crate layers draw their debug UI with.
pub use egui;
