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

//! Engine key and mouse codes, and the polling [`Input`] contract.
//!
//! Key codes follow the common desktop numbering (printable keys use their
//! ASCII value, function/navigation keys start at 256) so that they stay
//! stable regardless of the windowing backend that produced them.

use crate::event::{Event, EventPayload};
use std::collections::HashSet;
use std::fmt;

/// A backend-independent keyboard key code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub i32);

#[allow(missing_docs)]
impl KeyCode {
    pub const UNKNOWN: Self = Self(-1);

    pub const SPACE: Self = Self(32);
    pub const APOSTROPHE: Self = Self(39);
    pub const COMMA: Self = Self(44);
    pub const MINUS: Self = Self(45);
    pub const PERIOD: Self = Self(46);
    pub const SLASH: Self = Self(47);
    pub const D0: Self = Self(48);
    pub const D1: Self = Self(49);
    pub const D2: Self = Self(50);
    pub const D3: Self = Self(51);
    pub const D4: Self = Self(52);
    pub const D5: Self = Self(53);
    pub const D6: Self = Self(54);
    pub const D7: Self = Self(55);
    pub const D8: Self = Self(56);
    pub const D9: Self = Self(57);
    pub const SEMICOLON: Self = Self(59);
    pub const EQUAL: Self = Self(61);
    pub const A: Self = Self(65);
    pub const B: Self = Self(66);
    pub const C: Self = Self(67);
    pub const D: Self = Self(68);
    pub const E: Self = Self(69);
    pub const F: Self = Self(70);
    pub const G: Self = Self(71);
    pub const H: Self = Self(72);
    pub const I: Self = Self(73);
    pub const J: Self = Self(74);
    pub const K: Self = Self(75);
    pub const L: Self = Self(76);
    pub const M: Self = Self(77);
    pub const N: Self = Self(78);
    pub const O: Self = Self(79);
    pub const P: Self = Self(80);
    pub const Q: Self = Self(81);
    pub const R: Self = Self(82);
    pub const S: Self = Self(83);
    pub const T: Self = Self(84);
    pub const U: Self = Self(85);
    pub const V: Self = Self(86);
    pub const W: Self = Self(87);
    pub const X: Self = Self(88);
    pub const Y: Self = Self(89);
    pub const Z: Self = Self(90);
    pub const LEFT_BRACKET: Self = Self(91);
    pub const BACKSLASH: Self = Self(92);
    pub const RIGHT_BRACKET: Self = Self(93);
    pub const GRAVE_ACCENT: Self = Self(96);

    pub const ESCAPE: Self = Self(256);
    pub const ENTER: Self = Self(257);
    pub const TAB: Self = Self(258);
    pub const BACKSPACE: Self = Self(259);
    pub const INSERT: Self = Self(260);
    pub const DELETE: Self = Self(261);
    pub const RIGHT: Self = Self(262);
    pub const LEFT: Self = Self(263);
    pub const DOWN: Self = Self(264);
    pub const UP: Self = Self(265);
    pub const PAGE_UP: Self = Self(266);
    pub const PAGE_DOWN: Self = Self(267);
    pub const HOME: Self = Self(268);
    pub const END: Self = Self(269);
    pub const CAPS_LOCK: Self = Self(280);
    pub const F1: Self = Self(290);
    pub const F2: Self = Self(291);
    pub const F3: Self = Self(292);
    pub const F4: Self = Self(293);
    pub const F5: Self = Self(294);
    pub const F6: Self = Self(295);
    pub const F7: Self = Self(296);
    pub const F8: Self = Self(297);
    pub const F9: Self = Self(298);
    pub const F10: Self = Self(299);
    pub const F11: Self = Self(300);
    pub const F12: Self = Self(301);
    pub const LEFT_SHIFT: Self = Self(340);
    pub const LEFT_CONTROL: Self = Self(341);
    pub const LEFT_ALT: Self = Self(342);
    pub const LEFT_SUPER: Self = Self(343);
    pub const RIGHT_SHIFT: Self = Self(344);
    pub const RIGHT_CONTROL: Self = Self(345);
    pub const RIGHT_ALT: Self = Self(346);
    pub const RIGHT_SUPER: Self = Self(347);
}

impl fmt::Debug for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyCode({})", self.0)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An engine-internal representation of a mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The left mouse button.
    Left,
    /// The right mouse button.
    Right,
    /// The middle mouse button.
    Middle,
    /// The back mouse button (typically on the side).
    Back,
    /// The forward mouse button (typically on the side).
    Forward,
    /// Another mouse button, identified by a numeric code.
    Other(u16),
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Other(code) => write!(f, "Other({code})"),
            named => write!(f, "{named:?}"),
        }
    }
}

/// Polling access to the current keyboard and mouse state.
pub trait Input {
    /// Returns `true` while `key` is held down.
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// Returns `true` while `button` is held down.
    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool;

    /// Returns the last known cursor position in window pixels.
    fn mouse_position(&self) -> (f32, f32);

    /// Returns the last known cursor x-coordinate.
    fn mouse_x(&self) -> f32 {
        self.mouse_position().0
    }

    /// Returns the last known cursor y-coordinate.
    fn mouse_y(&self) -> f32 {
        self.mouse_position().1
    }
}

/// Input state reconstructed from the engine event stream.
///
/// The application feeds every event through [`InputState::apply`] before the
/// event reaches any layer, so layers observe a state that already includes
/// the event being dispatched.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    keys: HashSet<KeyCode>,
    buttons: HashSet<MouseButton>,
    cursor: (f32, f32),
}

impl InputState {
    /// Creates an empty input state with the cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the state from a single event. Non-input events are ignored.
    pub fn apply(&mut self, event: &Event) {
        match event.payload() {
            EventPayload::KeyPressed(e) => {
                self.keys.insert(e.key_code());
            }
            EventPayload::KeyReleased(e) => {
                self.keys.remove(&e.key_code());
            }
            EventPayload::MouseButtonPressed(e) => {
                self.buttons.insert(e.button());
            }
            EventPayload::MouseButtonReleased(e) => {
                self.buttons.remove(&e.button());
            }
            EventPayload::MouseMoved(e) => {
                self.cursor = (e.x(), e.y());
            }
            // Focus is gone once the window closes; nothing stays held.
            EventPayload::WindowClose(_) => {
                self.keys.clear();
                self.buttons.clear();
            }
            _ => {}
        }
    }
}

impl Input for InputState {
    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    fn mouse_position(&self) -> (f32, f32) {
        self.cursor
    }
}
