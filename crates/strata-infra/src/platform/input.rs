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

//! Translation from a concrete windowing backend (`winit`) to the engine's events.
//!
//! This module acts as an adapter layer, decoupling the rest of the engine from the
//! specific event format of the `winit` crate.

use std::collections::HashMap;
use strata_core::event::{
    Event, KeyPressedEvent, KeyReleasedEvent, KeyTypedEvent, MouseButtonPressedEvent,
    MouseButtonReleasedEvent, MouseMovedEvent, MouseScrolledEvent, WindowCloseEvent,
    WindowResizeEvent,
};
use strata_core::platform::{KeyCode, MouseButton};
use winit::event::{ElementState, Ime, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// Counts auto-repeats of each held key.
///
/// The first press of a key reports zero repeats; every auto-repeat while it
/// stays down increments the count. Releasing the key resets it.
#[derive(Debug, Default)]
pub struct KeyRepeatTracker {
    held: HashMap<KeyCode, u32>,
}

impl KeyRepeatTracker {
    /// Records a press of `key` and returns its repeat count.
    pub fn press(&mut self, key: KeyCode, is_repeat: bool) -> u32 {
        let count = self.held.entry(key).or_insert(0);
        if is_repeat {
            *count += 1;
        } else {
            *count = 0;
        }
        *count
    }

    /// Records a release of `key`.
    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Forgets every held key, e.g. when the window loses focus.
    pub fn reset(&mut self) {
        self.held.clear();
    }
}

/// Stateful translator from `winit` window events to engine [`Event`]s.
#[derive(Debug, Default)]
pub struct InputTranslator {
    repeats: KeyRepeatTracker,
}

impl InputTranslator {
    /// Creates a translator with no keys held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates one `winit` event, pushing the resulting engine events to
    /// `emit` in order. A single key press may yield a key-pressed event
    /// followed by one key-typed event per produced character. Events with
    /// no engine counterpart yield nothing.
    pub fn translate(&mut self, event: &WindowEvent, mut emit: impl FnMut(Event)) {
        match event {
            WindowEvent::CloseRequested => emit(WindowCloseEvent.into()),
            WindowEvent::Resized(size) => {
                emit(WindowResizeEvent::new(size.width, size.height).into())
            }
            WindowEvent::Focused(false) => self.repeats.reset(),
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                let key = map_physical_key(key_event.physical_key);
                match key_event.state {
                    ElementState::Pressed => {
                        let repeats = self.repeats.press(key, key_event.repeat);
                        emit(KeyPressedEvent::new(key, repeats).into());
                        if let Some(text) = &key_event.text {
                            emit_typed(text, &mut emit);
                        }
                    }
                    ElementState::Released => {
                        self.repeats.release(key);
                        emit(KeyReleasedEvent::new(key).into());
                    }
                }
            }
            WindowEvent::Ime(Ime::Commit(text)) => emit_typed(text, &mut emit),
            other => {
                if let Some(event) = translate_winit_input(other) {
                    emit(event);
                }
            }
        }
    }
}

/// Translates the stateless pointer events of `winit` into engine events.
///
/// Returns `Some(Event)` for cursor motion, mouse buttons and non-zero wheel
/// scrolls, `None` for everything else.
pub fn translate_winit_input(event: &WindowEvent) -> Option<Event> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            Some(MouseMovedEvent::new(position.x as f32, position.y as f32).into())
        }
        WindowEvent::MouseInput { state, button, .. } => {
            let button = map_mouse_button(*button);
            Some(match state {
                ElementState::Pressed => MouseButtonPressedEvent::new(button).into(),
                ElementState::Released => MouseButtonReleasedEvent::new(button).into(),
            })
        }
        WindowEvent::MouseWheel { delta, .. } => {
            let (dx, dy): (f32, f32) = match delta {
                MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                MouseScrollDelta::PixelDelta(pos) => (pos.x as f32, pos.y as f32),
            };
            if dx != 0.0 || dy != 0.0 {
                Some(MouseScrolledEvent::new(dx, dy).into())
            } else {
                None
            }
        }
        _ => None,
    }
}

fn emit_typed(text: &str, emit: &mut impl FnMut(Event)) {
    for character in text.chars().filter(|c| !c.is_control()) {
        emit(KeyTypedEvent::new(character).into());
    }
}

// --- Private Helper Functions ---

fn map_physical_key(key: PhysicalKey) -> KeyCode {
    match key {
        PhysicalKey::Code(code) => map_keycode(code),
        PhysicalKey::Unidentified(_) => KeyCode::UNKNOWN,
    }
}

/// (Internal) Maps a `winit::keyboard::KeyCode` to the engine's key code.
fn map_keycode(code: WinitKeyCode) -> KeyCode {
    use WinitKeyCode as W;
    match code {
        W::Space => KeyCode::SPACE,
        W::Quote => KeyCode::APOSTROPHE,
        W::Comma => KeyCode::COMMA,
        W::Minus => KeyCode::MINUS,
        W::Period => KeyCode::PERIOD,
        W::Slash => KeyCode::SLASH,
        W::Digit0 => KeyCode::D0,
        W::Digit1 => KeyCode::D1,
        W::Digit2 => KeyCode::D2,
        W::Digit3 => KeyCode::D3,
        W::Digit4 => KeyCode::D4,
        W::Digit5 => KeyCode::D5,
        W::Digit6 => KeyCode::D6,
        W::Digit7 => KeyCode::D7,
        W::Digit8 => KeyCode::D8,
        W::Digit9 => KeyCode::D9,
        W::Semicolon => KeyCode::SEMICOLON,
        W::Equal => KeyCode::EQUAL,
        W::KeyA => KeyCode::A,
        W::KeyB => KeyCode::B,
        W::KeyC => KeyCode::C,
        W::KeyD => KeyCode::D,
        W::KeyE => KeyCode::E,
        W::KeyF => KeyCode::F,
        W::KeyG => KeyCode::G,
        W::KeyH => KeyCode::H,
        W::KeyI => KeyCode::I,
        W::KeyJ => KeyCode::J,
        W::KeyK => KeyCode::K,
        W::KeyL => KeyCode::L,
        W::KeyM => KeyCode::M,
        W::KeyN => KeyCode::N,
        W::KeyO => KeyCode::O,
        W::KeyP => KeyCode::P,
        W::KeyQ => KeyCode::Q,
        W::KeyR => KeyCode::R,
        W::KeyS => KeyCode::S,
        W::KeyT => KeyCode::T,
        W::KeyU => KeyCode::U,
        W::KeyV => KeyCode::V,
        W::KeyW => KeyCode::W,
        W::KeyX => KeyCode::X,
        W::KeyY => KeyCode::Y,
        W::KeyZ => KeyCode::Z,
        W::BracketLeft => KeyCode::LEFT_BRACKET,
        W::Backslash => KeyCode::BACKSLASH,
        W::BracketRight => KeyCode::RIGHT_BRACKET,
        W::Backquote => KeyCode::GRAVE_ACCENT,
        W::Escape => KeyCode::ESCAPE,
        W::Enter => KeyCode::ENTER,
        W::Tab => KeyCode::TAB,
        W::Backspace => KeyCode::BACKSPACE,
        W::Insert => KeyCode::INSERT,
        W::Delete => KeyCode::DELETE,
        W::ArrowRight => KeyCode::RIGHT,
        W::ArrowLeft => KeyCode::LEFT,
        W::ArrowDown => KeyCode::DOWN,
        W::ArrowUp => KeyCode::UP,
        W::PageUp => KeyCode::PAGE_UP,
        W::PageDown => KeyCode::PAGE_DOWN,
        W::Home => KeyCode::HOME,
        W::End => KeyCode::END,
        W::CapsLock => KeyCode::CAPS_LOCK,
        W::F1 => KeyCode::F1,
        W::F2 => KeyCode::F2,
        W::F3 => KeyCode::F3,
        W::F4 => KeyCode::F4,
        W::F5 => KeyCode::F5,
        W::F6 => KeyCode::F6,
        W::F7 => KeyCode::F7,
        W::F8 => KeyCode::F8,
        W::F9 => KeyCode::F9,
        W::F10 => KeyCode::F10,
        W::F11 => KeyCode::F11,
        W::F12 => KeyCode::F12,
        W::ShiftLeft => KeyCode::LEFT_SHIFT,
        W::ControlLeft => KeyCode::LEFT_CONTROL,
        W::AltLeft => KeyCode::LEFT_ALT,
        W::SuperLeft => KeyCode::LEFT_SUPER,
        W::ShiftRight => KeyCode::RIGHT_SHIFT,
        W::ControlRight => KeyCode::RIGHT_CONTROL,
        W::AltRight => KeyCode::RIGHT_ALT,
        W::SuperRight => KeyCode::RIGHT_SUPER,
        _ => KeyCode::UNKNOWN,
    }
}

/// (Internal) Maps a `winit::event::MouseButton` to the engine's `MouseButton` enum.
fn map_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(id) => MouseButton::Other(id),
    }
}

// --- Unit Tests for Input Translation ---
#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::event::EventKind;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::{DeviceId, TouchPhase};
    use winit::keyboard::NativeKeyCode;

    fn translate_all(event: &WindowEvent) -> Vec<Event> {
        let mut translator = InputTranslator::new();
        let mut out = Vec::new();
        translator.translate(event, |e| out.push(e));
        out
    }

    #[test]
    fn test_map_keycode_named_keys() {
        assert_eq!(map_keycode(WinitKeyCode::KeyA), KeyCode::A);
        assert_eq!(map_keycode(WinitKeyCode::Digit1), KeyCode::D1);
        assert_eq!(map_keycode(WinitKeyCode::Space), KeyCode::SPACE);
        assert_eq!(map_keycode(WinitKeyCode::Escape), KeyCode::ESCAPE);
        assert_eq!(map_keycode(WinitKeyCode::F12), KeyCode::F12);
        assert_eq!(map_keycode(WinitKeyCode::ShiftRight), KeyCode::RIGHT_SHIFT);
    }

    #[test]
    fn test_unknown_keys_map_to_unknown() {
        assert_eq!(map_keycode(WinitKeyCode::MediaPlayPause), KeyCode::UNKNOWN);
        assert_eq!(
            map_physical_key(PhysicalKey::Unidentified(NativeKeyCode::Unidentified)),
            KeyCode::UNKNOWN
        );
    }

    #[test]
    fn test_map_mouse_button_standard() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(map_mouse_button(WinitMouseButton::Right), MouseButton::Right);
        assert_eq!(map_mouse_button(WinitMouseButton::Middle), MouseButton::Middle);
        assert_eq!(map_mouse_button(WinitMouseButton::Back), MouseButton::Back);
        assert_eq!(map_mouse_button(WinitMouseButton::Forward), MouseButton::Forward);
        assert_eq!(map_mouse_button(WinitMouseButton::Other(8)), MouseButton::Other(8));
    }

    #[test]
    fn test_repeat_counts() {
        let mut tracker = KeyRepeatTracker::default();
        assert_eq!(tracker.press(KeyCode::A, false), 0);
        assert_eq!(tracker.press(KeyCode::A, true), 1);
        assert_eq!(tracker.press(KeyCode::A, true), 2);
        assert_eq!(tracker.press(KeyCode::B, false), 0);
        tracker.release(KeyCode::A);
        assert_eq!(tracker.press(KeyCode::A, true), 1);
        tracker.reset();
        assert_eq!(tracker.press(KeyCode::B, true), 1);
    }

    #[test]
    fn test_translate_mouse_buttons() {
        let pressed = WindowEvent::MouseInput {
            device_id: DeviceId::dummy(),
            state: ElementState::Pressed,
            button: WinitMouseButton::Left,
        };
        let event = translate_winit_input(&pressed).unwrap();
        assert_eq!(
            event.downcast::<MouseButtonPressedEvent>().map(|e| e.button()),
            Some(MouseButton::Left)
        );

        let released = WindowEvent::MouseInput {
            device_id: DeviceId::dummy(),
            state: ElementState::Released,
            button: WinitMouseButton::Right,
        };
        let event = translate_winit_input(&released).unwrap();
        assert_eq!(
            event.downcast::<MouseButtonReleasedEvent>().map(|e| e.button()),
            Some(MouseButton::Right)
        );
    }

    #[test]
    fn test_translate_cursor_moved() {
        let winit_event = WindowEvent::CursorMoved {
            device_id: DeviceId::dummy(),
            position: PhysicalPosition::new(100.5, 200.75),
        };
        let event = translate_winit_input(&winit_event).unwrap();
        let moved = event.downcast::<MouseMovedEvent>().unwrap();
        assert_eq!((moved.x(), moved.y()), (100.5, 200.75));
    }

    #[test]
    fn test_translate_mouse_wheel() {
        let line = WindowEvent::MouseWheel {
            device_id: DeviceId::dummy(),
            delta: MouseScrollDelta::LineDelta(-1.0, 2.0),
            phase: TouchPhase::Moved,
        };
        let event = translate_winit_input(&line).unwrap();
        let scrolled = event.downcast::<MouseScrolledEvent>().unwrap();
        assert_eq!((scrolled.x_offset(), scrolled.y_offset()), (-1.0, 2.0));

        let pixels = WindowEvent::MouseWheel {
            device_id: DeviceId::dummy(),
            delta: MouseScrollDelta::PixelDelta(PhysicalPosition::new(5.5, -10.0)),
            phase: TouchPhase::Moved,
        };
        let event = translate_winit_input(&pixels).unwrap();
        let scrolled = event.downcast::<MouseScrolledEvent>().unwrap();
        assert_eq!((scrolled.x_offset(), scrolled.y_offset()), (5.5, -10.0));

        let still = WindowEvent::MouseWheel {
            device_id: DeviceId::dummy(),
            delta: MouseScrollDelta::LineDelta(0.0, 0.0),
            phase: TouchPhase::Moved,
        };
        assert!(translate_winit_input(&still).is_none());
    }

    #[test]
    fn test_translate_window_events() {
        let close = translate_all(&WindowEvent::CloseRequested);
        assert_eq!(close.len(), 1);
        assert_eq!(close[0].kind(), EventKind::WindowClose);

        let resized = translate_all(&WindowEvent::Resized(PhysicalSize::new(640, 480)));
        let resize = resized[0].downcast::<WindowResizeEvent>().unwrap();
        assert_eq!((resize.width(), resize.height()), (640, 480));
    }

    #[test]
    fn test_ime_commit_types_each_character() {
        let typed = translate_all(&WindowEvent::Ime(Ime::Commit("hé".to_owned())));
        let chars: Vec<char> = typed
            .iter()
            .filter_map(|e| e.downcast::<KeyTypedEvent>())
            .map(|e| e.character())
            .collect();
        assert_eq!(chars, ['h', 'é']);
    }

    #[test]
    fn test_translate_ignored_events() {
        assert!(translate_all(&WindowEvent::Focused(true)).is_empty());
        assert!(translate_all(&WindowEvent::Focused(false)).is_empty());
        assert!(translate_winit_input(&WindowEvent::CloseRequested).is_none());
    }
}
