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

//! Collects engine events as egui input.

use strata_core::event::{Event, EventPayload};
use strata_core::platform::{KeyCode, MouseButton};

/// Accumulates egui input between two UI passes.
///
/// Engine coordinates are physical pixels; egui works in points, so every
/// position is divided by the pixels-per-point ratio.
#[derive(Debug)]
pub struct EguiInput {
    pixels_per_point: f32,
    pointer: egui::Pos2,
    modifiers: egui::Modifiers,
    events: Vec<egui::Event>,
}

impl EguiInput {
    /// Creates an empty input queue for a display with the given scale.
    pub fn new(pixels_per_point: f32) -> Self {
        Self {
            pixels_per_point,
            pointer: egui::Pos2::ZERO,
            modifiers: egui::Modifiers::NONE,
            events: Vec::new(),
        }
    }

    /// The ratio of physical pixels to egui points.
    pub fn pixels_per_point(&self) -> f32 {
        self.pixels_per_point
    }

    /// Events queued for the next pass.
    pub fn pending(&self) -> &[egui::Event] {
        &self.events
    }

    /// Queues the egui counterpart of `event`, if it has one.
    pub fn push(&mut self, event: &Event) {
        let translated = match event.payload() {
            EventPayload::MouseMoved(e) => {
                self.pointer = egui::pos2(
                    e.x() / self.pixels_per_point,
                    e.y() / self.pixels_per_point,
                );
                Some(egui::Event::PointerMoved(self.pointer))
            }
            EventPayload::MouseButtonPressed(e) => self.pointer_button(e.button(), true),
            EventPayload::MouseButtonReleased(e) => self.pointer_button(e.button(), false),
            EventPayload::MouseScrolled(e) => Some(egui::Event::MouseWheel {
                unit: egui::MouseWheelUnit::Line,
                delta: egui::vec2(e.x_offset(), e.y_offset()),
                modifiers: self.modifiers,
            }),
            EventPayload::KeyTyped(e) => Some(egui::Event::Text(e.character().to_string())),
            EventPayload::KeyPressed(e) => {
                self.set_modifier(e.key_code(), true);
                self.key(e.key_code(), true, e.repeat_count() > 0)
            }
            EventPayload::KeyReleased(e) => {
                self.set_modifier(e.key_code(), false);
                self.key(e.key_code(), false, false)
            }
            _ => None,
        };
        if let Some(translated) = translated {
            self.events.push(translated);
        }
    }

    /// Drains the queued events into the input of a pass covering a window
    /// of `window_size` pixels.
    pub fn take_raw_input(&mut self, window_size: (u32, u32), time: f64) -> egui::RawInput {
        let size_in_points = egui::vec2(
            window_size.0 as f32 / self.pixels_per_point,
            window_size.1 as f32 / self.pixels_per_point,
        );
        let mut raw_input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, size_in_points)),
            time: Some(time),
            modifiers: self.modifiers,
            events: std::mem::take(&mut self.events),
            ..Default::default()
        };
        raw_input
            .viewports
            .entry(egui::ViewportId::ROOT)
            .or_default()
            .native_pixels_per_point = Some(self.pixels_per_point);
        raw_input
    }

    fn pointer_button(&self, button: MouseButton, pressed: bool) -> Option<egui::Event> {
        let button = match button {
            MouseButton::Left => egui::PointerButton::Primary,
            MouseButton::Right => egui::PointerButton::Secondary,
            MouseButton::Middle => egui::PointerButton::Middle,
            MouseButton::Back => egui::PointerButton::Extra1,
            MouseButton::Forward => egui::PointerButton::Extra2,
            MouseButton::Other(_) => return None,
        };
        Some(egui::Event::PointerButton {
            pos: self.pointer,
            button,
            pressed,
            modifiers: self.modifiers,
        })
    }

    fn key(&self, key_code: KeyCode, pressed: bool, repeat: bool) -> Option<egui::Event> {
        let key = map_key(key_code)?;
        Some(egui::Event::Key {
            key,
            physical_key: Some(key),
            pressed,
            repeat,
            modifiers: self.modifiers,
        })
    }

    fn set_modifier(&mut self, key_code: KeyCode, down: bool) {
        let mac = cfg!(target_os = "macos");
        match key_code {
            KeyCode::LEFT_SHIFT | KeyCode::RIGHT_SHIFT => self.modifiers.shift = down,
            KeyCode::LEFT_ALT | KeyCode::RIGHT_ALT => self.modifiers.alt = down,
            KeyCode::LEFT_CONTROL | KeyCode::RIGHT_CONTROL => {
                self.modifiers.ctrl = down;
                if !mac {
                    self.modifiers.command = down;
                }
            }
            KeyCode::LEFT_SUPER | KeyCode::RIGHT_SUPER if mac => {
                self.modifiers.mac_cmd = down;
                self.modifiers.command = down;
            }
            _ => {}
        }
    }
}

fn map_key(key_code: KeyCode) -> Option<egui::Key> {
    use egui::Key;
    let key = match key_code {
        KeyCode::A => Key::A,
        KeyCode::B => Key::B,
        KeyCode::C => Key::C,
        KeyCode::D => Key::D,
        KeyCode::E => Key::E,
        KeyCode::F => Key::F,
        KeyCode::G => Key::G,
        KeyCode::H => Key::H,
        KeyCode::I => Key::I,
        KeyCode::J => Key::J,
        KeyCode::K => Key::K,
        KeyCode::L => Key::L,
        KeyCode::M => Key::M,
        KeyCode::N => Key::N,
        KeyCode::O => Key::O,
        KeyCode::P => Key::P,
        KeyCode::Q => Key::Q,
        KeyCode::R => Key::R,
        KeyCode::S => Key::S,
        KeyCode::T => Key::T,
        KeyCode::U => Key::U,
        KeyCode::V => Key::V,
        KeyCode::W => Key::W,
        KeyCode::X => Key::X,
        KeyCode::Y => Key::Y,
        KeyCode::Z => Key::Z,
        KeyCode::D0 => Key::Num0,
        KeyCode::D1 => Key::Num1,
        KeyCode::D2 => Key::Num2,
        KeyCode::D3 => Key::Num3,
        KeyCode::D4 => Key::Num4,
        KeyCode::D5 => Key::Num5,
        KeyCode::D6 => Key::Num6,
        KeyCode::D7 => Key::Num7,
        KeyCode::D8 => Key::Num8,
        KeyCode::D9 => Key::Num9,
        KeyCode::SPACE => Key::Space,
        KeyCode::MINUS => Key::Minus,
        KeyCode::COMMA => Key::Comma,
        KeyCode::PERIOD => Key::Period,
        KeyCode::SLASH => Key::Slash,
        KeyCode::ESCAPE => Key::Escape,
        KeyCode::ENTER => Key::Enter,
        KeyCode::TAB => Key::Tab,
        KeyCode::BACKSPACE => Key::Backspace,
        KeyCode::INSERT => Key::Insert,
        KeyCode::DELETE => Key::Delete,
        KeyCode::RIGHT => Key::ArrowRight,
        KeyCode::LEFT => Key::ArrowLeft,
        KeyCode::DOWN => Key::ArrowDown,
        KeyCode::UP => Key::ArrowUp,
        KeyCode::PAGE_UP => Key::PageUp,
        KeyCode::PAGE_DOWN => Key::PageDown,
        KeyCode::HOME => Key::Home,
        KeyCode::END => Key::End,
        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::event::{
        KeyPressedEvent, KeyReleasedEvent, KeyTypedEvent, MouseButtonPressedEvent,
        MouseMovedEvent, MouseScrolledEvent, WindowResizeEvent,
    };

    #[test]
    fn cursor_positions_are_converted_to_points() {
        let mut input = EguiInput::new(2.0);
        input.push(&MouseMovedEvent::new(100.0, 50.0).into());
        input.push(&MouseButtonPressedEvent::new(MouseButton::Left).into());

        assert_eq!(
            input.pending(),
            [
                egui::Event::PointerMoved(egui::pos2(50.0, 25.0)),
                egui::Event::PointerButton {
                    pos: egui::pos2(50.0, 25.0),
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    modifiers: egui::Modifiers::NONE,
                },
            ]
        );
    }

    #[test]
    fn typed_characters_become_text() {
        let mut input = EguiInput::new(1.0);
        input.push(&KeyTypedEvent::new('x').into());
        assert_eq!(input.pending(), [egui::Event::Text("x".to_owned())]);
    }

    #[test]
    fn keys_carry_repeat_and_modifiers() {
        let mut input = EguiInput::new(1.0);
        input.push(&KeyPressedEvent::new(KeyCode::LEFT_SHIFT, 0).into());
        input.push(&KeyPressedEvent::new(KeyCode::A, 3).into());
        input.push(&KeyReleasedEvent::new(KeyCode::LEFT_SHIFT).into());
        input.push(&KeyReleasedEvent::new(KeyCode::A).into());

        // The shift key itself has no egui counterpart.
        assert_eq!(input.pending().len(), 2);
        match &input.pending()[0] {
            egui::Event::Key {
                key,
                pressed,
                repeat,
                modifiers,
                ..
            } => {
                assert_eq!(*key, egui::Key::A);
                assert!(*pressed);
                assert!(*repeat);
                assert!(modifiers.shift);
            }
            other => panic!("expected a key event, got {other:?}"),
        }
        match &input.pending()[1] {
            egui::Event::Key {
                pressed, modifiers, ..
            } => {
                assert!(!*pressed);
                assert!(!modifiers.shift);
            }
            other => panic!("expected a key event, got {other:?}"),
        }
    }

    #[test]
    fn wheel_scrolls_by_lines_with_current_modifiers() {
        let mut input = EguiInput::new(2.0);
        input.push(&KeyPressedEvent::new(KeyCode::LEFT_SHIFT, 0).into());
        input.push(&MouseScrolledEvent::new(-1.0, 2.0).into());

        let mut shift = egui::Modifiers::NONE;
        shift.shift = true;
        assert_eq!(
            input.pending(),
            [egui::Event::MouseWheel {
                unit: egui::MouseWheelUnit::Line,
                delta: egui::vec2(-1.0, 2.0),
                modifiers: shift,
            }]
        );
    }

    #[test]
    fn events_without_a_counterpart_are_ignored() {
        let mut input = EguiInput::new(1.0);
        input.push(&WindowResizeEvent::new(10, 10).into());
        input.push(&MouseButtonPressedEvent::new(MouseButton::Other(9)).into());
        input.push(&KeyPressedEvent::new(KeyCode::UNKNOWN, 0).into());
        assert!(input.pending().is_empty());
    }

    #[test]
    fn raw_input_drains_the_queue() {
        let mut input = EguiInput::new(2.0);
        input.push(&KeyTypedEvent::new('a').into());

        let raw = input.take_raw_input((800, 600), 1.5);
        assert_eq!(raw.events.len(), 1);
        assert_eq!(
            raw.screen_rect,
            Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(400.0, 300.0)
            ))
        );
        assert_eq!(raw.time, Some(1.5));
        assert_eq!(
            raw.viewports
                .get(&egui::ViewportId::ROOT)
                .and_then(|viewport| viewport.native_pixels_per_point),
            Some(2.0)
        );
        assert!(input.pending().is_empty());
    }
}
