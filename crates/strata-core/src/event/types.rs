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

//! Typed engine events.
//!
//! Each event kind has its own payload struct implementing [`TypedEvent`], so a
//! handler can be written against the concrete type it cares about. The
//! [`Event`] wrapper carries the payload together with the handled latch that
//! stops propagation through the layer stack.

use crate::platform::input::{KeyCode, MouseButton};
use crate::strata_bitflags;
use std::fmt;

strata_bitflags! {
    /// The broad families an event belongs to. An event may belong to several.
    pub struct EventCategory: u8 {
        /// Window and application lifecycle events.
        const APPLICATION = 1 << 0;
        /// Any user input.
        const INPUT = 1 << 1;
        /// Keyboard input.
        const KEYBOARD = 1 << 2;
        /// Mouse movement, scrolling and buttons.
        const MOUSE = 1 << 3;
        /// Mouse button presses and releases.
        const MOUSE_BUTTON = 1 << 4;
    }
}

/// The runtime kind of an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The user asked to close the window.
    WindowClose,
    /// The window's framebuffer changed size.
    WindowResize,
    /// A key went down, or auto-repeated.
    KeyPressed,
    /// A key went up.
    KeyReleased,
    /// A character was produced by the keyboard.
    KeyTyped,
    /// The cursor moved.
    MouseMoved,
    /// The mouse wheel or touchpad scrolled.
    MouseScrolled,
    /// A mouse button went down.
    MouseButtonPressed,
    /// A mouse button went up.
    MouseButtonReleased,
    /// A fixed-rate application tick.
    AppTick,
    /// An application update pass.
    AppUpdate,
    /// An application render pass.
    AppRender,
}

/// A concrete event payload with a statically known kind.
pub trait TypedEvent: fmt::Display + Sized + 'static {
    /// The kind every instance of this type reports.
    const KIND: EventKind;
    /// The categories every instance of this type belongs to.
    const CATEGORY: EventCategory;

    /// Borrows the typed payload if `payload` holds this event type.
    fn from_payload(payload: &EventPayload) -> Option<&Self>;
}

const INPUT_KEYBOARD: EventCategory = EventCategory::KEYBOARD.with(EventCategory::INPUT);
const INPUT_MOUSE: EventCategory = EventCategory::MOUSE.with(EventCategory::INPUT);
const INPUT_MOUSE_BUTTON: EventCategory = EventCategory::MOUSE_BUTTON.with(INPUT_MOUSE);

/// The user asked to close the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowCloseEvent;

/// The window's framebuffer changed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowResizeEvent {
    width: u32,
    height: u32,
}

impl WindowResizeEvent {
    /// Creates a resize event for the new framebuffer dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The new width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The new height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// A key went down. `repeat_count` is zero for the initial press and grows
/// while the key is held and the platform auto-repeats it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressedEvent {
    key_code: KeyCode,
    repeat_count: u32,
}

impl KeyPressedEvent {
    /// Creates a key press event.
    pub fn new(key_code: KeyCode, repeat_count: u32) -> Self {
        Self {
            key_code,
            repeat_count,
        }
    }

    /// The key that was pressed.
    pub fn key_code(&self) -> KeyCode {
        self.key_code
    }

    /// How many auto-repeats preceded this event.
    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }
}

/// A key went up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyReleasedEvent {
    key_code: KeyCode,
}

impl KeyReleasedEvent {
    /// Creates a key release event.
    pub fn new(key_code: KeyCode) -> Self {
        Self { key_code }
    }

    /// The key that was released.
    pub fn key_code(&self) -> KeyCode {
        self.key_code
    }
}

/// The keyboard produced a character (after layout and modifiers are applied).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTypedEvent {
    character: char,
}

impl KeyTypedEvent {
    /// Creates a typed-character event.
    pub fn new(character: char) -> Self {
        Self { character }
    }

    /// The character that was typed.
    pub fn character(&self) -> char {
        self.character
    }
}

/// The cursor moved within the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMovedEvent {
    x: f32,
    y: f32,
}

impl MouseMovedEvent {
    /// Creates a cursor movement event at window coordinates `(x, y)`.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The new x-coordinate.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// The new y-coordinate.
    pub fn y(&self) -> f32 {
        self.y
    }
}

/// The mouse wheel or touchpad scrolled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseScrolledEvent {
    x_offset: f32,
    y_offset: f32,
}

impl MouseScrolledEvent {
    /// Creates a scroll event with the given offsets.
    pub fn new(x_offset: f32, y_offset: f32) -> Self {
        Self { x_offset, y_offset }
    }

    /// Horizontal scroll amount.
    pub fn x_offset(&self) -> f32 {
        self.x_offset
    }

    /// Vertical scroll amount.
    pub fn y_offset(&self) -> f32 {
        self.y_offset
    }
}

/// A mouse button went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonPressedEvent {
    button: MouseButton,
}

impl MouseButtonPressedEvent {
    /// Creates a button press event.
    pub fn new(button: MouseButton) -> Self {
        Self { button }
    }

    /// The button that was pressed.
    pub fn button(&self) -> MouseButton {
        self.button
    }
}

/// A mouse button went up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonReleasedEvent {
    button: MouseButton,
}

impl MouseButtonReleasedEvent {
    /// Creates a button release event.
    pub fn new(button: MouseButton) -> Self {
        Self { button }
    }

    /// The button that was released.
    pub fn button(&self) -> MouseButton {
        self.button
    }
}

/// A fixed-rate application tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppTickEvent;

/// An application update pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppUpdateEvent;

/// An application render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppRenderEvent;

impl fmt::Display for WindowCloseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowCloseEvent")
    }
}

impl fmt::Display for WindowResizeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowResizeEvent: {}, {}", self.width, self.height)
    }
}

impl fmt::Display for KeyPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KeyPressedEvent: {} ({} repeats)",
            self.key_code, self.repeat_count
        )
    }
}

impl fmt::Display for KeyReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyReleasedEvent: {}", self.key_code)
    }
}

impl fmt::Display for KeyTypedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyTypedEvent: {}", self.character)
    }
}

impl fmt::Display for MouseMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseMovedEvent: {}, {}", self.x, self.y)
    }
}

impl fmt::Display for MouseScrolledEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseScrolledEvent: {}, {}", self.x_offset, self.y_offset)
    }
}

impl fmt::Display for MouseButtonPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseButtonPressedEvent: {}", self.button)
    }
}

impl fmt::Display for MouseButtonReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseButtonReleasedEvent: {}", self.button)
    }
}

impl fmt::Display for AppTickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppTickEvent")
    }
}

impl fmt::Display for AppUpdateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppUpdateEvent")
    }
}

impl fmt::Display for AppRenderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppRenderEvent")
    }
}

/// The payload of an [`Event`], one variant per [`EventKind`].
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum EventPayload {
    WindowClose(WindowCloseEvent),
    WindowResize(WindowResizeEvent),
    KeyPressed(KeyPressedEvent),
    KeyReleased(KeyReleasedEvent),
    KeyTyped(KeyTypedEvent),
    MouseMoved(MouseMovedEvent),
    MouseScrolled(MouseScrolledEvent),
    MouseButtonPressed(MouseButtonPressedEvent),
    MouseButtonReleased(MouseButtonReleasedEvent),
    AppTick(AppTickEvent),
    AppUpdate(AppUpdateEvent),
    AppRender(AppRenderEvent),
}

/// Wires a payload struct to its [`EventPayload`] variant, kind and categories.
macro_rules! typed_event {
    ($ty:ident, $variant:ident, $category:expr) => {
        impl TypedEvent for $ty {
            const KIND: EventKind = EventKind::$variant;
            const CATEGORY: EventCategory = $category;

            fn from_payload(payload: &EventPayload) -> Option<&Self> {
                match payload {
                    EventPayload::$variant(event) => Some(event),
                    _ => None,
                }
            }
        }

        impl From<$ty> for EventPayload {
            fn from(event: $ty) -> Self {
                EventPayload::$variant(event)
            }
        }

        impl From<$ty> for Event {
            fn from(event: $ty) -> Self {
                Event::new(EventPayload::$variant(event))
            }
        }
    };
}

typed_event!(WindowCloseEvent, WindowClose, EventCategory::APPLICATION);
typed_event!(WindowResizeEvent, WindowResize, EventCategory::APPLICATION);
typed_event!(KeyPressedEvent, KeyPressed, INPUT_KEYBOARD);
typed_event!(KeyReleasedEvent, KeyReleased, INPUT_KEYBOARD);
typed_event!(KeyTypedEvent, KeyTyped, INPUT_KEYBOARD);
typed_event!(MouseMovedEvent, MouseMoved, INPUT_MOUSE);
typed_event!(MouseScrolledEvent, MouseScrolled, INPUT_MOUSE);
typed_event!(MouseButtonPressedEvent, MouseButtonPressed, INPUT_MOUSE_BUTTON);
typed_event!(MouseButtonReleasedEvent, MouseButtonReleased, INPUT_MOUSE_BUTTON);
typed_event!(AppTickEvent, AppTick, EventCategory::APPLICATION);
typed_event!(AppUpdateEvent, AppUpdate, EventCategory::APPLICATION);
typed_event!(AppRenderEvent, AppRender, EventCategory::APPLICATION);

impl EventPayload {
    /// The runtime kind of this payload.
    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::WindowClose(_) => EventKind::WindowClose,
            EventPayload::WindowResize(_) => EventKind::WindowResize,
            EventPayload::KeyPressed(_) => EventKind::KeyPressed,
            EventPayload::KeyReleased(_) => EventKind::KeyReleased,
            EventPayload::KeyTyped(_) => EventKind::KeyTyped,
            EventPayload::MouseMoved(_) => EventKind::MouseMoved,
            EventPayload::MouseScrolled(_) => EventKind::MouseScrolled,
            EventPayload::MouseButtonPressed(_) => EventKind::MouseButtonPressed,
            EventPayload::MouseButtonReleased(_) => EventKind::MouseButtonReleased,
            EventPayload::AppTick(_) => EventKind::AppTick,
            EventPayload::AppUpdate(_) => EventKind::AppUpdate,
            EventPayload::AppRender(_) => EventKind::AppRender,
        }
    }

    /// The categories this payload belongs to.
    pub fn category(&self) -> EventCategory {
        match self {
            EventPayload::WindowClose(_) => WindowCloseEvent::CATEGORY,
            EventPayload::WindowResize(_) => WindowResizeEvent::CATEGORY,
            EventPayload::KeyPressed(_) => KeyPressedEvent::CATEGORY,
            EventPayload::KeyReleased(_) => KeyReleasedEvent::CATEGORY,
            EventPayload::KeyTyped(_) => KeyTypedEvent::CATEGORY,
            EventPayload::MouseMoved(_) => MouseMovedEvent::CATEGORY,
            EventPayload::MouseScrolled(_) => MouseScrolledEvent::CATEGORY,
            EventPayload::MouseButtonPressed(_) => MouseButtonPressedEvent::CATEGORY,
            EventPayload::MouseButtonReleased(_) => MouseButtonReleasedEvent::CATEGORY,
            EventPayload::AppTick(_) => AppTickEvent::CATEGORY,
            EventPayload::AppUpdate(_) => AppUpdateEvent::CATEGORY,
            EventPayload::AppRender(_) => AppRenderEvent::CATEGORY,
        }
    }
}

impl fmt::Display for EventPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventPayload::WindowClose(e) => fmt::Display::fmt(e, f),
            EventPayload::WindowResize(e) => fmt::Display::fmt(e, f),
            EventPayload::KeyPressed(e) => fmt::Display::fmt(e, f),
            EventPayload::KeyReleased(e) => fmt::Display::fmt(e, f),
            EventPayload::KeyTyped(e) => fmt::Display::fmt(e, f),
            EventPayload::MouseMoved(e) => fmt::Display::fmt(e, f),
            EventPayload::MouseScrolled(e) => fmt::Display::fmt(e, f),
            EventPayload::MouseButtonPressed(e) => fmt::Display::fmt(e, f),
            EventPayload::MouseButtonReleased(e) => fmt::Display::fmt(e, f),
            EventPayload::AppTick(e) => fmt::Display::fmt(e, f),
            EventPayload::AppUpdate(e) => fmt::Display::fmt(e, f),
            EventPayload::AppRender(e) => fmt::Display::fmt(e, f),
        }
    }
}

/// An engine event: an immutable payload plus the handled latch.
///
/// Once [`Event::mark_handled`] has been called the event stays handled; there
/// is no way to reset it.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    payload: EventPayload,
    handled: bool,
}

impl Event {
    /// Wraps a payload into an unhandled event.
    pub fn new(payload: EventPayload) -> Self {
        Self {
            payload,
            handled: false,
        }
    }

    /// The runtime kind of the event.
    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }

    /// The categories the event belongs to.
    pub fn category(&self) -> EventCategory {
        self.payload.category()
    }

    /// Returns `true` if the event belongs to any of the given categories.
    pub fn is_in_category(&self, category: EventCategory) -> bool {
        self.category().intersects(category)
    }

    /// The event payload.
    pub fn payload(&self) -> &EventPayload {
        &self.payload
    }

    /// Borrows the payload as `T` if the event is of that kind.
    pub fn downcast<T: TypedEvent>(&self) -> Option<&T> {
        T::from_payload(&self.payload)
    }

    /// Returns `true` once a handler or layer has consumed the event.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Marks the event as consumed. Further layers will not receive it.
    pub fn mark_handled(&mut self) {
        self.handled = true;
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.payload, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_non_exclusive() {
        let key: Event = KeyPressedEvent::new(KeyCode::A, 0).into();
        assert!(key.is_in_category(EventCategory::INPUT));
        assert!(key.is_in_category(EventCategory::KEYBOARD));
        assert!(!key.is_in_category(EventCategory::MOUSE));

        let click: Event = MouseButtonPressedEvent::new(MouseButton::Left).into();
        assert_eq!(
            click.category(),
            EventCategory::INPUT | EventCategory::MOUSE | EventCategory::MOUSE_BUTTON
        );

        let close: Event = WindowCloseEvent.into();
        assert_eq!(close.category(), EventCategory::APPLICATION);
        assert!(!close.is_in_category(EventCategory::INPUT));
    }

    #[test]
    fn kind_matches_static_kind() {
        let events: Vec<Event> = vec![
            WindowResizeEvent::new(800, 600).into(),
            KeyTypedEvent::new('x').into(),
            MouseScrolledEvent::new(0.0, -1.0).into(),
            AppRenderEvent.into(),
        ];
        assert_eq!(events[0].kind(), WindowResizeEvent::KIND);
        assert_eq!(events[1].kind(), KeyTypedEvent::KIND);
        assert_eq!(events[2].kind(), MouseScrolledEvent::KIND);
        assert_eq!(events[3].kind(), AppRenderEvent::KIND);
    }

    #[test]
    fn descriptions() {
        let cases: Vec<(Event, &str)> = vec![
            (WindowCloseEvent.into(), "WindowCloseEvent"),
            (
                WindowResizeEvent::new(1280, 720).into(),
                "WindowResizeEvent: 1280, 720",
            ),
            (
                KeyPressedEvent::new(KeyCode::A, 2).into(),
                "KeyPressedEvent: 65 (2 repeats)",
            ),
            (KeyReleasedEvent::new(KeyCode::ESCAPE).into(), "KeyReleasedEvent: 256"),
            (KeyTypedEvent::new('q').into(), "KeyTypedEvent: q"),
            (MouseMovedEvent::new(1.5, 2.0).into(), "MouseMovedEvent: 1.5, 2"),
            (
                MouseButtonReleasedEvent::new(MouseButton::Middle).into(),
                "MouseButtonReleasedEvent: Middle",
            ),
        ];
        for (event, expected) in cases {
            assert_eq!(event.to_string(), expected);
        }
    }

    #[test]
    fn handled_latch_never_resets() {
        let mut event: Event = AppTickEvent.into();
        assert!(!event.is_handled());
        event.mark_handled();
        event.mark_handled();
        assert!(event.is_handled());
    }

    #[test]
    fn downcast_only_matches_own_kind() {
        let event: Event = MouseMovedEvent::new(4.0, 8.0).into();
        assert!(event.downcast::<MouseMovedEvent>().is_some());
        assert!(event.downcast::<MouseScrolledEvent>().is_none());
    }
}
