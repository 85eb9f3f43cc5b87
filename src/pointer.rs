//! Host pointer events reduced to the inputs that drive a drag.

use iced::{
    mouse::{self, Button, Cursor},
    touch, Event, Point,
};

/// Pointer activity relevant to dragging, with positions in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Pressed(Point),
    Moved(Point),
    Released,
    /// The host cancelled the gesture.
    Lost,
}

/// Extracts drag-relevant input from a host event.
///
/// Only the left mouse button and touch fingers drive the slider.
pub fn pointer_input(event: &Event, cursor: Cursor) -> Option<PointerInput> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(Button::Left)) => {
            cursor.position().map(PointerInput::Pressed)
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(PointerInput::Moved(*position)),
        Event::Mouse(mouse::Event::ButtonReleased(Button::Left)) => Some(PointerInput::Released),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(PointerInput::Pressed(*position))
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(PointerInput::Moved(*position))
        }
        Event::Touch(touch::Event::FingerLifted { .. }) => Some(PointerInput::Released),
        Event::Touch(touch::Event::FingerLost { .. }) => Some(PointerInput::Lost),
        _ => None,
    }
}
