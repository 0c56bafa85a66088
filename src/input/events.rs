use crate::core::{geo::Point, map::CursorReadout};
use serde::{Deserialize, Serialize};

/// Input events the viewer forwards from its host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer moved over the map area
    PointerMove { position: Point },
    /// Button pressed over the map area
    PointerDown { position: Point, button: MouseButton },
    /// Button released anywhere
    PointerUp,
    /// Pointer left the map area
    PointerLeave,
    /// Scroll wheel; positive `delta_y` is scrolling down
    Wheel { delta_y: f64 },
    /// Keyboard input
    KeyPress { key: KeyCode },
    /// Zoom "+" button
    ZoomIn,
    /// Zoom "-" button
    ZoomOut,
    /// Reset view button
    ResetZoom,
}

/// Keyboard key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Plus,
    Minus,
    Home,
    Escape,
    Other(u32),
}

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Things the session reports back to the host after input
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Zoom or pan changed
    ViewChanged { zoom: f64, offset: Point },
    /// New cursor readout under the pointer
    CursorMoved { readout: CursorReadout },
    /// Pointer is no longer over the image
    CursorCleared,
}

impl InputEvent {
    /// Gets the primary position associated with this event, if any
    pub fn position(&self) -> Option<Point> {
        match self {
            InputEvent::PointerMove { position } => Some(*position),
            InputEvent::PointerDown { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Checks if this is a mouse/pointer event
    pub fn is_pointer_event(&self) -> bool {
        matches!(
            self,
            InputEvent::PointerMove { .. }
                | InputEvent::PointerDown { .. }
                | InputEvent::PointerUp
                | InputEvent::PointerLeave
                | InputEvent::Wheel { .. }
        )
    }

    /// Checks if this is a keyboard event
    pub fn is_keyboard_event(&self) -> bool {
        matches!(self, InputEvent::KeyPress { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_event_position() {
        let down = InputEvent::PointerDown {
            position: Point::new(100.0, 200.0),
            button: MouseButton::Left,
        };
        assert_eq!(down.position(), Some(Point::new(100.0, 200.0)));
        assert_eq!(InputEvent::ZoomIn.position(), None);
    }

    #[test]
    fn test_event_type_checks() {
        assert!(InputEvent::Wheel { delta_y: 1.0 }.is_pointer_event());
        assert!(!InputEvent::ResetZoom.is_pointer_event());

        let key = InputEvent::KeyPress { key: KeyCode::Plus };
        assert!(key.is_keyboard_event());
        assert!(!key.is_pointer_event());
    }
}
