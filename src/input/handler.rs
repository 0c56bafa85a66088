use crate::{
    core::{bounds::Bounds, geo::Point, map::TacticalMap, viewport::Viewport},
    input::events::{InputEvent, KeyCode, MapEvent, MouseButton},
};

/// A single change to the session, derived from input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    ZoomIn,
    ZoomOut,
    /// Wheel zoom by notch direction
    Wheel { delta_y: f64 },
    ResetView,
    StartDrag { pointer: Point },
    DragTo { pointer: Point },
    EndDrag,
    /// Recompute the cursor readout at this pointer position
    Track { pointer: Point },
    ClearCursor,
}

/// Translates raw input into actions and applies them to a [`TacticalMap`].
///
/// Only the left button pans. Moves while dragging pan the image and still
/// update the readout.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    last_pointer: Option<Point>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions for one event given the current viewport state
    pub fn actions_for(&mut self, event: &InputEvent, viewport: &Viewport) -> Vec<Action> {
        match *event {
            InputEvent::PointerMove { position } => {
                self.last_pointer = Some(position);
                let mut actions = Vec::with_capacity(2);
                if viewport.is_dragging() {
                    actions.push(Action::DragTo { pointer: position });
                }
                actions.push(Action::Track { pointer: position });
                actions
            }
            InputEvent::PointerDown {
                position,
                button: MouseButton::Left,
            } => {
                self.last_pointer = Some(position);
                vec![Action::StartDrag { pointer: position }]
            }
            InputEvent::PointerDown { .. } => Vec::new(),
            InputEvent::PointerUp if viewport.is_dragging() => vec![Action::EndDrag],
            InputEvent::PointerUp => Vec::new(),
            InputEvent::PointerLeave => {
                self.last_pointer = None;
                let mut actions = vec![Action::ClearCursor];
                if viewport.is_dragging() {
                    actions.insert(0, Action::EndDrag);
                }
                actions
            }
            InputEvent::Wheel { delta_y } if delta_y != 0.0 => vec![Action::Wheel { delta_y }],
            InputEvent::Wheel { .. } => Vec::new(),
            InputEvent::ZoomIn | InputEvent::KeyPress { key: KeyCode::Plus } => {
                vec![Action::ZoomIn]
            }
            InputEvent::ZoomOut | InputEvent::KeyPress { key: KeyCode::Minus } => {
                vec![Action::ZoomOut]
            }
            InputEvent::ResetZoom | InputEvent::KeyPress { key: KeyCode::Home } => {
                vec![Action::ResetView]
            }
            InputEvent::KeyPress { key: KeyCode::Escape } if viewport.is_dragging() => {
                vec![Action::EndDrag]
            }
            InputEvent::KeyPress { .. } => Vec::new(),
        }
    }

    /// Handles one event against the session.
    ///
    /// `layout` is the untransformed box of the map image; the readout uses
    /// that box after the viewport's pan and zoom.
    pub fn handle_event(
        &mut self,
        map: &mut TacticalMap,
        event: &InputEvent,
        layout: &Bounds,
    ) -> Vec<MapEvent> {
        let actions = self.actions_for(event, &map.viewport);
        let mut events = Vec::new();
        let before = (map.viewport.zoom, map.viewport.offset);

        for action in actions {
            match action {
                Action::ZoomIn => map.viewport.zoom_in(),
                Action::ZoomOut => map.viewport.zoom_out(),
                Action::Wheel { delta_y } => map.viewport.wheel(delta_y),
                Action::ResetView => map.viewport.reset(),
                Action::StartDrag { pointer } => map.viewport.begin_drag(pointer),
                Action::DragTo { pointer } => map.viewport.drag_to(pointer),
                Action::EndDrag => map.viewport.end_drag(),
                Action::Track { pointer } => {
                    let image_rect = map.viewport.transformed_rect(layout);
                    if let Some(readout) = map.pointer_moved(&pointer, &image_rect) {
                        events.push(MapEvent::CursorMoved { readout });
                    }
                }
                Action::ClearCursor => {
                    map.pointer_left();
                    events.push(MapEvent::CursorCleared);
                }
            }
        }

        if (map.viewport.zoom, map.viewport.offset) != before {
            events.insert(
                0,
                MapEvent::ViewChanged {
                    zoom: map.viewport.zoom,
                    offset: map.viewport.offset,
                },
            );
        }
        events
    }

    pub fn last_pointer(&self) -> Option<Point> {
        self.last_pointer
    }
}
