use crate::{
    core::{geo::Point, map::TacticalMap},
    input::{
        events::{InputEvent, MouseButton},
        handler::InputHandler,
    },
    spatial::index::MarkerIndex,
    ui::painter::{to_bounds, to_rect, OverlayPainter, PaintStyle},
};
use egui::{
    Align2, Color32, FontId, PointerButton, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, Widget,
};

/// Hover radius around markers, in screen pixels
const HOVER_RADIUS_PX: f64 = 10.0;

/// Interactive map area: placeholder image frame, overlay, zoom buttons and
/// the "GAME POS" readout.
pub struct MapView<'a> {
    map: &'a mut TacticalMap,
    handler: &'a mut InputHandler,
    style: PaintStyle,
    show_controls: bool,
}

impl<'a> MapView<'a> {
    pub fn new(map: &'a mut TacticalMap, handler: &'a mut InputHandler) -> Self {
        Self {
            map,
            handler,
            style: PaintStyle::default(),
            show_controls: true,
        }
    }

    pub fn style(mut self, style: PaintStyle) -> Self {
        self.style = style;
        self
    }

    pub fn controls(mut self, show: bool) -> Self {
        self.show_controls = show;
        self
    }

    fn send(&mut self, event: InputEvent, layout: Rect) {
        self.handler.handle_event(self.map, &event, &to_bounds(layout));
    }
}

fn to_point(pos: Pos2) -> Point {
    Point::new(f64::from(pos.x), f64::from(pos.y))
}

/// Largest square centered in `rect`; map images are square
fn image_layout(rect: Rect) -> Rect {
    let side = rect.width().min(rect.height());
    Rect::from_center_size(rect.center(), Vec2::splat(side))
}

impl Widget for MapView<'_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let (rect, mut response) =
            ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let layout = image_layout(rect);

        if response.drag_started_by(PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                self.send(
                    InputEvent::PointerDown {
                        position: to_point(pos),
                        button: MouseButton::Left,
                    },
                    layout,
                );
            }
        }
        if response.drag_released() {
            self.send(InputEvent::PointerUp, layout);
        }

        let pointer = ui
            .input(|i| i.pointer.hover_pos())
            .filter(|pos| rect.contains(*pos) || self.map.viewport.is_dragging());
        match pointer {
            Some(pos) => self.send(InputEvent::PointerMove { position: to_point(pos) }, layout),
            None if self.map.cursor().is_some() => self.send(InputEvent::PointerLeave, layout),
            None => {}
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                // egui reports scrolling up as positive
                self.send(InputEvent::Wheel { delta_y: -f64::from(scroll) }, layout);
            }
        }

        if self.show_controls {
            let buttons = [
                ("+", InputEvent::ZoomIn, 10.0),
                ("-", InputEvent::ZoomOut, 45.0),
                ("1x", InputEvent::ResetZoom, 80.0),
            ];
            for (label, event, top) in buttons {
                let min = rect.right_top() + Vec2::new(-40.0, top);
                let button_rect = Rect::from_min_size(min, Vec2::splat(30.0));
                if ui.put(button_rect, egui::Button::new(label)).clicked() {
                    self.send(event, layout);
                }
            }
        }

        let image_rect = to_rect(&self.map.viewport.transformed_rect(&to_bounds(layout)));
        let overlay = self.map.overlay();
        let painter = ui.painter_at(rect);

        painter.rect_filled(image_rect, 0.0, Color32::from_gray(32));
        painter.rect_stroke(image_rect, 0.0, Stroke::new(1.0, Color32::from_gray(100)));
        painter.text(
            image_rect.left_top() + Vec2::new(8.0, 8.0),
            Align2::LEFT_TOP,
            &self.map.active_map().name,
            FontId::proportional(14.0),
            Color32::from_gray(160),
        );

        OverlayPainter::new(&painter, image_rect, &overlay, &self.style).paint(&overlay);

        if let Some(readout) = self.map.cursor() {
            let text = format!("GAME POS  {}", readout.format());
            let anchor = rect.left_bottom() + Vec2::new(8.0, -8.0);
            let background =
                Rect::from_min_size(anchor + Vec2::new(-4.0, -22.0), Vec2::new(240.0, 26.0));
            painter.rect_filled(background, 3.0, Color32::from_black_alpha(160));
            painter.text(
                anchor,
                Align2::LEFT_BOTTOM,
                text,
                FontId::monospace(12.0),
                Color32::WHITE,
            );

            let percent_per_px = 100.0 / f64::from(image_rect.width().max(1.0));
            let index = MarkerIndex::from_overlay(&overlay);
            let radius = HOVER_RADIUS_PX * percent_per_px;
            if let Some(hit) = index.nearest_within(&readout.percent, radius) {
                response = response.on_hover_text(hit.title.clone());
            }
        }

        if response.dragged() || response.hovered() {
            ui.ctx().request_repaint();
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_layout_is_centered_square() {
        let rect = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(400.0, 200.0));
        let layout = image_layout(rect);
        assert_eq!(layout.width(), 200.0);
        assert_eq!(layout.height(), 200.0);
        assert_eq!(layout.center(), rect.center());
    }
}
