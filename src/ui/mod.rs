pub mod painter;
pub mod widget;

pub use painter::{OverlayPainter, PaintStyle};
pub use widget::MapView;

pub trait UiMapExt {
    fn tactical_map(
        &mut self,
        map: &mut crate::TacticalMap,
        handler: &mut crate::InputHandler,
    ) -> egui::Response;
}

impl UiMapExt for egui::Ui {
    fn tactical_map(
        &mut self,
        map: &mut crate::TacticalMap,
        handler: &mut crate::InputHandler,
    ) -> egui::Response {
        self.add(MapView::new(map, handler))
    }
}
