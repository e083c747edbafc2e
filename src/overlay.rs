use crate::geometry::{GridCell, Polygon};
use crate::registry::RoofId;

/// Rendering capability supplied by the map widget.
///
/// Every drawn shape is tagged with the roof it belongs to so the widget
/// can dispose of exactly that roof's shapes.
pub trait MapOverlay {
    /// Draws a roof outline.
    fn draw_outline(&mut self, roof: RoofId, polygon: &Polygon);

    /// Removes a roof outline.
    fn remove_outline(&mut self, roof: RoofId);

    /// Draws one panel rectangle.
    fn draw_panel(&mut self, roof: RoofId, cell: &GridCell);

    /// Removes one panel rectangle.
    fn remove_panel(&mut self, roof: RoofId, cell: &GridCell);
}

/// Overlay that draws nothing, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverlay;

impl MapOverlay for NoOverlay {
    fn draw_outline(&mut self, _roof: RoofId, _polygon: &Polygon) {}

    fn remove_outline(&mut self, _roof: RoofId) {}

    fn draw_panel(&mut self, _roof: RoofId, _cell: &GridCell) {}

    fn remove_panel(&mut self, _roof: RoofId, _cell: &GridCell) {}
}
