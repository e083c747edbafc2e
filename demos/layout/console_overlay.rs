use solar_roof::{GridCell, MapOverlay, Polygon, RoofId};
use tracing::info;

/// Logs every shape instead of drawing it.
#[derive(Debug, Default)]
pub struct ConsoleOverlay {
    drawn: usize,
    removed: usize,
}

impl ConsoleOverlay {
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    pub fn removed(&self) -> usize {
        self.removed
    }
}

impl MapOverlay for ConsoleOverlay {
    fn draw_outline(&mut self, roof: RoofId, polygon: &Polygon) {
        info!(?roof, vertices = polygon.len(), "draw outline");
        self.drawn += 1;
    }

    fn remove_outline(&mut self, roof: RoofId) {
        info!(?roof, "remove outline");
        self.removed += 1;
    }

    fn draw_panel(&mut self, _roof: RoofId, _cell: &GridCell) {
        self.drawn += 1;
    }

    fn remove_panel(&mut self, _roof: RoofId, _cell: &GridCell) {
        self.removed += 1;
    }
}
