use tracing::{debug, trace};

use crate::geometry::{GridCell, Polygon};
use crate::panel::{PanelPitch, PanelSpec};
use crate::provider::GeometryProvider;

use super::grid::{grid_line, whole_steps};

/// Packs whole panels into a roof polygon on a regular degree grid.
///
/// The grid is anchored at the polygon's south-west bounding-box corner and
/// uses one pitch for the whole polygon, taken at the mean vertex latitude.
/// Cells overhanging the north or east edge of the bounding box are dropped,
/// and a cell is kept only when all four corners lie inside the polygon.
pub struct GeneratePanels<'a> {
    polygon: &'a Polygon,
    panel: PanelSpec,
}

impl<'a> GeneratePanels<'a> {
    /// Creates a new `GeneratePanels` operation using the standard panel.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self {
            polygon,
            panel: PanelSpec::STANDARD,
        }
    }

    /// Sets the panel used as the packing unit.
    #[must_use]
    pub fn with_panel(mut self, panel: PanelSpec) -> Self {
        self.panel = panel;
        self
    }

    /// Grid pitch for this polygon, or `None` if it has no vertices.
    #[must_use]
    pub fn pitch(&self) -> Option<PanelPitch> {
        self.polygon
            .mean_latitude()
            .map(|lat| self.panel.dimensions_degrees(lat))
    }

    /// Executes the packing, returning accepted cells south to north, then
    /// west to east.
    ///
    /// Degenerate input (fewer than three vertices, zero area, an extent
    /// smaller than one pitch, or an unusable pitch near the poles) yields
    /// no cells.
    pub fn execute<G: GeometryProvider + ?Sized>(&self, geometry: &G) -> Vec<GridCell> {
        if self.polygon.is_degenerate() {
            return Vec::new();
        }
        let (Some(bounds), Some(pitch)) = (self.polygon.bounds(), self.pitch()) else {
            return Vec::new();
        };
        if !pitch.is_usable() {
            debug!(?pitch, "unusable panel pitch, skipping roof");
            return Vec::new();
        }

        let rows = whole_steps(bounds.lat_span(), pitch.height_deg);
        let cols = whole_steps(bounds.lng_span(), pitch.width_deg);

        let mut cells = Vec::new();
        for row in 0..rows {
            let south = grid_line(bounds.south, pitch.height_deg, row);
            let north = grid_line(bounds.south, pitch.height_deg, row + 1);
            for col in 0..cols {
                let cell = GridCell {
                    south,
                    north,
                    west: grid_line(bounds.west, pitch.width_deg, col),
                    east: grid_line(bounds.west, pitch.width_deg, col + 1),
                };
                if cell
                    .corners()
                    .iter()
                    .all(|corner| geometry.contains(corner, self.polygon))
                {
                    cells.push(cell);
                }
            }
        }

        trace!(rejected = rows * cols - cells.len(), "boundary cells rejected");
        debug!(
            vertices = self.polygon.len(),
            rows,
            cols,
            panels = cells.len(),
            "packed roof polygon"
        );
        cells
    }
}
