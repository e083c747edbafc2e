use crate::geometry::{GridCell, Polygon};

slotmap::new_key_type! {
    /// Unique identifier for a roof in the registry.
    ///
    /// Identity is per insertion: two roofs with identical outlines get
    /// distinct ids.
    pub struct RoofId;
}

/// One drawn roof outline and the panels packed into it.
#[derive(Debug, Clone)]
pub struct Roof {
    polygon: Polygon,
    panels: Vec<GridCell>,
}

impl Roof {
    /// Creates a roof from an outline and its packed panels.
    #[must_use]
    pub fn new(polygon: Polygon, panels: Vec<GridCell>) -> Self {
        Self { polygon, panels }
    }

    /// The roof outline.
    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Packed panels in scan order.
    #[must_use]
    pub fn panels(&self) -> &[GridCell] {
        &self.panels
    }

    /// Number of packed panels.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Splits the roof into its outline and panels.
    #[must_use]
    pub fn into_parts(self) -> (Polygon, Vec<GridCell>) {
        (self.polygon, self.panels)
    }
}
