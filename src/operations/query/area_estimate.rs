use crate::geometry::Polygon;
use crate::math::SQ_FEET_PER_SQ_METER;
use crate::panel::PanelSpec;
use crate::provider::GeometryProvider;

/// Estimates how many panels a roof could hold by dividing its area by the
/// panel footprint.
///
/// Ignores the outline's shape and boundary losses, so the result is an
/// upper bound on what [`GeneratePanels`](crate::operations::packing::GeneratePanels)
/// places. It never feeds into [`Totals`](super::Totals).
pub struct EstimatePanelsByArea<'a> {
    polygon: &'a Polygon,
    panel: PanelSpec,
}

impl<'a> EstimatePanelsByArea<'a> {
    /// Creates a new `EstimatePanelsByArea` query using the standard panel.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self {
            polygon,
            panel: PanelSpec::STANDARD,
        }
    }

    /// Sets the panel whose footprint divides the area.
    #[must_use]
    pub fn with_panel(mut self, panel: PanelSpec) -> Self {
        self.panel = panel;
        self
    }

    /// Executes the query, returning the number of whole panel footprints.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn execute<G: GeometryProvider + ?Sized>(&self, geometry: &G) -> usize {
        let area_ft2 = geometry.area_m2(self.polygon) * SQ_FEET_PER_SQ_METER;
        let count = (area_ft2 / self.panel.area_ft2()).floor();
        if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Coordinate;
    use crate::operations::packing::GeneratePanels;
    use crate::provider::PlanarGeometry;

    struct FixedArea(f64);

    impl GeometryProvider for FixedArea {
        fn contains(&self, _point: &Coordinate, _polygon: &Polygon) -> bool {
            false
        }

        fn area_m2(&self, _polygon: &Polygon) -> f64 {
            self.0
        }
    }

    fn triangle() -> Polygon {
        Polygon::from_lat_lng(&[(0.0, 0.0), (0.0, 0.0002), (0.0002, 0.0)])
    }

    #[test]
    fn whole_footprints_only() {
        // 100 m² = 1076.39 ft², / 17.5 = 61.5
        assert_eq!(EstimatePanelsByArea::new(&triangle()).execute(&FixedArea(100.0)), 61);
    }

    #[test]
    fn zero_area() {
        assert_eq!(EstimatePanelsByArea::new(&triangle()).execute(&FixedArea(0.0)), 0);
        assert_eq!(EstimatePanelsByArea::new(&triangle()).execute(&FixedArea(f64::NAN)), 0);
    }

    #[test]
    fn bounds_grid_packing_from_above() {
        let polygon = triangle();
        let packed = GeneratePanels::new(&polygon).execute(&PlanarGeometry).len();
        let estimate = EstimatePanelsByArea::new(&polygon).execute(&PlanarGeometry);
        assert!(packed > 0);
        assert!(estimate > packed, "estimate {estimate}, packed {packed}");
    }
}
