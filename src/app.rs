use tracing::debug;

use crate::config::LayoutConfig;
use crate::consumption::Consumption;
use crate::geometry::Polygon;
use crate::operations::query::{ComputeTotals, Totals, TotalsReport};
use crate::overlay::MapOverlay;
use crate::provider::GeometryProvider;
use crate::registry::{Roof, RoofId, RoofRegistry};

/// Application state behind the roof drawing UI.
///
/// Owns the roof registry and the consumption input; the geometry provider
/// and the map overlay are injected. Each handler mutates state, keeps the
/// overlay in sync and returns freshly recomputed totals.
#[derive(Debug)]
pub struct SolarApp<G, O> {
    config: LayoutConfig,
    geometry: G,
    overlay: O,
    registry: RoofRegistry,
    consumption: Consumption,
}

impl<G: GeometryProvider, O: MapOverlay> SolarApp<G, O> {
    /// Creates an app with no roofs and no consumption target.
    #[must_use]
    pub fn new(config: LayoutConfig, geometry: G, overlay: O) -> Self {
        Self {
            config,
            geometry,
            overlay,
            registry: RoofRegistry::new(),
            consumption: Consumption::ZERO,
        }
    }

    /// A polygon was completed: pack it, track it and draw its panels.
    pub fn on_polygon_completed(&mut self, polygon: Polygon) -> (RoofId, Totals) {
        let id = self
            .registry
            .add(polygon, self.config.panel, &self.geometry);
        if let Ok(roof) = self.registry.roof(id) {
            self.overlay.draw_outline(id, roof.polygon());
            for cell in roof.panels() {
                self.overlay.draw_panel(id, cell);
            }
        }
        (id, self.totals())
    }

    /// A roof outline was clicked: remove it with its panels.
    ///
    /// Clicking an unknown or already removed roof changes nothing.
    pub fn on_polygon_clicked(&mut self, roof: RoofId) -> Totals {
        if let Some(removed) = self.registry.remove(roof) {
            self.dispose(roof, &removed);
        } else {
            debug!(?roof, "click on untracked roof ignored");
        }
        self.totals()
    }

    /// Clear was requested: remove every roof and panel.
    pub fn on_clear_requested(&mut self) -> Totals {
        for (id, roof) in self.registry.clear() {
            self.dispose(id, &roof);
        }
        self.totals()
    }

    /// The consumption field changed. Unreadable input counts as zero.
    pub fn on_consumption_changed(&mut self, input: &str) -> Totals {
        self.consumption = Consumption::parse(input);
        debug!(kwh = self.consumption.kwh(), "consumption updated");
        self.totals()
    }

    /// Full recompute of the totals.
    #[must_use]
    pub fn totals(&self) -> Totals {
        ComputeTotals::new(self.consumption)
            .with_panel(self.config.panel)
            .execute(&self.registry, &self.geometry)
    }

    /// Display strings for the current totals.
    #[must_use]
    pub fn report(&self) -> TotalsReport {
        self.totals().report(self.config.consumption_target)
    }

    /// The tracked roofs.
    #[must_use]
    pub fn registry(&self) -> &RoofRegistry {
        &self.registry
    }

    /// The current consumption target.
    #[must_use]
    pub fn consumption(&self) -> Consumption {
        self.consumption
    }

    /// The injected overlay.
    #[must_use]
    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn dispose(&mut self, id: RoofId, roof: &Roof) {
        for cell in roof.panels() {
            self.overlay.remove_panel(id, cell);
        }
        self.overlay.remove_outline(id);
    }
}
