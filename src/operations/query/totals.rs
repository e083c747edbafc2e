use std::fmt;

use crate::consumption::Consumption;
use crate::math::SQ_FEET_PER_SQ_METER;
use crate::panel::PanelSpec;
use crate::provider::GeometryProvider;
use crate::registry::RoofRegistry;

/// Aggregate figures across every tracked roof.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    /// Combined roof area in square feet.
    pub area_ft2: f64,
    /// Number of packed panels.
    pub panel_count: usize,
    /// Yield of the packed panels in kWh.
    pub energy_kwh: f64,
    /// Panels required to cover the consumption target.
    pub panels_needed: u64,
}

/// Display strings for [`Totals`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsReport {
    pub area_ft2: String,
    pub panel_count: String,
    pub energy_kwh: String,
    /// Present only when the consumption target is reported.
    pub panels_needed: Option<String>,
}

impl Totals {
    /// Formats the figures for display: area and energy with two decimals,
    /// counts as integers.
    #[must_use]
    pub fn report(&self, with_panels_needed: bool) -> TotalsReport {
        TotalsReport {
            area_ft2: format!("{:.2}", self.area_ft2),
            panel_count: self.panel_count.to_string(),
            energy_kwh: format!("{:.2}", self.energy_kwh),
            panels_needed: with_panels_needed.then(|| self.panels_needed.to_string()),
        }
    }
}

impl fmt::Display for TotalsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "area: {} ft², panels: {}, production: {} kWh",
            self.area_ft2, self.panel_count, self.energy_kwh
        )?;
        if let Some(needed) = &self.panels_needed {
            write!(f, ", needed: {needed}")?;
        }
        Ok(())
    }
}

/// Recomputes [`Totals`] from scratch over a roof registry.
pub struct ComputeTotals {
    consumption: Consumption,
    panel: PanelSpec,
}

impl ComputeTotals {
    /// Creates a new `ComputeTotals` query using the standard panel.
    #[must_use]
    pub fn new(consumption: Consumption) -> Self {
        Self {
            consumption,
            panel: PanelSpec::STANDARD,
        }
    }

    /// Sets the panel whose rated output is used.
    #[must_use]
    pub fn with_panel(mut self, panel: PanelSpec) -> Self {
        self.panel = panel;
        self
    }

    /// Executes the query.
    pub fn execute<G: GeometryProvider + ?Sized>(
        &self,
        registry: &RoofRegistry,
        geometry: &G,
    ) -> Totals {
        let area_m2: f64 = registry
            .iter()
            .map(|(_, roof)| geometry.area_m2(roof.polygon()))
            .sum();
        let panel_count = registry.panel_count();

        #[allow(clippy::cast_precision_loss)]
        let energy_kwh = panel_count as f64 * self.panel.output_kwh();

        Totals {
            area_ft2: area_m2 * SQ_FEET_PER_SQ_METER,
            panel_count,
            energy_kwh,
            panels_needed: panels_needed(self.consumption, &self.panel),
        }
    }
}

/// Whole panels required to meet `consumption`; zero without a target.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn panels_needed(consumption: Consumption, panel: &PanelSpec) -> u64 {
    let kwh = consumption.kwh();
    if kwh <= 0.0 {
        return 0;
    }
    let needed = (kwh / panel.output_kwh()).ceil();
    if needed.is_finite() {
        needed as u64
    } else {
        u64::MAX
    }
}
