use crate::error::Result;
use crate::panel::PanelSpec;

/// Parameters controlling layout and reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Panel used as the packing unit.
    pub panel: PanelSpec,
    /// Whether the consumption-target field is reported.
    pub consumption_target: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            panel: PanelSpec::STANDARD,
            consumption_target: true,
        }
    }
}

impl LayoutConfig {
    /// Builds a config around a custom panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the panel spec is invalid.
    pub fn with_panel(width_ft: f64, height_ft: f64, output_kwh: f64) -> Result<Self> {
        Ok(Self {
            panel: PanelSpec::new(width_ft, height_ft, output_kwh)?,
            ..Self::default()
        })
    }

    /// Disables the consumption-target field.
    #[must_use]
    pub fn without_consumption_target(mut self) -> Self {
        self.consumption_target = false;
        self
    }
}
