use crate::error::{ConfigError, Result};
use crate::math::{METERS_PER_DEGREE_LAT, METERS_PER_FOOT};

/// Physical footprint and rated output of one solar panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSpec {
    width_ft: f64,
    height_ft: f64,
    output_kwh: f64,
}

/// Angular size of one panel at a reference latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPitch {
    /// East-west extent in degrees of longitude.
    pub width_deg: f64,
    /// North-south extent in degrees of latitude.
    pub height_deg: f64,
}

impl PanelSpec {
    /// The standard 3.5 × 5 ft panel rated at 48 kWh.
    pub const STANDARD: Self = Self {
        width_ft: 3.5,
        height_ft: 5.0,
        output_kwh: 48.0,
    };

    /// Creates a panel spec.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension or the output is not a positive,
    /// finite number.
    pub fn new(width_ft: f64, height_ft: f64, output_kwh: f64) -> Result<Self> {
        for (name, value) in [
            ("width_ft", width_ft),
            ("height_ft", height_ft),
            ("output_kwh", output_kwh),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidPanelSpec(format!(
                    "{name} must be positive, got {value}"
                ))
                .into());
            }
        }
        Ok(Self {
            width_ft,
            height_ft,
            output_kwh,
        })
    }

    /// Panel width in feet (east-west).
    #[must_use]
    pub fn width_ft(&self) -> f64 {
        self.width_ft
    }

    /// Panel height in feet (north-south).
    #[must_use]
    pub fn height_ft(&self) -> f64 {
        self.height_ft
    }

    /// Rated output per panel in kWh.
    #[must_use]
    pub fn output_kwh(&self) -> f64 {
        self.output_kwh
    }

    /// Footprint area in square feet.
    #[must_use]
    pub fn area_ft2(&self) -> f64 {
        self.width_ft * self.height_ft
    }

    /// Converts the footprint into degrees at `reference_lat` (degrees).
    ///
    /// Uses a flat local projection: a degree of latitude is always
    /// 111 320 m, a degree of longitude shrinks with `cos(lat)`. Toward
    /// the poles the width diverges.
    #[must_use]
    pub fn dimensions_degrees(&self, reference_lat: f64) -> PanelPitch {
        let meters_per_deg_lng = METERS_PER_DEGREE_LAT * reference_lat.to_radians().cos();
        PanelPitch {
            width_deg: self.width_ft * METERS_PER_FOOT / meters_per_deg_lng,
            height_deg: self.height_ft * METERS_PER_FOOT / METERS_PER_DEGREE_LAT,
        }
    }
}

impl Default for PanelSpec {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl PanelPitch {
    /// Returns `true` if both extents are finite and positive.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.width_deg.is_finite()
            && self.height_deg.is_finite()
            && self.width_deg > 0.0
            && self.height_deg > 0.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn standard_panel() {
        let spec = PanelSpec::default();
        assert_relative_eq!(spec.width_ft(), 3.5);
        assert_relative_eq!(spec.height_ft(), 5.0);
        assert_relative_eq!(spec.output_kwh(), 48.0);
        assert_relative_eq!(spec.area_ft2(), 17.5);
    }

    #[test]
    fn pitch_at_equator() {
        let pitch = PanelSpec::STANDARD.dimensions_degrees(0.0);
        assert_relative_eq!(pitch.width_deg, 3.5 * 0.3048 / 111_320.0);
        assert_relative_eq!(pitch.height_deg, 5.0 * 0.3048 / 111_320.0);
        assert!(pitch.is_usable());
    }

    #[test]
    fn width_grows_with_latitude() {
        let equator = PanelSpec::STANDARD.dimensions_degrees(0.0);
        let sixty = PanelSpec::STANDARD.dimensions_degrees(60.0);
        assert_relative_eq!(sixty.width_deg, 2.0 * equator.width_deg, max_relative = 1e-12);
        assert_relative_eq!(sixty.height_deg, equator.height_deg);
    }

    #[test]
    fn symmetric_about_equator() {
        let north = PanelSpec::STANDARD.dimensions_degrees(35.0);
        let south = PanelSpec::STANDARD.dimensions_degrees(-35.0);
        assert_relative_eq!(north.width_deg, south.width_deg);
    }

    #[test]
    fn pole_diverges() {
        let pitch = PanelSpec::STANDARD.dimensions_degrees(90.0);
        // cos(90°) is ~6e-17, not exactly zero.
        assert!(pitch.width_deg > 1e10 || !pitch.width_deg.is_finite());
    }

    #[test]
    fn custom_spec_validation() {
        assert!(PanelSpec::new(3.0, 6.0, 50.0).is_ok());
        assert!(PanelSpec::new(0.0, 6.0, 50.0).is_err());
        assert!(PanelSpec::new(3.0, -1.0, 50.0).is_err());
        assert!(PanelSpec::new(3.0, 6.0, f64::NAN).is_err());
    }
}
