use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Creates a coordinate without range checks.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a coordinate, rejecting values outside `[-90, 90]` latitude
    /// or `[-180, 180]` longitude.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` for an out-of-range or
    /// non-finite component.
    pub fn checked(lat: f64, lng: f64) -> Result<Self> {
        check_range("lat", lat, 90.0)?;
        check_range("lng", lng, 180.0)?;
        Ok(Self { lat, lng })
    }

    /// Returns the latitude in degrees.
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns the longitude in degrees.
    #[must_use]
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Planar view of the coordinate: `x` is longitude, `y` is latitude.
    #[must_use]
    pub fn to_point(&self) -> Point2 {
        Point2::new(self.lng, self.lat)
    }
}

impl From<Point2> for Coordinate {
    fn from(p: Point2) -> Self {
        Self::new(p.y, p.x)
    }
}

fn check_range(parameter: &'static str, value: f64, limit: f64) -> Result<()> {
    if !value.is_finite() || value.abs() > limit {
        return Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min: -limit,
            max: limit,
        }
        .into());
    }
    Ok(())
}
