pub mod polygon_2d;
pub mod spherical;

/// 2D point type. `x` carries longitude, `y` carries latitude (degrees).
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons, in degrees.
pub const TOLERANCE: f64 = 1e-10;

/// Meters spanned by one degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// Meters in one international foot.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Square feet in one square meter.
pub const SQ_FEET_PER_SQ_METER: f64 = 10.7639;

/// Earth radius used for spherical area, in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;
