use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Point2, TOLERANCE};

use super::Coordinate;

/// A closed ring of coordinates outlining one roof.
///
/// The closing edge from the last vertex back to the first is implicit.
/// Rings with fewer than three vertices are representable but enclose
/// nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Coordinate>,
}

/// Latitude/longitude extent of a polygon, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl LatLngBounds {
    /// North-south extent in degrees.
    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    /// East-west extent in degrees.
    #[must_use]
    pub fn lng_span(&self) -> f64 {
        self.east - self.west
    }
}

impl Polygon {
    /// Creates a polygon from its ordered vertices.
    #[must_use]
    pub fn new(vertices: Vec<Coordinate>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon from `(lat, lng)` pairs.
    #[must_use]
    pub fn from_lat_lng(pairs: &[(f64, f64)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|&(lat, lng)| Coordinate::new(lat, lng))
                .collect(),
        )
    }

    /// Returns the ordered vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Planar points (`x` = longitude, `y` = latitude).
    #[must_use]
    pub fn to_points(&self) -> Vec<Point2> {
        self.vertices.iter().map(Coordinate::to_point).collect()
    }

    /// `(lat, lng)` pairs, the form spherical routines consume.
    #[must_use]
    pub fn to_lat_lng(&self) -> Vec<(f64, f64)> {
        self.vertices.iter().map(|c| (c.lat(), c.lng())).collect()
    }

    /// Computes the bounding box with a single scan, or `None` for an
    /// empty polygon.
    #[must_use]
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let first = self.vertices.first()?;
        let init = LatLngBounds {
            south: first.lat(),
            north: first.lat(),
            west: first.lng(),
            east: first.lng(),
        };
        Some(self.vertices.iter().fold(init, |b, c| LatLngBounds {
            south: b.south.min(c.lat()),
            north: b.north.max(c.lat()),
            west: b.west.min(c.lng()),
            east: b.east.max(c.lng()),
        }))
    }

    /// Arithmetic mean of vertex latitudes (not area-weighted).
    #[must_use]
    pub fn mean_latitude(&self) -> Option<f64> {
        if self.vertices.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = self.vertices.len() as f64;
        Some(self.vertices.iter().map(Coordinate::lat).sum::<f64>() / n)
    }

    /// Returns `true` if the ring has fewer than three vertices or encloses
    /// no area in the degree plane.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3 || signed_area_2d(&self.to_points()).abs() < TOLERANCE * TOLERANCE
    }
}
