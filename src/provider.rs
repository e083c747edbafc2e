use crate::geometry::{Coordinate, Polygon};
use crate::math::polygon_2d::point_in_polygon_2d;
use crate::math::spherical;

/// Geometry capabilities supplied by the mapping collaborator.
pub trait GeometryProvider {
    /// Returns `true` if `point` lies inside `polygon`.
    fn contains(&self, point: &Coordinate, polygon: &Polygon) -> bool;

    /// Spherical area enclosed by `polygon`, in square meters.
    fn area_m2(&self, polygon: &Polygon) -> f64;
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for &G {
    fn contains(&self, point: &Coordinate, polygon: &Polygon) -> bool {
        (**self).contains(point, polygon)
    }

    fn area_m2(&self, polygon: &Polygon) -> f64 {
        (**self).area_m2(polygon)
    }
}

/// Built-in provider: winding-number containment in the lat/lng degree
/// plane (boundary points inside) and spherical-excess area.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarGeometry;

impl GeometryProvider for PlanarGeometry {
    fn contains(&self, point: &Coordinate, polygon: &Polygon) -> bool {
        point_in_polygon_2d(&point.to_point(), &polygon.to_points())
    }

    fn area_m2(&self, polygon: &Polygon) -> f64 {
        spherical::area_m2(&polygon.to_lat_lng())
    }
}
