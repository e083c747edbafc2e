use super::EARTH_RADIUS_M;

/// Computes the signed area of a closed path on a sphere of radius
/// [`EARTH_RADIUS_M`], in square meters.
///
/// `path` holds `(lat, lng)` pairs in degrees; the closing edge from the
/// last vertex back to the first is implicit. Each edge contributes the
/// signed area of the triangle it forms with the north pole.
#[must_use]
pub fn signed_area_m2(path: &[(f64, f64)]) -> f64 {
    signed_area_on_sphere(path, EARTH_RADIUS_M)
}

/// Unsigned variant of [`signed_area_m2`].
#[must_use]
pub fn area_m2(path: &[(f64, f64)]) -> f64 {
    signed_area_m2(path).abs()
}

/// Signed spherical area of `path` on a sphere of the given radius.
#[must_use]
pub fn signed_area_on_sphere(path: &[(f64, f64)], radius: f64) -> f64 {
    if path.len() < 3 {
        return 0.0;
    }

    let Some(&(last_lat, last_lng)) = path.last() else {
        return 0.0;
    };
    let mut prev_tan_lat = polar_tan(last_lat);
    let mut prev_lng = last_lng.to_radians();

    let mut total = 0.0;
    for &(lat, lng) in path {
        let tan_lat = polar_tan(lat);
        let lng = lng.to_radians();
        total += polar_triangle_area(tan_lat, lng, prev_tan_lat, prev_lng);
        prev_tan_lat = tan_lat;
        prev_lng = lng;
    }
    total * radius * radius
}

/// `tan` of half the colatitude.
#[inline]
fn polar_tan(lat_deg: f64) -> f64 {
    ((std::f64::consts::FRAC_PI_2 - lat_deg.to_radians()) / 2.0).tan()
}

/// Signed area of the spherical triangle (pole, p1, p2) on the unit sphere.
fn polar_triangle_area(tan1: f64, lng1: f64, tan2: f64, lng2: f64) -> f64 {
    let delta_lng = lng1 - lng2;
    let t = tan1 * tan2;
    2.0 * (t * delta_lng.sin()).atan2(1.0 + t * delta_lng.cos())
}
