use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon in the plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Point-in-polygon test in the plane.
///
/// Uses the winding number algorithm. Points lying on an edge or vertex
/// (within [`TOLERANCE`]) count as inside.
#[must_use]
pub fn point_in_polygon_2d(point: &Point2, polygon: &[Point2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    if point_on_boundary_2d(point, polygon) {
        return true;
    }
    winding_number_2d(point, polygon) != 0
}

/// Returns `true` if `point` lies within [`TOLERANCE`] of any polygon edge.
#[must_use]
pub fn point_on_boundary_2d(point: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    (0..n).any(|i| point_to_segment_dist(point, &polygon[i], &polygon[(i + 1) % n]) < TOLERANCE)
}

/// Returns the minimum distance from `p` to the segment `a`→`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq < 1e-24 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Winding number of `point` with respect to polygon `verts`.
///
/// Non-zero => inside, zero => outside.
fn winding_number_2d(point: &Point2, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let p0 = verts[i];
        let p1 = verts[(i + 1) % n];
        let cross = cross_2d(&p0, &p1, point);

        if p0.y <= point.y {
            if p1.y > point.y && cross > 0.0 {
                winding += 1;
            }
        } else if p1.y <= point.y && cross < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Cross product of `(b - a)` and `(p - a)`.
#[inline]
fn cross_2d(a: &Point2, b: &Point2, p: &Point2) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn unit_square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert!((signed_area_2d(&unit_square()) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = unit_square();
        pts.reverse();
        assert!((signed_area_2d(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[p(0.0, 0.0), p(1.0, 1.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn inside_square() {
        assert!(point_in_polygon_2d(&p(0.5, 0.5), &unit_square()));
    }

    #[test]
    fn outside_square() {
        assert!(!point_in_polygon_2d(&p(1.5, 0.5), &unit_square()));
        assert!(!point_in_polygon_2d(&p(-0.1, -0.1), &unit_square()));
    }

    #[test]
    fn boundary_counts_as_inside() {
        let sq = unit_square();
        assert!(point_in_polygon_2d(&p(0.0, 0.0), &sq));
        assert!(point_in_polygon_2d(&p(1.0, 0.5), &sq));
        assert!(point_in_polygon_2d(&p(0.5, 1.0), &sq));
    }

    #[test]
    fn clockwise_winding_still_inside() {
        let mut sq = unit_square();
        sq.reverse();
        assert!(point_in_polygon_2d(&p(0.25, 0.75), &sq));
    }

    #[test]
    fn concave_notch_excluded() {
        // L-shape: the upper-right quadrant is cut away.
        let l = vec![
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 2.0),
            p(0.0, 2.0),
        ];
        assert!(point_in_polygon_2d(&p(0.5, 1.5), &l));
        assert!(point_in_polygon_2d(&p(1.5, 0.5), &l));
        assert!(!point_in_polygon_2d(&p(1.5, 1.5), &l));
    }

    #[test]
    fn too_few_vertices() {
        assert!(!point_in_polygon_2d(&p(0.0, 0.0), &[p(0.0, 0.0), p(1.0, 0.0)]));
    }

    #[test]
    fn segment_dist_basic() {
        let d = point_to_segment_dist(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((d - 1.0).abs() < TOLERANCE, "d={d}");
        let d = point_to_segment_dist(&p(3.0, 4.0), &p(0.0, 0.0), &p(0.0, 0.0));
        assert!((d - 5.0).abs() < TOLERANCE, "d={d}");
    }
}
