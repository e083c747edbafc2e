/// Relative slack, as a fraction of the pitch, allowed when deciding whether
/// the last row or column still fits inside the bounding box.
pub(super) const EDGE_SLACK: f64 = 1e-9;

/// Number of whole pitches that fit into `span`.
///
/// A step whose far edge overshoots `span` by less than [`EDGE_SLACK`]
/// pitches is still counted.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn whole_steps(span: f64, pitch: f64) -> usize {
    if span.is_nan() || pitch.is_nan() || span <= 0.0 || pitch <= 0.0 {
        return 0;
    }
    let steps = (span / pitch + EDGE_SLACK).floor();
    if steps.is_finite() && steps > 0.0 {
        steps as usize
    } else {
        0
    }
}

/// Grid line `index` pitches away from `origin`.
#[allow(clippy::cast_precision_loss)]
#[inline]
pub(super) fn grid_line(origin: f64, pitch: f64, index: usize) -> f64 {
    origin + index as f64 * pitch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple_counts_every_step() {
        let pitch = 1.3716e-5;
        assert_eq!(whole_steps(4.0 * pitch, pitch), 4);
        assert_eq!(whole_steps(pitch + pitch + pitch, pitch), 3);
    }

    #[test]
    fn partial_step_is_dropped() {
        assert_eq!(whole_steps(2.99, 1.0), 2);
        assert_eq!(whole_steps(0.5, 1.0), 0);
    }

    #[test]
    fn invalid_inputs_yield_nothing() {
        assert_eq!(whole_steps(0.0, 1.0), 0);
        assert_eq!(whole_steps(-1.0, 1.0), 0);
        assert_eq!(whole_steps(1.0, 0.0), 0);
        assert_eq!(whole_steps(1.0, f64::INFINITY), 0);
        assert_eq!(whole_steps(f64::NAN, 1.0), 0);
    }

    #[test]
    fn grid_lines_from_origin() {
        assert!((grid_line(2.0, 0.5, 0) - 2.0).abs() < f64::EPSILON);
        assert!((grid_line(2.0, 0.5, 3) - 3.5).abs() < f64::EPSILON);
    }
}
