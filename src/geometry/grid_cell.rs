use super::Coordinate;

/// An axis-aligned rectangle in degree space, one panel footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl GridCell {
    /// Creates a cell from its south-west corner and pitch.
    #[must_use]
    pub fn from_corner(south: f64, west: f64, height_deg: f64, width_deg: f64) -> Self {
        Self {
            south,
            north: south + height_deg,
            west,
            east: west + width_deg,
        }
    }

    /// The four corners, counter-clockwise from south-west.
    #[must_use]
    pub fn corners(&self) -> [Coordinate; 4] {
        [
            Coordinate::new(self.south, self.west),
            Coordinate::new(self.south, self.east),
            Coordinate::new(self.north, self.east),
            Coordinate::new(self.north, self.west),
        ]
    }

    /// Returns `true` if the interiors of the two cells intersect.
    #[must_use]
    pub fn overlaps(&self, other: &GridCell, tolerance: f64) -> bool {
        self.south < other.north - tolerance
            && other.south < self.north - tolerance
            && self.west < other.east - tolerance
            && other.west < self.east - tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_from_bounds() {
        let cell = GridCell::from_corner(1.0, 2.0, 0.5, 0.25);
        let [sw, se, ne, nw] = cell.corners();
        assert_eq!(sw, Coordinate::new(1.0, 2.0));
        assert_eq!(se, Coordinate::new(1.0, 2.25));
        assert_eq!(ne, Coordinate::new(1.5, 2.25));
        assert_eq!(nw, Coordinate::new(1.5, 2.0));
    }

    #[test]
    fn neighbours_share_edge_without_overlap() {
        let a = GridCell::from_corner(0.0, 0.0, 1.0, 1.0);
        let b = GridCell::from_corner(0.0, 1.0, 1.0, 1.0);
        let c = GridCell::from_corner(0.5, 0.5, 1.0, 1.0);
        assert!(!a.overlaps(&b, 1e-12));
        assert!(a.overlaps(&c, 1e-12));
    }
}
