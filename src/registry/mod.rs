pub mod roof;

pub use roof::{Roof, RoofId};

use slotmap::SlotMap;
use tracing::info;

use crate::error::RegistryError;
use crate::geometry::Polygon;
use crate::operations::packing::GeneratePanels;
use crate::panel::PanelSpec;
use crate::provider::GeometryProvider;

/// Insertion-ordered arena of roofs.
///
/// Roofs are addressed by [`RoofId`] (generational index), so a stale id
/// from a removed roof never aliases a newer one. Each roof owns its panels;
/// removing the roof hands them back for disposal.
#[derive(Debug, Default)]
pub struct RoofRegistry {
    roofs: SlotMap<RoofId, Roof>,
    order: Vec<RoofId>,
}

impl RoofRegistry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Packs `polygon` and appends the resulting roof.
    pub fn add<G: GeometryProvider + ?Sized>(
        &mut self,
        polygon: Polygon,
        panel: PanelSpec,
        geometry: &G,
    ) -> RoofId {
        let panels = GeneratePanels::new(&polygon)
            .with_panel(panel)
            .execute(geometry);
        self.insert(Roof::new(polygon, panels))
    }

    /// Appends an already packed roof and returns its id.
    pub fn insert(&mut self, roof: Roof) -> RoofId {
        let panels = roof.panel_count();
        let id = self.roofs.insert(roof);
        self.order.push(id);
        info!(?id, panels, roofs = self.order.len(), "roof added");
        id
    }

    /// Removes the roof with the given id and returns it so its panels can
    /// be disposed of. Unknown ids are a no-op.
    pub fn remove(&mut self, id: RoofId) -> Option<Roof> {
        let roof = self.roofs.remove(id)?;
        self.order.retain(|&other| other != id);
        info!(?id, panels = roof.panel_count(), roofs = self.order.len(), "roof removed");
        Some(roof)
    }

    /// Removes every roof, returning them in insertion order.
    pub fn clear(&mut self) -> Vec<(RoofId, Roof)> {
        let drained: Vec<(RoofId, Roof)> = self
            .order
            .drain(..)
            .filter_map(|id| self.roofs.remove(id).map(|roof| (id, roof)))
            .collect();
        info!(roofs = drained.len(), "registry cleared");
        drained
    }

    /// Returns a reference to the roof, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the roof has been removed or never existed.
    pub fn roof(&self, id: RoofId) -> Result<&Roof, RegistryError> {
        self.roofs
            .get(id)
            .ok_or_else(|| RegistryError::RoofNotFound(format!("{id:?}")))
    }

    /// Returns `true` if the roof is tracked.
    #[must_use]
    pub fn contains(&self, id: RoofId) -> bool {
        self.roofs.contains_key(id)
    }

    /// Iterates roofs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RoofId, &Roof)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.roofs.get(id).map(|roof| (id, roof)))
    }

    /// Ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[RoofId] {
        &self.order
    }

    /// Number of tracked roofs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no roofs are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total panels over all roofs.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.roofs.values().map(Roof::panel_count).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::GridCell;
    use crate::provider::PlanarGeometry;

    fn roof(n: usize) -> Roof {
        let polygon = Polygon::from_lat_lng(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
        Roof::new(polygon, vec![GridCell::from_corner(0.0, 0.0, 0.1, 0.1); n])
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut registry = RoofRegistry::new();
        let a = registry.insert(roof(1));
        let b = registry.insert(roof(2));
        let c = registry.insert(roof(3));
        registry.remove(b);
        let d = registry.insert(roof(4));

        let ids: Vec<RoofId> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, c, d]);
        assert_eq!(registry.ids(), &[a, c, d]);
    }

    #[test]
    fn identical_outlines_are_distinct_roofs() {
        let mut registry = RoofRegistry::new();
        let a = registry.insert(roof(2));
        let b = registry.insert(roof(2));
        assert_ne!(a, b);

        let removed = registry.remove(a).unwrap();
        assert_eq!(removed.panel_count(), 2);
        assert!(registry.contains(b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_leaves_other_roofs_untouched() {
        let mut registry = RoofRegistry::new();
        let a = registry.insert(roof(3));
        let b = registry.insert(roof(5));
        assert_eq!(registry.panel_count(), 8);

        registry.remove(a);
        assert_eq!(registry.panel_count(), 5);
        assert_eq!(registry.roof(b).unwrap().panel_count(), 5);
    }

    #[test]
    fn remove_unknown_is_noop() {
        let mut registry = RoofRegistry::new();
        let a = registry.insert(roof(1));
        assert!(registry.remove(a).is_some());
        assert!(registry.remove(a).is_none());
        assert!(registry.is_empty());
        assert!(registry.roof(a).is_err());
    }

    #[test]
    fn clear_drains_in_order() {
        let mut registry = RoofRegistry::new();
        let a = registry.insert(roof(1));
        let b = registry.insert(roof(2));
        let drained = registry.clear();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].0, a);
        assert_eq!(drained[1].0, b);
        assert!(registry.is_empty());
        assert_eq!(registry.panel_count(), 0);
    }

    #[test]
    fn add_runs_packer() {
        let mut registry = RoofRegistry::new();
        let polygon = Polygon::from_lat_lng(&[
            (29.4250, -98.4930),
            (29.4250, -98.4928),
            (29.4252, -98.4928),
            (29.4252, -98.4930),
        ]);
        let id = registry.add(polygon, PanelSpec::STANDARD, &PlanarGeometry);
        let roof = registry.roof(id).unwrap();
        assert!(roof.panel_count() > 0);
        assert_eq!(registry.panel_count(), roof.panel_count());
    }
}
