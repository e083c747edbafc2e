pub mod app;
pub mod config;
pub mod consumption;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod overlay;
pub mod panel;
pub mod provider;
pub mod registry;

pub use app::SolarApp;
pub use config::LayoutConfig;
pub use consumption::Consumption;
pub use error::{Result, SolarRoofError};
pub use geometry::{Coordinate, GridCell, Polygon};
pub use operations::query::{Totals, TotalsReport};
pub use overlay::{MapOverlay, NoOverlay};
pub use panel::{PanelPitch, PanelSpec};
pub use provider::{GeometryProvider, PlanarGeometry};
pub use registry::{Roof, RoofId, RoofRegistry};
