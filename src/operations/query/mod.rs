mod area_estimate;
mod totals;

pub use area_estimate::EstimatePanelsByArea;
pub use totals::{panels_needed, ComputeTotals, Totals, TotalsReport};
