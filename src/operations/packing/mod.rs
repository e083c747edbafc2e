mod generate_panels;
mod grid;

pub use generate_panels::GeneratePanels;
