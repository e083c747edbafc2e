//! Solar Roof layout demo — lays out sample roofs around San Antonio and
//! prints the running totals after each UI event.
//!
//! ```text
//! main.rs            — entry point (this file)
//! console_overlay.rs — overlay that logs drawn and removed shapes
//! sample_roofs.rs    — hand-traced roof outlines
//! ```
//!
//! Usage:
//! ```text
//! cargo run --example layout                 # default consumption (1200 kWh)
//! cargo run --example layout -- 350          # custom consumption target
//! RUST_LOG=solar_roof=debug cargo run --example layout
//! ```

mod console_overlay;
mod sample_roofs;

use console_overlay::ConsoleOverlay;
use solar_roof::{LayoutConfig, PlanarGeometry, SolarApp};

fn main() {
    // Default: WARN for everything, INFO for the demo and solar_roof.
    // Override with RUST_LOG env var (e.g. RUST_LOG=solar_roof=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("layout=info".parse().unwrap_or_default())
        .add_directive("solar_roof=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let consumption = std::env::args().nth(1).unwrap_or_else(|| "1200".to_owned());

    let mut app = SolarApp::new(LayoutConfig::default(), PlanarGeometry, ConsoleOverlay::default());

    let mut ids = Vec::new();
    for (name, roof) in sample_roofs::all() {
        let (id, totals) = app.on_polygon_completed(roof);
        println!("+ {name:<12} {}", totals.report(true));
        ids.push(id);
    }

    let totals = app.on_consumption_changed(&consumption);
    println!("~ consumption {consumption:<6} {}", totals.report(true));

    if let Some(&first) = ids.first() {
        let totals = app.on_polygon_clicked(first);
        println!("- first roof    {}", totals.report(true));
    }

    let totals = app.on_clear_requested();
    println!("x cleared       {}", totals.report(true));
    println!(
        "overlay: {} shapes drawn, {} removed",
        app.overlay().drawn(),
        app.overlay().removed()
    );
}
