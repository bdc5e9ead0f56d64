//! Nitinol Material Properties Extractor
//!
//! Desktop front end: pick a stress-strain file, get a plot and a statistics report.

mod gui;

use eframe::egui;
use gui::ExtractorApp;
use nitinol_extractor::create_sample_csv;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Seed a demo file in the working directory
    if let Err(e) = create_sample_csv(None) {
        log::warn!("Could not create sample CSV: {e}");
    }

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_position([100.0, 100.0])
            .with_title("Nitinol Material Properties Extractor"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Nitinol Material Properties Extractor",
        options,
        Box::new(|cc| Ok(Box::new(ExtractorApp::new(cc)))),
    )
}
