//! SQUAREPAD GUI entrypoint.
//!
//! The program is GUI-only: it boots the eframe shell around
//! [`squarepad::gui::SquarepadGui`]. For programmatic use, prefer the
//! library API (`squarepad::api`).

#[cfg(feature = "gui")]
use eframe::{NativeOptions, egui::ViewportBuilder};
#[cfg(feature = "gui")]
use squarepad::gui::models::SquarepadGui;

#[cfg(feature = "gui")]
fn main() -> Result<(), eframe::Error> {
    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([800.0, 800.0])
            .with_min_inner_size([400.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SQUAREPAD",
        options,
        Box::new(|_cc| Ok(Box::new(SquarepadGui::default()))),
    )
}

#[cfg(not(feature = "gui"))]
fn main() {
    eprintln!("GUI feature is not enabled. Please build with --features gui");
    std::process::exit(1);
}
