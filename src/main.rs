use float_clock::gui::OverlayApp;
use float_clock::layout;
use float_clock::logging;
use float_clock::settings::Settings;
use float_clock::window_manager;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load("settings.json")?;
    logging::init(
        settings.debug_logging,
        settings.log_file.as_ref().map(std::path::PathBuf::from),
    );

    // refined on the first frame once the monitor is known
    let position = window_manager::work_area_width()
        .map(|w| layout::initial_position(w, settings.screen_margin, settings.top_offset))
        .unwrap_or(egui::pos2(0.0, settings.top_offset));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("float_clock")
            .with_inner_size(layout::window_size(false, false))
            .with_position(position)
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(false)
            .with_always_on_top()
            .with_taskbar(false),
        ..Default::default()
    };

    tracing::info!(?settings, "starting overlay");
    eframe::run_native(
        "float_clock",
        native_options,
        Box::new(move |_cc| Box::new(OverlayApp::with_system_sources(&settings, position))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run overlay window: {e}"))
}
