use anyhow::Context;
use arrow_overlay::gui::OverlayApp;
use arrow_overlay::hotkey::Hotkey;
use arrow_overlay::input::InputSource;
use arrow_overlay::logging;
use arrow_overlay::settings::{Settings, SETTINGS_FILE};

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE).context("failed to load settings")?;
    logging::init(settings.debug_logging, settings.log_file.clone());

    let source = InputSource::start(Hotkey::default())
        .context("cannot listen for global key presses")?;

    // The root viewport only hosts the four indicator viewports.
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Arrow Overlay")
            .with_inner_size([1.0, 1.0])
            .with_position([0.0, 0.0])
            .with_decorations(false)
            .with_transparent(true)
            .with_mouse_passthrough(true)
            .with_taskbar(false),
        ..Default::default()
    };

    let app_source = source.clone();
    eframe::run_native(
        "Arrow Overlay",
        native_options,
        Box::new(move |cc| Box::new(OverlayApp::new(&cc.egui_ctx, settings, app_source))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    if let Some(err) = source.failure() {
        return Err(err.into());
    }
    Ok(())
}
