mod app;
mod cli;
mod config;
mod error;
mod gamepad;
mod input;
mod logging;
mod paths;
mod ui;

use crate::app::DeckApp;
use crate::cli::Cli;
use crate::config::{load_cfg, save_cfg};
use crate::error::DeckError;
use crate::paths::PATH_SETTINGS;

use eframe::egui;

fn main() -> Result<(), DeckError> {
    let cli = Cli::parse_args();
    logging::init(&cli.log_level);

    let settings_path = cli.config.clone().unwrap_or_else(|| PATH_SETTINGS.clone());
    let mut options = load_cfg(&settings_path);
    cli.apply_to(&mut options);

    if cli.write_default_config {
        save_cfg(&settings_path, &options)?;
        tracing::info!("config: wrote {}", settings_path.display());
        return Ok(());
    }

    let gamepad = !cli.no_gamepad;
    if !gamepad {
        tracing::info!("gamepad: disabled from the command line");
    }

    let fullscreen = options.fullscreen;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Deck Revealed")
            .with_inner_size([1080.0, 640.0])
            .with_min_inner_size([640.0, 360.0])
            .with_fullscreen(fullscreen),
        ..Default::default()
    };

    tracing::info!("main: starting eframe app (fullscreen={})", fullscreen);

    eframe::run_native(
        "Deck Revealed",
        native_options,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            cc.egui_ctx.set_zoom_factor(if fullscreen { 1.5 } else { 1.2 });
            crate::ui::theme::apply_theme(&cc.egui_ctx);

            Ok(Box::new(DeckApp::new(options, gamepad)))
        }),
    )?;

    Ok(())
}
