//! Pocket launcher entry point.
//!
//! Opens the launcher window, shows the main menu and hands control to the
//! frame loop. Up/Down move the selection, Enter opens the selected screen,
//! Escape or Backspace returns to the menu, Home or closing the window quits.
//!
//! Usage:
//!   pocket-launcher [config.toml]
//!   POCKET_CONFIG=/etc/pocket.toml pocket-launcher

use anyhow::Result;

use pocket_backend_sdl::{SdlBackend, resolve_font};
use pocket_core::backend::SdiBackend;
use pocket_core::config::{ConfigSource, resolve_config};
use pocket_core::content::ProviderSet;
use pocket_core::main_loop::MainLoop;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Config from CLI arg, POCKET_CONFIG env var, ./pocket.toml, or defaults.
    let (config, source) = resolve_config(std::env::args().nth(1))?;
    match source {
        ConfigSource::File(path) => log::info!("Loaded config from {path}"),
        ConfigSource::Defaults => log::info!("Using built-in config"),
    }
    log::info!(
        "Starting launcher ({}x{})",
        config.screen_width,
        config.screen_height,
    );

    let mut launcher = MainLoop::new(&config, ProviderSet::stubs())?;

    let mut backend = SdlBackend::new(
        &config.window_title,
        config.screen_width,
        config.screen_height,
    )?;
    backend.init(config.screen_width, config.screen_height)?;

    let font_path = resolve_font(&config.font)?;
    backend.load_fonts(&font_path, &[config.font.title_size, config.font.menu_size])?;

    let frames = launcher.run(&mut backend)?;
    log::info!("Launcher exited cleanly after {frames} frames");
    Ok(())
}
