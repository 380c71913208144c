//! Screenshot capture tool.
//!
//! Renders every launcher view through the SDL backend and saves PNG
//! screenshots to `screenshots/` in the working directory.
//!
//! Usage:
//!   pocket-screenshot [config.toml]
//!
//! Output:
//!   screenshots/NN_menu_<screen>.png  -- main menu with that entry highlighted
//!   screenshots/NN_<screen>.png       -- each sub-screen, in menu order

use std::fs;
use std::path::Path;

use pocket_backend_sdl::{SdlBackend, resolve_font};
use pocket_core::backend::SdiBackend;
use pocket_core::command::Command;
use pocket_core::config::resolve_config;
use pocket_core::content::ProviderSet;
use pocket_core::main_loop::MainLoop;
use pocket_core::registry::ScreenRegistry;

const OUT_DIR: &str = "screenshots";

/// One screenshot: the commands that reach the view, then the file name.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Shot {
    commands: Vec<Command>,
    file: String,
}

/// Every menu selection followed by every sub-screen, in menu order.
///
/// Commands are cumulative; each shot starts from the state the previous
/// one left behind, and the first starts from the main menu with entry 0
/// selected.
fn plan(registry: &ScreenRegistry) -> Vec<Shot> {
    let keys: Vec<&'static str> = registry.iter().map(|e| e.screen.key()).collect();
    let mut shots = Vec::with_capacity(keys.len() * 2);

    for (i, key) in keys.iter().enumerate() {
        shots.push(Shot {
            commands: if i == 0 { vec![] } else { vec![Command::Down] },
            file: format!("{:02}_menu_{key}.png", shots.len() + 1),
        });
    }
    // The last menu shot leaves the final entry selected; Down wraps to 0.
    for (i, key) in keys.iter().enumerate() {
        let commands = if i == 0 {
            vec![Command::Down, Command::Activate]
        } else {
            vec![Command::Back, Command::Down, Command::Activate]
        };
        shots.push(Shot {
            commands,
            file: format!("{:02}_{key}.png", shots.len() + 1),
        });
    }
    shots
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config, _) = resolve_config(std::env::args().nth(1))?;
    let (w, h) = (config.screen_width, config.screen_height);

    let mut launcher = MainLoop::new(&config, ProviderSet::stubs())?;
    let mut backend = SdlBackend::new("Launcher Screenshot", w, h)?;
    backend.init(w, h)?;
    let font_path = resolve_font(&config.font)?;
    backend.load_fonts(&font_path, &[config.font.title_size, config.font.menu_size])?;

    fs::create_dir_all(OUT_DIR)?;
    let out = Path::new(OUT_DIR);

    let shots = plan(launcher.registry());
    for shot in &shots {
        for &cmd in &shot.commands {
            launcher.apply_command(cmd);
        }
        launcher.render_frame(&mut backend)?;
        // The back buffer is undefined after present; draw again so
        // read_pixels sees this frame.
        launcher.draw_frame(&mut backend)?;
        capture(&backend, &out.join(&shot.file), w, h)?;
    }

    backend.shutdown()?;
    log::info!("Saved {} screenshots to {OUT_DIR}/", shots.len());
    Ok(())
}

fn capture(backend: &SdlBackend, path: &Path, w: u32, h: u32) -> anyhow::Result<()> {
    let pixels = backend.read_pixels(0, 0, w, h)?;
    save_png(path, w, h, &pixels)?;
    log::info!("Saved {}", path.display());
    Ok(())
}

fn save_png(path: &Path, width: u32, height: u32, rgba: &[u8]) -> anyhow::Result<()> {
    let file = fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    Ok(())
}
