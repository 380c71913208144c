//! Startup configuration.
//!
//! Loaded once from TOML before the window is opened. Every field has a
//! default, so an empty file (or no file at all) yields the stock 480x320
//! launcher.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::backend::Color;
use crate::error::{LauncherError, Result};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "POCKET_CONFIG";
/// Config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pocket.toml";

/// Top-level launcher configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub window_title: String,
    pub screen_width: u32,
    pub screen_height: u32,
    pub target_fps: u32,
    pub palette: PaletteConfig,
    pub font: FontConfig,
    /// Main menu entries in display order.
    pub menu: Vec<MenuEntryConfig>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            window_title: "Handheld Launcher".to_string(),
            screen_width: 480,
            screen_height: 320,
            target_fps: 60,
            palette: PaletteConfig::default(),
            font: FontConfig::default(),
            menu: default_menu(),
        }
    }
}

/// Color scheme as written in the config file (`"#RRGGBB"` strings).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub background: String,
    /// Left-hand panel behind the menu list.
    pub panel: String,
    pub text: String,
    /// Text color of the selected entry.
    pub highlight: String,
    /// Box drawn behind the selected entry.
    pub highlight_background: String,
    pub title: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            background: "#1E1E1E".to_string(),
            panel: "#2D2D2D".to_string(),
            text: "#DCDCDC".to_string(),
            highlight: "#64C8FF".to_string(),
            highlight_background: "#3C3C3C".to_string(),
            title: "#FFFFFF".to_string(),
        }
    }
}

/// Resolved colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub highlight: Color,
    pub highlight_background: Color,
    pub title: Color,
}

impl PaletteConfig {
    /// Parse every color, failing on the first malformed one.
    pub fn resolve(&self) -> Result<Palette> {
        let color = |name: &str, value: &str| {
            parse_hex_color(value).ok_or_else(|| {
                LauncherError::Config(format!("palette.{name}: invalid color '{value}'"))
            })
        };
        Ok(Palette {
            background: color("background", &self.background)?,
            panel: color("panel", &self.panel)?,
            text: color("text", &self.text)?,
            highlight: color("highlight", &self.highlight)?,
            highlight_background: color("highlight_background", &self.highlight_background)?,
            title: color("title", &self.title)?,
        })
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(30, 30, 30),
            panel: Color::rgb(45, 45, 45),
            text: Color::rgb(220, 220, 220),
            highlight: Color::rgb(100, 200, 255),
            highlight_background: Color::rgb(60, 60, 60),
            title: Color::WHITE,
        }
    }
}

/// Font selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Family name looked up in the platform font directories.
    pub family: String,
    /// Explicit font file; overrides `family` when set.
    pub path: Option<String>,
    pub title_size: u16,
    pub menu_size: u16,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            path: None,
            title_size: 28,
            menu_size: 22,
        }
    }
}

/// One main menu entry: display label plus screen identity
/// (`music`, `video`, `emulator`, `radio`, `clock`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuEntryConfig {
    pub label: String,
    pub screen: String,
}

fn default_menu() -> Vec<MenuEntryConfig> {
    [
        ("Music", "music"),
        ("Video", "video"),
        ("Emulator", "emulator"),
        ("Radio Tuner", "radio"),
        ("Clock", "clock"),
    ]
    .into_iter()
    .map(|(label, screen)| MenuEntryConfig {
        label: label.to_string(),
        screen: screen.to_string(),
    })
    .collect()
}

impl LauncherConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Self::from_toml(&s)
    }

    /// Reject values the launcher cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.target_fps == 0 {
            return Err(LauncherError::Config("target_fps must be positive".into()));
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(LauncherError::Config(format!(
                "invalid display size {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.font.title_size == 0 || self.font.menu_size == 0 {
            return Err(LauncherError::Config("font sizes must be positive".into()));
        }
        if self.menu.is_empty() {
            return Err(LauncherError::Config("menu has no entries".into()));
        }
        let mut seen = HashSet::new();
        for (i, entry) in self.menu.iter().enumerate() {
            let key = canonical_screen_key(&entry.screen).ok_or_else(|| {
                LauncherError::Config(format!("menu[{i}]: unknown screen '{}'", entry.screen))
            })?;
            if !seen.insert(key) {
                return Err(LauncherError::Config(format!(
                    "menu[{i}]: screen '{key}' is already in the menu"
                )));
            }
        }
        self.palette.resolve()?;
        Ok(())
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(String),
    Defaults,
}

/// Resolve the configuration for this process.
///
/// Resolution order:
/// 1. `arg` (first command-line argument)
/// 2. the `POCKET_CONFIG` environment variable
/// 3. `pocket.toml` in the working directory
/// 4. built-in defaults
pub fn resolve_config(arg: Option<String>) -> Result<(LauncherConfig, ConfigSource)> {
    let explicit = arg.or_else(|| std::env::var(CONFIG_ENV).ok());
    if let Some(path) = explicit {
        let config = LauncherConfig::load(Path::new(&path))?;
        return Ok((config, ConfigSource::File(path)));
    }
    if Path::new(DEFAULT_CONFIG_FILE).is_file() {
        let config = LauncherConfig::load(Path::new(DEFAULT_CONFIG_FILE))?;
        return Ok((config, ConfigSource::File(DEFAULT_CONFIG_FILE.to_string())));
    }
    log::debug!("No config file found, using defaults");
    Ok((LauncherConfig::default(), ConfigSource::Defaults))
}

/// Canonical config key for a screen name. Case and surrounding
/// whitespace are ignored; `radio_tuner` is accepted for `radio`.
pub fn canonical_screen_key(name: &str) -> Option<&'static str> {
    match name.trim().to_ascii_lowercase().as_str() {
        "music" => Some("music"),
        "video" => Some("video"),
        "emulator" => Some("emulator"),
        "radio" | "radio_tuner" => Some("radio"),
        "clock" => Some("clock"),
        _ => None,
    }
}

/// Parse "#RRGGBB" or "#RRGGBBAA" into a `Color`.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#')?;
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
    match s.len() {
        6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}
