//! Font file resolution.
//!
//! Turns the configured font family into a TrueType/OpenType file on disk.
//! An explicit `font.path` always wins. Otherwise the family name is matched
//! against file names in the platform font directories, ignoring case,
//! spaces, dashes and underscores, with an optional `Regular` suffix.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use pocket_core::config::FontConfig;
use pocket_core::error::{LauncherError, Result};

/// Families tried, in order, when the configured one is not installed.
const FALLBACK_FAMILIES: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "FreeSans",
    "Helvetica",
    "Arial",
];

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf"];

/// Directory nesting followed below each font root.
const MAX_DEPTH: usize = 6;

/// Platform font directories that exist on this machine.
pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = [
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/Library/Fonts",
        "/System/Library/Fonts",
        "C:\\Windows\\Fonts",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    if let Some(home) = std::env::var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".fonts"));
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    dirs.retain(|d| d.is_dir());
    dirs
}

/// Resolve the configured font against the system font directories.
pub fn resolve_font(config: &FontConfig) -> Result<PathBuf> {
    resolve_font_in(config, &system_font_dirs())
}

/// Resolve the configured font against `dirs`.
pub fn resolve_font_in(config: &FontConfig, dirs: &[PathBuf]) -> Result<PathBuf> {
    if let Some(ref path) = config.path {
        let path = PathBuf::from(path);
        if path.is_file() {
            return Ok(path);
        }
        return Err(LauncherError::Font(format!(
            "font file not found: {}",
            path.display()
        )));
    }

    if let Some(path) = find_family(&config.family, dirs) {
        return Ok(path);
    }

    for family in FALLBACK_FAMILIES {
        if let Some(path) = find_family(family, dirs) {
            log::warn!(
                "Font family '{}' not installed, falling back to {}",
                config.family,
                path.display()
            );
            return Ok(path);
        }
    }

    Err(LauncherError::Font(format!(
        "no font file found for family '{}' (searched {} directories)",
        config.family,
        dirs.len()
    )))
}

/// Find a font file for `family` under any of `dirs`.
pub fn find_family(family: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let wanted = normalize(family);
    if wanted.is_empty() {
        return None;
    }
    dirs.iter().find_map(|dir| search_dir(dir, &wanted))
}

/// Shallowest match under `dir`. Symlinks are followed; loops are skipped.
fn search_dir(dir: &Path, wanted: &str) -> Option<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .max_depth(MAX_DEPTH + 1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("Skipping font path: {e}");
                None
            },
        })
        .filter(|entry| entry.file_type().is_file() && matches(entry.path(), wanted))
        .min_by_key(|entry| entry.depth())
        .map(walkdir::DirEntry::into_path)
}

fn matches(path: &Path, wanted: &str) -> bool {
    let ext_ok = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| FONT_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
    if !ext_ok {
        return false;
    }
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    let stem = normalize(stem);
    stem == wanted || stem.strip_suffix("regular") == Some(wanted)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
