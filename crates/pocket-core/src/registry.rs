//! Screen registry -- the ordered catalog of main menu entries.
//!
//! The registry is built once at startup and never changes. Menu order is
//! declaration order. Each entry carries an explicit [`ScreenId`], so the
//! state machine and renderer dispatch on identity rather than label text,
//! and adding an entry needs no change anywhere else.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::config::{MenuEntryConfig, canonical_screen_key};
use crate::error::{LauncherError, Result};

/// Identity of a sub-application screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Music,
    Video,
    Emulator,
    RadioTuner,
    Clock,
}

impl ScreenId {
    /// Every known screen, in default menu order.
    pub const ALL: [ScreenId; 5] = [
        ScreenId::Music,
        ScreenId::Video,
        ScreenId::Emulator,
        ScreenId::RadioTuner,
        ScreenId::Clock,
    ];

    /// Config-file spelling.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Music => "music",
            Self::Video => "video",
            Self::Emulator => "emulator",
            Self::RadioTuner => "radio",
            Self::Clock => "clock",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScreenId {
    type Err = LauncherError;

    fn from_str(s: &str) -> Result<Self> {
        canonical_screen_key(s)
            .and_then(|key| Self::ALL.into_iter().find(|id| id.key() == key))
            .ok_or_else(|| LauncherError::Config(format!("unknown screen '{}'", s.trim())))
    }
}

/// One selectable item in the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub screen: ScreenId,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, screen: ScreenId) -> Self {
        Self {
            label: label.into(),
            screen,
        }
    }
}

/// Read-only ordered list of menu entries.
#[derive(Debug, Clone)]
pub struct ScreenRegistry {
    entries: Vec<MenuEntry>,
    by_screen: HashMap<ScreenId, usize>,
}

impl ScreenRegistry {
    /// Build a registry, rejecting an empty list or a repeated screen.
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(LauncherError::Config("menu has no entries".into()));
        }
        let mut by_screen = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if by_screen.insert(entry.screen, idx).is_some() {
                return Err(LauncherError::Config(format!(
                    "screen '{}' appears more than once in the menu",
                    entry.screen
                )));
            }
        }
        Ok(Self { entries, by_screen })
    }

    /// The stock five-entry menu.
    pub fn builtin() -> Self {
        let entries = vec![
            MenuEntry::new("Music", ScreenId::Music),
            MenuEntry::new("Video", ScreenId::Video),
            MenuEntry::new("Emulator", ScreenId::Emulator),
            MenuEntry::new("Radio Tuner", ScreenId::RadioTuner),
            MenuEntry::new("Clock", ScreenId::Clock),
        ];
        let by_screen = entries
            .iter()
            .enumerate()
            .map(|(idx, e)| (e.screen, idx))
            .collect();
        Self { entries, by_screen }
    }

    /// Build from the `[[menu]]` tables of the config file.
    pub fn from_config(menu: &[MenuEntryConfig]) -> Result<Self> {
        let entries = menu
            .iter()
            .map(|e| Ok(MenuEntry::new(e.label.clone(), e.screen.parse()?)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    /// Number of entries. Always at least one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; construction rejects an empty menu.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a menu position.
    pub fn get(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }

    /// Entry for a screen identity.
    pub fn entry(&self, screen: ScreenId) -> Option<&MenuEntry> {
        self.position(screen).and_then(|idx| self.entries.get(idx))
    }

    /// Menu position of a screen identity.
    pub fn position(&self, screen: ScreenId) -> Option<usize> {
        self.by_screen.get(&screen).copied()
    }

    /// Display label for a screen identity.
    pub fn label(&self, screen: ScreenId) -> Option<&str> {
        self.entry(screen).map(|e| e.label.as_str())
    }

    pub fn contains(&self, screen: ScreenId) -> bool {
        self.by_screen.contains_key(&screen)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuEntry> {
        self.entries.iter()
    }
}
