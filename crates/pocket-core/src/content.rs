//! Screen content providers.
//!
//! Each sub-application screen gets its title and body text from a
//! [`ScreenProvider`]. The launcher ships placeholder providers only; a real
//! music player or radio tuner plugs in by implementing the trait and
//! registering it in a [`ProviderSet`].

use std::collections::HashMap;

use crate::registry::{ScreenId, ScreenRegistry};
use crate::state::AppState;

/// Body shown for a screen that has no provider.
pub const FALLBACK_BODY: &str = "Nothing to show here yet.";

/// Text displayed on a sub-screen. Produced on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenContent {
    pub title: String,
    pub body: String,
}

/// Produces the content of one or more screens.
pub trait ScreenProvider {
    fn content(&self, screen: ScreenId, state: &AppState) -> ScreenContent;
}

/// Provider returning fixed text.
#[derive(Debug, Clone)]
pub struct PlaceholderProvider {
    title: String,
    body: String,
}

impl PlaceholderProvider {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// The stock placeholder for a screen.
    pub fn stub(screen: ScreenId) -> Self {
        let (title, body) = match screen {
            ScreenId::Music => ("Music", "Here you'll list and play songs."),
            ScreenId::Video => ("Video", "Here you'll browse and play videos."),
            ScreenId::Emulator => ("Emulator", "Here you'll launch ROMs."),
            ScreenId::RadioTuner => ("Radio Tuner", "Here you'll tune FM stations."),
            ScreenId::Clock => ("Clock", "Here you'll show time and alarms."),
        };
        Self::new(title, body)
    }
}

impl ScreenProvider for PlaceholderProvider {
    fn content(&self, _screen: ScreenId, _state: &AppState) -> ScreenContent {
        ScreenContent {
            title: self.title.clone(),
            body: self.body.clone(),
        }
    }
}

/// Providers keyed by screen identity.
#[derive(Default)]
pub struct ProviderSet {
    providers: HashMap<ScreenId, Box<dyn ScreenProvider>>,
}

impl ProviderSet {
    /// An empty set; every screen falls back to generic text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholder providers for every known screen.
    pub fn stubs() -> Self {
        let mut set = Self::new();
        for id in ScreenId::ALL {
            set.register(id, PlaceholderProvider::stub(id));
        }
        set
    }

    /// Install (or replace) the provider for a screen.
    pub fn register(&mut self, screen: ScreenId, provider: impl ScreenProvider + 'static) {
        self.providers.insert(screen, Box::new(provider));
    }

    pub fn has_provider(&self, screen: ScreenId) -> bool {
        self.providers.contains_key(&screen)
    }

    /// Content for a screen, falling back to the registry label and a
    /// generic body when no provider is registered.
    pub fn content(
        &self,
        screen: ScreenId,
        state: &AppState,
        registry: &ScreenRegistry,
    ) -> ScreenContent {
        match self.providers.get(&screen) {
            Some(provider) => provider.content(screen, state),
            None => ScreenContent {
                title: registry
                    .label(screen)
                    .map(str::to_string)
                    .unwrap_or_else(|| screen.to_string()),
                body: FALLBACK_BODY.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::View;

    struct Tuner;

    impl ScreenProvider for Tuner {
        fn content(&self, _screen: ScreenId, state: &AppState) -> ScreenContent {
            ScreenContent {
                title: "FM".into(),
                body: format!("entered from row {}", state.selected),
            }
        }
    }

    #[test]
    fn stubs_cover_every_screen() {
        let set = ProviderSet::stubs();
        let reg = ScreenRegistry::builtin();
        let state = AppState::new();
        for id in ScreenId::ALL {
            assert!(set.has_provider(id));
            let c = set.content(id, &state, &reg);
            assert_eq!(Some(c.title.as_str()), reg.label(id));
            assert!(c.body.starts_with("Here you'll"));
        }
    }

    #[test]
    fn emulator_placeholder_text() {
        let c = PlaceholderProvider::stub(ScreenId::Emulator)
            .content(ScreenId::Emulator, &AppState::new());
        assert_eq!(c, ScreenContent {
            title: "Emulator".into(),
            body: "Here you'll launch ROMs.".into(),
        });
    }

    #[test]
    fn missing_provider_falls_back_to_label() {
        let set = ProviderSet::new();
        let reg = ScreenRegistry::builtin();
        let c = set.content(ScreenId::RadioTuner, &AppState::new(), &reg);
        assert_eq!(c.title, "Radio Tuner");
        assert_eq!(c.body, FALLBACK_BODY);
    }

    #[test]
    fn missing_provider_and_label_uses_screen_key() {
        let set = ProviderSet::new();
        let reg = ScreenRegistry::new(vec![crate::registry::MenuEntry::new(
            "Clock",
            ScreenId::Clock,
        )])
        .unwrap();
        let c = set.content(ScreenId::Video, &AppState::new(), &reg);
        assert_eq!(c.title, "video");
    }

    #[test]
    fn custom_provider_sees_state() {
        let mut set = ProviderSet::stubs();
        set.register(ScreenId::RadioTuner, Tuner);
        let state = AppState {
            view: View::Screen(ScreenId::RadioTuner),
            selected: 3,
        };
        let c = set.content(ScreenId::RadioTuner, &state, &ScreenRegistry::builtin());
        assert_eq!(c.title, "FM");
        assert_eq!(c.body, "entered from row 3");
    }
}
