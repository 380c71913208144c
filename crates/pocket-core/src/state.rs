//! Launcher state and the menu state machine.
//!
//! [`transition`] is a total function over (state, command): every pair has
//! a defined outcome and unmatched pairs leave the state unchanged. `Quit`
//! is not a transition; the main loop handles it.

use crate::command::Command;
use crate::registry::{ScreenId, ScreenRegistry};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    MainMenu,
    Screen(ScreenId),
}

/// The single mutable launcher state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    pub view: View,
    /// Highlighted menu row, always `< registry.len()`.
    pub selected: usize,
}

impl AppState {
    /// Startup state: main menu, first entry selected.
    pub const fn new() -> Self {
        Self {
            view: View::MainMenu,
            selected: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a selection into `[0, len)`.
///
/// Out-of-range selections cannot be produced by [`transition`]; callers
/// that see one log it and carry on with the clamped value.
pub fn clamp_selection(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}

/// Compute the next state for a command.
pub fn transition(state: AppState, command: Command, registry: &ScreenRegistry) -> AppState {
    let n = registry.len();
    if n == 0 {
        return state;
    }
    match (command, state.view) {
        (Command::Up, View::MainMenu) => {
            let selected = clamp_selection(state.selected, n);
            AppState {
                selected: (selected + n - 1) % n,
                ..state
            }
        },
        (Command::Down, View::MainMenu) => {
            let selected = clamp_selection(state.selected, n);
            AppState {
                selected: (selected + 1) % n,
                ..state
            }
        },
        (Command::Activate, View::MainMenu) => {
            let selected = clamp_selection(state.selected, n);
            match registry.get(selected) {
                Some(entry) => AppState {
                    view: View::Screen(entry.screen),
                    selected,
                },
                None => state,
            }
        },
        (Command::Back, View::Screen(_)) => AppState {
            view: View::MainMenu,
            ..state
        },
        _ => state,
    }
}

/// Applies commands to the launcher state in place.
#[derive(Debug, Clone)]
pub struct StateMachine {
    registry: ScreenRegistry,
}

impl StateMachine {
    pub fn new(registry: ScreenRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ScreenRegistry {
        &self.registry
    }

    /// Apply one command. Returns `true` if the state changed.
    pub fn apply(&self, state: &mut AppState, command: Command) -> bool {
        if state.selected >= self.registry.len() {
            log::warn!(
                "Selection {} out of range for {} entries, clamping",
                state.selected,
                self.registry.len()
            );
            state.selected = clamp_selection(state.selected, self.registry.len());
        }
        let next = transition(*state, command, &self.registry);
        if next == *state {
            return false;
        }
        if next.view != state.view {
            log::debug!("Screen change: {:?} -> {:?}", state.view, next.view);
        }
        *state = next;
        true
    }
}
