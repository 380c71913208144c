//! Abstract launcher commands and the static input mapping.

use crate::input::{Button, InputEvent};

/// Device-independent command understood by the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Up,
    Down,
    Activate,
    Back,
    Quit,
}

/// Translates input events into commands.
///
/// The table is fixed: the same event always yields the same command,
/// whatever screen is showing.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputMapper;

impl InputMapper {
    pub const fn new() -> Self {
        Self
    }

    /// Map one event. Unmapped events yield `None`.
    pub fn map(&self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::ButtonPress(btn) => Self::map_button(*btn),
            InputEvent::Quit => Some(Command::Quit),
            _ => None,
        }
    }

    fn map_button(btn: Button) -> Option<Command> {
        match btn {
            Button::Up => Some(Command::Up),
            Button::Down => Some(Command::Down),
            Button::Confirm => Some(Command::Activate),
            Button::Cancel => Some(Command::Back),
            Button::Home => Some(Command::Quit),
            Button::Left | Button::Right => None,
        }
    }
}
