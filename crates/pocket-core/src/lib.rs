//! Pocket launcher core.
//!
//! Platform-agnostic launcher logic: the screen registry, the menu state
//! machine, the input-to-command mapping, the pure renderer and the frame
//! loop that ties them together. This crate has zero platform dependencies;
//! all drawing and input goes through the traits in [`backend`].

// Re-exports from pocket-types (foundation types and traits).
pub use pocket_types::backend;
pub use pocket_types::config;
pub use pocket_types::error;
pub use pocket_types::input;

pub mod command;
pub mod content;
pub mod layout;
pub mod main_loop;
pub mod pacer;
pub mod registry;
pub mod render;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;
