//! Foundation types and traits for the pocket launcher.
//!
//! This crate contains the platform-agnostic types shared by all launcher
//! crates: colors, draw commands, input events, backend trait definitions,
//! configuration, and error types.

pub mod backend;
pub mod config;
pub mod error;
pub mod input;
