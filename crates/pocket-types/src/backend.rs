//! Backend trait definitions.
//!
//! Every platform implements these traits. The core framework dispatches all
//! I/O through trait boundaries -- it never calls platform-specific APIs.
//!
//! Rendering is split in two: the core produces a list of [`DrawCommand`]s
//! for a frame, and [`submit`] replays that list against an [`SdiBackend`].

use crate::error::Result;
use crate::input::InputEvent;

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

/// A recorded draw command.
///
/// Draw commands capture all parameters needed to replay a draw call, so a
/// frame can be computed without touching the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
    FillRoundedRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        radius: u16,
        color: Color,
    },
    DrawText {
        text: String,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    },
}

impl DrawCommand {
    /// Replay this command on a backend.
    pub fn execute(&self, backend: &mut dyn SdiBackend) -> Result<()> {
        match self {
            Self::FillRect { x, y, w, h, color } => backend.fill_rect(*x, *y, *w, *h, *color),
            Self::FillRoundedRect {
                x,
                y,
                w,
                h,
                radius,
                color,
            } => backend.fill_rounded_rect(*x, *y, *w, *h, *radius, *color),
            Self::DrawText {
                text,
                x,
                y,
                font_size,
                color,
            } => backend.draw_text(text, *x, *y, *font_size, *color),
        }
    }

    /// Bounding box `(x, y, w, h)` of a filled shape. `None` for text.
    pub fn rect(&self) -> Option<(i32, i32, u32, u32)> {
        match self {
            Self::FillRect { x, y, w, h, .. } | Self::FillRoundedRect { x, y, w, h, .. } => {
                Some((*x, *y, *w, *h))
            },
            Self::DrawText { .. } => None,
        }
    }
}

/// Replay a frame's draw commands in order.
pub fn submit(commands: &[DrawCommand], backend: &mut dyn SdiBackend) -> Result<()> {
    for cmd in commands {
        cmd.execute(backend)?;
    }
    Ok(())
}

/// Text measurement.
///
/// Kept separate from [`SdiBackend`] so layout can be computed without a
/// drawing surface.
pub trait TextMetrics {
    /// Width in pixels of `text` rendered at `font_size`.
    fn measure_text(&self, text: &str, font_size: u16) -> u32;

    /// Line height in pixels for `font_size`.
    fn measure_text_height(&self, font_size: u16) -> u32;
}

/// Monospace estimate used when no font is loaded (headless runs, tests).
///
/// Each glyph is assumed to be `font_size * 3 / 5` wide and a line is
/// `font_size` pixels tall.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedMetrics;

impl TextMetrics for FixedMetrics {
    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        let glyph_w = (u32::from(font_size) * 3 / 5).max(1);
        text.chars().count() as u32 * glyph_w
    }

    fn measure_text_height(&self, font_size: u16) -> u32 {
        u32::from(font_size)
    }
}

/// Rendering backend trait.
///
/// Two implementations exist: SDL2 (desktop / Raspberry Pi) and the
/// recording mock used by the core's tests.
#[allow(clippy::too_many_arguments)]
pub trait SdiBackend: TextMetrics {
    /// Initialize the rendering subsystem.
    fn init(&mut self, width: u32, height: u32) -> Result<()>;

    /// Clear the screen to a solid color.
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Draw a filled rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()>;

    /// Draw text at the given position. `font_size` selects one of the
    /// fonts the backend loaded at startup.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: u16, color: Color)
    -> Result<()>;

    /// Present the frame.
    fn swap_buffers(&mut self) -> Result<()>;

    /// Read back RGBA pixels from the current frame.
    fn read_pixels(&self, x: i32, y: i32, w: u32, h: u32) -> Result<Vec<u8>>;

    /// Release all rendering resources.
    fn shutdown(&mut self) -> Result<()>;

    /// Draw a filled rectangle with rounded corners.
    ///
    /// Default: falls back to a plain `fill_rect`.
    fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        _radius: u16,
        color: Color,
    ) -> Result<()> {
        self.fill_rect(x, y, w, h, color)
    }
}

/// Input backend trait.
///
/// Maps platform-specific input to the platform-agnostic `InputEvent` enum.
pub trait InputBackend {
    /// Drain all pending input events.
    fn poll_events(&mut self) -> Result<Vec<InputEvent>>;
}
