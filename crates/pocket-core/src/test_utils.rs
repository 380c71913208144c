//! Shared test utilities for pocket-core tests.
//!
//! Provides a [`MockBackend`] that records all draw calls for assertion and
//! replays scripted input batches, one batch per frame.

use std::collections::VecDeque;

use crate::backend::{Color, FixedMetrics, InputBackend, SdiBackend, TextMetrics};
use crate::error::{LauncherError, Result};
use crate::input::InputEvent;

/// A recorded call on the mock backend.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
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
        color: Color,
    },
    DrawText {
        text: String,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    },
    Present,
    Shutdown,
}

/// A mock backend that records all draw calls for test assertions.
pub struct MockBackend {
    pub calls: Vec<DrawCall>,
    /// Input batches returned by successive `poll_events` calls. Once
    /// exhausted, polling returns no events.
    pub script: VecDeque<Result<Vec<InputEvent>>>,
    pub polls: usize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            script: VecDeque::new(),
            polls: 0,
        }
    }

    /// Queue one frame's worth of events.
    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.script.push_back(Ok(events));
    }

    /// Queue a polling failure.
    pub fn push_error(&mut self, msg: &str) {
        self.script
            .push_back(Err(LauncherError::Backend(msg.to_string())));
    }

    /// Number of presented frames.
    pub fn present_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Present))
            .count()
    }

    /// Calls recorded for the most recent presented frame (clear through
    /// present, exclusive).
    pub fn last_frame(&self) -> &[DrawCall] {
        let end = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Present))
            .unwrap_or(self.calls.len());
        let start = self.calls[..end]
            .iter()
            .rposition(|c| matches!(c, DrawCall::Clear(_)))
            .map_or(0, |i| i + 1);
        &self.calls[start..end]
    }

    /// Check if any `DrawText` in `calls` contains the given substring.
    pub fn has_text(calls: &[DrawCall], needle: &str) -> bool {
        calls.iter().any(|c| {
            if let DrawCall::DrawText { text, .. } = c {
                text.contains(needle)
            } else {
                false
            }
        })
    }
}

impl TextMetrics for MockBackend {
    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        FixedMetrics.measure_text(text, font_size)
    }

    fn measure_text_height(&self, font_size: u16) -> u32 {
        FixedMetrics.measure_text_height(font_size)
    }
}

impl SdiBackend for MockBackend {
    fn init(&mut self, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.calls.push(DrawCall::Clear(color));
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillRect { x, y, w, h, color });
        Ok(())
    }

    fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        _radius: u16,
        color: Color,
    ) -> Result<()> {
        self.calls
            .push(DrawCall::FillRoundedRect { x, y, w, h, color });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        self.calls.push(DrawCall::DrawText {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
        Ok(())
    }

    fn swap_buffers(&mut self) -> Result<()> {
        self.calls.push(DrawCall::Present);
        Ok(())
    }

    fn read_pixels(&self, _x: i32, _y: i32, _w: u32, _h: u32) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.calls.push(DrawCall::Shutdown);
        Ok(())
    }
}

impl InputBackend for MockBackend {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        self.polls += 1;
        self.script.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}
