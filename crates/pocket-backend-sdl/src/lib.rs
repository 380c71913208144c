//! SDL2 backend for the pocket launcher.
//!
//! Implements `SdiBackend`, `TextMetrics` and `InputBackend` using SDL2 and
//! SDL2_ttf. Used for desktop development and on the device itself (via
//! SDL2's kmsdrm or X11 video driver).

pub mod font;

use std::collections::HashMap;
use std::path::Path;

use sdl2::EventPump;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, Canvas, TextureCreator};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::{Window, WindowContext};

use pocket_core::backend::{Color, FixedMetrics, InputBackend, SdiBackend, TextMetrics};
use pocket_core::error::{LauncherError, Result};
use pocket_core::input::{Button, InputEvent};

pub use font::resolve_font;

/// SDL2 rendering and input backend.
///
/// Fonts are loaded once per point size with [`SdlBackend::load_fonts`];
/// `draw_text` picks the loaded size closest to the requested one.
pub struct SdlBackend {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    texture_creator: TextureCreator<WindowContext>,
    ttf: &'static Sdl2TtfContext,
    fonts: HashMap<u16, Font<'static, 'static>>,
    viewport_w: u32,
    viewport_h: u32,
}

impl SdlBackend {
    /// Create a new SDL2 backend with a window.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl = sdl2::init().map_err(LauncherError::Backend)?;
        let video = sdl.video().map_err(LauncherError::Backend)?;
        let window = video
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| LauncherError::Backend(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| LauncherError::Backend(e.to_string()))?;
        let texture_creator = canvas.texture_creator();
        let event_pump = sdl.event_pump().map_err(LauncherError::Backend)?;

        // The TTF context lives for the whole process; leaking it lets the
        // loaded fonts borrow it for 'static.
        let ttf = sdl2::ttf::init().map_err(|e| LauncherError::Font(e.to_string()))?;
        let ttf: &'static Sdl2TtfContext = Box::leak(Box::new(ttf));

        log::info!("SDL2 backend initialized: {width}x{height}");

        Ok(Self {
            canvas,
            event_pump,
            texture_creator,
            ttf,
            fonts: HashMap::new(),
            viewport_w: width,
            viewport_h: height,
        })
    }

    /// Load `path` at each of `sizes`. Any failure is fatal for startup.
    pub fn load_fonts(&mut self, path: &Path, sizes: &[u16]) -> Result<()> {
        for &size in sizes {
            if self.fonts.contains_key(&size) {
                continue;
            }
            let font = self
                .ttf
                .load_font(path, size)
                .map_err(|e| LauncherError::Font(format!("{}: {e}", path.display())))?;
            self.fonts.insert(size, font);
        }
        log::info!("Loaded font {} at sizes {sizes:?}", path.display());
        Ok(())
    }

    /// The loaded font closest to `size`.
    fn font_for(&self, size: u16) -> Option<&Font<'static, 'static>> {
        self.fonts.get(&size).or_else(|| {
            self.fonts
                .iter()
                .min_by_key(|(loaded, _)| loaded.abs_diff(size))
                .map(|(_, font)| font)
        })
    }

    /// Set the SDL draw color with optional blend mode.
    fn set_color(&mut self, color: Color) {
        if color.a < 255 {
            self.canvas.set_blend_mode(BlendMode::Blend);
        } else {
            self.canvas.set_blend_mode(BlendMode::None);
        }
        self.canvas.set_draw_color(to_sdl(color));
    }
}

impl TextMetrics for SdlBackend {
    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        match self.font_for(font_size).map(|f| f.size_of(text)) {
            Some(Ok((w, _))) => w,
            _ => FixedMetrics.measure_text(text, font_size),
        }
    }

    fn measure_text_height(&self, font_size: u16) -> u32 {
        match self.font_for(font_size) {
            Some(font) => font.height().max(0) as u32,
            None => FixedMetrics.measure_text_height(font_size),
        }
    }
}

impl SdiBackend for SdlBackend {
    fn init(&mut self, width: u32, height: u32) -> Result<()> {
        if (width, height) != (self.viewport_w, self.viewport_h) {
            log::warn!(
                "init({width}x{height}) differs from window size {}x{}",
                self.viewport_w,
                self.viewport_h
            );
        }
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.canvas.set_draw_color(to_sdl(color));
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        self.set_color(color);
        self.canvas
            .fill_rect(Rect::new(x, y, w, h))
            .map_err(LauncherError::Backend)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        // SDL_ttf refuses to render zero-width strings.
        if text.is_empty() {
            return Ok(());
        }
        let surface = {
            let font = self.font_for(font_size).ok_or_else(|| {
                LauncherError::Font(format!("no font loaded for size {font_size}"))
            })?;
            font.render(text)
                .blended(to_sdl(color))
                .map_err(|e| LauncherError::Backend(e.to_string()))?
        };
        let texture = self
            .texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| LauncherError::Backend(e.to_string()))?;
        self.canvas
            .copy(
                &texture,
                None,
                Rect::new(x, y, surface.width(), surface.height()),
            )
            .map_err(LauncherError::Backend)
    }

    fn swap_buffers(&mut self) -> Result<()> {
        self.canvas.present();
        Ok(())
    }

    fn read_pixels(&self, x: i32, y: i32, w: u32, h: u32) -> Result<Vec<u8>> {
        self.canvas
            .read_pixels(Rect::new(x, y, w, h), PixelFormatEnum::ABGR8888)
            .map_err(LauncherError::Backend)
    }

    fn shutdown(&mut self) -> Result<()> {
        self.fonts.clear();
        log::info!("SDL2 backend shut down");
        Ok(())
    }

    fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        radius: u16,
        color: Color,
    ) -> Result<()> {
        if radius == 0 || w == 0 || h == 0 {
            return self.fill_rect(x, y, w, h, color);
        }
        let r = u32::from(radius).min(w / 2).min(h / 2) as i32;
        self.set_color(color);

        // Center body.
        self.canvas
            .fill_rect(Rect::new(x, y + r, w, h - r as u32 * 2))
            .map_err(LauncherError::Backend)?;

        // Corner rows as horizontal spans, inset by the circle profile.
        let right = x + w as i32 - 1;
        let bottom = y + h as i32 - 1;
        for row in 0..r {
            let dy = r - row;
            let inset = r - isqrt(r * r - dy * dy);
            for py in [y + row, bottom - row] {
                self.canvas
                    .draw_line(Point::new(x + inset, py), Point::new(right - inset, py))
                    .map_err(LauncherError::Backend)?;
            }
        }
        Ok(())
    }
}

impl InputBackend for SdlBackend {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        Ok(self.event_pump.poll_iter().filter_map(map_sdl_event).collect())
    }
}

fn to_sdl(color: Color) -> sdl2::pixels::Color {
    sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a)
}

fn map_sdl_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::Window {
            win_event: WindowEvent::Close,
            ..
        } => Some(InputEvent::Quit),
        Event::Window {
            win_event: WindowEvent::FocusGained,
            ..
        } => Some(InputEvent::FocusGained),
        Event::Window {
            win_event: WindowEvent::FocusLost,
            ..
        } => Some(InputEvent::FocusLost),
        Event::KeyDown {
            keycode: Some(key), ..
        } => map_key(key).map(InputEvent::ButtonPress),
        Event::KeyUp {
            keycode: Some(key), ..
        } => map_key(key).map(InputEvent::ButtonRelease),
        _ => None,
    }
}

fn map_key(key: Keycode) -> Option<Button> {
    match key {
        Keycode::Up => Some(Button::Up),
        Keycode::Down => Some(Button::Down),
        Keycode::Left => Some(Button::Left),
        Keycode::Right => Some(Button::Right),
        Keycode::Return | Keycode::KpEnter => Some(Button::Confirm),
        Keycode::Escape | Keycode::Backspace => Some(Button::Cancel),
        Keycode::Home => Some(Button::Home),
        _ => None,
    }
}

/// Integer square root (floor).
fn isqrt(n: i32) -> i32 {
    if n <= 0 {
        return 0;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isqrt_floors() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(-4), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(35), 5);
        assert_eq!(isqrt(36), 6);
    }

    #[test]
    fn key_table() {
        assert_eq!(map_key(Keycode::Up), Some(Button::Up));
        assert_eq!(map_key(Keycode::KpEnter), Some(Button::Confirm));
        assert_eq!(map_key(Keycode::Backspace), Some(Button::Cancel));
        assert_eq!(map_key(Keycode::Home), Some(Button::Home));
        assert_eq!(map_key(Keycode::Q), None);
    }

    #[test]
    fn window_close_maps_to_quit() {
        let ev = Event::Window {
            timestamp: 0,
            window_id: 1,
            win_event: WindowEvent::Close,
        };
        assert_eq!(map_sdl_event(ev), Some(InputEvent::Quit));
    }

    #[test]
    fn focus_events_pass_through() {
        let ev = Event::Window {
            timestamp: 0,
            window_id: 1,
            win_event: WindowEvent::FocusLost,
        };
        assert_eq!(map_sdl_event(ev), Some(InputEvent::FocusLost));
    }

    #[test]
    fn quit_event_maps_to_quit() {
        assert_eq!(
            map_sdl_event(Event::Quit { timestamp: 0 }),
            Some(InputEvent::Quit)
        );
    }
}
