//! Frame rendering.
//!
//! [`Renderer::render`] is a pure function of the launcher state: it reads
//! the state, registry and content providers and returns the frame as a list
//! of [`DrawCommand`]s. The side panel is always the first command; the
//! main loop clears the screen to the background color before replaying.

use crate::backend::{DrawCommand, TextMetrics};
use crate::config::Palette;
use crate::content::ProviderSet;
use crate::layout::{BACK_HINT, Layout, MENU_TITLE};
use crate::registry::{ScreenId, ScreenRegistry};
use crate::state::{AppState, View, clamp_selection};

/// Turns launcher state into draw commands.
#[derive(Debug, Clone)]
pub struct Renderer {
    layout: Layout,
    palette: Palette,
}

impl Renderer {
    pub fn new(layout: Layout, palette: Palette) -> Self {
        Self { layout, palette }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Compute the draw commands for one frame.
    pub fn render(
        &self,
        state: &AppState,
        registry: &ScreenRegistry,
        providers: &ProviderSet,
        metrics: &dyn TextMetrics,
    ) -> Vec<DrawCommand> {
        let mut cmds = vec![self.panel()];
        match state.view {
            View::MainMenu => self.render_menu(&mut cmds, state, registry, metrics),
            View::Screen(id) => {
                self.render_screen(&mut cmds, id, state, registry, providers, metrics)
            },
        }
        cmds
    }

    fn panel(&self) -> DrawCommand {
        DrawCommand::FillRect {
            x: 0,
            y: 0,
            w: self.layout.panel_w,
            h: self.layout.screen_h,
            color: self.palette.panel,
        }
    }

    fn render_menu(
        &self,
        cmds: &mut Vec<DrawCommand>,
        state: &AppState,
        registry: &ScreenRegistry,
        metrics: &dyn TextMetrics,
    ) {
        let l = &self.layout;
        cmds.push(DrawCommand::DrawText {
            text: MENU_TITLE.to_string(),
            x: l.content_x,
            y: l.menu_title_y,
            font_size: l.title_font,
            color: self.palette.title,
        });

        let selected = clamp_selection(state.selected, registry.len());
        if selected != state.selected {
            log::warn!(
                "Selection {} out of range for {} entries, drawing {selected}",
                state.selected,
                registry.len()
            );
        }

        for (i, entry) in registry.iter().enumerate() {
            let y = l.row_y(i);
            let color = if i == selected {
                cmds.push(self.highlight(&entry.label, y, metrics));
                self.palette.highlight
            } else {
                self.palette.text
            };
            cmds.push(DrawCommand::DrawText {
                text: entry.label.clone(),
                x: l.menu_label_x,
                y,
                font_size: l.menu_font,
                color,
            });
        }
    }

    /// Highlight box for the label at row top `y`.
    ///
    /// Starts from the nominal row box and grows to keep `highlight_margin`
    /// pixels around the measured glyphs.
    fn highlight(&self, label: &str, y: i32, metrics: &dyn TextMetrics) -> DrawCommand {
        let l = &self.layout;
        let m = l.highlight_margin;

        let nom_left = l.highlight_inset;
        let nom_top = y - l.highlight_lift;
        let nom_right = l.panel_w as i32 - l.highlight_inset;
        let nom_bottom = nom_top + l.menu_stride;

        let text_w = metrics.measure_text(label, l.menu_font) as i32;
        let text_h = metrics.measure_text_height(l.menu_font) as i32;

        let left = nom_left.min(l.menu_label_x - m);
        let top = nom_top.min(y - m);
        let right = nom_right.max(l.menu_label_x + text_w + m);
        let bottom = nom_bottom.max(y + text_h + m);

        DrawCommand::FillRoundedRect {
            x: left,
            y: top,
            w: (right - left) as u32,
            h: (bottom - top) as u32,
            radius: l.highlight_radius,
            color: self.palette.highlight_background,
        }
    }

    fn render_screen(
        &self,
        cmds: &mut Vec<DrawCommand>,
        id: ScreenId,
        state: &AppState,
        registry: &ScreenRegistry,
        providers: &ProviderSet,
        metrics: &dyn TextMetrics,
    ) {
        let l = &self.layout;
        let content = providers.content(id, state, registry);

        cmds.push(DrawCommand::DrawText {
            text: BACK_HINT.to_string(),
            x: l.back_hint_x,
            y: l.back_hint_y,
            font_size: l.menu_font,
            color: self.palette.text,
        });
        cmds.push(DrawCommand::DrawText {
            text: content.title,
            x: l.content_x,
            y: l.screen_title_y,
            font_size: l.title_font,
            color: self.palette.title,
        });

        let max_w = (l.content_right - l.content_x) as u32;
        let line_h = metrics.measure_text_height(l.menu_font).max(1) as i32;
        let lines = wrap_text(&content.body, max_w, l.menu_font, metrics);
        for (i, line) in lines.into_iter().enumerate() {
            cmds.push(DrawCommand::DrawText {
                text: line,
                x: l.content_x,
                y: l.screen_body_y + i as i32 * line_h,
                font_size: l.menu_font,
                color: self.palette.text,
            });
        }
    }
}

/// Greedy word wrap.
///
/// Explicit newlines start a new line. A single word wider than `max_w`
/// is kept whole on its own line.
pub fn wrap_text(text: &str, max_w: u32, font_size: u16, metrics: &dyn TextMetrics) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if metrics.measure_text(&candidate, font_size) <= max_w {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Color, FixedMetrics};
    use crate::registry::MenuEntry;

    fn renderer() -> Renderer {
        Renderer::new(Layout::default(), Palette::default())
    }

    fn texts(cmds: &[DrawCommand]) -> Vec<(&str, i32, i32, Color)> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCommand::DrawText {
                    text, x, y, color, ..
                } => Some((text.as_str(), *x, *y, *color)),
                _ => None,
            })
            .collect()
    }

    fn highlights(cmds: &[DrawCommand]) -> Vec<&DrawCommand> {
        cmds.iter()
            .filter(|c| matches!(c, DrawCommand::FillRoundedRect { .. }))
            .collect()
    }

    fn render_menu_at(selected: usize) -> Vec<DrawCommand> {
        let state = AppState {
            view: View::MainMenu,
            selected,
        };
        renderer().render(
            &state,
            &ScreenRegistry::builtin(),
            &ProviderSet::stubs(),
            &FixedMetrics,
        )
    }

    #[test]
    fn panel_is_drawn_first() {
        let palette = Palette::default();
        for cmds in [
            render_menu_at(0),
            renderer().render(
                &AppState {
                    view: View::Screen(ScreenId::Music),
                    selected: 0,
                },
                &ScreenRegistry::builtin(),
                &ProviderSet::stubs(),
                &FixedMetrics,
            ),
        ] {
            assert_eq!(cmds[0], DrawCommand::FillRect {
                x: 0,
                y: 0,
                w: 180,
                h: 320,
                color: palette.panel,
            });
        }
    }

    #[test]
    fn main_menu_title_and_labels() {
        let cmds = render_menu_at(0);
        let t = texts(&cmds);
        assert_eq!(t[0].0, "Main Menu");
        assert_eq!((t[0].1, t[0].2), (200, 20));
        let labels: Vec<_> = t[1..].iter().map(|(s, ..)| *s).collect();
        assert_eq!(labels, ["Music", "Video", "Emulator", "Radio Tuner", "Clock"]);
        // Fixed vertical stride.
        let ys: Vec<_> = t[1..].iter().map(|(_, _, y, _)| *y).collect();
        assert_eq!(ys, [60, 105, 150, 195, 240]);
    }

    #[test]
    fn only_selected_entry_is_highlighted() {
        let palette = Palette::default();
        let cmds = render_menu_at(2);
        assert_eq!(highlights(&cmds).len(), 1);
        for (text, _, _, color) in texts(&cmds).into_iter().skip(1) {
            if text == "Emulator" {
                assert_eq!(color, palette.highlight);
            } else {
                assert_eq!(color, palette.text);
            }
        }
    }

    #[test]
    fn highlight_precedes_its_label() {
        let cmds = render_menu_at(1);
        let hl = cmds
            .iter()
            .position(|c| matches!(c, DrawCommand::FillRoundedRect { .. }))
            .unwrap();
        assert!(matches!(
            &cmds[hl + 1],
            DrawCommand::DrawText { text, .. } if text == "Video"
        ));
    }

    #[test]
    fn highlight_nominal_bounds() {
        let cmds = render_menu_at(0);
        let (x, y, w, h) = highlights(&cmds)[0].rect().unwrap();
        assert_eq!((x, y, w, h), (10, 54, 160, 45));
    }

    #[test]
    fn highlight_contains_glyphs_with_margin() {
        let reg = ScreenRegistry::new(vec![
            MenuEntry::new("Music", ScreenId::Music),
            MenuEntry::new("An Extremely Long Radio Label", ScreenId::RadioTuner),
        ])
        .unwrap();
        let state = AppState {
            view: View::MainMenu,
            selected: 1,
        };
        let r = renderer();
        let cmds = r.render(&state, &reg, &ProviderSet::stubs(), &FixedMetrics);
        let (x, y, w, h) = highlights(&cmds)[0].rect().unwrap();

        let l = r.layout();
        let m = l.highlight_margin;
        let label = "An Extremely Long Radio Label";
        let tx = l.menu_label_x;
        let ty = l.row_y(1);
        let tw = FixedMetrics.measure_text(label, l.menu_font) as i32;
        let th = FixedMetrics.measure_text_height(l.menu_font) as i32;

        assert!(x <= tx - m);
        assert!(y <= ty - m);
        assert!(x + w as i32 >= tx + tw + m);
        assert!(y + h as i32 >= ty + th + m);
    }

    #[test]
    fn out_of_range_selection_is_clamped() {
        let palette = Palette::default();
        let cmds = render_menu_at(99);
        assert_eq!(highlights(&cmds).len(), 1);
        let clock = texts(&cmds)
            .into_iter()
            .find(|(t, ..)| *t == "Clock")
            .unwrap();
        assert_eq!(clock.3, palette.highlight);
    }

    #[test]
    fn screen_shows_back_hint_title_and_body() {
        let state = AppState {
            view: View::Screen(ScreenId::Emulator),
            selected: 2,
        };
        let cmds = renderer().render(
            &state,
            &ScreenRegistry::builtin(),
            &ProviderSet::stubs(),
            &FixedMetrics,
        );
        let t = texts(&cmds);
        assert_eq!((t[0].0, t[0].1, t[0].2), ("ESC: Back", 15, 285));
        assert_eq!((t[1].0, t[1].1, t[1].2), ("Emulator", 200, 40));
        assert_eq!(t[2].0, "Here you'll launch");
        assert_eq!((t[2].1, t[2].2), (200, 80));
        assert_eq!((t[3].0, t[3].2), ("ROMs.", 102));
        assert!(highlights(&cmds).is_empty());
        assert!(!t.iter().any(|(s, ..)| *s == "Main Menu"));
    }

    #[test]
    fn screen_without_provider_uses_fallback() {
        let state = AppState {
            view: View::Screen(ScreenId::Clock),
            selected: 4,
        };
        let cmds = renderer().render(
            &state,
            &ScreenRegistry::builtin(),
            &ProviderSet::new(),
            &FixedMetrics,
        );
        let t = texts(&cmds);
        assert_eq!(t[1].0, "Clock");
        let body: Vec<_> = t[2..].iter().map(|(s, ..)| *s).collect();
        assert_eq!(body.join(" "), crate::content::FALLBACK_BODY);
    }

    #[test]
    fn render_is_pure() {
        let state = AppState {
            view: View::MainMenu,
            selected: 3,
        };
        let reg = ScreenRegistry::builtin();
        let providers = ProviderSet::stubs();
        let r = renderer();
        let a = r.render(&state, &reg, &providers, &FixedMetrics);
        let b = r.render(&state, &reg, &providers, &FixedMetrics);
        assert_eq!(a, b);
        assert_eq!(state.selected, 3);
    }

    #[test]
    fn wrap_fits_width() {
        // 13 px per glyph at size 22.
        let lines = wrap_text("Here you'll list and play songs.", 260, 22, &FixedMetrics);
        assert_eq!(lines, ["Here you'll list and", "play songs."]);
        for line in &lines {
            assert!(FixedMetrics.measure_text(line, 22) <= 260);
        }
    }

    #[test]
    fn wrap_keeps_long_word_whole() {
        let lines = wrap_text("a supercalifragilistic b", 40, 22, &FixedMetrics);
        assert_eq!(lines, ["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn wrap_honors_newlines_and_skips_blank() {
        let lines = wrap_text("one\n\ntwo  three", 1000, 22, &FixedMetrics);
        assert_eq!(lines, ["one", "two three"]);
        assert!(wrap_text("", 100, 22, &FixedMetrics).is_empty());
    }
}
