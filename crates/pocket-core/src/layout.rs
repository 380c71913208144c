//! Screen geometry.
//!
//! All positions are derived from the display size and font sizes in the
//! config; the constants below are tuned for the stock 480x320 panel.

use crate::config::LauncherConfig;

// -- Layout constants ---------------------------------------------------------

/// Width of the left-hand panel.
const PANEL_W: u32 = 180;
/// Gap between the panel and right-hand text.
const CONTENT_GAP: i32 = 20;
/// Right margin for wrapped body text.
const CONTENT_RIGHT_MARGIN: i32 = 20;

const MENU_TITLE_Y: i32 = 20;
const MENU_START_Y: i32 = 60;
const MENU_STRIDE: i32 = 45;
const MENU_LABEL_X: i32 = 25;

/// Horizontal inset of the highlight box inside the panel.
const HIGHLIGHT_INSET: i32 = 10;
/// How far the highlight box starts above the label baseline row.
const HIGHLIGHT_LIFT: i32 = 6;
const HIGHLIGHT_RADIUS: u16 = 6;
/// Minimum clearance between label glyphs and highlight edge.
const HIGHLIGHT_MARGIN: i32 = 4;

const BACK_HINT_X: i32 = 15;
/// Distance of the back hint from the bottom edge.
const BACK_HINT_BOTTOM: i32 = 35;
const SCREEN_TITLE_Y: i32 = 40;
const SCREEN_BODY_Y: i32 = 80;

pub const MENU_TITLE: &str = "Main Menu";
pub const BACK_HINT: &str = "ESC: Back";

// -- Types --------------------------------------------------------------------

/// Resolved geometry for one display configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub screen_w: u32,
    pub screen_h: u32,
    pub panel_w: u32,
    pub title_font: u16,
    pub menu_font: u16,
    /// Left edge of text drawn to the right of the panel.
    pub content_x: i32,
    /// Right edge (exclusive) for wrapped body text.
    pub content_right: i32,
    pub menu_title_y: i32,
    pub menu_start_y: i32,
    pub menu_stride: i32,
    pub menu_label_x: i32,
    pub highlight_inset: i32,
    pub highlight_lift: i32,
    pub highlight_radius: u16,
    pub highlight_margin: i32,
    pub back_hint_x: i32,
    pub back_hint_y: i32,
    pub screen_title_y: i32,
    pub screen_body_y: i32,
}

impl Layout {
    pub fn new(screen_w: u32, screen_h: u32, title_font: u16, menu_font: u16) -> Self {
        // Narrow displays give the panel at most half the width.
        let panel_w = PANEL_W.min(screen_w / 2).max(1);
        let content_x = panel_w as i32 + CONTENT_GAP;
        // Rows must be tall enough for the menu font plus highlight padding.
        let menu_stride = MENU_STRIDE.max(i32::from(menu_font) + 2 * HIGHLIGHT_MARGIN);
        Self {
            screen_w,
            screen_h,
            panel_w,
            title_font,
            menu_font,
            content_x,
            content_right: (screen_w as i32 - CONTENT_RIGHT_MARGIN).max(content_x + 1),
            menu_title_y: MENU_TITLE_Y,
            menu_start_y: MENU_START_Y,
            menu_stride,
            menu_label_x: MENU_LABEL_X,
            highlight_inset: HIGHLIGHT_INSET,
            highlight_lift: HIGHLIGHT_LIFT,
            highlight_radius: HIGHLIGHT_RADIUS,
            highlight_margin: HIGHLIGHT_MARGIN,
            back_hint_x: BACK_HINT_X,
            back_hint_y: screen_h as i32 - BACK_HINT_BOTTOM,
            screen_title_y: SCREEN_TITLE_Y,
            screen_body_y: SCREEN_BODY_Y,
        }
    }

    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::new(
            config.screen_width,
            config.screen_height,
            config.font.title_size,
            config.font.menu_size,
        )
    }

    /// Top of the label in menu row `index`.
    pub fn row_y(&self, index: usize) -> i32 {
        self.menu_start_y + index as i32 * self.menu_stride
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::from_config(&LauncherConfig::default())
    }
}
