//! Color palette for the shell.
//!
//! Defaults are a light look: white surfaces, near-black text, soft gray
//! fills for icon containers and the status panel.

use egui::{Color32, Context, Visuals};

/// All colors used by the shell chrome.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellTheme {
    /// Content-area background.
    pub window_bg: Color32,
    /// Sidebar background.
    pub sidebar_bg: Color32,
    /// 1 px border painted around the frameless window.
    pub window_border: Color32,
    /// Fill of the rounded container behind each menu icon.
    pub icon_container_bg: Color32,
    /// Icon container fill while hovered.
    pub icon_container_hover_bg: Color32,
    /// Menu label text.
    pub menu_text: Color32,
    /// Menu label text of the active entry.
    pub menu_text_active: Color32,
    /// Content title text.
    pub title_text: Color32,
    /// Status panel fill.
    pub panel_bg: Color32,
    /// Plan badge outline and text.
    pub badge_ink: Color32,
    /// Email line text.
    pub email_text: Color32,
    /// Thin divider above the profile row.
    pub divider: Color32,
    /// Placeholder fill of the profile-picture control.
    pub profile_placeholder_bg: Color32,
    /// Fallback logo glyph: background square and letter.
    pub fallback_logo_bg: Color32,
    pub fallback_logo_fg: Color32,
    /// Secondary chrome glyphs (menu dots, collapse caret).
    pub chrome_icon: Color32,
}

impl Default for ShellTheme {
    fn default() -> Self {
        Self {
            window_bg: Color32::WHITE,
            sidebar_bg: Color32::WHITE,
            window_border: Color32::from_rgb(0x99, 0x99, 0x99),
            icon_container_bg: Color32::from_rgb(0xf8, 0xf8, 0xf8),
            icon_container_hover_bg: Color32::from_rgb(0xf0, 0xf0, 0xf0),
            menu_text: Color32::from_rgb(0x33, 0x33, 0x33),
            menu_text_active: Color32::from_rgb(0x11, 0x11, 0x11),
            title_text: Color32::from_rgb(0x33, 0x33, 0x33),
            panel_bg: Color32::from_rgb(0xf8, 0xf8, 0xf8),
            badge_ink: Color32::from_rgb(0x33, 0x33, 0x33),
            email_text: Color32::from_rgb(0x88, 0x88, 0x88),
            divider: Color32::from_rgb(0xe0, 0xe0, 0xe0),
            profile_placeholder_bg: Color32::from_rgb(0xe0, 0xe0, 0xe0),
            fallback_logo_bg: Color32::from_rgb(0x4c, 0x4c, 0x4c),
            fallback_logo_fg: Color32::WHITE,
            chrome_icon: Color32::from_rgb(0x55, 0x55, 0x55),
        }
    }
}

impl ShellTheme {
    /// Apply this palette to the egui context. Called once on the first
    /// frame, after the context exists.
    pub fn apply(&self, ctx: &Context) {
        let mut v = Visuals::light();
        v.panel_fill = self.window_bg;
        v.window_fill = self.window_bg;
        v.extreme_bg_color = self.window_bg;
        v.faint_bg_color = self.icon_container_bg;
        v.override_text_color = Some(self.menu_text);
        v.widgets.noninteractive.bg_fill = self.window_bg;
        v.widgets.noninteractive.fg_stroke.color = self.menu_text;
        // The side panel's separator line picks this up.
        v.widgets.noninteractive.bg_stroke.color = self.divider;
        v.widgets.inactive.bg_fill = self.icon_container_bg;
        v.widgets.inactive.weak_bg_fill = self.icon_container_bg;
        v.widgets.inactive.fg_stroke.color = self.menu_text;
        v.widgets.hovered.bg_fill = self.icon_container_hover_bg;
        v.widgets.hovered.weak_bg_fill = self.icon_container_hover_bg;
        v.widgets.active.bg_fill = Color32::from_rgb(0xe8, 0xe8, 0xe8);
        v.widgets.active.weak_bg_fill = Color32::from_rgb(0xe8, 0xe8, 0xe8);
        ctx.set_visuals(v);
    }
}
