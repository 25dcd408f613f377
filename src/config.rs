//! Configuration types for the application shell.
//!
//! A [`ShellConfig`] fully describes one shell variant: window chrome,
//! sidebar dimensions, status-panel badge, profile section, logo source and
//! menu entries. Host applications build a config (usually starting from
//! `Default`) and hand it to [`run_shell`](crate::app::run_shell); variants
//! of the same product differ only in the config they pass.

use std::path::PathBuf;

use crate::data::MenuEntry;
use crate::theme::ShellTheme;

// ─────────────────────────────────────────────────────────────────────────────
// WindowStyle
// ─────────────────────────────────────────────────────────────────────────────

/// Initial window size request.
#[derive(Clone, Debug, PartialEq)]
pub enum WindowSize {
    /// Fixed size in points.
    Fixed([f32; 2]),
    /// Fraction of the primary display (e.g. `0.8`). Requires the
    /// `screen-info` feature; falls back to a fixed default without it.
    ScreenFraction(f32),
}

/// Native window chrome settings.
#[derive(Clone, Debug)]
pub struct WindowStyle {
    /// Native window title.
    pub title: String,
    /// Initial inner size.
    pub size: WindowSize,
    /// OS decorations. The shell is designed frameless; it paints its own
    /// border and handles drag-to-move itself. Default: `false`.
    pub decorations: bool,
    /// Asset-relative SVG rendered as the application icon, if it resolves.
    pub app_icon: Option<String>,
}

impl Default for WindowStyle {
    fn default() -> Self {
        Self {
            title: "appshell".to_string(),
            size: WindowSize::Fixed([1100.0, 700.0]),
            decorations: false,
            app_icon: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SidebarStyle
// ─────────────────────────────────────────────────────────────────────────────

/// Sidebar geometry and typography.
#[derive(Clone, Debug)]
pub struct SidebarStyle {
    /// Width in points when expanded. Default: `200.0`.
    pub expanded_width: f32,
    /// Width in points when collapsed. Default: `70.0`.
    pub collapsed_width: f32,
    /// Width animation duration in seconds. Default: `0.45`.
    pub animation_secs: f32,
    /// Logo display size in points. Default: `40.0`.
    pub logo_size: f32,
    /// App-name font size next to the logo. Default: `22.0`.
    pub app_name_font_size: f32,
    /// Default menu icon size in points (entries may override).
    pub menu_icon_size: f32,
    /// Side length of the rounded icon container behind each menu icon.
    pub icon_container_size: f32,
    /// Menu label font size. Default: `14.0`.
    pub menu_font_size: f32,
}

impl Default for SidebarStyle {
    fn default() -> Self {
        Self {
            expanded_width: 200.0,
            collapsed_width: 70.0,
            animation_secs: 0.45,
            logo_size: 40.0,
            app_name_font_size: 22.0,
            menu_icon_size: 28.0,
            icon_container_size: 36.0,
            menu_font_size: 14.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Status panel & badge
// ─────────────────────────────────────────────────────────────────────────────

/// The plan badge inside the status panel (e.g. "FREE").
#[derive(Clone, Debug)]
pub struct BadgeStyle {
    /// Badge text.
    pub label: String,
    /// Badge size in points when the sidebar is expanded.
    pub expanded_size: [f32; 2],
    /// Badge size in points when the sidebar is collapsed.
    pub collapsed_size: [f32; 2],
    /// Outline corner radius.
    pub corner_radius: u8,
    /// Badge text size when expanded; scaled down with the badge when
    /// collapsed.
    pub font_size: f32,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            label: "FREE".to_string(),
            expanded_size: [60.0, 24.0],
            collapsed_size: [40.0, 16.0],
            corner_radius: 8,
            font_size: 11.0,
        }
    }
}

/// The subscription/status panel above the profile section.
#[derive(Clone, Debug)]
pub struct StatusPanelStyle {
    /// Email line shown when expanded.
    pub email: String,
    /// Panel height in points when expanded. Default: `55.0`.
    pub expanded_height: f32,
    /// Panel height in points when collapsed. Default: `40.0`.
    pub collapsed_height: f32,
    /// Panel corner radius. Default: `15`.
    pub corner_radius: u8,
    /// Email font size. Default: `12.0`.
    pub email_font_size: f32,
    pub badge: BadgeStyle,
}

impl Default for StatusPanelStyle {
    fn default() -> Self {
        Self {
            email: "john.doe@email.com".to_string(),
            expanded_height: 55.0,
            collapsed_height: 40.0,
            corner_radius: 15,
            email_font_size: 12.0,
            badge: BadgeStyle::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Profile section
// ─────────────────────────────────────────────────────────────────────────────

/// The profile row at the bottom of the sidebar.
#[derive(Clone, Debug)]
pub struct ProfileStyle {
    /// Username label shown when expanded.
    pub username: String,
    /// Diameter of the circular profile-picture control. Default: `48.0`.
    pub picture_diameter: f32,
    /// Username font size. Default: `14.0`.
    pub username_font_size: f32,
}

impl Default for ProfileStyle {
    fn default() -> Self {
        Self {
            username: "Username".to_string(),
            picture_diameter: 48.0,
            username_font_size: 14.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Logo source
// ─────────────────────────────────────────────────────────────────────────────

/// Where the sidebar logo comes from and where it is cached.
#[derive(Clone, Debug)]
pub struct LogoConfig {
    /// HTTPS URL fetched once when no cache file exists.
    pub url: String,
    /// Opened in the system browser when the logo is clicked.
    pub homepage: Option<String>,
    /// Cache file name under `<runtime dir>/assets/`.
    pub cache_file: String,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            url: "https://rhynec.com/logo.png".to_string(),
            homepage: Some("https://rhynec.com".to_string()),
            cache_file: "logo.png".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fonts
// ─────────────────────────────────────────────────────────────────────────────

/// A font file installed into egui at startup, resolved through the asset
/// chain. Missing files are skipped with a log line and egui's bundled
/// fonts remain in use.
#[derive(Clone, Debug)]
pub struct FontFile {
    /// Family name registered with egui.
    pub name: String,
    /// Asset-relative TTF/OTF path.
    pub file: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// ShellConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for one shell variant.
///
/// Organised into sub-configs:
///
/// | Field        | Purpose |
/// |--------------|---------|
/// | `window`     | Native window chrome (title, size, decorations, icon) |
/// | `sidebar`    | Sidebar geometry and typography |
/// | `status_panel` | Subscription panel and plan badge |
/// | `profile`    | Profile row (username, picture size) |
/// | `logo`       | Logo URL, homepage and cache file |
/// | `theme`      | Color palette |
#[derive(Clone, Debug)]
pub struct ShellConfig {
    /// Product name; shown next to the logo and used as the fallback glyph
    /// source when the logo cannot be fetched.
    pub app_name: String,
    /// Namespace for the settings dot-directory (`~/.<namespace>/`).
    pub settings_namespace: String,
    /// Explicit assets directory, overriding the resolution chain.
    pub assets_dir: Option<PathBuf>,
    /// Menu entries in display order.
    pub menu: Vec<MenuEntry>,
    /// Tab activated at startup. `None` activates the first entry.
    pub initial_tab: Option<String>,
    /// Extra font files to install (first one becomes the default family).
    pub fonts: Vec<FontFile>,

    pub window: WindowStyle,
    pub sidebar: SidebarStyle,
    pub status_panel: StatusPanelStyle,
    pub profile: ProfileStyle,
    pub logo: LogoConfig,
    pub theme: ShellTheme,
}

impl ShellConfig {
    /// The six stock menu entries of the security shell, in display order.
    /// The first entry uses the slightly larger home glyph.
    pub fn default_menu() -> Vec<MenuEntry> {
        vec![
            MenuEntry::new("Dashboard", "icons/home.svg").with_icon_size(30.0),
            MenuEntry::new("VPN", "icons/vpn.svg"),
            MenuEntry::new("Security", "icons/security.svg"),
            MenuEntry::new("Network", "icons/network.svg"),
            MenuEntry::new("Settings", "icons/settings.svg"),
            MenuEntry::new("Profile", "icons/profile.svg"),
        ]
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: "appshell".to_string(),
            settings_namespace: "appshell".to_string(),
            assets_dir: None,
            menu: Self::default_menu(),
            initial_tab: None,
            fonts: Vec::new(),

            window: WindowStyle::default(),
            sidebar: SidebarStyle::default(),
            status_panel: StatusPanelStyle::default(),
            profile: ProfileStyle::default(),
            logo: LogoConfig::default(),
            theme: ShellTheme::default(),
        }
    }
}
