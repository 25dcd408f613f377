//! Standalone application wrapper for the shell.
//!
//! [`ShellApp`] owns the models (menu, sidebar state, settings), the texture
//! caches, and the in-flight logo acquisition, and implements
//! [`eframe::App`]. All mutation happens on the UI thread; the only
//! background work is the logo task, whose single result is drained from an
//! mpsc receiver each frame.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use eframe::egui;

use crate::assets::{self, AssetResolver};
use crate::avatar;
use crate::config::ShellConfig;
use crate::data::{MenuModel, ShellSettings, SidebarState};
use crate::icons::IconSet;
use crate::logo::{self, LogoResolution};
use crate::panels;

// ─────────────────────────────────────────────────────────────────────────────
// LogoDisplay
// ─────────────────────────────────────────────────────────────────────────────

/// UI-side logo state.
pub(crate) enum LogoDisplay {
    /// Acquisition still running on the background thread.
    Pending(mpsc::Receiver<LogoResolution>),
    /// Decoded and uploaded; ready to draw.
    Image(egui::TextureHandle),
    /// Acquisition or decoding failed; draw the lettered glyph.
    Fallback,
}

// ─────────────────────────────────────────────────────────────────────────────
// ShellApp
// ─────────────────────────────────────────────────────────────────────────────

/// The shell application: one configurable window with a collapsible
/// sidebar and a title-only content area.
pub struct ShellApp {
    pub(crate) cfg: ShellConfig,
    pub(crate) resolver: AssetResolver,
    pub(crate) sidebar: SidebarState,
    pub(crate) menu: MenuModel,
    pub(crate) settings: ShellSettings,
    pub(crate) icons: IconSet,
    pub(crate) logo: LogoDisplay,
    pub(crate) avatar: Option<egui::TextureHandle>,

    /// Flag so the theme is applied once, on the very first frame.
    theme_applied: bool,
    /// Flag so the persisted profile picture is loaded once a context exists.
    avatar_loaded: bool,
}

impl ShellApp {
    /// Build the app from a config: load settings, activate the initial
    /// tab, and start the logo acquisition in the background.
    pub fn new(cfg: ShellConfig) -> Self {
        let resolver = AssetResolver::discover(cfg.assets_dir.as_deref());
        let settings = ShellSettings::load(&cfg.settings_namespace);

        let mut menu = MenuModel::new(cfg.menu.clone());
        let initial = cfg
            .initial_tab
            .clone()
            .or_else(|| menu.entries().first().map(|e| e.label.clone()));
        if let Some(label) = initial {
            if !menu.activate(&label) {
                log::warn!("initial tab {:?} is not a menu entry", label);
            }
        }

        let cache_path = assets::logo_cache_path(&cfg.logo.cache_file);
        let logo = LogoDisplay::Pending(logo::spawn_logo_task(cfg.logo.url.clone(), cache_path));

        Self {
            cfg,
            resolver,
            sidebar: SidebarState::default(),
            menu,
            settings,
            icons: IconSet::new(),
            logo,
            avatar: None,
            theme_applied: false,
            avatar_loaded: false,
        }
    }

    /// The label shown in the content area (the active tab's).
    pub fn content_title(&self) -> &str {
        self.menu.active_label().unwrap_or("")
    }

    pub fn sidebar_state(&self) -> SidebarState {
        self.sidebar
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Logo delivery
    // ─────────────────────────────────────────────────────────────────────────

    /// Drain the logo channel; on delivery, decode and upload the texture or
    /// fall back to the glyph. At most one message ever arrives.
    fn poll_logo(&mut self, ctx: &egui::Context) {
        let resolution = match &self.logo {
            LogoDisplay::Pending(rx) => match rx.try_recv() {
                Ok(res) => Some(res),
                Err(mpsc::TryRecvError::Empty) => None,
                Err(mpsc::TryRecvError::Disconnected) => Some(LogoResolution::Unavailable),
            },
            _ => None,
        };
        let Some(resolution) = resolution else { return };

        self.logo = match resolution.bytes() {
            Some(bytes) => match self.logo_texture_from_bytes(ctx, bytes) {
                Some(tex) => LogoDisplay::Image(tex),
                None => {
                    log::warn!("logo bytes could not be decoded; using fallback glyph");
                    LogoDisplay::Fallback
                }
            },
            None => LogoDisplay::Fallback,
        };
    }

    /// Decode logo bytes and scale them for the display's pixel density.
    fn logo_texture_from_bytes(
        &self,
        ctx: &egui::Context,
        bytes: &[u8],
    ) -> Option<egui::TextureHandle> {
        let img = image::load_from_memory(bytes).ok()?;
        let px = (self.cfg.sidebar.logo_size * ctx.pixels_per_point())
            .round()
            .max(1.0) as u32;
        let scaled = img.resize(px, px, image::imageops::FilterType::CatmullRom);
        let rgba = scaled.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        Some(ctx.load_texture("sidebar-logo", color_image, egui::TextureOptions::LINEAR))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Profile picture
    // ─────────────────────────────────────────────────────────────────────────

    /// Crop, upload and display the picture at `path`. Returns `false` (and
    /// leaves the current display) when the file cannot be loaded.
    fn load_avatar(&mut self, ctx: &egui::Context, path: &Path) -> bool {
        let px = (self.cfg.profile.picture_diameter * ctx.pixels_per_point())
            .round()
            .max(1.0) as u32;
        match avatar::load_circular(path, px) {
            Ok(image) => {
                self.avatar =
                    Some(ctx.load_texture("profile-picture", image, egui::TextureOptions::LINEAR));
                true
            }
            Err(e) => {
                log::warn!("failed to load profile picture: {}", e);
                false
            }
        }
    }

    /// Apply a freshly picked picture and persist its path. Nothing is
    /// persisted when the image cannot be loaded.
    pub(crate) fn set_profile_picture(&mut self, ctx: &egui::Context, path: &Path) {
        if !self.load_avatar(ctx, path) {
            return;
        }
        self.settings.profile_picture_path = Some(path.display().to_string());
        if let Err(e) = self.settings.save(&self.cfg.settings_namespace) {
            log::warn!("failed to save settings: {}", e);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// eframe integration
// ─────────────────────────────────────────────────────────────────────────────

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply the palette once on the first frame (after the egui context
        // is available).
        if !self.theme_applied {
            self.cfg.theme.apply(ctx);
            self.theme_applied = true;
        }

        // Restore the persisted profile picture once a context exists.
        if !self.avatar_loaded {
            if let Some(path) = self.settings.profile_picture_path.clone() {
                self.load_avatar(ctx, &PathBuf::from(path));
            }
            self.avatar_loaded = true;
        }

        self.poll_logo(ctx);

        panels::sidebar_ui::show(ctx, self);
        panels::content_ui::show(ctx, self);

        // 1 px border around the frameless window.
        let border = egui::LayerId::new(egui::Order::Foreground, egui::Id::new("window_border"));
        ctx.layer_painter(border).rect_stroke(
            ctx.screen_rect(),
            egui::CornerRadius::ZERO,
            egui::Stroke::new(1.0, self.cfg.theme.window_border),
            egui::StrokeKind::Inside,
        );

        // Keep repainting while the width animation and logo task settle.
        ctx.request_repaint_after(std::time::Duration::from_millis(16));
    }
}
