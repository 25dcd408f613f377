//! Top-level entry point for running the shell as a native window.
//!
//! The [`run_shell`] function is the primary public API. It accepts a
//! [`ShellConfig`], builds the frameless window, installs fonts, and enters
//! the eframe event loop.

use eframe::egui;

use crate::assets::AssetResolver;
use crate::config::{ShellConfig, WindowSize};
use crate::icons;

use super::shell_app::ShellApp;

/// Launch the shell in a native window.
///
/// This is the main entry point for standalone use. It:
///
/// 1. Constructs a [`ShellApp`] from the config (settings are loaded and the
///    logo acquisition starts here).
/// 2. Builds a frameless viewport sized per [`WindowSize`], with the app
///    icon rasterized from SVG when one is configured.
/// 3. Installs the configured fonts plus the Phosphor icon font and enters
///    the eframe event loop.
///
/// The call blocks until the window is closed.
pub fn run_shell(cfg: ShellConfig) -> eframe::Result<()> {
    let app = ShellApp::new(cfg);

    let title = app.cfg.window.title.clone();
    let mut viewport = egui::ViewportBuilder::default()
        .with_decorations(app.cfg.window.decorations)
        .with_inner_size(initial_size(&app.cfg.window.size));
    if let Some(rel) = &app.cfg.window.app_icon {
        if let Some(icon) = load_app_icon_svg(&app.resolver, rel) {
            viewport = viewport.with_icon(icon);
        }
    }
    let opts = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| {
            // Install the configured fonts (first one becomes the primary
            // proportional face) and the Phosphor icon font.
            let mut fonts = egui::FontDefinitions::default();
            for font in app.cfg.fonts.iter().rev() {
                let Some(path) = app.resolver.resolve(&font.file) else {
                    log::warn!("font file {:?} not found under the asset root", font.file);
                    continue;
                };
                match std::fs::read(&path) {
                    Ok(bytes) => {
                        fonts.font_data.insert(
                            font.name.clone(),
                            std::sync::Arc::new(egui::FontData::from_owned(bytes)),
                        );
                        fonts
                            .families
                            .entry(egui::FontFamily::Proportional)
                            .or_default()
                            .insert(0, font.name.clone());
                    }
                    Err(e) => log::warn!("failed to read font {:?}: {}", path, e),
                }
            }
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Resolve the initial window size from the config.
fn initial_size(size: &WindowSize) -> egui::Vec2 {
    match size {
        WindowSize::Fixed([w, h]) => egui::vec2(*w, *h),
        WindowSize::ScreenFraction(f) => screen_fraction(*f),
    }
}

/// Size the window to a fraction of the primary display.
#[cfg(feature = "screen-info")]
fn screen_fraction(fraction: f32) -> egui::Vec2 {
    if let Ok(displays) = display_info::DisplayInfo::all() {
        let display = displays
            .iter()
            .find(|d| d.is_primary)
            .or_else(|| displays.first());
        if let Some(d) = display {
            return egui::vec2(d.width as f32 * fraction, d.height as f32 * fraction);
        }
    }
    log::warn!("could not query the primary display; using the default window size");
    egui::vec2(1100.0, 700.0)
}

/// Without the `screen-info` feature there is no display query; fall back to
/// the default fixed size.
#[cfg(not(feature = "screen-info"))]
fn screen_fraction(_fraction: f32) -> egui::Vec2 {
    log::debug!("built without screen-info; using the default window size");
    egui::vec2(1100.0, 700.0)
}

/// Attempt to load the configured app icon SVG as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg(resolver: &AssetResolver, rel: &str) -> Option<egui::IconData> {
    let path = resolver.resolve(rel)?;
    let data = std::fs::read(path).ok()?;
    let (rgba, width, height) = icons::svg_to_rgba(&data)?;
    Some(egui::IconData {
        rgba,
        width,
        height,
    })
}
