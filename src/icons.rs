//! SVG icon rasterization and texture caching.
//!
//! Menu icons are SVG files resolved through the asset chain, rendered at
//! the physical pixel size they will be displayed at (pixel-density aware),
//! and cached as egui textures keyed by (file, pixel size). A file that
//! fails to resolve or parse is logged once and skipped from then on.

use std::collections::{HashMap, HashSet};

use eframe::egui;

use crate::assets::AssetResolver;

/// Fraction of the target square actually covered by the glyph; the rest is
/// centering margin.
const ICON_INSET: f32 = 0.9;

// ─────────────────────────────────────────────────────────────────────────────
// Rasterization
// ─────────────────────────────────────────────────────────────────────────────

/// Render SVG bytes at their natural size to straight-alpha RGBA.
///
/// Returns `None` if the document cannot be parsed or has a degenerate size.
pub fn svg_to_rgba(data: &[u8]) -> Option<(Vec<u8>, u32, u32)> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Some((demultiply(&pixmap), size.width(), size.height()))
}

/// Render SVG bytes into a `px` by `px` image, scaled to fit and centered
/// with the standard inset.
pub fn rasterize_svg_fit(data: &[u8], px: u32) -> Option<egui::ColorImage> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &opt).ok()?;
    let size = tree.size();
    if px == 0 || size.width() <= 0.0 || size.height() <= 0.0 {
        return None;
    }
    let scale = ICON_INSET * px as f32 / size.width().max(size.height());
    let tx = (px as f32 - size.width() * scale) / 2.0;
    let ty = (px as f32 - size.height() * scale) / 2.0;
    let mut pixmap = tiny_skia::Pixmap::new(px, px)?;
    let transform = tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, tx, ty);
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    let rgba = demultiply(&pixmap);
    Some(egui::ColorImage::from_rgba_unmultiplied(
        [px as usize, px as usize],
        &rgba,
    ))
}

/// tiny-skia renders premultiplied; egui textures want straight alpha.
fn demultiply(pixmap: &tiny_skia::Pixmap) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    rgba
}

// ─────────────────────────────────────────────────────────────────────────────
// IconSet
// ─────────────────────────────────────────────────────────────────────────────

/// Texture cache for menu icons.
#[derive(Default)]
pub struct IconSet {
    cache: HashMap<(String, u32), egui::TextureHandle>,
    missing: HashSet<String>,
}

impl IconSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture for an asset-relative SVG at `size_pts` points, rendering and
    /// caching it on first use. `None` when the file is missing or invalid.
    pub fn texture(
        &mut self,
        ctx: &egui::Context,
        resolver: &AssetResolver,
        rel: &str,
        size_pts: f32,
    ) -> Option<egui::TextureHandle> {
        let px = (size_pts * ctx.pixels_per_point()).round().max(1.0) as u32;
        let key = (rel.to_string(), px);
        if let Some(tex) = self.cache.get(&key) {
            return Some(tex.clone());
        }
        if self.missing.contains(rel) {
            return None;
        }

        let Some(path) = resolver.resolve(rel) else {
            log::warn!("icon {:?} not found; skipping icon update", rel);
            self.missing.insert(rel.to_string());
            return None;
        };
        let data = match std::fs::read(&path) {
            Ok(d) => d,
            Err(e) => {
                log::warn!("failed to read icon {:?}: {}", path, e);
                self.missing.insert(rel.to_string());
                return None;
            }
        };
        let Some(image) = rasterize_svg_fit(&data, px) else {
            log::warn!("failed to render icon {:?}", path);
            self.missing.insert(rel.to_string());
            return None;
        };

        let tex = ctx.load_texture(
            format!("icon:{}@{}", rel, px),
            image,
            egui::TextureOptions::LINEAR,
        );
        self.cache.insert(key, tex.clone());
        Some(tex)
    }
}
