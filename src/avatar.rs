//! Circular profile-picture cropping.
//!
//! The chosen image is scaled to cover the target square (shorter edge fills
//! the diameter), center-cropped, and masked to a circle with a soft 1 px
//! edge, producing an `egui::ColorImage` ready for a texture upload.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

/// Crop `img` to a circle of `diameter` physical pixels, cover-scaled.
pub fn circular_crop(img: &DynamicImage, diameter: u32) -> egui::ColorImage {
    let diameter = diameter.max(1);
    let (w, h) = (img.width().max(1), img.height().max(1));

    // Cover scale: the shorter edge maps onto the diameter.
    let scale = diameter as f32 / w.min(h) as f32;
    let scaled_w = (w as f32 * scale).round().max(diameter as f32) as u32;
    let scaled_h = (h as f32 * scale).round().max(diameter as f32) as u32;
    let scaled = img.resize_exact(scaled_w, scaled_h, FilterType::CatmullRom);

    let x0 = (scaled_w - diameter) / 2;
    let y0 = (scaled_h - diameter) / 2;
    let cropped = scaled.crop_imm(x0, y0, diameter, diameter).to_rgba8();

    let masked = apply_circle_mask(cropped, diameter);
    egui::ColorImage::from_rgba_unmultiplied(
        [diameter as usize, diameter as usize],
        masked.as_raw(),
    )
}

/// Load an image file and crop it to a circle.
pub fn load_circular(path: &Path, diameter: u32) -> Result<egui::ColorImage, String> {
    let img = image::open(path).map_err(|e| format!("failed to open image {:?}: {}", path, e))?;
    Ok(circular_crop(&img, diameter))
}

fn apply_circle_mask(mut img: RgbaImage, diameter: u32) -> RgbaImage {
    let center = diameter as f32 / 2.0;
    // 1 px inset keeps the rim inside the control.
    let radius = center - 1.0;
    for (x, y, px) in img.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        let dist = (dx * dx + dy * dy).sqrt();
        let coverage = (radius + 0.5 - dist).clamp(0.0, 1.0);
        px.0[3] = (px.0[3] as f32 * coverage).round() as u8;
    }
    img
}
