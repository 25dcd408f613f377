use appshell::avatar::circular_crop;
use image::{DynamicImage, Rgba, RgbaImage};

fn solid(w: u32, h: u32) -> DynamicImage {
    let mut img = RgbaImage::new(w, h);
    for px in img.pixels_mut() {
        *px = Rgba([200, 40, 40, 255]);
    }
    DynamicImage::ImageRgba8(img)
}

#[test]
fn wide_input_becomes_an_opaque_centered_disc() {
    let out = circular_crop(&solid(100, 50), 64);
    assert_eq!(out.size, [64, 64]);

    // The disc center keeps the source color at full alpha.
    let center = out.pixels[32 * 64 + 32];
    assert_eq!(center.a(), 255);
    assert!(center.r() > 180, "center should keep the source red channel");

    // The corners lie outside the circle mask.
    assert_eq!(out.pixels[0].a(), 0);
    assert_eq!(out.pixels[63].a(), 0);
    assert_eq!(out.pixels[63 * 64].a(), 0);
    assert_eq!(out.pixels[63 * 64 + 63].a(), 0);
}

#[test]
fn tall_input_is_center_cropped_before_masking() {
    let out = circular_crop(&solid(30, 90), 48);
    assert_eq!(out.size, [48, 48]);
    assert_eq!(out.pixels[24 * 48 + 24].a(), 255);
    assert_eq!(out.pixels[0].a(), 0);
}

#[test]
fn tiny_inputs_are_upscaled_to_the_diameter() {
    let out = circular_crop(&solid(4, 4), 40);
    assert_eq!(out.size, [40, 40]);
    assert_eq!(out.pixels[20 * 40 + 20].a(), 255);
}

#[test]
fn mask_edge_is_inside_the_square() {
    let out = circular_crop(&solid(64, 64), 64);
    // Mid-row pixels at the very left/right edges sit on the 1 px inset rim.
    let mid = 32 * 64;
    assert!(out.pixels[mid].a() < 255, "leftmost mid-row pixel is outside the disc");
    assert!(out.pixels[mid + 63].a() < 255);
}
