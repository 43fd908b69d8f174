//! Premultiplied resampling and Porter-Duff "over" compositing

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

/// Resample with color weighted by alpha so transparent pixels never bleed
/// their (black) color into the edges of the artwork.
pub fn resize_premultiplied(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let premultiplied = Rgba32FImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = a as f32 / 255.0;
        Rgba([
            r as f32 / 255.0 * alpha,
            g as f32 / 255.0 * alpha,
            b as f32 / 255.0 * alpha,
            alpha,
        ])
    });

    let resized = imageops::resize(&premultiplied, width, height, FilterType::Lanczos3);

    RgbaImage::from_fn(width, height, |x, y| {
        let [r, g, b, a] = resized.get_pixel(x, y).0;
        let alpha = to_channel(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([
            to_channel(r / a),
            to_channel(g / a),
            to_channel(b / a),
            alpha,
        ])
    })
}

/// Composite `top` over `bottom` with its top-left corner at `(x, y)`.
///
/// Pixels of `top` that fall outside `bottom` are ignored. An opaque
/// bottom pixel stays exactly opaque.
pub fn composite_over(bottom: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    for (tx, ty, fg) in top.enumerate_pixels() {
        let (bx, by) = (x + tx, y + ty);
        if bx >= bottom.width() || by >= bottom.height() {
            continue;
        }
        let bg = bottom.get_pixel_mut(bx, by);
        *bg = over(*fg, *bg);
    }
}

fn over(fg: Rgba<u8>, bg: Rgba<u8>) -> Rgba<u8> {
    match fg[3] {
        0 => return bg,
        255 => return fg,
        _ => {}
    }
    if bg[3] == 255 {
        // Result is opaque; plain linear interpolation
        let fa = fg[3] as u32;
        let mix = |f: u8, b: u8| ((f as u32 * fa + b as u32 * (255 - fa) + 127) / 255) as u8;
        return Rgba([mix(fg[0], bg[0]), mix(fg[1], bg[1]), mix(fg[2], bg[2]), 255]);
    }

    let fa = fg[3] as f32 / 255.0;
    let ba = bg[3] as f32 / 255.0;
    let out_a = fa + ba * (1.0 - fa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let mix = |f: u8, b: u8| {
        let f = f as f32 / 255.0;
        let b = b as f32 / 255.0;
        to_channel((f * fa + b * ba * (1.0 - fa)) / out_a)
    };
    Rgba([
        mix(fg[0], bg[0]),
        mix(fg[1], bg[1]),
        mix(fg[2], bg[2]),
        to_channel(out_a),
    ])
}

fn to_channel(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
