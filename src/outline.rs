use crate::types::AppConfig;

use image::{imageops, DynamicImage, GrayImage, Luma, Rgba, RgbaImage};
use indicatif::ProgressBar;

/// Renders a soft glow behind `img` by blurring its silhouette.
///
/// The output gains `2 * outline_width` pixels of transparent padding on
/// every side so the glow can fall off without being clipped. Sources without
/// an alpha channel are treated as fully opaque.
pub fn outline(img: &DynamicImage, config: &AppConfig, pb: &ProgressBar) -> RgbaImage {
    // Pass 1: Pad the source onto a transparent canvas
    pb.set_message("Pass 1: Padding");
    let padded = pad(&img.to_rgba8(), config.outline_width * 2);

    // Pass 2: Blur the silhouette into a glow intensity map
    pb.set_message("Pass 2: Blurring alpha channel");
    let glow_map = blurred_alpha(&padded, config.outline_width as f32);

    // Pass 3: Lay the padded source over the colored glow
    pb.set_message("Pass 3: Compositing glow");
    composite_glow(padded, &glow_map, config.outline_color)
}

fn pad(img: &RgbaImage, padding: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(img.width() + padding * 2, img.height() + padding * 2);

    imageops::overlay(&mut canvas, img, padding as i64, padding as i64);

    canvas
}

fn blurred_alpha(img: &RgbaImage, sigma: f32) -> GrayImage {
    let alpha = GrayImage::from_fn(img.width(), img.height(), |x, y| {
        Luma([img.get_pixel(x, y)[3]])
    });

    imageops::blur(&alpha, sigma)
}

fn composite_glow(foreground: RgbaImage, glow_map: &GrayImage, color: Rgba<u8>) -> RgbaImage {
    let mut glow = RgbaImage::from_pixel(foreground.width(), foreground.height(), color);

    // The glow layer's opacity comes entirely from the blurred silhouette;
    // the configured color's own alpha component is discarded
    for (x, y, pixel) in glow.enumerate_pixels_mut() {
        pixel[3] = glow_map.get_pixel(x, y)[0];
    }

    imageops::overlay(&mut glow, &foreground, 0, 0);

    glow
}
