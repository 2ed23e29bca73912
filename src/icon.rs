use std::fs;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};

use crate::config::{FACE_FILL, FACE_OUTLINE, HAND_COLOR, MAX_ICON_SIZE};
use crate::error::{IconError, Result};

/// Measurements of the clock glyph, all derived from the icon size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockGeometry {
    pub center: u32,
    pub radius: u32,
    pub outline_width: u32,
    pub hour_width: u32,
    pub minute_width: u32,
    pub hour_length: f32,
    pub minute_length: f32,
    pub dot_radius: u32,
}

impl ClockGeometry {
    pub fn for_size(size: u32) -> Self {
        let radius = (size as f32 * 0.4).round() as u32;
        let minute_length = radius as f32 * 0.7;
        Self {
            center: size / 2,
            radius,
            outline_width: (size / 32).max(1),
            hour_width: (size / 16).max(2),
            minute_width: (size / 24).max(1),
            // hour hand is 60% of the minute hand
            hour_length: minute_length * 0.6,
            minute_length,
            dot_radius: (size / 20).max(2),
        }
    }
}

/// Square RGBA raster, fully transparent until something is drawn on it.
/// Pixels are sampled at their integer coordinates and later shapes overwrite earlier ones.
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    pub fn new(size: u32) -> Self {
        Self { img: RgbaImage::new(size, size) }
    }

    /// Filled disc; with `outline`, pixels within `width` of the rim take the outline color.
    pub fn fill_circle(
        &mut self,
        center: (f32, f32),
        radius: f32,
        fill: Rgba<u8>,
        outline: Option<(Rgba<u8>, u32)>,
    ) {
        let (cx, cy) = center;
        for (x, y, px) in self.img.enumerate_pixels_mut() {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > radius {
                continue;
            }
            *px = match outline {
                Some((color, width)) if dist > radius - width as f32 => color,
                _ => fill,
            };
        }
    }

    /// Straight stroke with butt ends. Axis-aligned strokes come out exactly `width` pixels wide.
    pub fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: u32, color: Rgba<u8>) {
        let (x0, y0) = from;
        let dx = to.0 - x0;
        let dy = to.1 - y0;
        let len = (dx * dx + dy * dy).sqrt();
        if len <= 0.0 {
            return;
        }
        let (ux, uy) = (dx / len, dy / len);
        let half = width as f32 / 2.0;

        for (x, y, px) in self.img.enumerate_pixels_mut() {
            let rx = x as f32 - x0;
            let ry = y as f32 - y0;
            let along = rx * ux + ry * uy;
            let across = cross(ux, uy, rx, ry);
            if (0.0..=len).contains(&along) && (-half..half).contains(&across) {
                *px = color;
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }
}

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 { ax * by - ay * bx }

/// Draw the clock glyph (face, hour hand at 3, minute hand at 12, center dot).
pub fn render_icon(size: u32) -> Result<RgbaImage> {
    if size == 0 || size > MAX_ICON_SIZE {
        return Err(IconError::InvalidSize(size));
    }
    let geo = ClockGeometry::for_size(size);
    let c = geo.center as f32;
    let mut canvas = Canvas::new(size);

    canvas.fill_circle(
        (c, c),
        geo.radius as f32,
        FACE_FILL,
        Some((FACE_OUTLINE, geo.outline_width)),
    );
    canvas.stroke_line((c, c), (c + geo.hour_length, c), geo.hour_width, HAND_COLOR);
    canvas.stroke_line((c, c), (c, c - geo.minute_length), geo.minute_width, HAND_COLOR);
    canvas.fill_circle((c, c), geo.dot_radius as f32, HAND_COLOR, None);

    Ok(canvas.into_image())
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)?;
    Ok(buf)
}

/// Render a `size`x`size` icon and write it to `path` as PNG, replacing any existing file.
/// The parent directory must already exist.
pub fn render(size: u32, path: &Path) -> Result<()> {
    let img = render_icon(size)?;
    let bytes = encode_png(&img)?;
    fs::write(path, &bytes).map_err(|e| IconError::io(path, e))?;
    log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
