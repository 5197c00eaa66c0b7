//! RGB pixel surface with PNG export.

use std::fs;
use std::ops::Range;
use std::path::Path;

use image::RgbImage;
use tagboard_core::{DrawingSurface, ExportError, Point2, Rect, Rgb, Stroke, TextStyle};

use super::glyphs::{glyph, GLYPH_COLS, GLYPH_ROWS, MISSING};

/// Pixel canvas, initially white.
///
/// A pixel is painted when its center lies inside the shape, so shapes with
/// integral coordinates cover exactly the pixels they span.
#[derive(Clone, Debug)]
pub struct RasterSurface {
    image: RgbImage,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, image::Rgb(Rgb::WHITE.0)),
        }
    }

    #[inline]
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    #[inline]
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.image.get_pixel_checked(x, y).map(|p| Rgb(p.0))
    }

    /// Encode the canvas as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return Err(ExportError::EmptyCanvas { width, height });
        }
        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().map_err(png_error)?;
        writer
            .write_image_data(self.image.as_raw())
            .map_err(png_error)?;
        writer.finish().map_err(png_error)?;
        Ok(out)
    }

    fn fill_span(&mut self, xs: Range<u32>, ys: Range<u32>, color: Rgb) {
        for y in ys {
            for x in xs.clone() {
                self.image.put_pixel(x, y, image::Rgb(color.0));
            }
        }
    }

    fn fill_rect_px(&mut self, rect: Rect, color: Rgb) {
        if rect.is_empty() {
            return;
        }
        let xs = pixel_span(rect.x, rect.right(), self.image.width());
        let ys = pixel_span(rect.y, rect.bottom(), self.image.height());
        self.fill_span(xs, ys, color);
    }
}

fn png_error(err: png::EncodingError) -> ExportError {
    ExportError::Encode {
        format: "png",
        source: Box::new(err),
    }
}

/// Pixels whose centers lie in `[lo, hi)`, clipped to `0..limit`.
fn pixel_span(lo: f32, hi: f32, limit: u32) -> Range<u32> {
    let clip = |v: f32| (v - 0.5).ceil().clamp(0.0, limit as f32) as u32;
    clip(lo)..clip(hi)
}

fn distance_to_segment(p: Point2<f32>, a: Point2<f32>, b: Point2<f32>) -> f32 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

impl DrawingSurface for RasterSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn draw_filled_rect(&mut self, rect: Rect, color: Rgb) {
        self.fill_rect_px(rect, color);
    }

    fn draw_line(&mut self, from: Point2<f32>, to: Point2<f32>, stroke: Stroke) {
        let r = stroke.width.max(1.0) / 2.0;
        let xs = pixel_span(from.x.min(to.x) - r, from.x.max(to.x) + r, self.image.width());
        let ys = pixel_span(from.y.min(to.y) - r, from.y.max(to.y) + r, self.image.height());
        for y in ys {
            for x in xs.clone() {
                let center = Point2::new(x as f32 + 0.5, y as f32 + 0.5);
                if distance_to_segment(center, from, to) <= r {
                    self.image.put_pixel(x, y, image::Rgb(stroke.color.0));
                }
            }
        }
    }

    fn draw_text(&mut self, anchor: Point2<f32>, text: &str, style: TextStyle) {
        let count = text.chars().count();
        if count == 0 || style.size <= 0.0 {
            return;
        }
        let cell = style.size / GLYPH_ROWS as f32;
        let advance = (GLYPH_COLS + 1) as f32 * cell;
        let width = count as f32 * advance - cell;
        let left = anchor.x - width / 2.0;
        let top = anchor.y - style.size / 2.0;

        for (i, c) in text.chars().enumerate() {
            let rows = glyph(c).unwrap_or_else(|| {
                log::debug!("no raster glyph for {c:?}, drawing a box");
                MISSING
            });
            let x0 = left + i as f32 * advance;
            for (row, &bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_COLS {
                    if (bits >> (GLYPH_COLS - 1 - col)) & 1 == 1 {
                        let rect = Rect::new(
                            x0 + col as f32 * cell,
                            top + row as f32 * cell,
                            cell,
                            cell,
                        );
                        self.fill_rect_px(rect, style.color);
                    }
                }
            }
        }
    }

    fn export(&self, path: &Path) -> Result<(), ExportError> {
        let bytes = self.encode_png()?;
        fs::write(path, bytes)?;
        Ok(())
    }
}
