//! The drawing capability consumed by the board renderer.

use std::path::Path;

use nalgebra::Point2;

use crate::{Rect, Rgb};

/// Line appearance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Line width in pixels.
    pub width: f32,
    pub color: Rgb,
}

/// Text appearance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Glyph height in pixels.
    pub size: f32,
    pub color: Rgb,
}

/// Errors produced while writing a surface to disk.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{format} encoding failed: {source}")]
    Encode {
        format: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("canvas has no pixels ({width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },
}

/// A canvas that board rendering draws into.
///
/// Coordinates are canvas pixels with the origin in the top-left corner and
/// `y` pointing down. A surface is owned by a single board-generation call.
pub trait DrawingSurface {
    /// Canvas width in pixels.
    fn width(&self) -> u32;

    /// Canvas height in pixels.
    fn height(&self) -> u32;

    /// Fill `rect` with a solid color, without outline.
    fn draw_filled_rect(&mut self, rect: Rect, color: Rgb);

    /// Stroke a straight segment from `from` to `to`.
    fn draw_line(&mut self, from: Point2<f32>, to: Point2<f32>, stroke: Stroke);

    /// Draw `text` centered on `anchor`.
    fn draw_text(&mut self, anchor: Point2<f32>, text: &str, style: TextStyle);

    /// Write the surface to `path`.
    fn export(&self, path: &Path) -> Result<(), ExportError>;
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn draw_filled_rect(&mut self, rect: Rect, color: Rgb) {
        (**self).draw_filled_rect(rect, color);
    }

    fn draw_line(&mut self, from: Point2<f32>, to: Point2<f32>, stroke: Stroke) {
        (**self).draw_line(from, to, stroke);
    }

    fn draw_text(&mut self, anchor: Point2<f32>, text: &str, style: TextStyle) {
        (**self).draw_text(anchor, text, style);
    }

    fn export(&self, path: &Path) -> Result<(), ExportError> {
        (**self).export(path)
    }
}
