//! In-memory surface that records draw calls.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tagboard_core::{DrawingSurface, ExportError, Point2, Rect, Rgb, Stroke, TextStyle};

/// One recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    FilledRect {
        rect: Rect,
        color: Rgb,
    },
    Line {
        from: Point2<f32>,
        to: Point2<f32>,
        stroke: Stroke,
    },
    Text {
        anchor: Point2<f32>,
        text: String,
        style: TextStyle,
    },
}

/// Surface that keeps every call instead of drawing. `export` records the
/// path without touching the filesystem.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
    exports: RefCell<Vec<PathBuf>>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[inline]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Recorded filled rectangles in draw order.
    pub fn rects(&self) -> impl Iterator<Item = (Rect, Rgb)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::FilledRect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }

    /// Sum of the areas of all filled rectangles.
    pub fn painted_area(&self) -> f32 {
        self.rects().map(|(r, _)| r.area()).sum()
    }

    /// Paths passed to `export`, in call order.
    pub fn exported_paths(&self) -> Vec<PathBuf> {
        self.exports.borrow().clone()
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn draw_filled_rect(&mut self, rect: Rect, color: Rgb) {
        self.calls.push(DrawCall::FilledRect { rect, color });
    }

    fn draw_line(&mut self, from: Point2<f32>, to: Point2<f32>, stroke: Stroke) {
        self.calls.push(DrawCall::Line { from, to, stroke });
    }

    fn draw_text(&mut self, anchor: Point2<f32>, text: &str, style: TextStyle) {
        self.calls.push(DrawCall::Text {
            anchor,
            text: text.to_string(),
            style,
        });
    }

    fn export(&self, path: &Path) -> Result<(), ExportError> {
        self.exports.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
