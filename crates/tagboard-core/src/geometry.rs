//! Axis-aligned canvas geometry.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in canvas pixels, `y` pointing down.
///
/// The rectangle covers `[x, x + width) × [y, y + height)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle whose top-left corner is `origin + (dx, dy)`.
    #[inline]
    pub fn at_offset(origin: Point2<f32>, dx: f32, dy: f32, width: f32, height: f32) -> Self {
        Self::new(origin.x + dx, origin.y + dy, width, height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Area in square pixels; zero for empty or inverted rectangles.
    #[inline]
    pub fn area(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.width * self.height
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// True if the interiors of the two rectangles overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 2.0);
        let b = Rect::new(0.0, 2.0, 10.0, 2.0);
        let c = Rect::new(9.0, 1.0, 5.0, 5.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(b.intersects(&c));
    }

    #[test]
    fn empty_rect_has_zero_area() {
        assert_relative_eq!(Rect::new(3.0, 3.0, 0.0, 7.0).area(), 0.0);
        assert_relative_eq!(Rect::new(3.0, 3.0, -2.0, 7.0).area(), 0.0);
        assert_relative_eq!(Rect::new(1.0, 1.0, 4.0, 4.0).area(), 16.0);
    }

    #[test]
    fn offset_rect_is_relative_to_origin() {
        let r = Rect::at_offset(Point2::new(10.0, 20.0), 2.0, 3.0, 4.0, 5.0);
        assert_eq!(r, Rect::new(12.0, 23.0, 4.0, 5.0));
        assert_relative_eq!(r.right(), 16.0);
        assert_relative_eq!(r.bottom(), 28.0);
    }
}
