//! Two-ring marker border.

use tagboard_core::{DrawingSurface, Point2, Rect, Rgb};

use crate::BorderScheme;

/// Which half of a border strip a rectangle belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ring {
    Outer,
    Inner,
}

/// The eight border rectangles in draw order: top, bottom, left, right,
/// outer half before inner half.
///
/// Each half-strip is `floor(border_size / 2)` thick. Left and right strips
/// start below the top strips and end above the bottom strips, so no pixel is
/// covered twice.
pub fn border_rects(origin: Point2<f32>, tag_size: f32, border_size: f32) -> [(Ring, Rect); 8] {
    let t = tag_size;
    let h = (border_size / 2.0).trunc();
    let at = |dx: f32, dy: f32, w: f32, hh: f32| Rect::at_offset(origin, dx, dy, w, hh);
    [
        // top
        (Ring::Outer, at(0.0, 0.0, t, h)),
        (Ring::Inner, at(h, h, t - 2.0 * h, h)),
        // bottom
        (Ring::Outer, at(0.0, t - h, t, h)),
        (Ring::Inner, at(h, t - 2.0 * h, t - 2.0 * h, h)),
        // left
        (Ring::Outer, at(0.0, h, h, t - 2.0 * h)),
        (Ring::Inner, at(h, 2.0 * h, h, t - 4.0 * h)),
        // right
        (Ring::Outer, at(t - h, h, h, t - 2.0 * h)),
        (Ring::Inner, at(t - 2.0 * h, 2.0 * h, h, t - 4.0 * h)),
    ]
}

/// Draw the border ring of a `tag_size` marker whose top-left is `origin`.
pub fn draw_border<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    origin: Point2<f32>,
    tag_size: f32,
    border_size: f32,
    scheme: BorderScheme,
) {
    for (ring, rect) in border_rects(origin, tag_size, border_size) {
        if rect.is_empty() {
            continue;
        }
        let color: Rgb = match ring {
            Ring::Outer => scheme.outer(),
            Ring::Inner => scheme.inner(),
        };
        surface.draw_filled_rect(rect, color);
    }
}
