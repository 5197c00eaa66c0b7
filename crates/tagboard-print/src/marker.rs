//! Rendering of a single placed marker.

use tagboard_core::{DrawingSurface, Point2, Rect, Rgb};
use tagboard_family::BitMatrix;

use crate::border::draw_border;
use crate::BorderScheme;

/// Border width in bits on each side of the data area.
pub const BORDER_BITS: u32 = 2;

/// Placement and appearance of one marker on the board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerSpec {
    pub id: u32,
    /// Top-left corner of the marker (outer border edge).
    pub origin: Point2<f32>,
    /// Side length including the border.
    pub size_px: f32,
    pub border_bits: u32,
    pub show_corner_fiducials: bool,
    /// Side of the corner fiducial squares; equal to the board gap.
    pub fiducial_size: f32,
}

/// Whole pixels per bit cell for a marker of `size_px` with `bits_per_side`
/// data bits and `border_bits` border bits on each side.
///
/// Zero when the marker is too small; the data area then renders empty.
pub fn pixels_per_bit(size_px: f32, bits_per_side: usize, border_bits: u32) -> u32 {
    let cells = bits_per_side + 2 * border_bits as usize;
    if cells == 0 {
        return 0;
    }
    (size_px / cells as f32).floor().max(0.0) as u32
}

/// Draw one marker: border ring, data cells, then optional corner fiducials.
pub fn render_marker<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    spec: &MarkerSpec,
    bits: &BitMatrix,
    scheme: BorderScheme,
) {
    let ppb = pixels_per_bit(spec.size_px, bits.size(), spec.border_bits) as f32;
    let border = spec.border_bits as f32 * ppb;

    draw_border(surface, spec.origin, spec.size_px, border, scheme);

    if ppb > 0.0 {
        for (row, col, white) in bits.cells() {
            let cell = Rect::at_offset(
                spec.origin,
                border + col as f32 * ppb,
                border + row as f32 * ppb,
                ppb,
                ppb,
            );
            surface.draw_filled_rect(cell, if white { Rgb::WHITE } else { Rgb::BLACK });
        }
    }

    if spec.show_corner_fiducials && spec.fiducial_size > 0.0 {
        for rect in corner_fiducials(spec.origin, spec.size_px, spec.fiducial_size) {
            surface.draw_filled_rect(rect, Rgb::BLACK);
        }
    }
}

/// Squares of side `size` touching the four outer corners of a marker from
/// outside: top-left, top-right, bottom-left, bottom-right.
pub fn corner_fiducials(origin: Point2<f32>, tag_size: f32, size: f32) -> [Rect; 4] {
    let (x, y, t, g) = (origin.x, origin.y, tag_size, size);
    [
        Rect::new(x - g, y - g, g, g),
        Rect::new(x + t, y - g, g, g),
        Rect::new(x - g, y + t, g, g),
        Rect::new(x + t, y + t, g, g),
    ]
}
