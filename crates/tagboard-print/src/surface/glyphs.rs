//! 5x7 bitmap glyphs for raster labels.

pub(crate) const GLYPH_COLS: usize = 5;
pub(crate) const GLYPH_ROWS: usize = 7;

/// Rows top to bottom; bit 4 is the leftmost column.
pub(crate) fn glyph(c: char) -> Option<[u8; GLYPH_ROWS]> {
    let rows = match c {
        '0' => [0x0e, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0e],
        '1' => [0x04, 0x0c, 0x04, 0x04, 0x04, 0x04, 0x0e],
        '2' => [0x0e, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1f],
        '3' => [0x1f, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0e],
        '4' => [0x02, 0x06, 0x0a, 0x12, 0x1f, 0x02, 0x02],
        '5' => [0x1f, 0x10, 0x1e, 0x01, 0x01, 0x11, 0x0e],
        '6' => [0x06, 0x08, 0x10, 0x1e, 0x11, 0x11, 0x0e],
        '7' => [0x1f, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0e, 0x11, 0x11, 0x0e, 0x11, 0x11, 0x0e],
        '9' => [0x0e, 0x11, 0x11, 0x0f, 0x01, 0x02, 0x0c],
        'x' | 'X' => [0x00, 0x00, 0x11, 0x0a, 0x04, 0x0a, 0x11],
        'y' | 'Y' => [0x00, 0x00, 0x11, 0x11, 0x0f, 0x01, 0x0e],
        'z' | 'Z' => [0x00, 0x00, 0x1f, 0x02, 0x04, 0x08, 0x1f],
        ' ' => [0; GLYPH_ROWS],
        _ => return None,
    };
    Some(rows)
}

/// Hollow box drawn for characters without a glyph.
pub(crate) const MISSING: [u8; GLYPH_ROWS] = [0x1f, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1f];
