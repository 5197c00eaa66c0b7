//! Marker placement and canvas extents.

use serde::{Deserialize, Serialize};
use tagboard_core::Point2;
use tagboard_family::TagFamily;

use crate::marker::{MarkerSpec, BORDER_BITS};
use crate::{BoardError, BoardSpec};

/// One marker slot on the board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerPlacement {
    /// Tag id, assigned row-major: `row * cols + col`.
    pub id: u32,
    pub row: u32,
    pub col: u32,
    /// Top-left corner of the marker in canvas pixels.
    pub origin: Point2<f32>,
}

/// Board geometry derived from a [`BoardSpec`].
#[derive(Clone, Debug, PartialEq)]
pub struct BoardLayout {
    cols: u32,
    rows: u32,
    tag_size: f32,
    gap: f32,
    offset: f32,
    width: f32,
    height: f32,
    axis_origin: Option<Point2<f32>>,
    placements: Vec<MarkerPlacement>,
}

impl BoardLayout {
    /// Lay out `cols × rows` markers.
    ///
    /// With `axis` enabled the grid is shifted by `2 * gap` on both axes and
    /// the canvas grows by the same amount, leaving room for the axis overlay
    /// drawn at `(gap, gap)`.
    pub fn compute(cols: u32, rows: u32, tag_size: f32, spacing_ratio: f32, axis: bool) -> Self {
        let gap = spacing_ratio * tag_size;
        let pitch = (1.0 + spacing_ratio) * tag_size;
        let offset = if axis { 2.0 * gap } else { 0.0 };

        let mut placements = Vec::with_capacity(cols as usize * rows as usize);
        for row in 0..rows {
            for col in 0..cols {
                placements.push(MarkerPlacement {
                    id: row * cols + col,
                    row,
                    col,
                    origin: Point2::new(
                        offset + gap + col as f32 * pitch,
                        offset + gap + row as f32 * pitch,
                    ),
                });
            }
        }

        let extent = |n: u32| n as f32 * tag_size + (n + 1) as f32 * gap + offset;
        Self {
            cols,
            rows,
            tag_size,
            gap,
            offset,
            width: extent(cols),
            height: extent(rows),
            axis_origin: axis.then(|| Point2::new(gap, gap)),
            placements,
        }
    }

    /// Validate `spec` against `family` and lay the board out.
    ///
    /// Fails before any drawing if the spec is invalid or the family has fewer
    /// tags than the board has markers.
    pub fn for_spec<F: TagFamily + ?Sized>(
        spec: &BoardSpec,
        family: &F,
    ) -> Result<Self, BoardError> {
        spec.validate()?;
        let needed = spec.marker_count();
        let available = family.tag_count();
        if needed > available {
            return Err(BoardError::Capacity {
                family: family.name().to_string(),
                needed,
                available,
            });
        }
        Ok(Self::compute(
            spec.cols,
            spec.rows,
            spec.tag_size,
            spec.spacing_ratio,
            spec.axis_enabled(),
        ))
    }

    /// Canvas extent in (fractional) pixels.
    #[inline]
    pub fn extent(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Canvas size in whole pixels, rounded up.
    pub fn canvas_size(&self) -> (u32, u32) {
        (pixel_extent(self.width), pixel_extent(self.height))
    }

    #[inline]
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Distance between origins of neighbouring markers.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.tag_size + self.gap
    }

    /// Shift of the whole grid caused by the axis overlay.
    #[inline]
    pub fn grid_offset(&self) -> f32 {
        self.offset
    }

    #[inline]
    pub fn axis_origin(&self) -> Option<Point2<f32>> {
        self.axis_origin
    }

    #[inline]
    pub fn marker_count(&self) -> usize {
        self.placements.len()
    }

    #[inline]
    pub fn grid_size(&self) -> (u32, u32) {
        (self.cols, self.rows)
    }

    /// Placements in id order.
    #[inline]
    pub fn placements(&self) -> &[MarkerPlacement] {
        &self.placements
    }

    pub fn marker(&self, id: u32) -> Option<&MarkerPlacement> {
        self.placements.get(id as usize)
    }

    /// Per-marker render specs.
    pub fn marker_specs(&self, corner_fiducials: bool) -> impl Iterator<Item = MarkerSpec> + '_ {
        self.placements.iter().map(move |p| MarkerSpec {
            id: p.id,
            origin: p.origin,
            size_px: self.tag_size,
            border_bits: BORDER_BITS,
            show_corner_fiducials: corner_fiducials,
            fiducial_size: self.gap,
        })
    }
}

// Extents are sums of products of user floats; a tolerance keeps e.g.
// 275.00002 from becoming a 276 px canvas.
fn pixel_extent(v: f32) -> u32 {
    (v - 1e-3).ceil().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tagboard_family::builtins;

    #[test]
    fn two_by_two_board_without_axis() {
        let layout = BoardLayout::compute(2, 2, 100.0, 0.25, false);
        assert_eq!(layout.canvas_size(), (275, 275));
        let origins: Vec<(u32, f32, f32)> = layout
            .placements()
            .iter()
            .map(|p| (p.id, p.origin.x, p.origin.y))
            .collect();
        assert_eq!(
            origins,
            vec![
                (0, 25.0, 25.0),
                (1, 150.0, 25.0),
                (2, 25.0, 150.0),
                (3, 150.0, 150.0)
            ]
        );
        assert!(layout.axis_origin().is_none());
    }

    #[test]
    fn axis_shifts_grid_and_grows_canvas() {
        let layout = BoardLayout::compute(6, 6, 120.0, 0.25, true);
        // 6*120 + 7*30 + 2*30
        assert_eq!(layout.canvas_size(), (990, 990));
        assert_eq!(layout.axis_origin(), Some(Point2::new(30.0, 30.0)));
        let first = layout.marker(0).expect("marker 0");
        assert_relative_eq!(first.origin.x, 90.0);
        assert_relative_eq!(first.origin.y, 90.0);
        assert_relative_eq!(layout.grid_offset(), 60.0);
    }

    #[test]
    fn ids_are_row_major() {
        let layout = BoardLayout::compute(4, 3, 50.0, 0.1, false);
        for p in layout.placements() {
            assert_eq!(p.id, p.row * 4 + p.col);
        }
        let p = layout.marker(6).expect("marker 6");
        assert_eq!((p.row, p.col), (1, 2));
    }

    #[test]
    fn markers_never_overlap() {
        for ratio in [0.0f32, 0.1, 0.25, 1.0] {
            let t = 64.0;
            let layout = BoardLayout::compute(5, 4, t, ratio, ratio > 0.5);
            let ps = layout.placements();
            assert_eq!(ps.len(), 20);
            for (i, a) in ps.iter().enumerate() {
                for b in &ps[i + 1..] {
                    let dx = (a.origin.x - b.origin.x).abs();
                    let dy = (a.origin.y - b.origin.y).abs();
                    assert!(
                        dx >= t - 1e-3 || dy >= t - 1e-3,
                        "{a:?} overlaps {b:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn canvas_grows_linearly_with_columns() {
        let (t, r) = (80.0f32, 0.3f32);
        for w in [1u32, 2, 5] {
            let narrow = BoardLayout::compute(w, 2, t, r, false);
            let wide = BoardLayout::compute(2 * w, 2, t, r, false);
            let grown = wide.extent().0 - narrow.extent().0;
            assert_relative_eq!(grown, w as f32 * t * (1.0 + r), epsilon = 1e-3);
        }
    }

    #[test]
    fn fractional_extent_rounds_up() {
        let layout = BoardLayout::compute(1, 1, 5.0, 0.25, false);
        assert_relative_eq!(layout.extent().0, 7.5);
        assert_eq!(layout.canvas_size(), (8, 8));
    }

    #[test]
    fn capacity_is_checked_against_family() {
        let spec = BoardSpec {
            cols: 10,
            rows: 10,
            ..BoardSpec::default()
        };
        let err = BoardLayout::for_spec(&spec, &builtins::TAG16H5).unwrap_err();
        assert!(matches!(
            err,
            BoardError::Capacity {
                needed: 100,
                available: 30,
                ..
            }
        ));
        assert!(BoardLayout::for_spec(&spec, &builtins::TAG36H11).is_ok());
    }

    #[test]
    fn invalid_spec_fails_before_capacity() {
        let spec = BoardSpec {
            cols: 0,
            ..BoardSpec::default()
        };
        let err = BoardLayout::for_spec(&spec, &builtins::TAG36H11).unwrap_err();
        assert!(matches!(err, BoardError::Spec(_)));
    }

    #[test]
    fn marker_specs_carry_gap_as_fiducial_size() {
        let layout = BoardLayout::compute(2, 1, 100.0, 0.25, false);
        let specs: Vec<MarkerSpec> = layout.marker_specs(true).collect();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[1].id, 1);
        assert_relative_eq!(specs[1].fiducial_size, 25.0);
        assert_eq!(specs[1].border_bits, 2);
        assert!(specs[1].show_corner_fiducials);
    }
}
