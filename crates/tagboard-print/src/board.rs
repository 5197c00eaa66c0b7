//! Board specification, border schemes and validation errors.

use serde::{Deserialize, Serialize};
use tagboard_core::Rgb;

/// Colors of the two border rings around every marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BorderScheme {
    /// Both rings black.
    #[default]
    BothBlack,
    /// White outer ring, black inner ring.
    #[serde(alias = "classic")]
    OuterWhiteInnerBlack,
    /// Black outer ring, white inner ring.
    #[serde(alias = "standard")]
    OuterBlackInnerWhite,
}

impl BorderScheme {
    pub fn outer(self) -> Rgb {
        match self {
            BorderScheme::OuterWhiteInnerBlack => Rgb::WHITE,
            BorderScheme::BothBlack | BorderScheme::OuterBlackInnerWhite => Rgb::BLACK,
        }
    }

    pub fn inner(self) -> Rgb {
        match self {
            BorderScheme::OuterBlackInnerWhite => Rgb::WHITE,
            BorderScheme::BothBlack | BorderScheme::OuterWhiteInnerBlack => Rgb::BLACK,
        }
    }
}

/// Board specification validation errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BoardSpecError {
    #[error("grid must be at least 1x1 (got {cols}x{rows})")]
    InvalidGridSize { cols: u32, rows: u32 },
    #[error("tag_size must be finite and > 0 (got {0})")]
    InvalidTagSize(f32),
    #[error("spacing_ratio must be finite and >= 0 (got {0})")]
    InvalidSpacingRatio(f32),
}

/// Printable board specification.
///
/// `cols`/`rows` count markers, `tag_size` is the side of one marker in
/// pixels including its border, and the gap between neighbouring markers is
/// `spacing_ratio * tag_size`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSpec {
    pub cols: u32,
    pub rows: u32,
    pub tag_size: f32,
    pub spacing_ratio: f32,
    /// Axis arrow length in pixels; `0` disables the axis overlay.
    pub axis_length: u32,
    pub border: BorderScheme,
    /// Draw black squares at the outer corners of every marker.
    pub corner_fiducials: bool,
}

impl Default for BoardSpec {
    fn default() -> Self {
        Self {
            cols: 6,
            rows: 6,
            tag_size: 120.0,
            spacing_ratio: 0.25,
            axis_length: 100,
            border: BorderScheme::BothBlack,
            corner_fiducials: true,
        }
    }
}

impl BoardSpec {
    /// Check the geometric invariants. Family capacity is checked by the
    /// layout, which knows the family.
    pub fn validate(&self) -> Result<(), BoardSpecError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(BoardSpecError::InvalidGridSize {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if !self.tag_size.is_finite() || self.tag_size <= 0.0 {
            return Err(BoardSpecError::InvalidTagSize(self.tag_size));
        }
        if !self.spacing_ratio.is_finite() || self.spacing_ratio < 0.0 {
            return Err(BoardSpecError::InvalidSpacingRatio(self.spacing_ratio));
        }
        Ok(())
    }

    /// Number of markers (and tag ids) on the board.
    #[inline]
    pub fn marker_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Gap between neighbouring markers in pixels.
    #[inline]
    pub fn gap(&self) -> f32 {
        self.spacing_ratio * self.tag_size
    }

    #[inline]
    pub fn axis_enabled(&self) -> bool {
        self.axis_length > 0
    }
}
