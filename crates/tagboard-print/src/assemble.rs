//! Board generation pipeline.
//!
//! Each stage consumes the previous one, so a board goes through
//! `Configured -> LaidOut -> Rendered -> Exported` exactly once:
//!
//! ```no_run
//! use tagboard_family::builtins;
//! use tagboard_print::{BoardAssembler, BoardSpec};
//!
//! # fn main() -> Result<(), tagboard_print::BoardError> {
//! let family = builtins::TAG36H11;
//! let exported = BoardAssembler::new(BoardSpec::default(), &family)
//!     .layout()?
//!     .render_raster()?
//!     .export("Tag36h11_6_6.png")?;
//! println!("{}x{}", exported.width, exported.height);
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tagboard_core::{DrawingSurface, ExportError, Rect, Rgb};
use tagboard_family::TagFamily;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::axis::draw_axes;
use crate::layout::BoardLayout;
use crate::marker::{pixels_per_bit, render_marker, BORDER_BITS};
use crate::surface::{RasterSurface, SvgSurface};
use crate::{BoardError, BoardSpec, RenderWarning};

/// File stem of a generated board: `Tag<family>_<rows>_<cols>`.
pub fn board_file_stem<F: TagFamily + ?Sized>(family: &F, spec: &BoardSpec) -> String {
    format!("Tag{}_{}_{}", family.name(), spec.rows, spec.cols)
}

/// Non-fatal findings for `spec` rendered with `family`.
pub fn check_warnings<F: TagFamily + ?Sized>(spec: &BoardSpec, family: &F) -> Vec<RenderWarning> {
    let mut warnings = Vec::new();
    if pixels_per_bit(spec.tag_size, family.bits_per_side(), BORDER_BITS) == 0 {
        warnings.push(RenderWarning::DegenerateRender {
            tag_size: spec.tag_size,
            bits_per_side: family.bits_per_side(),
            border_bits: BORDER_BITS,
        });
    }
    warnings
}

/// Configured stage: a spec bound to a family, nothing computed yet.
#[derive(Debug)]
pub struct BoardAssembler<'f, F: TagFamily + ?Sized> {
    spec: BoardSpec,
    family: &'f F,
}

impl<'f, F: TagFamily + ?Sized> BoardAssembler<'f, F> {
    pub fn new(spec: BoardSpec, family: &'f F) -> Self {
        Self { spec, family }
    }

    #[inline]
    pub fn spec(&self) -> &BoardSpec {
        &self.spec
    }

    /// Validate the spec, check family capacity and compute the layout.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self), fields(cols = self.spec.cols, rows = self.spec.rows))
    )]
    pub fn layout(self) -> Result<LaidOut<'f, F>, BoardError> {
        let layout = BoardLayout::for_spec(&self.spec, self.family)?;
        let warnings = check_warnings(&self.spec, self.family);
        for warning in &warnings {
            log::warn!("{warning}");
        }
        let (width, height) = layout.canvas_size();
        log::info!(
            "family={} grid={}x{} tag_size={} spacing={} canvas={}x{} axis_origin={:?}",
            self.family.name(),
            self.spec.cols,
            self.spec.rows,
            self.spec.tag_size,
            self.spec.spacing_ratio,
            width,
            height,
            layout.axis_origin().map(|p| (p.x, p.y)),
        );
        Ok(LaidOut {
            spec: self.spec,
            family: self.family,
            layout,
            warnings,
        })
    }
}

/// Laid-out stage: placements and canvas size are known.
#[derive(Debug)]
pub struct LaidOut<'f, F: TagFamily + ?Sized> {
    spec: BoardSpec,
    family: &'f F,
    layout: BoardLayout,
    warnings: Vec<RenderWarning>,
}

// Manual impl: a derive would require `F: Clone`.
impl<F: TagFamily + ?Sized> Clone for LaidOut<'_, F> {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec,
            family: self.family,
            layout: self.layout.clone(),
            warnings: self.warnings.clone(),
        }
    }
}

impl<'f, F: TagFamily + ?Sized> LaidOut<'f, F> {
    #[inline]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    #[inline]
    pub fn spec(&self) -> &BoardSpec {
        &self.spec
    }

    #[inline]
    pub fn warnings(&self) -> &[RenderWarning] {
        &self.warnings
    }

    #[inline]
    pub fn canvas_size(&self) -> (u32, u32) {
        self.layout.canvas_size()
    }

    /// Draw the board into `surface`, which must be at least as large as the
    /// canvas.
    ///
    /// The surface is dropped with the returned error if a tag cannot be
    /// decoded, so a failed board is never exported.
    #[cfg_attr(feature = "tracing", instrument(level = "info", skip_all))]
    pub fn render<S: DrawingSurface>(self, mut surface: S) -> Result<Rendered<S>, BoardError> {
        let (width, height) = self.layout.canvas_size();
        if surface.width() < width || surface.height() < height {
            return Err(BoardError::SurfaceTooSmall {
                width,
                height,
                got_width: surface.width(),
                got_height: surface.height(),
            });
        }

        surface.draw_filled_rect(
            Rect::new(0.0, 0.0, surface.width() as f32, surface.height() as f32),
            Rgb::WHITE,
        );
        for marker in self.layout.marker_specs(self.spec.corner_fiducials) {
            let bits = self
                .family
                .bit_matrix(marker.id)
                .ok_or_else(|| BoardError::UnknownTagId {
                    family: self.family.name().to_string(),
                    id: marker.id,
                })?;
            log::trace!("tag {} at ({}, {}):\n{bits}", marker.id, marker.origin.x, marker.origin.y);
            render_marker(&mut surface, &marker, &bits, self.spec.border);
        }
        if let Some(origin) = self.layout.axis_origin() {
            draw_axes(&mut surface, origin, self.spec.axis_length as f32);
        }
        log::debug!("rendered {} markers", self.layout.marker_count());

        Ok(Rendered {
            surface,
            layout: self.layout,
            warnings: self.warnings,
        })
    }

    /// Render into a fresh canvas-sized [`RasterSurface`].
    pub fn render_raster(self) -> Result<Rendered<RasterSurface>, BoardError> {
        let (width, height) = self.canvas_size();
        self.render(RasterSurface::new(width, height))
    }

    /// Render into a fresh canvas-sized [`SvgSurface`].
    pub fn render_svg(self) -> Result<Rendered<SvgSurface>, BoardError> {
        let (width, height) = self.canvas_size();
        self.render(SvgSurface::new(width, height))
    }
}

/// Rendered stage: the surface holds the finished board.
#[derive(Debug)]
pub struct Rendered<S> {
    surface: S,
    layout: BoardLayout,
    warnings: Vec<RenderWarning>,
}

impl<S: DrawingSurface> Rendered<S> {
    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn into_surface(self) -> S {
        self.surface
    }

    #[inline]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    #[inline]
    pub fn warnings(&self) -> &[RenderWarning] {
        &self.warnings
    }

    /// Write the surface to `path`.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))
    )]
    pub fn export(self, path: impl AsRef<Path>) -> Result<Exported, BoardError> {
        let path = path.as_ref();
        self.surface
            .export(path)
            .map_err(|source| BoardError::Export {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("wrote {}", path.display());
        Ok(Exported {
            path: path.to_path_buf(),
            width: self.surface.width(),
            height: self.surface.height(),
            layout: self.layout,
            warnings: self.warnings,
        })
    }
}

/// Exported stage: summary of the written file.
#[derive(Clone, Debug)]
pub struct Exported {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub layout: BoardLayout,
    pub warnings: Vec<RenderWarning>,
}

/// Create `dir` (and parents) if needed.
pub fn ensure_output_dir(dir: &Path) -> Result<(), BoardError> {
    fs::create_dir_all(dir).map_err(|err| BoardError::Export {
        path: dir.to_path_buf(),
        source: ExportError::Io(err),
    })
}

/// Generate `Tag<family>_<rows>_<cols>.png` in `output_dir`.
pub fn generate_board<F: TagFamily + ?Sized>(
    spec: BoardSpec,
    family: &F,
    output_dir: impl AsRef<Path>,
) -> Result<Exported, BoardError> {
    let laid_out = BoardAssembler::new(spec, family).layout()?;
    let output_dir = output_dir.as_ref();
    ensure_output_dir(output_dir)?;
    let path = output_dir.join(format!("{}.png", board_file_stem(family, &spec)));
    laid_out.render_raster()?.export(path)
}
