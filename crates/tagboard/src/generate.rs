//! Config-driven board generation.
//!
//! [`run`] writes `Tag<family>_<rows>_<cols>.png` into the configured output
//! directory, plus an `.svg` and a `.json` report when enabled.

use std::path::PathBuf;

use tagboard_family::{Family, FamilyError, TagFamily};
use tagboard_print::{
    ensure_output_dir, BoardAssembler, BoardConfig, BoardError, BoardReport, IoError,
    RenderWarning,
};

#[cfg(feature = "tracing")]
use tracing::instrument;

#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Family(#[from] FamilyError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("failed to write report: {0}")]
    Report(#[from] IoError),
}

/// Files written by one [`run`].
#[derive(Clone, Debug)]
pub struct Summary {
    pub png: PathBuf,
    pub svg: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub warnings: Vec<RenderWarning>,
}

impl Summary {
    /// All written paths, PNG first.
    pub fn outputs(&self) -> Vec<PathBuf> {
        std::iter::once(self.png.clone())
            .chain(self.svg.clone())
            .chain(self.report.clone())
            .collect()
    }
}

/// Generate every output enabled in `cfg`.
///
/// The family is resolved and the board validated before the output
/// directory is created, so an invalid config leaves the filesystem alone.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip_all))]
pub fn run(cfg: &BoardConfig) -> Result<Summary, GenerateError> {
    let family = cfg.resolve_family()?;
    run_with_family(cfg, &family)
}

/// Like [`run`], with an already resolved family.
pub fn run_with_family(cfg: &BoardConfig, family: &Family) -> Result<Summary, GenerateError> {
    let laid_out = BoardAssembler::new(cfg.board, family).layout()?;
    let layout = laid_out.layout().clone();
    let svg_stage = cfg.svg.then(|| laid_out.clone());
    ensure_output_dir(&cfg.output_dir)?;

    let png = laid_out
        .render_raster()?
        .export(cfg.output_path(family, "png"))?;

    let svg = match svg_stage {
        Some(stage) => Some(
            stage
                .render_svg()?
                .export(cfg.output_path(family, "svg"))?
                .path,
        ),
        None => None,
    };

    let mut summary = Summary {
        png: png.path,
        svg,
        report: None,
        width: png.width,
        height: png.height,
        warnings: png.warnings,
    };

    if cfg.report {
        let path = cfg.output_path(family, "json");
        let mut report = BoardReport::new(family, &cfg.board, &layout, &summary.warnings);
        report.outputs = summary.outputs();
        report.outputs.push(path.clone());
        report.write_json(&path)?;
        log::info!("wrote {}", path.display());
        summary.report = Some(path);
    }

    log::debug!(
        "generated {} board {}x{} with {} file(s)",
        family.name(),
        summary.width,
        summary.height,
        summary.outputs().len()
    );
    Ok(summary)
}
