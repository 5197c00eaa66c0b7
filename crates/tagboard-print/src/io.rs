//! JSON configuration and report helpers for board generation.

use crate::marker::{pixels_per_bit, BORDER_BITS};
use crate::{board_file_stem, BoardLayout, BoardSpec, RenderWarning};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tagboard_family::{Family, FamilyError, TagFamily};

#[derive(thiserror::Error, Debug)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn default_family() -> String {
    "36h11".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

/// Configuration for one board generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub board: BoardSpec,
    /// Built-in family name, ignored when `family_file` is set.
    #[serde(default = "default_family")]
    pub family: String,
    /// JSON codebook to use instead of a built-in family.
    #[serde(default)]
    pub family_file: Option<PathBuf>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Also write an SVG next to the PNG.
    #[serde(default)]
    pub svg: bool,
    /// Also write a JSON [`BoardReport`] next to the PNG.
    #[serde(default)]
    pub report: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board: BoardSpec::default(),
            family: default_family(),
            family_file: None,
            output_dir: default_output_dir(),
            svg: false,
            report: false,
        }
    }
}

impl BoardConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the configured tag family.
    pub fn resolve_family(&self) -> Result<Family, FamilyError> {
        Family::resolve(&self.family, self.family_file.as_deref())
    }

    /// Output path for `extension` (`png`, `svg`, `json`).
    pub fn output_path<F: TagFamily + ?Sized>(&self, family: &F, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{extension}", board_file_stem(family, &self.board)))
    }
}

/// One marker as written to the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerReport {
    pub id: u32,
    pub row: u32,
    pub col: u32,
    /// Top-left corner in canvas pixels.
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Machine-readable description of a generated board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardReport {
    pub family: String,
    pub bits_per_side: usize,
    pub board: BoardSpec,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub gap: f32,
    pub pixels_per_bit: u32,
    #[serde(default)]
    pub axis_origin: Option<[f32; 2]>,
    pub markers: Vec<MarkerReport>,
    #[serde(default)]
    pub outputs: Vec<PathBuf>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl BoardReport {
    pub fn new<F: TagFamily + ?Sized>(
        family: &F,
        spec: &BoardSpec,
        layout: &BoardLayout,
        warnings: &[RenderWarning],
    ) -> Self {
        let (canvas_width, canvas_height) = layout.canvas_size();
        let markers = layout
            .placements()
            .iter()
            .map(|p| MarkerReport {
                id: p.id,
                row: p.row,
                col: p.col,
                x: p.origin.x,
                y: p.origin.y,
                size: spec.tag_size,
            })
            .collect();
        Self {
            family: family.name().to_string(),
            bits_per_side: family.bits_per_side(),
            board: *spec,
            canvas_width,
            canvas_height,
            gap: layout.gap(),
            pixels_per_bit: pixels_per_bit(spec.tag_size, family.bits_per_side(), BORDER_BITS),
            axis_origin: layout.axis_origin().map(|p| [p.x, p.y]),
            markers,
            outputs: Vec::new(),
            warnings: warnings.iter().map(ToString::to_string).collect(),
        }
    }

    /// Load a JSON report from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BorderScheme;
    use tagboard_family::builtins;

    #[test]
    fn config_defaults_fill_missing_fields() {
        let cfg: BoardConfig =
            serde_json::from_str(r#"{ "board": { "cols": 2 } }"#).expect("config");
        assert_eq!(cfg.board.cols, 2);
        assert_eq!(cfg.board.rows, 6);
        assert_eq!(cfg.family, "36h11");
        assert_eq!(cfg.output_dir, PathBuf::from("output"));
        assert!(!cfg.svg && !cfg.report);

        let empty: BoardConfig = serde_json::from_str("{}").expect("empty");
        assert_eq!(empty, BoardConfig::default());
    }

    #[test]
    fn config_json_roundtrip_on_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("board.json");
        let cfg = BoardConfig {
            board: BoardSpec {
                cols: 3,
                rows: 2,
                border: BorderScheme::OuterBlackInnerWhite,
                ..BoardSpec::default()
            },
            family: "16h5".to_string(),
            svg: true,
            ..BoardConfig::default()
        };
        cfg.write_json(&path).expect("write");
        assert_eq!(BoardConfig::load_json(&path).expect("load"), cfg);
    }

    #[test]
    fn output_path_uses_board_stem() {
        let cfg = BoardConfig {
            board: BoardSpec {
                cols: 4,
                rows: 3,
                ..BoardSpec::default()
            },
            output_dir: PathBuf::from("boards"),
            ..BoardConfig::default()
        };
        let family = cfg.resolve_family().expect("family");
        assert_eq!(
            cfg.output_path(&family, "svg"),
            PathBuf::from("boards/Tag36h11_3_4.svg")
        );
    }

    #[test]
    fn unknown_family_is_reported() {
        let cfg = BoardConfig {
            family: "25h9".to_string(),
            ..BoardConfig::default()
        };
        assert!(matches!(
            cfg.resolve_family(),
            Err(FamilyError::UnknownBuiltin { .. })
        ));
    }

    #[test]
    fn report_describes_layout() {
        let spec = BoardSpec {
            cols: 2,
            rows: 2,
            tag_size: 100.0,
            axis_length: 0,
            ..BoardSpec::default()
        };
        let family = builtins::TAG36H11;
        let layout = BoardLayout::for_spec(&spec, &family).expect("layout");
        let warning = RenderWarning::DegenerateRender {
            tag_size: 5.0,
            bits_per_side: 6,
            border_bits: 2,
        };
        let report = BoardReport::new(&family, &spec, &layout, &[warning]);
        assert_eq!(report.family, "36h11");
        assert_eq!(report.bits_per_side, 6);
        assert_eq!((report.canvas_width, report.canvas_height), (275, 275));
        assert_eq!(report.pixels_per_bit, 10);
        assert_eq!(report.axis_origin, None);
        assert_eq!(report.markers.len(), 4);
        assert_eq!(
            report.markers[3],
            MarkerReport {
                id: 3,
                row: 1,
                col: 1,
                x: 150.0,
                y: 150.0,
                size: 100.0
            }
        );
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("at least 10px"));
    }
}
