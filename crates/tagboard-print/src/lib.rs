//! Printable calibration board rendering.
//!
//! Current focus:
//! - two-ring marker borders and bit-cell rendering,
//! - grid layout with optional coordinate-axis overlay,
//! - a typestate pipeline from [`BoardSpec`] to a written PNG or SVG.
//!
//! Tag codebooks live in `tagboard-family`.

mod assemble;
mod axis;
mod board;
mod border;
mod error;
mod io;
mod layout;
mod marker;
pub mod surface;

pub use assemble::{
    board_file_stem, check_warnings, ensure_output_dir, generate_board, BoardAssembler, Exported,
    LaidOut, Rendered,
};
pub use axis::{draw_axes, AXIS_LABEL_SIZE, AXIS_STROKE_WIDTH};
pub use board::{BoardSpec, BoardSpecError, BorderScheme};
pub use border::{border_rects, draw_border, Ring};
pub use error::{BoardError, RenderWarning};
pub use io::{BoardConfig, BoardReport, IoError, MarkerReport};
pub use layout::{BoardLayout, MarkerPlacement};
pub use marker::{corner_fiducials, pixels_per_bit, render_marker, MarkerSpec, BORDER_BITS};
pub use surface::{DrawCall, RasterSurface, RecordingSurface, SvgSurface};

pub use tagboard_core::{DrawingSurface, ExportError, Point2, Rect, Rgb};
