//! High-level facade crate for the `tagboard-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the underlying crates,
//! - [`generate::run`], which turns a [`BoardConfig`] into PNG, SVG and JSON
//!   files on disk,
//! - the `tagboard` command-line tool (feature `cli`).
//!
//! ## Quickstart
//!
//! ```no_run
//! use tagboard::{generate, BoardConfig, BoardSpec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = BoardConfig {
//!     board: BoardSpec { cols: 4, rows: 3, ..BoardSpec::default() },
//!     svg: true,
//!     ..BoardConfig::default()
//! };
//! let summary = generate::run(&cfg)?;
//! println!("wrote {}", summary.png.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `tagboard::core`: geometry, colors, the drawing-surface trait, logging.
//! - `tagboard::family`: tag families, codebooks and bit matrices.
//! - `tagboard::print`: layout, marker rendering and the board pipeline.
//! - `tagboard::generate`: config-driven generation of all output files.

pub use tagboard_core as core;
pub use tagboard_family as family;
pub use tagboard_print as print;

pub use tagboard_core::init_with_level;
#[cfg(feature = "tracing")]
pub use tagboard_core::init_tracing;
pub use tagboard_family::{Family, TagFamily};
pub use tagboard_print::{
    generate_board, BoardAssembler, BoardConfig, BoardError, BoardReport, BoardSpec, BorderScheme,
    RenderWarning,
};

pub mod generate;
