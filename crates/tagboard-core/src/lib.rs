//! Core types shared by the tagboard crates.
//!
//! This crate is intentionally small. It knows about canvas geometry, colors
//! and the [`DrawingSurface`] capability, but nothing about tag families or
//! concrete rendering backends.

mod color;
mod geometry;
mod logger;
mod surface;

pub use color::Rgb;
pub use geometry::Rect;
pub use nalgebra::Point2;
pub use surface::{DrawingSurface, ExportError, Stroke, TextStyle};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
