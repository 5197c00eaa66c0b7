//! Concrete [`DrawingSurface`](tagboard_core::DrawingSurface) backends.
//!
//! - [`RasterSurface`]: RGB pixel buffer exported as PNG,
//! - [`SvgSurface`]: vector document exported as SVG,
//! - [`RecordingSurface`]: keeps the draw calls in memory, for tests and tooling.

mod glyphs;
mod raster;
mod recording;
mod svg;

pub use raster::RasterSurface;
pub use recording::{DrawCall, RecordingSurface};
pub use svg::SvgSurface;
