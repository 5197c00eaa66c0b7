//! AprilTag-style tag families for printable boards.
//!
//! This crate provides:
//! - the [`TagFamily`] codebook capability consumed by the renderer,
//! - embedded built-in families (`36h11`, `16h5`) compiled into the binary,
//! - runtime codebooks loaded from JSON ([`CustomDictionary`]),
//! - [`BitMatrix`], the decoder from packed codes to render-oriented cells.
//!
//! It does **not** detect tags in images.

mod bits;
pub mod builtins;
mod custom;
mod dictionary;
mod family;

pub use bits::BitMatrix;
pub use custom::{CustomDictionary, FamilyError, MAX_MARKER_SIZE};
pub use dictionary::Dictionary;
pub use family::{Family, TagFamily};
