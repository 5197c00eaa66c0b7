use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tagboard_core::ExportError;

use crate::BoardSpecError;

/// Fatal board generation errors.
#[derive(thiserror::Error, Debug)]
pub enum BoardError {
    #[error(transparent)]
    Spec(#[from] BoardSpecError),
    #[error("board needs {needed} tag ids, family {family} has {available}")]
    Capacity {
        family: String,
        needed: usize,
        available: usize,
    },
    #[error("tag id {id} is not in family {family}")]
    UnknownTagId { family: String, id: u32 },
    #[error("surface is {got_width}x{got_height}, board needs {width}x{height}")]
    SurfaceTooSmall {
        width: u32,
        height: u32,
        got_width: u32,
        got_height: u32,
    },
    #[error("failed to export board to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: ExportError,
    },
}

/// Non-fatal problems found while validating a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderWarning {
    /// The tag is too small to give every data bit at least one pixel; the
    /// data region renders empty.
    DegenerateRender {
        tag_size: f32,
        bits_per_side: usize,
        border_bits: u32,
    },
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderWarning::DegenerateRender {
                tag_size,
                bits_per_side,
                border_bits,
            } => {
                let cells = bits_per_side + 2 * *border_bits as usize;
                write!(
                    f,
                    "tag size {tag_size}px gives 0 pixels per bit for {cells} cells per side; \
                     use a tag size of at least {cells}px"
                )
            }
        }
    }
}
