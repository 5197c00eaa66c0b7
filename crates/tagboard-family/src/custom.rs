//! Codebooks loaded at runtime from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::TagFamily;

/// Largest marker side whose bits fit a `u64` code.
pub const MAX_MARKER_SIZE: usize = 8;

#[derive(thiserror::Error, Debug)]
pub enum FamilyError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("marker_size {size} is not supported (expected 1..={MAX_MARKER_SIZE})")]
    UnsupportedMarkerSize { size: usize },
    #[error("codebook {name:?} has no codes")]
    EmptyCodebook { name: String },
    #[error("unknown tag family {name:?} (built-in: {available})")]
    UnknownBuiltin { name: String, available: String },
}

/// An owned codebook, same layout as the embedded `data/*_CODES.json` files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDictionary {
    pub name: String,
    pub marker_size: usize,
    #[serde(default)]
    pub max_correction_bits: u8,
    pub codes: Vec<u64>,
}

impl CustomDictionary {
    /// Validate and build a codebook.
    pub fn new(
        name: impl Into<String>,
        marker_size: usize,
        codes: Vec<u64>,
    ) -> Result<Self, FamilyError> {
        Self {
            name: name.into(),
            marker_size,
            max_correction_bits: 0,
            codes,
        }
        .validated()
    }

    /// Parse a JSON codebook.
    pub fn from_json_str(raw: &str) -> Result<Self, FamilyError> {
        let dict: Self = serde_json::from_str(raw)?;
        dict.validated()
    }

    /// Load a JSON codebook from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, FamilyError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Write this codebook to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), FamilyError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    fn validated(self) -> Result<Self, FamilyError> {
        if self.marker_size == 0 || self.marker_size > MAX_MARKER_SIZE {
            return Err(FamilyError::UnsupportedMarkerSize {
                size: self.marker_size,
            });
        }
        if self.codes.is_empty() {
            return Err(FamilyError::EmptyCodebook { name: self.name });
        }
        let bits = self.marker_size * self.marker_size;
        if bits < 64 {
            let mask = (1u64 << bits) - 1;
            let stray = self.codes.iter().filter(|&&c| c & !mask != 0).count();
            if stray > 0 {
                log::warn!(
                    "codebook {:?}: {stray} code(s) set bits beyond the {bits}-bit data area; \
                     they are ignored",
                    self.name
                );
            }
        }
        Ok(self)
    }
}

impl TagFamily for CustomDictionary {
    fn name(&self) -> &str {
        &self.name
    }

    fn bits_per_side(&self) -> usize {
        self.marker_size
    }

    fn tag_count(&self) -> usize {
        self.codes.len()
    }

    fn code_for_id(&self, id: u32) -> Option<u64> {
        self.codes.get(id as usize).copied()
    }
}
