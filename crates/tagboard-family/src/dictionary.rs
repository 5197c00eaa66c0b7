//! Static dictionary metadata and packed codes.

use crate::TagFamily;

/// A compiled-in AprilTag-style family.
#[derive(Clone, Copy, Debug)]
pub struct Dictionary {
    /// Family name without the `Tag` prefix, e.g. `36h11`.
    pub name: &'static str,
    /// Number of data bits per side.
    pub marker_size: usize,
    /// Number of bit errors the family can correct.
    pub max_correction_bits: u8,
    /// One `u64` per tag id, bit `n*row + col` holding cell `(row, col)`
    /// before the 180 degree render rotation.
    pub codes: &'static [u64],
}

impl Dictionary {
    /// Total number of data bits per marker.
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.marker_size * self.marker_size
    }
}

impl TagFamily for Dictionary {
    fn name(&self) -> &str {
        self.name
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
