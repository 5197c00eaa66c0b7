use crate::{BitMatrix, CustomDictionary, Dictionary, FamilyError};
use std::path::Path;

/// Read-only codebook of a tag family.
///
/// Implementations are immutable and can be shared between any number of
/// board generations.
pub trait TagFamily {
    /// Family name without the `Tag` prefix, e.g. `36h11`.
    fn name(&self) -> &str;

    /// Number of data bits per marker side.
    fn bits_per_side(&self) -> usize;

    /// Number of tag ids in the family.
    fn tag_count(&self) -> usize;

    /// Packed code for `id`, or `None` if the family has no such tag.
    fn code_for_id(&self, id: u32) -> Option<u64>;

    /// Render-oriented bit matrix for `id`.
    fn bit_matrix(&self, id: u32) -> Option<BitMatrix> {
        self.code_for_id(id)
            .map(|code| BitMatrix::decode(code, self.bits_per_side()))
    }
}

/// A family chosen at runtime: built-in or loaded from a codebook file.
#[derive(Clone, Debug)]
pub enum Family {
    Builtin(Dictionary),
    Custom(CustomDictionary),
}

impl Family {
    /// Resolve a built-in family by name.
    pub fn builtin(name: &str) -> Result<Self, FamilyError> {
        crate::builtins::builtin_dictionary(name)
            .map(Family::Builtin)
            .ok_or_else(|| FamilyError::UnknownBuiltin {
                name: name.to_string(),
                available: crate::builtins::builtin_names().join(", "),
            })
    }

    /// Load a codebook file, falling back to the built-in `name` when no
    /// file is given.
    pub fn resolve(name: &str, file: Option<&Path>) -> Result<Self, FamilyError> {
        match file {
            Some(path) => Ok(Family::Custom(CustomDictionary::load_json(path)?)),
            None => Self::builtin(name),
        }
    }

    fn inner(&self) -> &dyn TagFamily {
        match self {
            Family::Builtin(dict) => dict,
            Family::Custom(dict) => dict,
        }
    }
}

impl TagFamily for Family {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn bits_per_side(&self) -> usize {
        self.inner().bits_per_side()
    }

    fn tag_count(&self) -> usize {
        self.inner().tag_count()
    }

    fn code_for_id(&self, id: u32) -> Option<u64> {
        self.inner().code_for_id(id)
    }
}
