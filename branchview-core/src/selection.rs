//! Repository selection
//!
//! Decides which entry of a repository listing the screen displays. The
//! index is resolved only once the listing has arrived, so a random pick is
//! always in range.

use rand::Rng;
use thiserror::Error;

/// Errors that can occur when resolving a selection against a listing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The listing has no entries to choose from
    #[error("repository listing is empty")]
    Empty,

    /// A fixed index does not exist in the listing
    #[error("repository index {index} out of range ({len} repositories)")]
    OutOfRange {
        /// Requested index
        index: usize,
        /// Length of the listing
        len: usize,
    },
}

/// Which repository of a listing to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Uniformly random entry
    #[default]
    Random,

    /// Entry at a fixed index
    Index(usize),
}

impl Selection {
    /// Resolves this selection against a listing of `len` entries
    ///
    /// # Returns
    /// An index in `0..len`
    pub fn resolve(self, len: usize) -> Result<usize, SelectionError> {
        self.resolve_with(&mut rand::thread_rng(), len)
    }

    /// Resolves this selection using the given random number generator
    pub fn resolve_with<R: Rng>(self, rng: &mut R, len: usize) -> Result<usize, SelectionError> {
        if len == 0 {
            return Err(SelectionError::Empty);
        }

        match self {
            Selection::Random => Ok(rng.gen_range(0..len)),
            Selection::Index(index) if index < len => Ok(index),
            Selection::Index(index) => Err(SelectionError::OutOfRange { index, len }),
        }
    }
}

impl From<Option<usize>> for Selection {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Selection::Random, Selection::Index)
    }
}
