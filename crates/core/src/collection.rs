//! Illustration collections the carousel synchronizes its marker onto
//!
//! The carousel never caches the collection size: hosts answer `len()` live on
//! every step, so illustrations added or removed between activations are
//! picked up by the next one.

use crate::error::Error;
use crate::result::Result;

/// An ordered set of illustration nodes that can carry the `open` marker.
pub trait IllustrationCollection {
    /// Current number of illustrations.
    fn len(&self) -> usize;

    /// Returns true when there is nothing to rotate through.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds (`open == true`) or removes the marker on the node at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Marker`] when the host cannot update the node.
    fn set_open(&mut self, index: usize, open: bool) -> Result<()>;
}

/// In-memory collection of marker flags.
///
/// Serves hosts that render from state (the Leptos component maps each flag
/// to `class:open`) and is the reference collection in tests.
///
/// # Examples
///
/// ```
/// use carousel_core::{Carousel, MemoryCollection};
///
/// let mut nodes = MemoryCollection::new(3);
/// let mut carousel = Carousel::new();
/// carousel.step(1, &mut nodes)?;
/// assert_eq!(nodes.open_positions(), vec![1]);
/// # Ok::<(), carousel_core::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCollection {
    flags: Vec<bool>,
}

impl MemoryCollection {
    /// Creates `len` unmarked nodes.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// Creates a collection with pre-set markers, as static markup might have.
    #[must_use]
    pub fn from_flags(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    /// Appends an unmarked node.
    pub fn push(&mut self) {
        self.flags.push(false);
    }

    /// Drops nodes past `len`.
    pub fn truncate(&mut self, len: usize) {
        self.flags.truncate(len);
    }

    /// Returns whether the node at `index` carries the marker.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Positions of every marked node, in order.
    #[must_use]
    pub fn open_positions(&self) -> Vec<usize> {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(position, open)| open.then_some(position))
            .collect()
    }

    /// Marker flags in collection order.
    #[must_use]
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }
}

impl IllustrationCollection for MemoryCollection {
    fn len(&self) -> usize {
        self.flags.len()
    }

    fn set_open(&mut self, index: usize, open: bool) -> Result<()> {
        let len = self.flags.len();
        let flag = self
            .flags
            .get_mut(index)
            .ok_or_else(|| Error::marker(index, format!("no illustration at {index} of {len}")))?;
        *flag = open;
        Ok(())
    }
}
