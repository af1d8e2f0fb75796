//! Active index arithmetic
//!
//! The active index is the only state the carousel keeps. It is normalized
//! against the collection size observed at step time, so a collection that
//! shrank since the previous step still yields an index inside `[0, count)`.

use std::fmt;

/// Position of the currently displayed illustration.
///
/// # Examples
///
/// ```
/// use carousel_core::ActiveIndex;
///
/// let index = ActiveIndex::default();
/// assert_eq!(index.advance(-1, 4), Some(ActiveIndex::new(3)));
/// assert_eq!(index.advance(1, 0), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActiveIndex(usize);

impl ActiveIndex {
    /// Wraps a raw position.
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self(position)
    }

    /// Returns the raw position.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Moves by `step` positions modulo `count`.
    ///
    /// Returns `None` when `count` is zero: there is no valid position to move
    /// to and the caller must treat the step as a no-op.
    ///
    /// The sum is computed in `i128`, which holds any `usize` plus any `i64`
    /// without overflow, then wrapped with `rem_euclid` so negative sums land
    /// in `[0, count)`.
    #[must_use]
    pub fn advance(self, step: i64, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }

        let count = i128::try_from(count).ok()?;
        let current = i128::try_from(self.0).ok()?;
        let next = current.checked_add(i128::from(step))?.rem_euclid(count);

        usize::try_from(next).ok().map(Self)
    }

    /// Returns true when this index points at `position`.
    #[must_use]
    pub const fn is(self, position: usize) -> bool {
        self.0 == position
    }
}

impl fmt::Display for ActiveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
