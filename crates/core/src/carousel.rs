//! Carousel state and marker synchronization
//!
//! [`Carousel`] owns the active index and nothing else. Every step re-reads the
//! collection size, moves the index, and then re-synchronizes every node: the
//! node at the active index gets the marker, all others lose it. The pass is a
//! full rewrite rather than a diff, so markers set by anything outside the
//! carousel are corrected on the next step.

use tracing::{debug, trace};

use crate::collection::IllustrationCollection;
use crate::direction::Direction;
use crate::index::ActiveIndex;
use crate::interaction::Interaction;
use crate::result::Result;

/// What a step did to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The active index moved and markers were re-synchronized
    Moved {
        from: ActiveIndex,
        to: ActiveIndex,
        count: usize,
    },
    /// The collection was empty; nothing changed
    Skipped,
}

/// Rotating illustration state.
///
/// Starts at index 0 with no marker rendered. Call [`Carousel::render`]
/// explicitly if the initial illustration should be marked before the first
/// step.
///
/// # Examples
///
/// ```
/// use carousel_core::{Carousel, MemoryCollection};
///
/// let mut nodes = MemoryCollection::new(4);
/// let mut carousel = Carousel::new();
///
/// carousel.step(-1, &mut nodes)?;
/// assert_eq!(carousel.active().get(), 3);
/// assert_eq!(nodes.open_positions(), vec![3]);
/// # Ok::<(), carousel_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    active: ActiveIndex,
}

impl Carousel {
    /// Creates a carousel at index 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: ActiveIndex::new(0),
        }
    }

    /// Current active index.
    #[must_use]
    pub const fn active(&self) -> ActiveIndex {
        self.active
    }

    /// Moves the active index by `step` and re-synchronizes markers.
    ///
    /// An empty collection makes this a no-op returning
    /// [`StepOutcome::Skipped`].
    ///
    /// # Errors
    ///
    /// Returns the first marker error raised by the collection. The new index
    /// is committed and the remaining nodes are still synchronized before the
    /// error is returned.
    pub fn step<C>(&mut self, step: i64, nodes: &mut C) -> Result<StepOutcome>
    where
        C: IllustrationCollection + ?Sized,
    {
        let count = nodes.len();
        let Some(to) = self.active.advance(step, count) else {
            debug!(step, "no illustrations, step skipped");
            return Ok(StepOutcome::Skipped);
        };

        let from = self.active;
        self.active = to;
        debug!(%from, %to, count, step, "carousel stepped");

        synchronize(nodes, to, count)?;
        Ok(StepOutcome::Moved { from, to, count })
    }

    /// Handles one trigger activation: suppresses the host default, then steps
    /// in `direction`.
    ///
    /// # Errors
    ///
    /// See [`Carousel::step`].
    pub fn handle<I, C>(
        &mut self,
        interaction: &I,
        direction: Direction,
        nodes: &mut C,
    ) -> Result<StepOutcome>
    where
        I: Interaction + ?Sized,
        C: IllustrationCollection + ?Sized,
    {
        interaction.prevent_default();
        self.step(direction.offset(), nodes)
    }

    /// Marks the illustration at the current index without moving it.
    ///
    /// A stale index (the collection shrank) is renormalized first. Does
    /// nothing on an empty collection.
    ///
    /// # Errors
    ///
    /// Returns the first marker error raised by the collection.
    pub fn render<C>(&mut self, nodes: &mut C) -> Result<()>
    where
        C: IllustrationCollection + ?Sized,
    {
        let count = nodes.len();
        match self.active.advance(0, count) {
            Some(active) => {
                self.active = active;
                synchronize(nodes, active, count)
            }
            None => Ok(()),
        }
    }
}

/// Full marker pass over the first `count` nodes.
fn synchronize<C>(nodes: &mut C, active: ActiveIndex, count: usize) -> Result<()>
where
    C: IllustrationCollection + ?Sized,
{
    let mut first_error = None;

    for position in 0..count {
        let open = active.is(position);
        trace!(position, open, "sync marker");
        if let Err(e) = nodes.set_open(position, open) {
            first_error.get_or_insert(e);
        }
    }

    first_error.map_or(Ok(()), Err)
}
