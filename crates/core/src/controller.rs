//! Trigger wiring for a carousel over a host collection
//!
//! [`CarouselController::initialize`] is the entry point hosts call once their
//! document is ready. It takes ownership of the collection, registers a handler
//! on each trigger that exists, and keeps the carousel state behind
//! `Rc<RefCell<..>>` so the registered handlers and the controller share it.
//! Everything runs on the host's single event-dispatch thread.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::carousel::{Carousel, StepOutcome};
use crate::collection::IllustrationCollection;
use crate::direction::Direction;
use crate::error::Error;
use crate::index::ActiveIndex;
use crate::interaction::Interaction;
use crate::result::{Result, ResultExt};

/// Handler a host invokes on every activation of a trigger.
pub type Handler = Box<dyn FnMut(&dyn Interaction)>;

/// An interactive element the host can attach an activation handler to.
pub trait Trigger {
    /// Registers `handler` to run on every activation.
    ///
    /// # Errors
    ///
    /// Returns a description of why the host refused the registration.
    fn on_activate(&self, handler: Handler) -> std::result::Result<(), String>;
}

/// Which directions received a handler at initialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wiring {
    pub previous: bool,
    pub next: bool,
}

#[derive(Debug)]
struct State<C> {
    carousel: Carousel,
    collection: C,
}

/// A carousel bound to its collection and triggers.
#[derive(Debug)]
pub struct CarouselController<C> {
    state: Rc<RefCell<State<C>>>,
    wiring: Wiring,
}

impl<C> CarouselController<C>
where
    C: IllustrationCollection + 'static,
{
    /// Wires the previous trigger to step -1 and the next trigger to step +1.
    ///
    /// Absent triggers are skipped; their direction stays inert. Nothing is
    /// rendered: the collection is untouched until the first activation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TriggerRegistration`] if a present trigger refuses the
    /// handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use carousel_core::{CarouselController, Handler, MemoryCollection, Trigger};
    ///
    /// struct Unused;
    ///
    /// impl Trigger for Unused {
    ///     fn on_activate(&self, _handler: Handler) -> Result<(), String> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let controller =
    ///     CarouselController::initialize(MemoryCollection::new(3), None, Some(&Unused))?;
    /// assert!(!controller.wiring().previous);
    /// assert!(controller.wiring().next);
    /// # Ok::<(), carousel_core::Error>(())
    /// ```
    pub fn initialize<T>(collection: C, previous: Option<&T>, next: Option<&T>) -> Result<Self>
    where
        T: Trigger + ?Sized,
    {
        let state = Rc::new(RefCell::new(State {
            carousel: Carousel::new(),
            collection,
        }));

        let wiring = Wiring {
            previous: wire(&state, previous, Direction::Previous)?,
            next: wire(&state, next, Direction::Next)?,
        };
        debug!(
            previous = wiring.previous,
            next = wiring.next,
            "carousel initialized"
        );

        Ok(Self { state, wiring })
    }

    /// Which triggers were wired.
    #[must_use]
    pub const fn wiring(&self) -> Wiring {
        self.wiring
    }

    /// Runs the same path a trigger handler runs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] when called from inside another activation, or
    /// a marker error from the collection.
    pub fn activate(
        &self,
        direction: Direction,
        interaction: &dyn Interaction,
    ) -> Result<StepOutcome> {
        activate(&self.state, direction, interaction)
    }

    /// Marks the illustration at the current index without stepping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] or a marker error from the collection.
    pub fn render(&self) -> Result<()> {
        let mut state = self.state.try_borrow_mut().map_err(|_| Error::Busy)?;
        let State {
            carousel,
            collection,
        } = &mut *state;
        carousel.render(collection)
    }

    /// Current active index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] while an activation is running.
    pub fn active(&self) -> Result<ActiveIndex> {
        self.state
            .try_borrow()
            .map(|state| state.carousel.active())
            .map_err(|_| Error::Busy)
    }

    /// Gives `f` access to the collection, e.g. to add or remove illustrations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] while an activation is running.
    pub fn with_collection<R>(&self, f: impl FnOnce(&mut C) -> R) -> Result<R> {
        self.state
            .try_borrow_mut()
            .map(|mut state| f(&mut state.collection))
            .map_err(|_| Error::Busy)
    }
}

fn wire<C, T>(state: &Rc<RefCell<State<C>>>, trigger: Option<&T>, direction: Direction) -> Result<bool>
where
    C: IllustrationCollection + 'static,
    T: Trigger + ?Sized,
{
    let Some(trigger) = trigger else {
        debug!(%direction, "trigger absent, direction left inert");
        return Ok(false);
    };

    let state = Rc::clone(state);
    trigger
        .on_activate(Box::new(move |interaction: &dyn Interaction| {
            activate(&state, direction, interaction).into_option_logged();
        }))
        .map_err(|reason| Error::trigger_registration(direction, reason))?;

    debug!(%direction, "trigger wired");
    Ok(true)
}

fn activate<C>(
    state: &RefCell<State<C>>,
    direction: Direction,
    interaction: &dyn Interaction,
) -> Result<StepOutcome>
where
    C: IllustrationCollection,
{
    interaction.prevent_default();

    let mut state = state.try_borrow_mut().map_err(|_| Error::Busy)?;
    let State {
        carousel,
        collection,
    } = &mut *state;
    carousel.step(direction.offset(), collection)
}
