//! Host-agnostic card illustration carousel
//!
//! A carousel rotates through an ordered collection of illustrations. Two
//! triggers step the active index backward and forward modulo the collection
//! size, and after every step exactly the illustration at the active index
//! carries the `open` marker.
//!
//! ## Module Structure
//! - `carousel`: active index state and the marker synchronization pass
//! - `controller`: trigger wiring and shared state for host event dispatch
//! - `collection`: the collection trait hosts implement, plus an in-memory one
//! - `interaction`: the prevent-default capability hosts expose per activation
//! - `index`: modular index arithmetic
//! - `config`: element identifiers and marker class
//! - `error` / `result`: typed errors, no panics

#![forbid(unsafe_code)]

pub mod carousel;
pub mod collection;
pub mod config;
pub mod controller;
pub mod direction;
pub mod error;
pub mod index;
pub mod interaction;
pub mod result;

pub use carousel::{Carousel, StepOutcome};
pub use collection::{IllustrationCollection, MemoryCollection};
pub use config::CarouselConfig;
pub use controller::{CarouselController, Handler, Trigger, Wiring};
pub use direction::Direction;
pub use error::Error;
pub use index::ActiveIndex;
pub use interaction::{Interaction, Programmatic};
pub use result::{Result, ResultExt};
