//! DOM adapters for the carousel core
//!
//! Provides web-sys implementations of the core traits: the illustration
//! container's children as the collection, clickable elements as triggers,
//! and click events as interactions. All JS interop returns Results.

use carousel_core::{Error, Handler, IllustrationCollection, Interaction, Trigger};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, Window};

use crate::error::{Result, UiError};

/// Gets the browser window
///
/// # Errors
///
/// Returns [`UiError::WindowNotAvailable`] outside a browser context.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::WindowNotAvailable)
}

/// Gets the window's document
///
/// # Errors
///
/// Returns [`UiError::DocumentNotAvailable`] if the window has no document.
pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(UiError::DocumentNotAvailable)
}

/// Click event seen through the core's interaction capability
#[derive(Debug, Clone, Copy)]
pub struct DomInteraction<'a> {
    event: &'a Event,
}

impl<'a> DomInteraction<'a> {
    /// Wraps a dispatched event
    #[must_use]
    pub const fn new(event: &'a Event) -> Self {
        Self { event }
    }
}

impl Interaction for DomInteraction<'_> {
    fn prevent_default(&self) {
        self.event.prevent_default();
    }
}

/// The direct children of the illustration container
///
/// Children are re-read on every call, so illustrations inserted or removed
/// by other scripts are seen by the next step.
#[derive(Debug, Clone)]
pub struct DomIllustrations {
    container: Element,
    open_class: String,
}

impl DomIllustrations {
    /// Wraps `container`, marking the active child with `open_class`
    #[must_use]
    pub fn new(container: Element, open_class: impl Into<String>) -> Self {
        Self {
            container,
            open_class: open_class.into(),
        }
    }
}

impl IllustrationCollection for DomIllustrations {
    fn len(&self) -> usize {
        usize::try_from(self.container.children().length()).unwrap_or(usize::MAX)
    }

    fn set_open(&mut self, index: usize, open: bool) -> carousel_core::Result<()> {
        let position = u32::try_from(index)
            .map_err(|_| Error::marker(index, "index exceeds DOM collection range"))?;
        let node = self
            .container
            .children()
            .item(position)
            .ok_or_else(|| Error::marker(index, "illustration no longer in container"))?;

        let classes = node.class_list();
        let result = if open {
            classes.add_1(&self.open_class)
        } else {
            classes.remove_1(&self.open_class)
        };
        result.map_err(|e| Error::marker(index, format!("{e:?}")))
    }
}

/// A clickable element stepping the carousel
#[derive(Debug, Clone)]
pub struct DomTrigger {
    element: Element,
}

impl DomTrigger {
    /// Wraps a trigger element
    #[must_use]
    pub const fn new(element: Element) -> Self {
        Self { element }
    }

    /// Looks up a trigger by element id; `None` if the page has no such element
    #[must_use]
    pub fn find(document: &Document, id: &str) -> Option<Self> {
        document.get_element_by_id(id).map(Self::new)
    }
}

impl Trigger for DomTrigger {
    fn on_activate(&self, mut handler: Handler) -> std::result::Result<(), String> {
        let closure = Closure::wrap(Box::new(move |event: Event| {
            handler(&DomInteraction::new(&event));
        }) as Box<dyn FnMut(Event)>);

        self.element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| format!("Failed to add click listener: {e:?}"))?;

        // Listener lives as long as the page
        closure.forget();

        Ok(())
    }
}
