//! Leptos carousel component
//!
//! Renders the same markup the static card pages carry (container plus the
//! two controls, under the default ids) and drives it from reactive state
//! instead of DOM class lists: the core carousel steps an in-memory
//! collection and each image maps its flag to `class:open`.

use carousel_core::config::{DEFAULT_CONTAINER_ID, DEFAULT_NEXT_ID, DEFAULT_PREVIOUS_ID};
use carousel_core::{Carousel, Direction, MemoryCollection, ResultExt};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::dom::DomInteraction;

/// One image in the carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Illustration {
    pub src: String,
    pub alt: String,
}

impl Illustration {
    /// Creates an illustration from an image source and its alt text
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Card illustration carousel with previous/next controls
///
/// No image is marked open until the first click, matching the mounted
/// carousel on static pages.
#[component]
pub fn CardIllustrations(illustrations: Vec<Illustration>) -> impl IntoView {
    let state = RwSignal::new((
        Carousel::new(),
        MemoryCollection::new(illustrations.len()),
    ));

    let step = move |ev: MouseEvent, direction: Direction| {
        state.update(|(carousel, nodes)| {
            carousel
                .handle(&DomInteraction::new(&ev), direction, nodes)
                .into_option_logged();
        });
    };

    let images = illustrations
        .into_iter()
        .enumerate()
        .map(|(position, illustration)| {
            let is_open = move || state.with(|(_, nodes)| nodes.is_open(position));
            view! {
                <img
                    class="card-illustration"
                    class:open=is_open
                    src=illustration.src
                    alt=illustration.alt
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="card-illustration-carousel">
            <a
                href="#"
                id=DEFAULT_PREVIOUS_ID
                class="card-illustration-control"
                on:click=move |ev| step(ev, Direction::Previous)
            >
                "‹"
            </a>
            <div id=DEFAULT_CONTAINER_ID>{images}</div>
            <a
                href="#"
                id=DEFAULT_NEXT_ID
                class="card-illustration-control"
                on:click=move |ev| step(ev, Direction::Next)
            >
                "›"
            </a>
        </div>
    }
}
