//! Browser host for the card illustration carousel
//!
//! This crate adapts the browser to `carousel-core`: web-sys adapters for the
//! illustration container, the click triggers and their events, a page-load
//! mount for static card pages, and a Leptos 0.7 CSR component.
//!
//! ## Architecture
//! - WASM compilation target (wasm32-unknown-unknown)
//! - All carousel logic lives in `carousel-core`; this crate only adapts
//! - JavaScript entry points: `start()` and `start_with_config(json)`
//!
//! ## Module Structure
//! - `dom`: web-sys implementations of the core traits
//! - `mount`: element lookup and document-ready mounting
//! - `component`: Leptos carousel component
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod component;
pub mod dom;
pub mod error;
pub mod mount;

use carousel_core::CarouselConfig;
use wasm_bindgen::prelude::*;

pub use component::{CardIllustrations, Illustration};
pub use error::UiError;
pub use mount::{mount_carousel, mount_on_load, mount_when_loaded, report_mount_failure};

/// Installs the panic hook and routes `log`/`tracing` records to the console
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_logging() {
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);
}

/// Mounts the carousel with the default card page ids once the page loads
///
/// Failures are reported to the browser console.
#[wasm_bindgen]
pub fn start() {
    init_logging();

    if let Err(e) = mount_when_loaded(CarouselConfig::default()) {
        report_mount_failure(&e);
    }
}

/// Mounts the carousel with ids and marker class overridden by a JSON object
///
/// # Errors
///
/// Rejects with a message if the JSON is invalid or mounting fails. A page
/// without the configured container is not an error.
#[wasm_bindgen]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    init_logging();

    let config = CarouselConfig::from_json(json).map_err(UiError::from)?;
    match mount_when_loaded(config) {
        Err(e) if e.is_missing_element() => {
            report_mount_failure(&e);
            Ok(())
        }
        other => other.map_err(JsValue::from),
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_logging_reaches_debug_level() {
        init_logging();
        init_logging();
        assert!(log::log_enabled!(log::Level::Debug));
        assert!(!log::log_enabled!(log::Level::Trace));
    }

    #[wasm_bindgen_test]
    fn test_start_on_page_without_carousel() -> Result<(), JsValue> {
        start();
        start_with_config(r#"{"container_id": "no-such-carousel"}"#)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        let _component = CardIllustrations;
        let _illustration = Illustration::new("a.png", "a");
        let err = UiError::ElementNotFound {
            id: "x".to_string(),
        };
        assert!(err.to_string().contains("element not found"));
    }
}
