//! Error types for the browser host
//!
//! JS exceptions arrive as `JsValue`; they are flattened into strings with
//! `{:?}` at the call site so the error type stays `Clone + PartialEq`.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while mounting the carousel onto a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// Not running in a browser window
    #[error("failed to get window: window is not available")]
    WindowNotAvailable,

    /// Window has no document
    #[error("failed to get document: document is not available")]
    DocumentNotAvailable,

    /// A required element is missing from the page
    #[error("element not found: #{id}")]
    ElementNotFound { id: String },

    /// The browser refused an event listener
    #[error("failed to add event listener: {0}")]
    Listener(String),

    /// Carousel configuration, wiring or marker failure
    #[error(transparent)]
    Carousel(#[from] carousel_core::Error),
}

impl UiError {
    /// True when the page simply has no carousel to attach to
    #[must_use]
    pub const fn is_missing_element(&self) -> bool {
        matches!(self, Self::ElementNotFound { .. })
    }
}

impl From<UiError> for JsValue {
    fn from(error: UiError) -> Self {
        Self::from_str(&error.to_string())
    }
}

/// Result type alias for browser host operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = UiError::ElementNotFound {
            id: "card-illustrations".to_string(),
        };
        assert_eq!(error.to_string(), "element not found: #card-illustrations");

        let error = UiError::Listener("TypeError".to_string());
        assert_eq!(error.to_string(), "failed to add event listener: TypeError");
    }

    #[test]
    fn test_missing_element_classification() {
        let missing = UiError::ElementNotFound {
            id: "card-illustrations".to_string(),
        };
        assert!(missing.is_missing_element());
        assert!(!UiError::WindowNotAvailable.is_missing_element());
        assert!(!UiError::from(carousel_core::Error::Busy).is_missing_element());
    }

    #[test]
    fn test_core_errors_pass_through() {
        let error = UiError::from(carousel_core::Error::Busy);
        assert_eq!(
            error.to_string(),
            "carousel is busy handling another activation"
        );
    }
}
