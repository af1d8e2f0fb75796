//! Carousel configuration
//!
//! Identifiers and the marker class default to the ones the card pages are
//! generated with; hosts override any subset through a JSON object.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Element id of the illustration container
pub const DEFAULT_CONTAINER_ID: &str = "card-illustrations";
/// Element id of the previous trigger
pub const DEFAULT_PREVIOUS_ID: &str = "card-illustration-controls-left";
/// Element id of the next trigger
pub const DEFAULT_NEXT_ID: &str = "card-illustration-controls-right";
/// Class marking the active illustration
pub const DEFAULT_OPEN_CLASS: &str = "open";

/// Where the carousel finds its elements and how it marks the active one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Container whose direct children are the illustrations
    pub container_id: String,
    /// Trigger stepping backward; may be absent from the page
    pub previous_id: String,
    /// Trigger stepping forward; may be absent from the page
    pub next_id: String,
    /// Class added to the active illustration
    pub open_class: String,
    /// Mark index 0 at mount time instead of waiting for the first step
    pub render_on_init: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            previous_id: DEFAULT_PREVIOUS_ID.to_string(),
            next_id: DEFAULT_NEXT_ID.to_string(),
            open_class: DEFAULT_OPEN_CLASS.to_string(),
            render_on_init: false,
        }
    }
}

impl CarouselConfig {
    /// Parses a (possibly partial) JSON object and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed JSON or unknown fields,
    /// and [`Error::InvalidConfig`] if validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use carousel_core::CarouselConfig;
    ///
    /// let config = CarouselConfig::from_json(r#"{"open_class": "active"}"#)?;
    /// assert_eq!(config.open_class, "active");
    /// assert_eq!(config.container_id, "card-illustrations");
    /// # Ok::<(), carousel_core::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::config_parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that identifiers are non-empty and the marker is a single class
    /// token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        let ids = [
            ("container_id", &self.container_id),
            ("previous_id", &self.previous_id),
            ("next_id", &self.next_id),
        ];
        if let Some((field, _)) = ids.iter().find(|(_, id)| id.trim().is_empty()) {
            return Err(Error::invalid_config(format!("{field} must not be empty")));
        }

        if self.open_class.is_empty() {
            return Err(Error::invalid_config("open_class must not be empty"));
        }
        if self.open_class.chars().any(char::is_whitespace) {
            return Err(Error::invalid_config(format!(
                "open_class '{}' must be a single class name",
                self.open_class
            )));
        }

        Ok(())
    }
}
