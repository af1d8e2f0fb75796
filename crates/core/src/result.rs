//! Result type definition and logging combinators.
//!
//! Trigger handlers run inside host event dispatch and have nowhere to return
//! an error to, so they drop failures through [`ResultExt`] after logging them.

use crate::error::Error;

/// The standard Result type for carousel operations.
///
/// # Examples
///
/// ```
/// use carousel_core::{CarouselConfig, Result};
///
/// fn load(json: &str) -> Result<String> {
///     let config = CarouselConfig::from_json(json)?;
///     Ok(config.container_id)
/// }
///
/// assert_eq!(load("{}")?, "card-illustrations");
/// # Ok::<(), carousel_core::Error>(())
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing logging combinators for Results.
pub trait ResultExt<T> {
    /// Convert a Result to an Option, logging the error at warn level.
    fn into_option_logged(self) -> Option<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("carousel operation failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_option_ok() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.into_option_logged(), Some(42));
    }

    #[test]
    fn test_into_option_err() {
        let result: Result<i32> = Err(Error::Busy);
        assert_eq!(result.into_option_logged(), None);
    }
}
