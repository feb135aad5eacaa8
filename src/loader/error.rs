//! Load Errors
//!
//! Failure values produced while loading route modules and asset bundles.

use thiserror::Error;

/// Error raised while loading a route module or an asset bundle.
///
/// `name` carries the error class the way a browser error object would
/// (`"NetworkError"`, `"ChunkLoadError"`, ...); `message` is what the
/// recovery classifier matches against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    pub name: String,
    pub message: String,
}

impl LoadError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// A failed fetch of a module or bundle.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new("NetworkError", message)
    }

    /// An import attempt that outlived its deadline.
    pub fn timeout(route: &str) -> Self {
        Self::new("TimeoutError", format!("Route loading timeout: {}", route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_names_the_route() {
        let error = LoadError::timeout("portfolio");
        assert_eq!(error.message, "Route loading timeout: portfolio");
        assert_eq!(error.name, "TimeoutError");
    }

    #[test]
    fn display_is_the_message() {
        let error = LoadError::network("Failed to fetch");
        assert_eq!(error.to_string(), "Failed to fetch");
    }
}
