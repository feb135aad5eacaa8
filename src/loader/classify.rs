//! Failure Classification
//!
//! Decides whether a load failure is worth retrying. The default
//! implementation matches the message format the bundler runtime emits
//! when a code-split chunk fails to arrive; swapping bundlers means
//! swapping the predicate, nothing else.

use std::rc::Rc;

use super::error::LoadError;

/// Message fragments emitted for a failed chunk fetch.
const CHUNK_FAILURE_PATTERNS: [&str; 4] = [
    "Loading chunk",
    "Failed to fetch",
    "Loading CSS chunk",
    "ChunkLoadError",
];

/// Pluggable recoverability test used by the retry boundary.
pub type RecoveryPredicate = Rc<dyn Fn(&LoadError) -> bool>;

/// Default predicate: does this look like a chunk that failed to load?
pub fn is_chunk_failure(error: &LoadError) -> bool {
    error.name == "ChunkLoadError"
        || CHUNK_FAILURE_PATTERNS
            .iter()
            .any(|pattern| error.message.contains(pattern))
}

/// The default predicate boxed for injection.
pub fn default_predicate() -> RecoveryPredicate {
    Rc::new(is_chunk_failure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_every_chunk_pattern() {
        for message in [
            "Loading chunk 14 failed",
            "TypeError: Failed to fetch",
            "Loading CSS chunk 3 failed",
            "ChunkLoadError: timeout",
        ] {
            assert!(
                is_chunk_failure(&LoadError::new("Error", message)),
                "expected {:?} to classify as recoverable",
                message
            );
        }
    }

    #[test]
    fn matches_on_error_name() {
        let error = LoadError::new("ChunkLoadError", "script load failed");
        assert!(is_chunk_failure(&error));
    }

    #[test]
    fn declines_ordinary_runtime_errors() {
        let error = LoadError::new("TypeError", "TypeError: x is not a function");
        assert!(!is_chunk_failure(&error));
    }
}
