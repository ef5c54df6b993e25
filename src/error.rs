//! Error handling types for semtrack
//!
//! The tracking core itself is infallible; errors come from the collaborators
//! around it (edits that do not fit the document, configuration, sessions).

use std::sync::PoisonError;
use thiserror::Error;

/// Error type for highlight tracking and its collaborators
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Edit span does not fit the document it is applied to
    #[error("Edit [{offset}, {end}) is out of bounds for document of length {document_length}")]
    EditOutOfBounds {
        offset: usize,
        end: usize,
        document_length: usize,
    },

    /// Edit boundary falls inside a multi-byte character
    #[error("Edit boundary {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },

    /// Configuration error
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Replay session could not be read
    #[error("Invalid session: {0}")]
    Session(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for semtrack operations
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Recovers the guard from a poisoned lock.
///
/// A panic in one listener must not wedge the tracker for the rest of the
/// editing session, so the inner value is used as-is.
pub trait LockResultExt<T> {
    /// The context parameter names the operation that hit the poisoned lock.
    fn recover_poison(self, context: &str) -> T;
}

impl<T> LockResultExt<T> for Result<T, PoisonError<T>> {
    fn recover_poison(self, context: &str) -> T {
        match self {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!(
                    target: "semtrack::lock_recovery",
                    "Recovered from poisoned lock in {}",
                    context
                );
                poisoned.into_inner()
            }
        }
    }
}

impl TrackerError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        TrackerError::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_recover_poison_returns_inner_value() {
        let lock = Arc::new(Mutex::new(7));
        let poisoner = Arc::clone(&lock);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(lock.is_poisoned());
        let guard = lock.lock().recover_poison("test");
        assert_eq!(*guard, 7);
    }

    #[test]
    fn test_edit_out_of_bounds_message() {
        let err = TrackerError::EditOutOfBounds {
            offset: 4,
            end: 12,
            document_length: 10,
        };
        assert_eq!(
            err.to_string(),
            "Edit [4, 12) is out of bounds for document of length 10"
        );
    }
}
