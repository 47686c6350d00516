//! Testing utilities for Switchyard.
//!
//! Callables stored in a dispatch table must be `Send + Sync`, so tests that
//! want to observe which callable ran record into a shared [`CallLog`]
//! instead of a captured `Vec`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A shared, cloneable record of invocations.
///
/// # Example
///
/// ```rust
/// use switchyard_std::testing::CallLog;
///
/// let log = CallLog::new();
/// let sink = log.clone();
/// let case = move |s: String| sink.record(format!("Case 1: {s}"));
///
/// case("Hello".to_string());
/// assert_eq!(log.entries(), vec!["Case 1: Hello".to_string()]);
/// ```
pub struct CallLog<T> {
    entries: Arc<Mutex<Vec<T>>>,
}

impl<T> CallLog<T> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn guard(&self) -> MutexGuard<'_, Vec<T>> {
        // A panicking callable must not hide what was recorded before it.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append one entry.
    pub fn record(&self, entry: T) {
        self.guard().push(entry);
    }

    /// Get the number of recorded entries.
    pub fn count(&self) -> usize {
        self.guard().len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// Clear all recorded entries.
    pub fn clear(&self) {
        self.guard().clear();
    }
}

impl<T: Clone> CallLog<T> {
    /// Get a clone of the recorded entries.
    pub fn entries(&self) -> Vec<T> {
        self.guard().clone()
    }

    /// Get the most recent entry.
    pub fn last(&self) -> Option<T> {
        self.guard().last().cloned()
    }
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}
