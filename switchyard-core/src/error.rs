//! Error types for Switchyard.
//!
//! Only construction can fail. Resolution never returns an error of its own:
//! an unmatched key without a default is a defined outcome, and failures
//! raised by a callable propagate to the caller untouched.

use thiserror::Error;

/// Errors raised while folding directives into a dispatch table.
///
/// Positions are zero-based indices into the directive sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// More than one `Default` directive was supplied.
    #[error("only one default may be registered (directive {first} already set one, directive {second} is a second)")]
    MultipleDefaults {
        /// Position of the default that was accepted.
        first: usize,
        /// Position of the rejected default.
        second: usize,
    },

    /// Two `Case` directives share a key and the duplicate policy rejects it.
    #[error("duplicate case key at directive {position}")]
    DuplicateKey {
        /// Position of the rejected case.
        position: usize,
    },
}
