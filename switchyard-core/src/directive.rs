//! Construction-time directives.
//!
//! A dispatch table is built once from an ordered list of directives, each
//! either a [`Directive::Case`] binding a key to a callable or a
//! [`Directive::Default`] naming the fallback. Directives are consumed by the
//! build and never observed afterwards.

use crate::signature::{BoxedCallable, IntoCallable, Signature};
use std::fmt;

/// One registration step for a dispatch table of key `K` and signature `S`.
pub enum Directive<K, S: Signature> {
    /// Bind `key` to `callable`.
    Case {
        /// The discriminator value.
        key: K,
        /// The callable run when `key` is resolved.
        callable: BoxedCallable<S>,
    },
    /// Run `callable` for keys that match no case.
    Default {
        /// The fallback callable.
        callable: BoxedCallable<S>,
    },
}

impl<K, S: Signature> Directive<K, S> {
    /// Create a case directive.
    pub fn case<F: IntoCallable<S>>(key: K, callable: F) -> Self {
        Directive::Case {
            key,
            callable: callable.into_callable(),
        }
    }

    /// Create the default directive.
    #[allow(clippy::should_implement_trait)]
    pub fn default<F: IntoCallable<S>>(callable: F) -> Self {
        Directive::Default {
            callable: callable.into_callable(),
        }
    }
}

impl<K: fmt::Debug, S: Signature> fmt::Debug for Directive<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Case { key, .. } => f
                .debug_struct("Case")
                .field("key", key)
                .finish_non_exhaustive(),
            Directive::Default { .. } => f.debug_struct("Default").finish_non_exhaustive(),
        }
    }
}
