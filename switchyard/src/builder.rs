//! The `Building` state of a dispatch table.
//!
//! A [`TableBuilder`] folds directives one at a time. [`TableBuilder::finish`]
//! consumes it and yields the immutable [`DispatchTable`]; there is no way
//! back.

use crate::table::DispatchTable;
use switchyard_core::{
    BoxedCallable, BuildError, CaseMap, CaseMapBuilder, Directive, DuplicatePolicy, Signature,
};
use switchyard_std::maps::OrderedMap;

/// Construction options for a dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableOptions {
    /// What to do with a `Case` whose key is already registered.
    pub duplicates: DuplicatePolicy,
}

impl TableOptions {
    /// Options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate-key policy.
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}

/// Accumulates directives for a [`DispatchTable`].
///
/// A directive rejected by [`push`](Self::push) is dropped and leaves the
/// builder as it was.
pub struct TableBuilder<K, S, M = OrderedMap<K, BoxedCallable<S>>>
where
    S: Signature,
    M: CaseMap<K, BoxedCallable<S>>,
{
    cases: M::Builder,
    default: Option<BoxedCallable<S>>,
    default_position: Option<usize>,
    options: TableOptions,
    next_position: usize,
}

impl<K, S, M> TableBuilder<K, S, M>
where
    S: Signature,
    M: CaseMap<K, BoxedCallable<S>>,
{
    /// Create an empty builder.
    pub fn new(options: TableOptions) -> Self {
        Self {
            cases: M::Builder::default(),
            default: None,
            default_position: None,
            options,
            next_position: 0,
        }
    }

    /// Fold one directive.
    ///
    /// # Errors
    ///
    /// - [`BuildError::MultipleDefaults`] if a default is already set.
    /// - [`BuildError::DuplicateKey`] if the key is already bound and the
    ///   policy is [`DuplicatePolicy::Reject`].
    pub fn push(&mut self, directive: Directive<K, S>) -> Result<(), BuildError> {
        let position = self.next_position;
        self.next_position += 1;

        match directive {
            Directive::Case { key, callable } => {
                if self.cases.contains(&key) {
                    match self.options.duplicates {
                        DuplicatePolicy::Reject => {
                            return Err(rejected(BuildError::DuplicateKey { position }));
                        }
                        DuplicatePolicy::KeepFirst => {
                            #[cfg(feature = "tracing")]
                            tracing::trace!(position, "duplicate case ignored");
                            return Ok(());
                        }
                        DuplicatePolicy::KeepLast => {
                            #[cfg(feature = "tracing")]
                            tracing::trace!(position, "duplicate case overrides earlier one");
                        }
                    }
                }
                self.cases.insert(key, callable);
                #[cfg(feature = "tracing")]
                tracing::trace!(position, "case registered");
            }
            Directive::Default { callable } => {
                if let Some(first) = self.default_position {
                    return Err(rejected(BuildError::MultipleDefaults {
                        first,
                        second: position,
                    }));
                }
                self.default = Some(callable);
                self.default_position = Some(position);
                #[cfg(feature = "tracing")]
                tracing::trace!(position, "default registered");
            }
        }
        Ok(())
    }

    /// Fold every directive of `directives`, stopping at the first error.
    pub fn extend<I>(&mut self, directives: I) -> Result<(), BuildError>
    where
        I: IntoIterator<Item = Directive<K, S>>,
    {
        for directive in directives {
            self.push(directive)?;
        }
        Ok(())
    }

    /// Finish construction.
    pub fn finish(self) -> DispatchTable<K, S, M> {
        DispatchTable::from_parts(self.cases.build(), self.default)
    }
}

impl<K, S, M> Default for TableBuilder<K, S, M>
where
    S: Signature,
    M: CaseMap<K, BoxedCallable<S>>,
{
    fn default() -> Self {
        Self::new(TableOptions::default())
    }
}

#[inline]
fn rejected(err: BuildError) -> BuildError {
    #[cfg(feature = "tracing")]
    tracing::debug!(error = %err, "directive rejected");
    err
}
