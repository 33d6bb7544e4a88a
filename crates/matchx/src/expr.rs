//! The match expression wrapper.

use tracing::trace;

use crate::case::Casable;

/// An immutable wrapper around a value to be dispatched against cases.
///
/// The held value is never mutated, so a single `Match` can be evaluated
/// any number of times, from any number of threads when `T: Sync`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match<T> {
    value: T,
}

/// Wrap `value` for matching.
#[inline]
pub fn matching<T>(value: T) -> Match<T> {
    Match::new(value)
}

impl<T> Match<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Match { value }
    }

    /// The held value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Unwrap the held value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Evaluate `cases` in order against the held value.
    ///
    /// The scan stops at the first predicate case that matches and returns
    /// its transform's result; later cases, defaults included, are never
    /// touched. Default cases are remembered as the scan passes them, each
    /// one replacing the previous, so when nothing matches the *last*
    /// default in sequence order produces the result. Without a match or a
    /// default the result is `None`.
    ///
    /// Panics raised by case closures propagate to the caller.
    pub fn of<V, I>(&self, cases: I) -> Option<V>
    where
        I: IntoIterator,
        I::Item: Casable<T, V>,
    {
        let mut fallback = None;
        for (index, candidate) in cases.into_iter().enumerate() {
            if candidate.is_default() {
                fallback = Some((index, candidate));
                continue;
            }
            if candidate.test(&self.value) {
                trace!(index, "case matched");
                return Some(candidate.apply(&self.value));
            }
        }
        match fallback {
            Some((index, default)) => {
                trace!(index, "no case matched, using default");
                Some(default.apply(&self.value))
            }
            None => {
                trace!("no case matched and no default supplied");
                None
            }
        }
    }
}

impl<T> From<T> for Match<T> {
    #[inline]
    fn from(value: T) -> Self {
        Match::new(value)
    }
}
