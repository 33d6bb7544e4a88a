//! Case definitions and the builders that construct them.
//!
//! A case is either a predicate case (a test over the held value paired with
//! a transform) or a default case (a producer consulted only when nothing
//! else matched). Both shapes implement `Casable`, which is what `Match::of`
//! consumes, so callers can also plug in their own case types.

use std::fmt;

/// A single case considered during evaluation.
pub trait Casable<T: ?Sized, V> {
    /// Whether this case matches `value`.
    fn test(&self, value: &T) -> bool;

    /// Produce the result for `value`.
    fn apply(&self, value: &T) -> V;

    /// Whether this case is a fallback rather than a value test.
    fn is_default(&self) -> bool {
        false
    }
}

impl<T: ?Sized, V, C: Casable<T, V> + ?Sized> Casable<T, V> for &C {
    #[inline]
    fn test(&self, value: &T) -> bool {
        (**self).test(value)
    }

    #[inline]
    fn apply(&self, value: &T) -> V {
        (**self).apply(value)
    }

    #[inline]
    fn is_default(&self) -> bool {
        (**self).is_default()
    }
}

type PredicateFn<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;
type TransformFn<'a, T, V> = Box<dyn Fn(&T) -> V + 'a>;
type ProducerFn<'a, V> = Box<dyn Fn() -> V + 'a>;

/// The built-in case shapes.
pub enum Case<'a, T: ?Sized, V> {
    /// Matches when `predicate` holds; the result comes from `transform`.
    Predicate {
        predicate: PredicateFn<'a, T>,
        transform: TransformFn<'a, T, V>,
    },
    /// Never matches a value; `producer` supplies the fallback result.
    Default { producer: ProducerFn<'a, V> },
}

impl<'a, T: ?Sized, V> Case<'a, T, V> {
    /// Build a predicate case.
    pub fn when<P, F>(predicate: P, transform: F) -> Self
    where
        P: Fn(&T) -> bool + 'a,
        F: Fn(&T) -> V + 'a,
    {
        Case::Predicate {
            predicate: Box::new(predicate),
            transform: Box::new(transform),
        }
    }

    /// Build a default case.
    pub fn fallback<F>(producer: F) -> Self
    where
        F: Fn() -> V + 'a,
    {
        Case::Default {
            producer: Box::new(producer),
        }
    }
}

impl<T: ?Sized, V> Casable<T, V> for Case<'_, T, V> {
    fn test(&self, value: &T) -> bool {
        match self {
            Case::Predicate { predicate, .. } => predicate(value),
            Case::Default { .. } => false,
        }
    }

    fn apply(&self, value: &T) -> V {
        match self {
            Case::Predicate { transform, .. } => transform(value),
            Case::Default { producer } => producer(),
        }
    }

    fn is_default(&self) -> bool {
        matches!(self, Case::Default { .. })
    }
}

impl<T: ?Sized, V> fmt::Debug for Case<'_, T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Predicate { .. } => f.write_str("Case::Predicate"),
            Case::Default { .. } => f.write_str("Case::Default"),
        }
    }
}

/// Values whose variant can be named by a tag from a closed set.
///
/// `is` compares tags for equality only. There is no subtyping between
/// tags, so a kind test never matches a "related" kind.
pub trait Tagged {
    type Tag: Copy + Eq + fmt::Debug;

    fn tag(&self) -> Self::Tag;
}

/// Case matching values whose tag is exactly `tag`.
pub fn is<'a, T, V, F>(tag: T::Tag, transform: F) -> Case<'a, T, V>
where
    T: Tagged + ?Sized,
    T::Tag: 'a,
    F: Fn(&T) -> V + 'a,
{
    Case::when(move |value: &T| value.tag() == tag, transform)
}

/// Case matching values for which `predicate` holds.
pub fn case<'a, T, V, P, F>(predicate: P, transform: F) -> Case<'a, T, V>
where
    T: ?Sized,
    P: Fn(&T) -> bool + 'a,
    F: Fn(&T) -> V + 'a,
{
    Case::when(predicate, transform)
}

/// Default case, used only when no predicate case matches.
pub fn otherwise<'a, T, V, F>(producer: F) -> Case<'a, T, V>
where
    T: ?Sized,
    F: Fn() -> V + 'a,
{
    Case::fallback(producer)
}

#[cfg(test)]
mod tests;
