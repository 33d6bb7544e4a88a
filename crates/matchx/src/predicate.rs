//! Predicate combinators for building case tests.

/// Predicate holding for values equal to `target`.
///
/// Equality is the type's own `PartialEq`. For `Decimal` (and `Value`
/// holding decimals) that is numeric equality, so `2.5` equals `2.50`.
pub fn equals<T: PartialEq>(target: T) -> impl Fn(&T) -> bool {
    move |value| *value == target
}

/// Predicate holding exactly when `predicate` does not.
pub fn negate<T: ?Sized>(predicate: impl Fn(&T) -> bool) -> impl Fn(&T) -> bool {
    move |value| !predicate(value)
}
