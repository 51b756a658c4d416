//! Ordering policies.
//!
//! A policy supplies one strict weak ordering, `less`. Every other relation
//! the list needs is derived from it, so equality means "neither is less",
//! not `PartialEq`.

use std::marker::PhantomData;

/// A strict weak ordering over `T`.
///
/// `less` must be irreflexive, transitive, and its induced equivalence must
/// be transitive. A policy that breaks this leaves the list in an order that
/// lookups will not understand; nothing detects it.
pub trait Comparator<T: ?Sized> {
    fn less(&self, a: &T, b: &T) -> bool;

    fn greater(&self, a: &T, b: &T) -> bool {
        return self.less(b, a);
    }

    fn less_or_equal(&self, a: &T, b: &T) -> bool {
        return !self.less(b, a);
    }

    fn greater_or_equal(&self, a: &T, b: &T) -> bool {
        return !self.less(a, b);
    }

    fn equal(&self, a: &T, b: &T) -> bool {
        return !self.less(a, b) && !self.less(b, a);
    }
}

/// The `Ord` ordering of `T`.
#[derive(Clone, Copy, Default, Debug)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn less(&self, a: &T, b: &T) -> bool {
        return a < b;
    }
}

/// Flips an inner policy.
#[derive(Clone, Copy, Default, Debug)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn less(&self, a: &T, b: &T) -> bool {
        return self.0.less(b, a);
    }
}

/// Orders values by a key extracted with `F`.
pub struct ByKey<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    pub fn new(key: F) -> Self {
        return ByKey {
            key,
            _key: PhantomData,
        };
    }
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        return ByKey::new(self.key.clone());
    }
}

impl<T, F, K> Comparator<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn less(&self, a: &T, b: &T) -> bool {
        return (self.key)(a) < (self.key)(b);
    }
}

/// Any `less` closure is a policy.
impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        return self(a, b);
    }
}
