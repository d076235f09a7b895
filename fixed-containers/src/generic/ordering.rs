//! Key projections and strict weak orderings for [`SortedUnique`].
//!
//! [`SortedUnique`]: crate::generic::sorted_unique::SortedUnique

use core::cmp::Ordering;

/// Projects the ordering key out of a stored value.
pub trait KeyOf<V> {
    type Key;

    fn key_of(value: &V) -> &Self::Key;
}

/// The value is its own key (sets).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<V> KeyOf<V> for Identity {
    type Key = V;

    fn key_of(value: &V) -> &V {
        value
    }
}

/// The first component of a pair is the key (maps).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct First;

impl<K, V> KeyOf<(K, V)> for First {
    type Key = K;

    fn key_of(value: &(K, V)) -> &K {
        &value.0
    }
}

/// A strict weak ordering over keys.
///
/// Two keys are equivalent when neither is less than the other.
///
/// # Examples
///
/// ```rust
/// use fixed_containers::generic::ordering::{Compare, FnCompare, NaturalOrder};
///
/// assert!(NaturalOrder.less(&1, &2));
/// assert!(NaturalOrder.equivalent(&2, &2));
///
/// let by_len = FnCompare(|a: &&str, b: &&str| a.len() < b.len());
/// assert!(by_len.equivalent(&"ab", &"cd"));
/// ```
pub trait Compare<K: ?Sized> {
    /// Returns `true` if `a` orders strictly before `b`.
    fn less(&self, a: &K, b: &K) -> bool;

    fn equivalent(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }

    fn compare(&self, a: &K, b: &K) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Ascending order from [`Ord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Compare<K> for NaturalOrder {
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

/// Descending order from [`Ord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<K: Ord + ?Sized> Compare<K> for ReverseOrder {
    fn less(&self, a: &K, b: &K) -> bool {
        b < a
    }
}

/// Wraps a `less-than` closure.
#[derive(Clone, Copy, Debug, Default)]
pub struct FnCompare<F>(pub F);

impl<K: ?Sized, F> Compare<K> for FnCompare<F>
where
    F: Fn(&K, &K) -> bool,
{
    fn less(&self, a: &K, b: &K) -> bool {
        (self.0)(a, b)
    }
}
