use std::cmp::Ordering;

use crate::Vector;

/// Conjunctive comparison.
///
/// Every relation holds only if it holds for every component pair. This is not lexicographic
/// ordering: `(1, 5)` and `(3, 2)` are neither less, greater nor equal, which is why `Vector`
/// does not implement `PartialOrd`.
impl<T, const N: usize> Vector<T, N>
where
    T: PartialOrd,
{
    #[inline]
    fn all_pairs(&self, other: &Self, relation: impl Fn(&T, &T) -> bool) -> bool {
        self.iter().zip(other).all(|(lhs, rhs)| relation(lhs, rhs))
    }

    #[inline]
    fn all_against(&self, scalar: &T, relation: impl Fn(&T, &T) -> bool) -> bool {
        self.iter().all(|value| relation(value, scalar))
    }

    pub fn all_lt(&self, other: &Self) -> bool {
        self.all_pairs(other, T::lt)
    }

    pub fn all_le(&self, other: &Self) -> bool {
        self.all_pairs(other, T::le)
    }

    pub fn all_gt(&self, other: &Self) -> bool {
        self.all_pairs(other, T::gt)
    }

    pub fn all_ge(&self, other: &Self) -> bool {
        self.all_pairs(other, T::ge)
    }

    pub fn all_lt_scalar(&self, scalar: T) -> bool {
        self.all_against(&scalar, T::lt)
    }

    pub fn all_le_scalar(&self, scalar: T) -> bool {
        self.all_against(&scalar, T::le)
    }

    pub fn all_gt_scalar(&self, scalar: T) -> bool {
        self.all_against(&scalar, T::gt)
    }

    pub fn all_ge_scalar(&self, scalar: T) -> bool {
        self.all_against(&scalar, T::ge)
    }

    /// True if any component differs. Always the complement of `==`.
    pub fn any_ne(&self, other: &Self) -> bool {
        self.iter().zip(other).any(|(lhs, rhs)| lhs != rhs)
    }

    pub fn eq_scalar(&self, scalar: T) -> bool {
        self.all_against(&scalar, T::eq)
    }

    pub fn ne_scalar(&self, scalar: T) -> bool {
        self.iter().any(|value| *value != scalar)
    }

    /// `Equal`, `Less` or `Greater` when every component agrees on it, `None` when the
    /// vectors are incomparable.
    pub fn relation(&self, other: &Self) -> Option<Ordering> {
        if self.all_pairs(other, T::eq) {
            Some(Ordering::Equal)
        } else if self.all_lt(other) {
            Some(Ordering::Less)
        } else if self.all_gt(other) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}
