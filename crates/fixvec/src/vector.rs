use std::{array, slice};

use crate::{Error, Result, Scalar};

/// Fixed-length tuple of `N` scalar components.
///
/// Components are positional. The `x`/`y`/`z` and `a`..`j` accessors are cosmetic views over
/// the same storage, generated for arities 2 through 10. All arithmetic is component-wise and
/// all ordering comparisons are conjunctive, see the `ops` and `cmp` impls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "zerocopy",
    derive(
        zerocopy::FromBytes,
        zerocopy::IntoBytes,
        zerocopy::Immutable,
        zerocopy::KnownLayout
    )
)]
#[repr(transparent)]
#[must_use]
pub struct Vector<T, const N: usize>([T; N]);

impl<T, const N: usize> Vector<T, N> {
    pub const fn new(values: [T; N]) -> Self {
        Self(values)
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Scalar,
{
    /// Every component set to `T::ZERO` (`0`, `0.0` or `false`).
    pub const fn zero() -> Self {
        Self([T::ZERO; N])
    }

    /// Broadcasts one value to every component.
    pub const fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// Builds a vector from up to `N` leading values, filling the rest with `T::ZERO`.
    ///
    /// Fails with [`Error::WrongLength`] when more than `N` values are given.
    pub fn from_partial(values: &[T]) -> Result<Self> {
        if values.len() > N {
            return Err(Error::WrongLength {
                expected: N,
                found: values.len(),
            });
        }

        let mut array = [T::ZERO; N];
        array[..values.len()].copy_from_slice(values);
        Ok(Self(array))
    }

    /// Scalar assignment: overwrites every component with `value`.
    pub fn assign(&mut self, value: T) -> &mut Self {
        self.0 = [value; N];
        self
    }

    pub fn map<U, F>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Combines two vectors component-wise.
    pub fn zip_with<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        Self(array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    /// Fallible [`zip_with`](Self::zip_with). Stops at the first failing component.
    pub(crate) fn try_zip_with<F>(self, other: Self, mut f: F) -> Result<Self>
    where
        F: FnMut(T, T) -> Result<T>,
    {
        let mut array = self.0;
        for (slot, rhs) in array.iter_mut().zip(other.0) {
            *slot = f(*slot, rhs)?;
        }
        Ok(Self(array))
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Scalar,
{
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(value: Vector<T, N>) -> [T; N] {
        value.0
    }
}

impl<T, const N: usize> From<T> for Vector<T, N>
where
    T: Scalar,
{
    fn from(value: T) -> Self {
        Self::splat(value)
    }
}

impl<T, const N: usize> TryFrom<&[T]> for Vector<T, N>
where
    T: Scalar,
{
    type Error = Error;

    fn try_from(value: &[T]) -> Result<Self, Self::Error> {
        let array: [T; N] = value.try_into().map_err(|_| Error::WrongLength {
            expected: N,
            found: value.len(),
        })?;
        Ok(Self(array))
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}
