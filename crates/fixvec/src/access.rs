use std::ops::{Index, IndexMut};

use log::debug;

use crate::{Error, Result, Scalar, Vector};

impl<T, const N: usize> Vector<T, N> {
    /// Number of components.
    pub const LEN: usize = N;

    /// Number of components, independent of the values held.
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Bounds-checked access to the component at `index`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.get(index)
            .ok_or(Error::IndexOutOfRange { index, len: N })
    }

    /// Bounds-checked mutable access to the component at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len: N })
    }

    /// Legacy accessor: an out-of-range `index` silently resolves to component 0.
    ///
    /// Prefer [`at`](Self::at), which reports the bad index instead.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    pub fn at_clamped(&self, index: usize) -> &T {
        &self.as_array()[Self::clamp(index)]
    }

    /// Mutable form of [`at_clamped`](Self::at_clamped).
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    pub fn at_clamped_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_array()[Self::clamp(index)]
    }

    fn clamp(index: usize) -> usize {
        if index < N {
            index
        } else {
            debug!("index {index} out of range for {N} components, clamped to 0");
            0
        }
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Scalar,
{
    /// Overwrites every component with `value`.
    pub fn reset(&mut self, value: T) {
        self.assign(value);
    }

    /// Resets every component to `T::ZERO`.
    pub fn clear(&mut self) {
        self.reset(T::ZERO);
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= N`. Use [`Vector::at`] for a checked lookup.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_array()[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_array()[index]
    }
}
