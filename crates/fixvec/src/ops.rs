use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Sub, SubAssign,
};

use crate::{Numeric, Result, Scalar, Vector};

// Vector OP Vector, Vector OP scalar, and both assign forms.
macro_rules! impl_componentwise_op {
    ($bound:ident: $($trait:ident $method:ident $assign_trait:ident $assign_method:ident,)*) => ($(
        impl<T, const N: usize> $trait for Vector<T, N>
        where
            T: $bound,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip_with(rhs, $trait::$method)
            }
        }

        impl<T, const N: usize> $trait<T> for Vector<T, N>
        where
            T: $bound,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                self.map(|value| $trait::$method(value, rhs))
            }
        }

        impl<T, const N: usize> $assign_trait for Vector<T, N>
        where
            T: $bound,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                for (value, rhs) in self.iter_mut().zip(rhs) {
                    $assign_trait::$assign_method(value, rhs);
                }
            }
        }

        impl<T, const N: usize> $assign_trait<T> for Vector<T, N>
        where
            T: $bound,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                for value in self.iter_mut() {
                    $assign_trait::$assign_method(value, rhs);
                }
            }
        }
    )*)
}

impl_componentwise_op! {
    Numeric:
    Add add AddAssign add_assign,
    Sub sub SubAssign sub_assign,
    Mul mul MulAssign mul_assign,
    Div div DivAssign div_assign,
}

impl_componentwise_op! {
    BitwiseScalar:
    BitAnd bitand BitAndAssign bitand_assign,
    BitOr bitor BitOrAssign bitor_assign,
    BitXor bitxor BitXorAssign bitxor_assign,
}

/// Element types with bitwise operators: `bool` and the integers.
///
/// For `bool` these are the explicit forms of promoted arithmetic: `|` is `+`, `^` is `-`
/// and `&` is `*`.
pub trait BitwiseScalar
where
    Self: Scalar
        + BitAnd<Output = Self>
        + BitOr<Output = Self>
        + BitXor<Output = Self>
        + Not<Output = Self>
        + BitAndAssign
        + BitOrAssign
        + BitXorAssign,
{
}

impl<T> BitwiseScalar for T where
    T: Scalar
        + BitAnd<Output = T>
        + BitOr<Output = T>
        + BitXor<Output = T>
        + Not<Output = T>
        + BitAndAssign
        + BitOrAssign
        + BitXorAssign
{
}

impl<T, const N: usize> Not for Vector<T, N>
where
    T: BitwiseScalar,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(Not::not)
    }
}

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Numeric + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Numeric,
{
    /// Prefix increment: adds one unit to every component.
    pub fn increment(&mut self) -> &mut Self {
        *self += T::ONE;
        self
    }

    /// Prefix decrement: subtracts one unit from every component.
    pub fn decrement(&mut self) -> &mut Self {
        *self -= T::ONE;
        self
    }

    /// Postfix increment: returns the value before incrementing.
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.increment();
        previous
    }

    /// Postfix decrement: returns the value before decrementing.
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.decrement();
        previous
    }

    /// Chaining form of `+=`. Accepts a vector or a scalar operand.
    pub fn add_by<R>(&mut self, rhs: R) -> &mut Self
    where
        Self: AddAssign<R>,
    {
        *self += rhs;
        self
    }

    /// Chaining form of `-=`. Accepts a vector or a scalar operand.
    pub fn sub_by<R>(&mut self, rhs: R) -> &mut Self
    where
        Self: SubAssign<R>,
    {
        *self -= rhs;
        self
    }

    /// Chaining form of `*=`. Accepts a vector or a scalar operand.
    pub fn mul_by<R>(&mut self, rhs: R) -> &mut Self
    where
        Self: MulAssign<R>,
    {
        *self *= rhs;
        self
    }

    /// Chaining form of `/=`. Accepts a vector or a scalar operand.
    pub fn div_by<R>(&mut self, rhs: R) -> &mut Self
    where
        Self: DivAssign<R>,
    {
        *self /= rhs;
        self
    }
}

/// Checked component-wise arithmetic.
///
/// Available for every [`Scalar`], `bool` included. Integer overflow, integer division by
/// zero, and the operations `bool` does not define are reported instead of panicking or being
/// silently skipped.
impl<T, const N: usize> Vector<T, N>
where
    T: Scalar,
{
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.try_zip_with(rhs, T::checked_add)
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        self.try_zip_with(rhs, T::checked_sub)
    }

    pub fn checked_mul(self, rhs: Self) -> Result<Self> {
        self.try_zip_with(rhs, T::checked_mul)
    }

    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        self.try_zip_with(rhs, T::checked_div)
    }

    pub fn checked_add_scalar(self, rhs: T) -> Result<Self> {
        self.checked_add(Self::splat(rhs))
    }

    pub fn checked_sub_scalar(self, rhs: T) -> Result<Self> {
        self.checked_sub(Self::splat(rhs))
    }

    pub fn checked_mul_scalar(self, rhs: T) -> Result<Self> {
        self.checked_mul(Self::splat(rhs))
    }

    pub fn checked_div_scalar(self, rhs: T) -> Result<Self> {
        self.checked_div(Self::splat(rhs))
    }

    /// Increments every component in place. On failure the vector is left unchanged.
    pub fn checked_increment(&mut self) -> Result<&mut Self> {
        let mut stepped = self.into_array();
        for value in stepped.iter_mut() {
            *value = value.checked_increment()?;
        }
        *self = Self::new(stepped);
        Ok(self)
    }

    /// Decrements every component in place. On failure the vector is left unchanged.
    pub fn checked_decrement(&mut self) -> Result<&mut Self> {
        let mut stepped = self.into_array();
        for value in stepped.iter_mut() {
            *value = value.checked_decrement()?;
        }
        *self = Self::new(stepped);
        Ok(self)
    }
}
