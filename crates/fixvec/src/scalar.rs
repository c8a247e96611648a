use std::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign},
};

use crate::{Error, Op, Result};

/// Element type of a [`Vector`](crate::Vector).
///
/// Implemented for every integer and float primitive and for `bool`. The checked operations
/// are the fallible building blocks behind `Vector::checked_*`: integers report overflow and
/// division by zero, floats follow IEEE semantics and never fail, and `bool` promotes to an
/// integer and back (`add` is OR, `sub` is XOR, `mul` is AND) while rejecting division,
/// increment and decrement.
pub trait Scalar
where
    Self: Sized
        + Copy
        + Debug
        + Display
        + Default
        + PartialEq
        + PartialOrd
        + Send
        + Sync
        + 'static,
{
    /// Fill value for fields that were not given a value.
    const ZERO: Self;

    /// Type name used in error messages.
    const NAME: &'static str;

    fn checked_add(self, rhs: Self) -> Result<Self>;

    fn checked_sub(self, rhs: Self) -> Result<Self>;

    fn checked_mul(self, rhs: Self) -> Result<Self>;

    fn checked_div(self, rhs: Self) -> Result<Self>;

    fn checked_increment(self) -> Result<Self>;

    fn checked_decrement(self) -> Result<Self>;
}

/// Element types with native arithmetic operators.
///
/// `bool` is deliberately excluded, so `+ - * /` and increment/decrement do not exist on
/// boolean vectors. Use the bitwise operators or the checked API there.
pub trait Numeric
where
    Self: Scalar
        + Add<Output = Self>
        + Sub<Output = Self>
        + Mul<Output = Self>
        + Div<Output = Self>
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign,
{
    /// One unit, added by increment and subtracted by decrement.
    const ONE: Self;
}

macro_rules! impl_scalar_integer {
    ($($t:ty)*) => ($(
        impl Scalar for $t {
            const ZERO: Self = 0;
            const NAME: &'static str = stringify!($t);

            #[inline]
            fn checked_add(self, rhs: Self) -> Result<Self> {
                <$t>::checked_add(self, rhs).ok_or(Error::Overflow { op: Op::Add, ty: Self::NAME })
            }

            #[inline]
            fn checked_sub(self, rhs: Self) -> Result<Self> {
                <$t>::checked_sub(self, rhs).ok_or(Error::Overflow { op: Op::Sub, ty: Self::NAME })
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Result<Self> {
                <$t>::checked_mul(self, rhs).ok_or(Error::Overflow { op: Op::Mul, ty: Self::NAME })
            }

            #[inline]
            fn checked_div(self, rhs: Self) -> Result<Self> {
                if rhs == 0 {
                    return Err(Error::DivisionByZero { ty: Self::NAME });
                }
                // MIN / -1 is the only remaining failure.
                <$t>::checked_div(self, rhs).ok_or(Error::Overflow { op: Op::Div, ty: Self::NAME })
            }

            #[inline]
            fn checked_increment(self) -> Result<Self> {
                <$t>::checked_add(self, 1)
                    .ok_or(Error::Overflow { op: Op::Increment, ty: Self::NAME })
            }

            #[inline]
            fn checked_decrement(self) -> Result<Self> {
                <$t>::checked_sub(self, 1)
                    .ok_or(Error::Overflow { op: Op::Decrement, ty: Self::NAME })
            }
        }

        impl Numeric for $t {
            const ONE: Self = 1;
        }
    )*)
}

impl_scalar_integer! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize }

macro_rules! impl_scalar_float {
    ($($t:ty)*) => ($(
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const NAME: &'static str = stringify!($t);

            #[inline]
            fn checked_add(self, rhs: Self) -> Result<Self> {
                Ok(self + rhs)
            }

            #[inline]
            fn checked_sub(self, rhs: Self) -> Result<Self> {
                Ok(self - rhs)
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Result<Self> {
                Ok(self * rhs)
            }

            #[inline]
            fn checked_div(self, rhs: Self) -> Result<Self> {
                Ok(self / rhs)
            }

            #[inline]
            fn checked_increment(self) -> Result<Self> {
                Ok(self + 1.0)
            }

            #[inline]
            fn checked_decrement(self) -> Result<Self> {
                Ok(self - 1.0)
            }
        }

        impl Numeric for $t {
            const ONE: Self = 1.0;
        }
    )*)
}

impl_scalar_float! { f32 f64 }

impl Scalar for bool {
    const ZERO: Self = false;
    const NAME: &'static str = "bool";

    #[inline]
    fn checked_add(self, rhs: Self) -> Result<Self> {
        Ok(self | rhs)
    }

    #[inline]
    fn checked_sub(self, rhs: Self) -> Result<Self> {
        Ok(self ^ rhs)
    }

    #[inline]
    fn checked_mul(self, rhs: Self) -> Result<Self> {
        Ok(self & rhs)
    }

    #[inline]
    fn checked_div(self, _: Self) -> Result<Self> {
        Err(Error::InvalidOperation { op: Op::Div, ty: Self::NAME })
    }

    #[inline]
    fn checked_increment(self) -> Result<Self> {
        Err(Error::InvalidOperation { op: Op::Increment, ty: Self::NAME })
    }

    #[inline]
    fn checked_decrement(self) -> Result<Self> {
        Err(Error::InvalidOperation { op: Op::Decrement, ty: Self::NAME })
    }
}

