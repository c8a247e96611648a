#![doc = include_str!("../README.md")]

mod access;
mod aliases;
mod cmp;
mod display;
mod error;
mod fields;
mod ops;
mod scalar;
#[cfg(feature = "serde")]
mod serialize;
mod vector;

pub use aliases::*;
pub use error::*;
pub use ops::BitwiseScalar;
pub use scalar::*;
pub use vector::*;
