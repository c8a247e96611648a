use std::{fmt, result};

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Component operation named in arithmetic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Increment,
    Decrement,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Mul => "multiplication",
            Self::Div => "division",
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        })
    }
}

/// Error types for fixvec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Index out of range: index: {index}, len: {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Division by zero on {ty} component")]
    DivisionByZero { ty: &'static str },

    #[error("{op} overflowed {ty} component")]
    Overflow { op: Op, ty: &'static str },

    #[error("{op} is not defined for {ty} components")]
    InvalidOperation { op: Op, ty: &'static str },

    #[error("Wrong length: expected {expected} values, got {found}")]
    WrongLength { expected: usize, found: usize },
}
