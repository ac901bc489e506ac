//! The two arithmetic operations a flip can select.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Serialize, Serializer};

/// Which arithmetic operation a computation performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
}

impl Operation {
    /// Map a coin flip to an operation: heads adds, tails subtracts.
    pub fn from_flip(heads: bool) -> Self {
        if heads {
            Operation::Addition
        } else {
            Operation::Subtraction
        }
    }

    /// Label shown in the console notice.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "soustraction",
        }
    }

    /// Name used in JSON output.
    pub fn english_label(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
        }
    }

    /// Combine two operands. Overflow behaves like the bare `+` / `-` operators.
    pub fn apply<T>(self, a: T, b: T) -> T
    where
        T: Add<Output = T> + Sub<Output = T>,
    {
        match self {
            Operation::Addition => a + b,
            Operation::Subtraction => a - b,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.english_label())
    }
}
