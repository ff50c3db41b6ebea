//! Comparison flag register.
//!
//! The LS-8 keeps a single comparison result. `CMP` is its only writer and the
//! conditional jumps its only readers; the value persists until the next `CMP`.

use std::cmp::Ordering;
use std::fmt;

/// Outcome of the most recent `CMP`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Flag {
    /// No comparison has run yet.
    #[default]
    Unset,
    /// `regA == regB`.
    Equal,
    /// `regA > regB`.
    Greater,
    /// `regA < regB`.
    Less,
}

impl Flag {
    /// `JEQ` condition.
    #[inline]
    pub const fn is_equal(self) -> bool {
        matches!(self, Self::Equal)
    }

    /// `JGE` condition.
    #[inline]
    pub const fn is_greater_or_equal(self) -> bool {
        matches!(self, Self::Greater | Self::Equal)
    }

    /// `JLE` condition.
    #[inline]
    pub const fn is_less_or_equal(self) -> bool {
        matches!(self, Self::Less | Self::Equal)
    }
}

impl From<Ordering> for Flag {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl fmt::Display for Flag {
    /// Renders the flag the way the hardware `FL` register would hold it (`00000LGE`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: u8 = match self {
            Self::Unset => 0b000,
            Self::Equal => 0b001,
            Self::Greater => 0b010,
            Self::Less => 0b100,
        };
        write!(f, "{bits:08b}")
    }
}
