//! Step directions bound to the two carousel triggers

use std::fmt;

/// Direction a trigger moves the carousel in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Retreat one illustration (the left control)
    Previous,
    /// Advance one illustration (the right control)
    Next,
}

impl Direction {
    /// Signed step offset applied to the active index.
    #[must_use]
    pub const fn offset(self) -> i64 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Previous => write!(f, "previous"),
            Self::Next => write!(f, "next"),
        }
    }
}

impl From<Direction> for i64 {
    fn from(direction: Direction) -> Self {
        direction.offset()
    }
}
