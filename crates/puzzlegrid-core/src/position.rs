//! Signed grid coordinates.

use std::ops::{Add, Neg, Sub};

/// A signed `(x, y)` coordinate.
///
/// `x` grows to the right (position within an input line) and `y` grows
/// downwards (line index). Coordinates are signed so that callers can step
/// off the edge of a grid and let its [`Boundary`](crate::Boundary) decide
/// what lies there.
///
/// # Examples
///
/// ```
/// use puzzlegrid_core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos + Position::RIGHT, Position::new(3, 3));
/// assert_eq!(pos + Position::UP, Position::new(2, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, derive_more::Display)]
#[display("({x}, {y})")]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl Position {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);
    /// One step towards the previous line.
    pub const UP: Self = Self::new(0, -1);
    /// One step towards the next line.
    pub const DOWN: Self = Self::new(0, 1);
    /// One step towards the start of the line.
    pub const LEFT: Self = Self::new(-1, 0);
    /// One step towards the end of the line.
    pub const RIGHT: Self = Self::new(1, 0);

    /// The four orthogonal steps, clockwise from [`Position::UP`].
    pub const ORTHOGONAL_STEPS: [Self; 4] = [Self::UP, Self::RIGHT, Self::DOWN, Self::LEFT];

    /// Creates a new position.
    #[must_use]
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Adds `rhs`, returning `None` if either coordinate overflows.
    #[must_use]
    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match (self.x.checked_add(rhs.x), self.y.checked_add(rhs.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Returns the Manhattan distance between two positions.
    ///
    /// Saturates at [`u64::MAX`] when the positions lie at opposite extremes
    /// of both axes.
    #[must_use]
    #[inline]
    pub const fn manhattan_distance(self, other: Self) -> u64 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }
}

impl From<(i64, i64)> for Position {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for (i64, i64) {
    #[inline]
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}

impl Add for Position {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Position {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}
