//! Policies for coordinates that fall outside a grid.

use std::fmt;

/// A function producing the value seen at an out-of-range `(x, y)`.
pub type OutOfBoundsFn<T> = Box<dyn Fn(i64, i64) -> T + Send + Sync>;

/// How a [`Grid`](crate::Grid) resolves coordinates outside of
/// `[0, width) × [0, height)`.
///
/// Exactly one policy applies to a grid. Wrapping and synthetic fallback
/// values are separate variants, so a grid that wraps can never also carry a
/// fallback supplier.
///
/// # Examples
///
/// ```
/// use puzzlegrid_core::Boundary;
///
/// let wrap = Boundary::<char>::Wrap;
/// assert!(wrap.is_wrap());
///
/// let open = Boundary::constant('.');
/// assert!(open.is_fallback());
/// ```
#[derive(derive_more::IsVariant)]
pub enum Boundary<T> {
    /// Coordinates are reduced modulo the width and height (toroidal grid).
    Wrap,
    /// Out-of-range coordinates have no value.
    Strict,
    /// Out-of-range coordinates are resolved by calling the supplier with the
    /// raw coordinates.
    Fallback(OutOfBoundsFn<T>),
}

impl<T> Boundary<T> {
    /// Creates a fallback policy from a supplier of the raw `(x, y)`.
    #[must_use]
    pub fn fallback<F>(supplier: F) -> Self
    where
        F: Fn(i64, i64) -> T + Send + Sync + 'static,
    {
        Self::Fallback(Box::new(supplier))
    }

    /// Creates a fallback policy that yields `value` everywhere outside the
    /// grid.
    #[must_use]
    pub fn constant(value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        Self::fallback(move |_, _| value.clone())
    }

    /// Returns the synthetic value for an out-of-range `(x, y)`, if this
    /// policy supplies one.
    #[must_use]
    #[inline]
    pub fn out_of_bounds(&self, x: i64, y: i64) -> Option<T> {
        match self {
            Self::Fallback(supplier) => Some(supplier(x, y)),
            Self::Wrap | Self::Strict => None,
        }
    }
}

impl<T> Default for Boundary<T> {
    fn default() -> Self {
        Self::Strict
    }
}

impl<T> fmt::Debug for Boundary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wrap => f.write_str("Wrap"),
            Self::Strict => f.write_str("Strict"),
            Self::Fallback(_) => f.debug_tuple("Fallback").finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_only_for_fallback() {
        assert_eq!(Boundary::<u8>::Wrap.out_of_bounds(-1, 0), None);
        assert_eq!(Boundary::<u8>::Strict.out_of_bounds(-1, 0), None);

        let sum = Boundary::fallback(|x, y| x + y);
        assert_eq!(sum.out_of_bounds(-3, 10), Some(7));

        let constant = Boundary::constant('.');
        assert_eq!(constant.out_of_bounds(100, -100), Some('.'));
    }

    #[test]
    fn test_debug_and_default() {
        assert_eq!(format!("{:?}", Boundary::<u8>::Wrap), "Wrap");
        assert_eq!(format!("{:?}", Boundary::<u8>::default()), "Strict");
        assert_eq!(format!("{:?}", Boundary::constant(0_u8)), "Fallback(..)");
    }
}
