//! Coordinate-addressable grids.

use std::{fmt, sync::Arc};

use crate::{Boundary, Position, Raster};

/// A two-dimensional grid addressed by signed `(x, y)` coordinates.
///
/// The grid owns a [`Raster`] and a single [`Boundary`] policy that decides
/// what lies outside `[0, width) × [0, height)`:
///
/// - [`Boundary::Wrap`]: coordinates are reduced with a proper (Euclidean)
///   modulo, so negative coordinates still land on a cell.
/// - [`Boundary::Strict`]: out-of-range lookups return `None`.
/// - [`Boundary::Fallback`]: out-of-range lookups return the supplier's value
///   for the raw coordinates.
///
/// Grids are read-only once built.
///
/// # Examples
///
/// ```
/// use puzzlegrid_core::{Boundary, Grid, Raster};
///
/// let raster = Raster::from_rows(["12".chars(), "34".chars()])?;
/// let grid = Grid::new(raster, Boundary::Wrap);
///
/// assert_eq!(grid.get(0, 0), Some('1'));
/// assert_eq!(grid.get(1, 0), Some('2'));
/// assert_eq!(grid.get(0, 1), Some('3'));
/// assert_eq!(grid.get(-1, -1), Some('4'));
/// # Ok::<(), puzzlegrid_core::RasterError>(())
/// ```
#[derive(Debug)]
pub struct Grid<T> {
    raster: Raster<T>,
    boundary: Boundary<T>,
}

impl<T> From<Raster<T>> for Grid<T> {
    fn from(raster: Raster<T>) -> Self {
        Self::strict(raster)
    }
}

impl<T> Grid<T> {
    /// Creates a grid over `raster` with the given boundary policy.
    #[must_use]
    pub fn new(raster: Raster<T>, boundary: Boundary<T>) -> Self {
        log::debug!(
            "creating {}x{} grid with {boundary:?} boundary",
            raster.width(),
            raster.height()
        );
        Self { raster, boundary }
    }

    /// Creates a grid whose coordinates wrap around both axes.
    #[must_use]
    pub fn wrapping(raster: Raster<T>) -> Self {
        Self::new(raster, Boundary::Wrap)
    }

    /// Creates a grid with no values outside its bounds.
    #[must_use]
    pub fn strict(raster: Raster<T>) -> Self {
        Self::new(raster, Boundary::Strict)
    }

    /// Creates a grid whose out-of-range cells are produced by `supplier`.
    #[must_use]
    pub fn with_fallback<F>(raster: Raster<T>, supplier: F) -> Self
    where
        F: Fn(i64, i64) -> T + Send + Sync + 'static,
    {
        Self::new(raster, Boundary::fallback(supplier))
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.raster.width()
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.raster.height()
    }

    /// Returns the boundary policy.
    #[must_use]
    #[inline]
    pub fn boundary(&self) -> &Boundary<T> {
        &self.boundary
    }

    /// Returns the backing raster.
    #[must_use]
    #[inline]
    pub fn raster(&self) -> &Raster<T> {
        &self.raster
    }

    /// Consumes the grid and returns the backing raster.
    #[must_use]
    #[inline]
    pub fn into_raster(self) -> Raster<T> {
        self.raster
    }

    /// Returns `true` if `(x, y)` lies within `[0, width) × [0, height)`.
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return false;
        };
        x < self.width() && y < self.height()
    }

    /// Maps `(x, y)` to the stored cell it refers to.
    ///
    /// Wrapping grids reduce the coordinates first; other grids only resolve
    /// in-range coordinates. An empty grid never resolves.
    #[must_use]
    pub fn resolve(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let (x, y) = match self.boundary {
            Boundary::Wrap => {
                let width = i64::try_from(self.width()).ok()?;
                let height = i64::try_from(self.height()).ok()?;
                (x.checked_rem_euclid(width)?, y.checked_rem_euclid(height)?)
            }
            Boundary::Strict | Boundary::Fallback(_) => (x, y),
        };
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width() && y < self.height()).then_some((x, y))
    }

    /// Borrows the stored cell that `(x, y)` resolves to.
    ///
    /// Unlike [`Grid::get`], this never consults a fallback supplier.
    #[must_use]
    #[inline]
    pub fn get_ref(&self, x: i64, y: i64) -> Option<&T> {
        let (x, y) = self.resolve(x, y)?;
        self.raster.get(x, y)
    }

    /// Returns the value at `(x, y)` according to the boundary policy.
    ///
    /// Returns `None` only when the coordinates are out of range of a strict
    /// grid, or the grid is empty and has no fallback.
    #[must_use]
    pub fn get(&self, x: i64, y: i64) -> Option<T>
    where
        T: Clone,
    {
        match self.get_ref(x, y) {
            Some(value) => Some(value.clone()),
            None => self.boundary.out_of_bounds(x, y),
        }
    }

    /// Returns the value at `pos`. See [`Grid::get`].
    #[must_use]
    #[inline]
    pub fn get_at(&self, pos: Position) -> Option<T>
    where
        T: Clone,
    {
        self.get(pos.x, pos.y)
    }

    /// Returns every in-range position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        let width = self.width();
        let height = self.height();
        (0..height).flat_map(move |y| (0..width).map(move |x| stored_position(x, y)))
    }

    /// Returns every stored cell with its position, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &T)> {
        let columns = self.raster.columns();
        (0..self.height()).flat_map(move |y| {
            columns
                .iter()
                .enumerate()
                .filter_map(move |(x, column)| Some((stored_position(x, y), column.get(y)?)))
        })
    }

    /// Returns the first position (row-major) whose cell satisfies `pred`.
    #[must_use]
    pub fn find<P>(&self, mut pred: P) -> Option<Position>
    where
        P: FnMut(&T) -> bool,
    {
        self.cells().find_map(|(pos, value)| pred(value).then_some(pos))
    }

    /// Returns the first position (row-major) holding `value`.
    #[must_use]
    pub fn position_of(&self, value: &T) -> Option<Position>
    where
        T: PartialEq,
    {
        self.find(|cell| cell == value)
    }

    /// Returns every position whose cell satisfies `pred`, in row-major
    /// order.
    pub fn positions_where<P>(&self, mut pred: P) -> impl Iterator<Item = Position>
    where
        P: FnMut(&T) -> bool,
    {
        self.cells().filter_map(move |(pos, value)| pred(value).then_some(pos))
    }

    /// Returns the orthogonal neighbours of `pos` that have a value under the
    /// boundary policy.
    ///
    /// Reported positions are the raw stepped coordinates; on a wrapping grid
    /// they are not reduced. Steps that would overflow `i64` are skipped.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = (Position, T)>
    where
        T: Clone,
    {
        Position::ORTHOGONAL_STEPS.into_iter().filter_map(move |step| {
            let next = pos.checked_add(step)?;
            Some((next, self.get_at(next)?))
        })
    }
}

impl<T> Grid<T>
where
    T: Send + 'static,
{
    /// Converts every cell with `f`, keeping the boundary policy.
    ///
    /// A fallback supplier is composed with `f`, so out-of-range values of
    /// the new grid are `f` applied to the old ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzlegrid_core::{Grid, Raster};
    ///
    /// let raster = Raster::from_rows(["#.".chars()])?;
    /// let walls = Grid::with_fallback(raster, |_, _| '#').map(|ch| ch == '#');
    /// assert_eq!(walls.get(1, 0), Some(false));
    /// assert_eq!(walls.get(5, 5), Some(true));
    /// # Ok::<(), puzzlegrid_core::RasterError>(())
    /// ```
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Grid<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        let cell_fn = Arc::clone(&f);
        let raster = self.raster.map(move |value| cell_fn(value));
        let boundary = match self.boundary {
            Boundary::Wrap => Boundary::Wrap,
            Boundary::Strict => Boundary::Strict,
            Boundary::Fallback(supplier) => Boundary::fallback(move |x, y| f(supplier(x, y))),
        };
        Grid::new(raster, boundary)
    }

    /// Converts every cell with `f` and installs a new boundary policy.
    #[must_use]
    pub fn map_with<U, F>(self, f: F, boundary: Boundary<U>) -> Grid<U>
    where
        U: Send,
        F: Fn(T) -> U + Sync + Send,
    {
        Grid::new(self.raster.map(f), boundary)
    }
}

/// Renders the stored cells row by row, one line per row.
impl<T> fmt::Display for Grid<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in self.raster.row(y) {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

#[expect(clippy::cast_possible_wrap)]
#[inline]
fn stored_position(x: usize, y: usize) -> Position {
    Position::new(x as i64, y as i64)
}
