//! Column-major two-dimensional arrays.
//!
//! A [`Raster`] is the intermediate between line-oriented text and a
//! [`Grid`](crate::Grid). Input arrives row by row (`rows[y][x]`: line index,
//! then position within the line) and is stored transposed, so that the first
//! index is the horizontal coordinate and the second the vertical one
//! (`raster[x][y]`).
//!
//! [`Raster::from_rows`] is the only place where that transpose happens. Every
//! conversion in this workspace goes through it, so all rasters agree on the
//! orientation of their axes.
//!
//! # Examples
//!
//! ```
//! use puzzlegrid_core::Raster;
//!
//! let raster = Raster::from_rows(["ab".chars(), "cd".chars()])?;
//! assert_eq!(raster.width(), 2);
//! assert_eq!(raster.height(), 2);
//! assert_eq!(raster.get(1, 0), Some(&'b'));
//! assert_eq!(raster.get(0, 1), Some(&'c'));
//! # Ok::<(), puzzlegrid_core::RasterError>(())
//! ```

use rayon::prelude::*;

use crate::RasterError;

/// A rectangular, column-major two-dimensional array.
///
/// Cells are addressed as `(x, y)` where `x` is the position within an input
/// row and `y` the row index. The width and height are stored explicitly, so
/// a raster built from empty rows still reports how many rows it had.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster<T> {
    columns: Vec<Vec<T>>,
    width: usize,
    height: usize,
}

impl<T> Default for Raster<T> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            width: 0,
            height: 0,
        }
    }
}

impl<T> Raster<T> {
    /// Builds a raster from row-major input and transposes it.
    ///
    /// Each row is consumed with its own length; the first row fixes the
    /// width that every following row must match.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Ragged`] if a row's length differs from the
    /// length of the first row.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, RasterError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(RasterError::Ragged {
                y,
                expected: width,
                actual: row.len(),
            });
        }

        let mut columns = (0..width)
            .map(|_| Vec::with_capacity(height))
            .collect::<Vec<_>>();
        for row in rows {
            for (column, cell) in columns.iter_mut().zip(row) {
                column.push(cell);
            }
        }

        log::debug!("built {width}x{height} raster");
        Ok(Self {
            columns,
            width,
            height,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the raster has no cells.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the cell at `(x, y)`, or `None` if it lies outside the raster.
    #[must_use]
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.columns.get(x)?.get(y)
    }

    /// Returns the columns, indexed `[x][y]`.
    #[must_use]
    #[inline]
    pub fn columns(&self) -> &[Vec<T>] {
        &self.columns
    }

    /// Consumes the raster and returns its columns, indexed `[x][y]`.
    #[must_use]
    #[inline]
    pub fn into_columns(self) -> Vec<Vec<T>> {
        self.columns
    }

    /// Returns the cells of row `y` from left to right.
    pub fn row(&self, y: usize) -> impl Iterator<Item = &T> {
        self.columns.iter().filter_map(move |column| column.get(y))
    }
}

impl<T> Raster<T>
where
    T: Send,
{
    /// Converts every cell with `f`, keeping its position.
    ///
    /// `f` is called exactly once per cell. Columns are converted in parallel,
    /// so the order of the calls is unspecified and `f` should be free of side
    /// effects.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzlegrid_core::Raster;
    ///
    /// let raster = Raster::from_rows(["#.".chars(), ".#".chars()])?;
    /// let walls = raster.map(|ch| ch == '#');
    /// assert_eq!(walls.get(0, 0), Some(&true));
    /// assert_eq!(walls.get(1, 0), Some(&false));
    /// # Ok::<(), puzzlegrid_core::RasterError>(())
    /// ```
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Raster<U>
    where
        U: Send,
        F: Fn(T) -> U + Sync + Send,
    {
        let Self {
            columns,
            width,
            height,
        } = self;
        let columns = columns
            .into_par_iter()
            .map(|column| column.into_iter().map(&f).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        Raster {
            columns,
            width,
            height,
        }
    }

    /// Converts every cell with the fallible `f`, which also receives the
    /// cell's `x` and `y`.
    ///
    /// Like [`Raster::map`], conversion runs in parallel and `f` is called at
    /// most once per cell.
    ///
    /// # Errors
    ///
    /// Returns an error produced by `f`. If several cells fail, which of the
    /// errors is returned is unspecified.
    pub fn try_map<U, E, F>(self, f: F) -> Result<Raster<U>, E>
    where
        U: Send,
        E: Send,
        F: Fn(usize, usize, T) -> Result<U, E> + Sync + Send,
    {
        let Self {
            columns,
            width,
            height,
        } = self;
        let columns = columns
            .into_par_iter()
            .enumerate()
            .map(|(x, column)| {
                column
                    .into_iter()
                    .enumerate()
                    .map(|(y, cell)| f(x, y, cell))
                    .collect::<Result<Vec<_>, E>>()
            })
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Raster {
            columns,
            width,
            height,
        })
    }
}
