//! Conversion of [`Lines`] into rasters and grids.
//!
//! Every conversion reads line `y`, character `x` and stores it at `(x, y)`
//! through [`Raster::from_rows`], so character, digit and mapped rasters all
//! share one orientation. Input must be rectangular; ragged lines are
//! rejected with [`InputError::Raster`].

use puzzlegrid_core::{Boundary, Grid, Raster};

use crate::{InputError, Lines};

impl Lines {
    /// Converts the lines into a raster of characters.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Raster`] if the lines differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzlegrid_input::Lines;
    ///
    /// let raster = Lines::from_lines(["ab", "cd"]).to_char_raster()?;
    /// assert_eq!(raster.get(1, 0), Some(&'b'));
    /// assert_eq!(raster.get(0, 1), Some(&'c'));
    /// # Ok::<(), puzzlegrid_input::InputError>(())
    /// ```
    pub fn to_char_raster(&self) -> Result<Raster<char>, InputError> {
        Ok(Raster::from_rows(self.iter().map(|line| line.chars()))?)
    }

    /// Converts the lines into a raster of decimal digit values (0-9).
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Raster`] if the lines differ in length, or
    /// [`InputError::InvalidDigit`] if a character is not an ASCII digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzlegrid_input::Lines;
    ///
    /// let raster = Lines::from_lines(["048"]).to_digit_raster()?;
    /// assert_eq!(raster.row(0).copied().collect::<Vec<_>>(), [0, 4, 8]);
    /// # Ok::<(), puzzlegrid_input::InputError>(())
    /// ```
    pub fn to_digit_raster(&self) -> Result<Raster<u8>, InputError> {
        self.to_char_raster()?.try_map(digit_value)
    }

    /// Converts every character with `converter`.
    ///
    /// `converter` is called once per cell, possibly from several threads at
    /// once and in no particular order; results are placed by position.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Raster`] if the lines differ in length.
    pub fn to_mapped_raster<T, F>(&self, converter: F) -> Result<Raster<T>, InputError>
    where
        T: Send,
        F: Fn(char) -> T + Sync + Send,
    {
        Ok(self.to_char_raster()?.map(converter))
    }

    /// Converts every digit value (0-9) with `converter`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Raster`] if the lines differ in length, or
    /// [`InputError::InvalidDigit`] if a character is not an ASCII digit.
    pub fn to_mapped_digit_raster<T, F>(&self, converter: F) -> Result<Raster<T>, InputError>
    where
        T: Send,
        F: Fn(u8) -> T + Sync + Send,
    {
        Ok(self.to_digit_raster()?.map(converter))
    }

    /// Builds a character grid.
    ///
    /// # Errors
    ///
    /// See [`Lines::to_char_raster`].
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzlegrid_core::Boundary;
    /// use puzzlegrid_input::Lines;
    ///
    /// let grid = Lines::from_text("12\n34").char_grid(Boundary::Wrap)?;
    /// assert_eq!(grid.get(0, 0), Some('1'));
    /// assert_eq!(grid.get(1, 0), Some('2'));
    /// assert_eq!(grid.get(0, 1), Some('3'));
    /// assert_eq!(grid.get(1, 1), Some('4'));
    /// assert_eq!(grid.get(2, 2), Some('1'));
    /// # Ok::<(), puzzlegrid_input::InputError>(())
    /// ```
    pub fn char_grid(&self, boundary: Boundary<char>) -> Result<Grid<char>, InputError> {
        Ok(Grid::new(self.to_char_raster()?, boundary))
    }

    /// Builds a grid of digit values (0-9).
    ///
    /// # Errors
    ///
    /// See [`Lines::to_digit_raster`].
    pub fn digit_grid(&self, boundary: Boundary<u8>) -> Result<Grid<u8>, InputError> {
        Ok(Grid::new(self.to_digit_raster()?, boundary))
    }

    /// Builds a grid by converting every character with `converter`.
    ///
    /// # Errors
    ///
    /// See [`Lines::to_mapped_raster`].
    pub fn grid_from_chars<T, F>(
        &self,
        converter: F,
        boundary: Boundary<T>,
    ) -> Result<Grid<T>, InputError>
    where
        T: Send,
        F: Fn(char) -> T + Sync + Send,
    {
        Ok(Grid::new(self.to_mapped_raster(converter)?, boundary))
    }

    /// Builds a grid by converting every digit value with `converter`.
    ///
    /// # Errors
    ///
    /// See [`Lines::to_mapped_digit_raster`].
    pub fn grid_from_digits<T, F>(
        &self,
        converter: F,
        boundary: Boundary<T>,
    ) -> Result<Grid<T>, InputError>
    where
        T: Send,
        F: Fn(u8) -> T + Sync + Send,
    {
        Ok(Grid::new(self.to_mapped_digit_raster(converter)?, boundary))
    }
}

fn digit_value(x: usize, y: usize, ch: char) -> Result<u8, InputError> {
    ch.to_digit(10)
        .and_then(|digit| u8::try_from(digit).ok())
        .ok_or(InputError::InvalidDigit { x, y, ch })
}
