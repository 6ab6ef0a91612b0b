use puzzlegrid_core::RasterError;

/// Errors that can occur while reading or converting puzzle input.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum InputError {
    /// The input source could not be read to the end.
    #[display("failed to read input: {_0}")]
    Io(std::io::Error),
    /// The lines do not form a rectangular raster.
    #[display("malformed raster: {_0}")]
    Raster(RasterError),
    /// A cell passed to digit conversion is not an ASCII digit.
    #[display("expected a digit at ({x}, {y}), found {ch:?}")]
    #[from(ignore)]
    InvalidDigit {
        /// Position of the cell within its line.
        x: usize,
        /// Line index of the cell.
        y: usize,
        /// The offending character.
        ch: char,
    },
}
