/// Errors that can occur while building a [`Raster`](crate::Raster).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RasterError {
    /// A row does not have the same number of cells as the first row.
    ///
    /// Rasters are always rectangular; ragged input is rejected instead of
    /// being padded or truncated.
    #[display("row {y} has {actual} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        y: usize,
        /// Width established by the first row.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },
}
