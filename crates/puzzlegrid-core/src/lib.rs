//! Core grid types for text-based puzzle inputs.
//!
//! This crate provides the data structures that puzzle inputs are parsed
//! into. Parsing text itself lives in `puzzlegrid-input`; everything here is
//! independent of where the cells came from.
//!
//! # Overview
//!
//! - [`position`]: Signed `(x, y)` coordinates and orthogonal steps
//! - [`raster`]: Rectangular column-major arrays, built by transposing
//!   row-major input, with parallel per-cell conversion
//! - [`boundary`]: What a grid yields outside its bounds (wrap, nothing, or
//!   a synthetic value)
//! - [`grid`]: Coordinate-addressable grids combining a raster with a
//!   boundary policy
//!
//! # Examples
//!
//! ```
//! use puzzlegrid_core::{Boundary, Grid, Position, Raster};
//!
//! let raster = Raster::from_rows(["..#".chars(), "#..".chars()])?;
//! let grid = Grid::new(raster, Boundary::constant('.'));
//!
//! assert_eq!(grid.get(2, 0), Some('#'));
//! assert_eq!(grid.get(-5, 9), Some('.')); // outside the map is open ground
//! assert_eq!(grid.position_of(&'#'), Some(Position::new(2, 0)));
//! # Ok::<(), puzzlegrid_core::RasterError>(())
//! ```

pub mod boundary;
mod error;
pub mod grid;
pub mod position;
pub mod raster;

pub use self::{
    boundary::{Boundary, OutOfBoundsFn},
    error::*,
    grid::Grid,
    position::Position,
    raster::Raster,
};
