//! Text input parsing for grid puzzles.
//!
//! This crate turns raw puzzle input into the structures provided by
//! [`puzzlegrid_core`]:
//!
//! 1. [`Lines`] holds the input lines, read from a string or any
//!    [`BufRead`](std::io::BufRead), and can split them into sections at blank
//!    lines.
//! 2. The conversion methods on [`Lines`] build rasters of characters, digits
//!    or caller-converted values (converted in parallel), always using the
//!    same `(x, y)` orientation.
//! 3. The grid builders attach a [`Boundary`](puzzlegrid_core::Boundary)
//!    policy and return a [`Grid`](puzzlegrid_core::Grid).
//!
//! # Examples
//!
//! ```
//! use puzzlegrid_core::{Boundary, Position};
//! use puzzlegrid_input::Lines;
//!
//! let input = Lines::from_text("rules\n\n.#.\n.S#\n");
//! let sections = input.split_by_blank_line();
//! assert_eq!(sections[0].joined(), "rules");
//!
//! let grid = sections[1].char_grid(Boundary::constant('.'))?;
//! assert_eq!(grid.position_of(&'S'), Some(Position::new(1, 1)));
//! assert_eq!(grid.get(-1, 0), Some('.'));
//! # Ok::<(), puzzlegrid_input::InputError>(())
//! ```

pub use self::{
    error::*,
    lines::{Lines, is_blank},
};

mod convert;
mod error;
mod lines;
