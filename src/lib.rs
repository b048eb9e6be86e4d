#![warn(missing_docs)]
//! A sudoku board model and exhaustive solver for square grids of any
//! perfect-square side length.
//!
//! ## Overview
//!
//! The crate revolves around a single type, [`Board`]: a `size × size` grid
//! partitioned into `√size × √size` boxes. Clues are loaded cell by cell or a
//! row at a time, then [`Board::solve`] searches for a complete assignment in
//! which no value repeats within a row, a column or a box.
//!
//! The search is plain depth-first backtracking over the cells in reading
//! order, trying candidate values in ascending order. It carries no
//! heuristics; for a given set of clues it always arrives at the same
//! solution. When no solution exists, `solve` reports that with `false` and
//! leaves the clues exactly as they were loaded.
//!
//! ## Example
//!
//! ```
//! use nsudoku::Board;
//!
//! let mut board = Board::new(4).unwrap();
//! board.place_row(0, &[1, 2, 0, 0]).unwrap();
//! board.place_row(1, &[0, 0, 0, 2]).unwrap();
//! board.place_row(2, &[0, 0, 4, 0]).unwrap();
//! board.place_row(3, &[0, 3, 0, 0]).unwrap();
//!
//! assert!(board.solve());
//! assert_eq!(board.get(0, 2), Some(3));
//! println!("{}", board);
//! ```

mod board;
mod brute_force;
mod errors;

pub use crate::board::{Board, Iter};
pub use crate::errors::{InvalidSizeError, PlaceError};
