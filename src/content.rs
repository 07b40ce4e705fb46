//! Grid content pipeline: durable string encoding <-> in-memory cell buffer.

mod codec;
mod grid;

pub use self::codec::{Decoded, decode, encode};
pub use self::grid::{Cell, GridBuffer};

/// Rows and columns of a freshly created document.
pub const BLANK_ROWS: usize = 5;
pub const BLANK_COLS: usize = 5;

/// Largest grid a cell write may grow the buffer to.
pub const MAX_ROWS: usize = 10_000;
pub const MAX_COLS: usize = 10_000;
