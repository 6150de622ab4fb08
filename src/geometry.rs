//! Matrix geometry: logical addresses and the device wire order.
//!
//! Effects work in logical space, where `(row 0, col 0)` is the top-left
//! cell as the user sees the grid. The board wires its rows bottom-up, so
//! frames are flipped vertically right before they are sent.
//!
//! ```text
//! Logical:             Physical:
//!    0  1  2  3  4       20 21 22 23 24
//!    5  6  7  8  9       15 16 17 18 19
//!   10 11 12 13 14  ->   10 11 12 13 14
//!   15 16 17 18 19        5  6  7  8  9
//!   20 21 22 23 24        0  1  2  3  4
//! ```

/// Number of matrix rows.
pub const ROWS: usize = 5;
/// Number of matrix columns.
pub const COLUMNS: usize = 5;
/// Total number of addressable cells.
pub const LED_COUNT: usize = ROWS * COLUMNS;
/// Row and column of the center cell.
pub const CENTER: usize = 2;

/// Logical row-major index of `(row, col)`.
#[inline]
pub const fn logical_index(row: usize, col: usize) -> usize {
    row * COLUMNS + col
}

/// `(row, col)` of a logical index.
#[inline]
pub const fn row_col(index: usize) -> (usize, usize) {
    (index / COLUMNS, index % COLUMNS)
}

/// Map a logical index to its physical index by flipping the row.
///
/// Row `r` becomes row `4 - r`, the column is kept. The mapping is its own
/// inverse. Indices outside of the matrix are returned unchanged.
#[inline]
pub const fn flip_index(index: usize) -> usize {
    if index >= LED_COUNT {
        return index;
    }
    let (row, col) = row_col(index);
    logical_index(ROWS - 1 - row, col)
}

/// Serpentine strip index for `(x, y)`: even rows run left to right, odd rows
/// right to left.
///
/// ```text
///   LED0  LED1  LED2  LED3  LED4
///   LED9  LED8  LED7  LED6  LED5
///   LED10 ...
/// ```
#[inline]
pub const fn xy_to_serpentine(x: usize, y: usize) -> usize {
    if y % 2 == 0 {
        y * COLUMNS + x
    } else {
        y * COLUMNS + (COLUMNS - 1 - x)
    }
}

/// Inverse of [`xy_to_serpentine`].
#[inline]
pub const fn serpentine_to_xy(index: usize) -> (usize, usize) {
    let y = index / COLUMNS;
    let offset = index % COLUMNS;
    let x = if y % 2 == 0 {
        offset
    } else {
        COLUMNS - 1 - offset
    };
    (x, y)
}
