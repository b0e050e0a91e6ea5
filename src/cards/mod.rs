//! Card system: grid layout generation and the `Card` aggregate.
//!
//! ## Key Types
//!
//! - `CardGridNumber`: One filled cell (row, column, number)
//! - `Card`: 15 cells bound to a game and a sequential number
//! - `CardMatrix`: Dense 3x9 view of a card
//! - `LayoutViolation`: Which layout rule a grid breaks

pub mod grid;
pub mod card;

pub use grid::{
    check_layout, column_range, generate_grid, CardGridNumber, LayoutViolation,
    CARD_GRID_NUMBERS, COLUMNS, ROWS, ROW_FILL,
};
pub use card::{Card, CardMatrix};
